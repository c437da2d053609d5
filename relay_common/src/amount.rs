use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Reads a monetary amount out of an arbitrary JSON value.
///
/// Storefronts send prices either as JSON numbers or as decimal strings (`"150.00"`). Both are accepted. Anything that
/// cannot be read as a finite decimal (null, booleans, objects, `"abc"`, values outside the `Decimal` range) becomes
/// zero. This never fails.
pub fn coerce_amount(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => Decimal::ZERO,
    }
}

/// Converts a float into a `Decimal`. NaN and the infinities become zero.
pub fn amount_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

/// Clamps negative amounts to zero.
pub fn non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

fn parse_decimal(s: &str) -> Decimal {
    let s = s.trim();
    if s.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)).unwrap_or(Decimal::ZERO)
}
