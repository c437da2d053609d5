use relay_common::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use super::tables::{currency_info, default_locale, locale_info, CurrencyInfo, LocaleInfo, NBSP};

/// How a channel wants its amounts rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingOptions {
    /// Locale to format in. When absent (or unknown), the currency's home locale is used.
    #[serde(default)]
    pub locale: Option<String>,
    /// Force the minimal symbol glyph (`₡` rather than `CRC`).
    #[serde(default)]
    pub narrow_symbol: bool,
    /// Currency to format in. When absent, the sale's own currency is used.
    #[serde(default)]
    pub currency: Option<String>,
}

impl FormattingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_narrow_symbol(mut self, narrow: bool) -> Self {
        self.narrow_symbol = narrow;
        self
    }

    pub fn with_currency<S: Into<String>>(mut self, currency: S) -> Self {
        self.currency = Some(normalize_currency_code(&currency.into()));
        self
    }

    /// The currency to render in, given the currency the sale was made in.
    pub fn currency_for<'a>(&'a self, sale_currency: &'a str) -> &'a str {
        self.currency.as_deref().unwrap_or(sale_currency)
    }
}

pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Formats `amount` as a currency string, e.g. `R$ 150,00`, `$10.00` or `₩50,000`.
///
/// The locale is chosen from `options.locale` if it is a known locale, otherwise from the currency's home locale.
/// Unknown currencies render as `"<CODE> <amount>"` with two decimals. This function never fails.
pub fn format_currency(amount: Decimal, currency: &str, options: &FormattingOptions) -> String {
    let code = normalize_currency_code(currency);
    let Some(info) = currency_info(&code) else {
        return format_unknown(amount, &code);
    };
    let locale = resolve_locale(options.locale.as_deref(), info);
    let rounded = amount.round_dp_with_strategy(info.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    // Amounts that round to zero are never shown as negative
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let number = localise_number(rounded.abs(), info.fraction_digits, locale);
    let symbol = display_symbol(info, locale, options.narrow_symbol);
    if locale.spaced_symbol || is_iso_code(symbol) {
        format!("{sign}{symbol}{NBSP}{number}")
    } else {
        format!("{sign}{symbol}{number}")
    }
}

fn resolve_locale(requested: Option<&str>, info: &CurrencyInfo) -> &'static LocaleInfo {
    requested.and_then(locale_info).or_else(|| locale_info(info.home_locale)).unwrap_or_else(default_locale)
}

fn display_symbol(info: &CurrencyInfo, locale: &LocaleInfo, narrow: bool) -> &'static str {
    if narrow {
        return info.narrow_symbol;
    }
    locale.local_symbol(info.code).or(info.international_symbol).unwrap_or(info.code)
}

fn is_iso_code(symbol: &str) -> bool {
    symbol.len() == 3 && symbol.chars().all(|c| c.is_ascii_uppercase())
}

fn localise_number(value: Decimal, fraction_digits: u32, locale: &LocaleInfo) -> String {
    let (whole, fraction) = fixed_point_parts(value, fraction_digits);
    let mut result = group_digits(&whole, locale.group_separator);
    if !fraction.is_empty() {
        result.push(locale.decimal_separator);
        result.push_str(&fraction);
    }
    result
}

/// Splits an already rounded value into its whole and fraction digits, with exactly `fraction_digits` of the latter.
fn fixed_point_parts(value: Decimal, fraction_digits: u32) -> (String, String) {
    let mut value = value;
    // rescale leaves the value untouched when the extra scale does not fit in 96 bits, hence the padding below
    value.rescale(fraction_digits);
    let text = value.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let width = fraction_digits as usize;
    (whole.to_string(), format!("{fraction:0<width$}"))
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

fn format_unknown(amount: Decimal, code: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let (whole, fraction) = fixed_point_parts(rounded, 2);
    format!("{code} {whole}.{fraction}")
}
