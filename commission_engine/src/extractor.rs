//! Turns raw "order paid" webhook bodies into [`SaleEvent`]s.
//!
//! Storefront payloads vary a lot between platforms and apps, so extraction never fails: every missing or malformed
//! field falls back to a default.
use log::*;
use relay_common::{coerce_amount, non_negative, Decimal};
use serde_json::Value;

use crate::{
    currency::normalize_currency_code,
    gate::{SaleGate, SaleRejection},
    sale_event::{payment_method_name, SaleEvent, DEFAULT_CURRENCY, UNKNOWN_PRODUCT},
};

pub fn extract_sale(body: &Value) -> SaleEvent {
    let sale = SaleEvent {
        product_name: product_name(body),
        amount: commission(body),
        currency: currency(body),
        payment_method: payment_method(body),
        financial_status: non_empty_str(&body["financial_status"]),
    };
    trace!("Extracted sale: {sale}");
    sale
}

/// Like [`extract_sale`], but applies the given gate to the result.
pub fn extract_gated_sale(body: &Value, gate: &SaleGate) -> Result<SaleEvent, SaleRejection> {
    let sale = extract_sale(body);
    gate.check(&sale)?;
    Ok(sale)
}

fn product_name(body: &Value) -> String {
    let item = &body["line_items"][0];
    non_empty_str(&item["name"]).or_else(|| non_empty_str(&item["title"])).unwrap_or_else(|| UNKNOWN_PRODUCT.into())
}

/// An explicit `commission` field wins over the order total.
fn commission(body: &Value) -> Decimal {
    let raw = match &body["commission"] {
        Value::Null => &body["total_price"],
        v => v,
    };
    non_negative(coerce_amount(raw))
}

fn currency(body: &Value) -> String {
    non_empty_str(&body["currency"])
        .map(|c| normalize_currency_code(&c))
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

fn payment_method(body: &Value) -> Option<String> {
    body["payment_gateway_names"][0].as_str().and_then(payment_method_name)
}

fn non_empty_str(value: &Value) -> Option<String> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}
