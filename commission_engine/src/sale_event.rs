use std::fmt::Display;

use relay_common::Decimal;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
pub const DEFAULT_CURRENCY: &str = "USD";

/// A paid order, reduced to what the sale notification needs. Built from a single webhook call and dropped with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleEvent {
    pub product_name: String,
    /// The commission to report. Never negative.
    pub amount: Decimal,
    /// Upper-case ISO 4217 code.
    pub currency: String,
    pub payment_method: Option<String>,
    pub financial_status: Option<String>,
}

impl Default for SaleEvent {
    fn default() -> Self {
        Self {
            product_name: UNKNOWN_PRODUCT.to_string(),
            amount: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
            payment_method: None,
            financial_status: None,
        }
    }
}

impl Display for SaleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {}", self.product_name, self.amount, self.currency)?;
        if let Some(method) = &self.payment_method {
            write!(f, " via {method}")?;
        }
        write!(f, ", status: {})", self.financial_status.as_deref().unwrap_or("unknown"))
    }
}

/// Maps payment gateway identifiers to the names shown to the seller. Unknown gateways are shown as they are.
pub fn payment_method_name(gateway: &str) -> Option<String> {
    let gateway = gateway.trim();
    if gateway.is_empty() {
        return None;
    }
    let name = match gateway.to_lowercase().as_str() {
        "pix" => "Pix",
        "boleto" => "Boleto",
        "credit_card" | "cartao" | "cartão" => "Cartão",
        _ => gateway,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn payment_methods() {
        assert_eq!(payment_method_name("pix").as_deref(), Some("Pix"));
        assert_eq!(payment_method_name("PIX").as_deref(), Some("Pix"));
        assert_eq!(payment_method_name("boleto").as_deref(), Some("Boleto"));
        assert_eq!(payment_method_name("credit_card").as_deref(), Some("Cartão"));
        assert_eq!(payment_method_name("Cartão").as_deref(), Some("Cartão"));
        assert_eq!(payment_method_name("cartao").as_deref(), Some("Cartão"));
        assert_eq!(payment_method_name("shopify_payments").as_deref(), Some("shopify_payments"));
        assert_eq!(payment_method_name("  "), None);
    }

    #[test]
    fn display() {
        let sale = SaleEvent {
            product_name: "Widget".into(),
            amount: Decimal::new(15000, 2),
            currency: "BRL".into(),
            payment_method: Some("Pix".into()),
            financial_status: Some("paid".into()),
        };
        assert_eq!(sale.to_string(), "Widget (150.00 BRL via Pix, status: paid)");
        assert_eq!(SaleEvent::default().to_string(), "Unknown Product (0 USD, status: unknown)");
    }
}
