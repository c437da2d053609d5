use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{currency::normalize_currency_code, sale_event::SaleEvent};

pub const PAID_STATUS: &str = "paid";

/// Business rules a sale must pass before it is worth a notification.
///
/// Rejected sales are not errors. The webhook is acknowledged so the storefront does not redeliver it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleGate {
    /// Only accept orders whose `financial_status` is `paid`.
    #[serde(default)]
    pub require_paid: bool,
    /// If set, only accept orders in one of these currencies.
    #[serde(default)]
    pub allowed_currencies: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleRejection {
    NotPaid(Option<String>),
    CurrencyNotAllowed(String),
}

impl Display for SaleRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPaid(Some(status)) => write!(f, "Ignored: order status is '{status}', not 'paid'"),
            Self::NotPaid(None) => write!(f, "Ignored: order has no financial status"),
            Self::CurrencyNotAllowed(cur) => write!(f, "Ignored: currency {cur} is not accepted"),
        }
    }
}

impl SaleGate {
    /// A gate that lets everything through.
    pub fn open() -> Self {
        Self::default()
    }

    pub fn paid_only() -> Self {
        Self { require_paid: true, allowed_currencies: None }
    }

    pub fn with_allowed_currencies<S: AsRef<str>>(mut self, currencies: &[S]) -> Self {
        let list = currencies.iter().map(|c| normalize_currency_code(c.as_ref())).collect();
        self.allowed_currencies = Some(list);
        self
    }

    pub fn is_open(&self) -> bool {
        !self.require_paid && self.allowed_currencies.is_none()
    }

    /// Checks the payment status first, then the currency.
    pub fn check(&self, sale: &SaleEvent) -> Result<(), SaleRejection> {
        if self.require_paid {
            match sale.financial_status.as_deref() {
                Some(s) if s.trim().eq_ignore_ascii_case(PAID_STATUS) => {},
                other => return Err(SaleRejection::NotPaid(other.map(String::from))),
            }
        }
        if let Some(allowed) = &self.allowed_currencies {
            if !allowed.iter().any(|c| normalize_currency_code(c) == sale.currency) {
                return Err(SaleRejection::CurrencyNotAllowed(sale.currency.clone()));
            }
        }
        Ok(())
    }
}
