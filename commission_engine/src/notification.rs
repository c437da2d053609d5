use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{channels::ChannelProfile, currency::format_currency, sale_event::SaleEvent};

pub const TITLE_PREFIX: &str = "Sale Approved! ";
pub const COMMISSION_LABEL: &str = "Your commission: ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub title: String,
    pub text: String,
}

impl Display for NotificationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.title, self.text)
    }
}

/// Builds the push notification for a sale, e.g.
/// `Sale Approved! Widget` / `🇨🇷 Your commission: ₡1,000.00 • Pix`.
pub fn compose_message(sale: &SaleEvent, channel: &ChannelProfile) -> NotificationMessage {
    let currency = channel.formatting.currency_for(&sale.currency);
    let amount = format_currency(sale.amount, currency, &channel.formatting);
    let mut text = String::new();
    if let Some(flag) = channel.flag.as_deref().filter(|f| !f.is_empty()) {
        text.push_str(flag);
        text.push(' ');
    }
    text.push_str(COMMISSION_LABEL);
    text.push_str(&amount);
    if let Some(method) = &sale.payment_method {
        text.push_str(" • ");
        text.push_str(method);
    }
    NotificationMessage { title: format!("{TITLE_PREFIX}{}", sale.product_name), text }
}
