//! Locale-aware currency formatting.
mod formatter;
pub mod tables;

pub use formatter::{format_currency, normalize_currency_code, FormattingOptions};
