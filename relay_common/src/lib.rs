mod amount;

pub mod helpers;
mod secret;

pub use amount::{amount_from_f64, coerce_amount, non_negative};
pub use rust_decimal::Decimal;
pub use secret::Secret;
