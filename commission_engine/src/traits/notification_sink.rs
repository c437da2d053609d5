use thiserror::Error;

use crate::notification::NotificationMessage;

#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("The notification service is not configured. {0}")]
    Configuration(String),
    #[error("Could not reach the notification service. {0}")]
    Transport(String),
    #[error("The notification service rejected the message. Status {status}. {message}")]
    Rejected { status: u16, message: String },
}

/// Where sale notifications go.
///
/// Implementations make a single delivery attempt and never retry.
#[allow(async_fn_in_trait)]
pub trait NotificationSink {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError>;
}
