use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushcutApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("No notification URL has been configured")]
    MissingNotificationUrl,
    #[error("The notification request timed out")]
    Timeout,
    #[error("Could not send REST request: {0}")]
    RestRequestError(String),
    #[error("Notification was rejected. Error {status}. {message}")]
    QueryError { status: u16, message: String },
}
