use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use commission_engine::RelayError;
use thiserror::Error;

/// Errors surfaced to webhook callers. Messages are deliberately generic; the details go to the log.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Could not read the webhook payload.")]
    CouldNotDeserializePayload,
    #[error("No webhook is configured for '{0}'.")]
    UnknownChannel(String),
    #[error("Could not deliver the sale notification.")]
    NotificationFailed,
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownChannel(_) => StatusCode::NOT_FOUND,
            // Malformed bodies and lost notifications are both reported as server errors
            Self::CouldNotDeserializePayload => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotificationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<RelayError> for ServerError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::Delivery(_) => Self::NotificationFailed,
        }
    }
}
