use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};

use crate::{config::PushcutConfig, PushcutApiError, PushcutNotification};

#[derive(Clone)]
pub struct PushcutApi {
    config: PushcutConfig,
    client: Arc<Client>,
}

impl PushcutApi {
    pub fn new(config: PushcutConfig) -> Result<Self, PushcutApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| PushcutApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &PushcutConfig {
        &self.config
    }

    /// Triggers the configured notification. Exactly one request is made; failures are reported, never retried.
    pub async fn send_notification(&self, notification: &PushcutNotification) -> Result<(), PushcutApiError> {
        if self.config.notification_url.is_empty() {
            return Err(PushcutApiError::MissingNotificationUrl);
        }
        trace!("Sending Pushcut notification: {notification:?}");
        let response = self
            .client
            .post(self.config.notification_url.reveal().as_str())
            .json(notification)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PushcutApiError::Timeout
                } else {
                    // reqwest includes the URL in its error messages, which would leak the secret
                    PushcutApiError::RestRequestError(e.without_url().to_string())
                }
            })?;
        let status = response.status();
        if status.is_success() {
            trace!("Pushcut notification accepted. {status}");
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|e| format!("<unreadable response: {e}>"));
            Err(PushcutApiError::QueryError { status: status.as_u16(), message })
        }
    }
}
