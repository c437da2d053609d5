use commission_engine::{NotificationError, NotificationMessage, NotificationSink};
use log::*;
use pushcut_tools::{PushcutApi, PushcutApiError, PushcutConfig, PushcutNotification};

/// Delivers sale notifications through Pushcut.
#[derive(Clone)]
pub struct PushcutSink {
    api: PushcutApi,
}

impl PushcutSink {
    pub fn new(config: PushcutConfig) -> Result<Self, PushcutApiError> {
        let api = PushcutApi::new(config)?;
        info!("📣 Sale notifications will be sent to {}", api.config().notification_url.url_hint());
        Ok(Self { api })
    }
}

impl NotificationSink for PushcutSink {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError> {
        let notification = PushcutNotification::new(&message.title, &message.text);
        trace!("📣 Sending Pushcut notification: {message}");
        self.api.send_notification(&notification).await.map_err(notification_error)
    }
}

fn notification_error(e: PushcutApiError) -> NotificationError {
    match e {
        PushcutApiError::QueryError { status, message } => NotificationError::Rejected { status, message },
        PushcutApiError::MissingNotificationUrl | PushcutApiError::Initialization(_) => {
            NotificationError::Configuration(e.to_string())
        },
        PushcutApiError::Timeout | PushcutApiError::RestRequestError(_) => NotificationError::Transport(e.to_string()),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock,
        MockServer,
        ResponseTemplate,
    };

    use super::*;

    fn message() -> NotificationMessage {
        NotificationMessage { title: "Sale Approved! Widget".into(), text: "Your commission: $10.00 • Pix".into() }
    }

    #[tokio::test]
    async fn delivers_to_pushcut() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/key/notifications/Sales"))
            .and(body_json(json!({"title": "Sale Approved! Widget", "text": "Your commission: $10.00 • Pix"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let sink = PushcutSink::new(PushcutConfig::new(&format!("{}/key/notifications/Sales", server.uri()))).unwrap();
        sink.send(&message()).await.expect("Notification should be delivered");
    }

    #[tokio::test]
    async fn rejected_notifications() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(500).set_body_string("oops")).mount(&server).await;
        let sink = PushcutSink::new(PushcutConfig::new(&format!("{}/key/notifications/Sales", server.uri()))).unwrap();
        let err = sink.send(&message()).await.unwrap_err();
        assert!(matches!(err, NotificationError::Rejected { status: 500, ref message } if message == "oops"));
    }

    #[tokio::test]
    async fn unconfigured_sink() {
        let sink = PushcutSink::new(PushcutConfig::default()).unwrap();
        let err = sink.send(&message()).await.unwrap_err();
        assert!(matches!(err, NotificationError::Configuration(_)));
    }
}
