use commission_engine::{NotificationError, NotificationMessage, NotificationSink};
use mockall::mock;

mock! {
    pub Sink {}
    impl NotificationSink for Sink {
        async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError>;
    }
}
