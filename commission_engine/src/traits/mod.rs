mod notification_sink;

pub use notification_sink::{NotificationError, NotificationSink};
