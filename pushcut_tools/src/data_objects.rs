use serde::{Deserialize, Serialize};

/// The body Pushcut expects when triggering a notification. `title` and `text` override the defaults defined in the
/// Pushcut app for the notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushcutNotification {
    pub title: String,
    pub text: String,
}

impl PushcutNotification {
    pub fn new<T: Into<String>, B: Into<String>>(title: T, text: B) -> Self {
        Self { title: title.into(), text: text.into() }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wire_format() {
        let n = PushcutNotification::new("Sale Approved! Widget", "Your commission: $10.00");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, r#"{"title":"Sale Approved! Widget","text":"Your commission: $10.00"}"#);
    }
}
