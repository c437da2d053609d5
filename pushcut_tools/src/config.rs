use std::{env, time::Duration};

use log::*;
use relay_common::{helpers::parse_seconds, Secret};

pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct PushcutConfig {
    /// The full notification URL, including the Pushcut secret.
    pub notification_url: Secret<String>,
    /// Upper bound on how long a single notification request may take.
    pub timeout: Duration,
}

impl Default for PushcutConfig {
    fn default() -> Self {
        Self { notification_url: Secret::default(), timeout: DEFAULT_NOTIFY_TIMEOUT }
    }
}

impl PushcutConfig {
    pub fn new(notification_url: &str) -> Self {
        Self { notification_url: Secret::new(notification_url.to_string()), ..Default::default() }
    }

    pub fn new_from_env_or_default() -> Self {
        let notification_url = Secret::new(env::var("RELAY_PUSHCUT_URL").unwrap_or_else(|_| {
            error!("📣 RELAY_PUSHCUT_URL is not set. Sale notifications cannot be delivered until it is.");
            String::default()
        }));
        let timeout = notify_timeout(env::var("RELAY_NOTIFY_TIMEOUT").ok());
        Self { notification_url, timeout }
    }
}

/// Interprets a `RELAY_NOTIFY_TIMEOUT` value. Zero or unparsable values fall back to [`DEFAULT_NOTIFY_TIMEOUT`].
fn notify_timeout(value: Option<String>) -> Duration {
    match parse_seconds(value) {
        None => DEFAULT_NOTIFY_TIMEOUT,
        Some(Ok(t)) if t.is_zero() => {
            warn!("📣 RELAY_NOTIFY_TIMEOUT cannot be zero. Using {}s instead.", DEFAULT_NOTIFY_TIMEOUT.as_secs());
            DEFAULT_NOTIFY_TIMEOUT
        },
        Some(Ok(t)) => t,
        Some(Err(e)) => {
            warn!("📣 Invalid value for RELAY_NOTIFY_TIMEOUT: {e}. Using {}s instead.", DEFAULT_NOTIFY_TIMEOUT.as_secs());
            DEFAULT_NOTIFY_TIMEOUT
        },
    }
}
