//! A thin client for sending notifications through [Pushcut](https://www.pushcut.io).
//!
//! Pushcut identifies the target device and notification definition through the URL itself
//! (`https://api.pushcut.io/<secret>/notifications/<name>`), so the URL is treated as a secret throughout.
mod api;
mod config;
mod data_objects;
mod error;

pub use api::PushcutApi;
pub use config::{PushcutConfig, DEFAULT_NOTIFY_TIMEOUT};
pub use data_objects::PushcutNotification;
pub use error::PushcutApiError;
