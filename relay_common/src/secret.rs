use std::{
    fmt,
    fmt::{Debug, Display},
};

/// Holds a value that must never end up in a log line, such as a notification URL with an embedded API key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret<T>
where T: Clone + Default
{
    value: T,
}

impl<T: Clone + Default> Secret<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn reveal(&self) -> &T {
        &self.value
    }
}

impl Secret<String> {
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// A loggable outline of a secret URL: the scheme and host, with credentials and path masked.
    /// `https://api.pushcut.io/abc123/notifications/Sales` becomes `https://api.pushcut.io/****`.
    pub fn url_hint(&self) -> String {
        let url = self.value.trim();
        if url.is_empty() {
            return "<not set>".into();
        }
        match url.split_once("://") {
            Some((scheme, rest)) => {
                let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
                let host = authority.rsplit('@').next().unwrap_or_default();
                format!("{scheme}://{host}/****")
            },
            None => "****".into(),
        }
    }
}

impl From<String> for Secret<String> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: Clone + Default> Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl<T: Clone + Default> Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}
