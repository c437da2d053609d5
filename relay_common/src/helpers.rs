use std::{str::FromStr, time::Duration};

/// Parse a boolean flag from a string value, or return the given default value otherwise.
pub fn parse_boolean_flag(value: Option<String>, default: bool) -> bool {
    let value = match value {
        Some(v) => v,
        None => return default,
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

/// Parses an environment value holding a whole number of seconds.
///
/// Returns `None` if the variable is unset. Returns `Some(Err(raw))` when it is set but cannot be parsed, so that the
/// caller can decide how loudly to complain.
pub fn parse_seconds(value: Option<String>) -> Option<Result<Duration, String>> {
    let raw = value?;
    Some(u64::from_str(raw.trim()).map(Duration::from_secs).map_err(|e| format!("{raw} ({e})")))
}
