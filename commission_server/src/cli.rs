use std::{env, env::VarError};

use relay_common::Secret;

/// Every variable the server reads. Secrets are only ever printed as an outline.
const RELAY_ENVS: [(&str, bool); 10] = [
    ("RUST_LOG", false),
    ("RELAY_HOST", false),
    ("RELAY_PORT", false),
    ("PORT", false),
    ("RELAY_PUSHCUT_URL", true),
    ("RELAY_NOTIFY_TIMEOUT", false),
    ("RELAY_SELF_PING_URL", false),
    ("RELAY_KEEP_ALIVE", false),
    ("RELAY_KEEP_ALIVE_INTERVAL", false),
    ("RELAY_CHANNELS_FILE", false),
];

/// There's no real CLI for the server, so any argument prints the help and the current configuration, and the caller
/// should exit.
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        println!("\n{}\n", include_str!("./cli-help.txt"));
        println!("Current environment values (secrets are masked):");
        RELAY_ENVS.iter().for_each(|&(name, secret)| {
            println!("  {name:<35} {:<15}", describe_env(env::var(name), secret));
        });
    }
    has_cli_args
}

fn describe_env(value: Result<String, VarError>, secret: bool) -> String {
    match value {
        Ok(s) if secret => Secret::from(s).url_hint(),
        Ok(s) => s,
        Err(VarError::NotPresent) => "Not set".into(),
        Err(VarError::NotUnicode(_)) if secret => "Invalid value".into(),
        Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn secrets_are_masked() {
        let url = "https://api.pushcut.io/abc123/notifications/Sales".to_string();
        assert_eq!(describe_env(Ok(url.clone()), true), "https://api.pushcut.io/****");
        assert_eq!(describe_env(Ok(url.clone()), false), url);
        assert_eq!(describe_env(Err(VarError::NotPresent), true), "Not set");
    }

    #[test]
    fn every_relay_variable_is_listed() {
        let help = include_str!("./cli-help.txt");
        for (name, _) in RELAY_ENVS {
            assert!(help.contains(name), "{name} is missing from the help text");
        }
    }
}
