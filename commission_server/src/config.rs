use std::{env, time::Duration};

use commission_engine::ChannelTable;
use log::*;
use pushcut_tools::PushcutConfig;
use relay_common::helpers::{parse_boolean_flag, parse_seconds};

const DEFAULT_RELAY_HOST: &str = "0.0.0.0";
const DEFAULT_RELAY_PORT: u16 = 3000;
pub const DEFAULT_KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(14 * 60);

/// Process-wide configuration. Read once at startup and never modified afterwards.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Where sale notifications are sent.
    pub pushcut: PushcutConfig,
    pub keep_alive: KeepAliveConfig,
    /// The webhook channels served under `POST /{channel}`.
    pub channels: ChannelTable,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RELAY_HOST.to_string(),
            port: DEFAULT_RELAY_PORT,
            pushcut: PushcutConfig::default(),
            keep_alive: KeepAliveConfig::default(),
            channels: ChannelTable::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("RELAY_HOST").ok().unwrap_or_else(|| DEFAULT_RELAY_HOST.into());
        let port = configure_port();
        let pushcut = PushcutConfig::new_from_env_or_default();
        let keep_alive = KeepAliveConfig::from_env_or_default();
        let channels = configure_channels();
        Self { host, port, pushcut, keep_alive, channels }
    }
}

fn configure_port() -> u16 {
    select_port(env::var("RELAY_PORT").ok(), env::var("PORT").ok())
}

/// Hosting platforms usually hand out the port in `PORT`. `RELAY_PORT` takes precedence when both are set.
fn select_port(relay_port: Option<String>, port: Option<String>) -> u16 {
    let (name, value) = match (relay_port, port) {
        (Some(s), _) => ("RELAY_PORT", s),
        (None, Some(s)) => ("PORT", s),
        (None, None) => return DEFAULT_RELAY_PORT,
    };
    value.trim().parse::<u16>().unwrap_or_else(|e| {
        error!("🪛️ {value} is not a valid port for {name}. {e} Using the default, {DEFAULT_RELAY_PORT}, instead.");
        DEFAULT_RELAY_PORT
    })
}

fn configure_channels() -> ChannelTable {
    load_channels(env::var("RELAY_CHANNELS_FILE").ok().as_deref())
}

fn load_channels(path: Option<&str>) -> ChannelTable {
    let Some(path) = path else {
        info!("🪛️ RELAY_CHANNELS_FILE is not set. Using the built-in channels.");
        return ChannelTable::default();
    };
    match ChannelTable::from_file(path) {
        Ok(table) => {
            info!("🪛️ Loaded {} channels from {path}: {}", table.len(), table.names().join(", "));
            table
        },
        Err(e) => {
            error!("🪛️ Could not load channels from {path}. {e}. Reverting to the built-in channels.");
            ChannelTable::default()
        },
    }
}

//-------------------------------------------------  KeepAliveConfig  --------------------------------------------------
#[derive(Clone, Debug)]
pub struct KeepAliveConfig {
    pub enabled: bool,
    /// The public URL of this server's health route.
    pub url: Option<String>,
    pub interval: Duration,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self { enabled: true, url: None, interval: DEFAULT_KEEP_ALIVE_INTERVAL }
    }
}

impl KeepAliveConfig {
    pub fn from_env_or_default() -> Self {
        let enabled = parse_boolean_flag(env::var("RELAY_KEEP_ALIVE").ok(), true);
        let url = env::var("RELAY_SELF_PING_URL").ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let interval = keep_alive_interval(env::var("RELAY_KEEP_ALIVE_INTERVAL").ok());
        let config = Self { enabled, url, interval };
        match (config.enabled, &config.url) {
            (false, _) => info!("🪛️ Keep-alive ping is disabled."),
            (true, None) => info!("🪛️ RELAY_SELF_PING_URL is not set. Keep-alive ping is disabled."),
            (true, Some(url)) => info!("🪛️ Keep-alive ping to {url} every {}s.", config.interval.as_secs()),
        }
        config
    }

    /// The URL to ping, if the keep-alive task should run at all.
    pub fn target(&self) -> Option<&str> {
        self.url.as_deref().filter(|_| self.enabled)
    }
}

fn keep_alive_interval(value: Option<String>) -> Duration {
    match parse_seconds(value) {
        None => DEFAULT_KEEP_ALIVE_INTERVAL,
        Some(Ok(d)) if !d.is_zero() => d,
        Some(Ok(_)) => {
            warn!("🪛️ RELAY_KEEP_ALIVE_INTERVAL cannot be zero. Using the default of 14 minutes.");
            DEFAULT_KEEP_ALIVE_INTERVAL
        },
        Some(Err(e)) => {
            warn!("🪛️ Invalid configuration value for RELAY_KEEP_ALIVE_INTERVAL: {e}. Using the default.");
            DEFAULT_KEEP_ALIVE_INTERVAL
        },
    }
}
