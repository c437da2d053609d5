//! Per-route configuration.
//!
//! Every storefront or country gets its own webhook path. Paths differ only in how the commission is formatted and
//! which rules the sale must pass, so they are described here as data and served by one handler.
use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{currency::FormattingOptions, gate::SaleGate};

/// Currencies accepted by the gated `shopify-venda` channel.
pub const GATED_CURRENCIES: [&str; 9] = ["BRL", "EUR", "USD", "CRC", "GTQ", "HNL", "NIO", "DOP", "KRW"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelProfile {
    /// The route segment, e.g. `costa-rica` for `POST /costa-rica`.
    pub name: String,
    /// Decoration placed in front of the notification text, typically a flag emoji.
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub formatting: FormattingOptions,
    #[serde(default)]
    pub gate: SaleGate,
}

impl ChannelProfile {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), flag: None, formatting: FormattingOptions::default(), gate: SaleGate::open() }
    }

    pub fn with_flag<S: Into<String>>(mut self, flag: S) -> Self {
        self.flag = Some(flag.into());
        self
    }

    pub fn with_formatting(mut self, formatting: FormattingOptions) -> Self {
        self.formatting = formatting;
        self
    }

    pub fn with_gate(mut self, gate: SaleGate) -> Self {
        self.gate = gate;
        self
    }
}

#[derive(Debug, Error)]
pub enum ChannelConfigError {
    #[error("Could not read channel file. {0}")]
    Io(#[from] std::io::Error),
    #[error("Channel definitions are not valid JSON. {0}")]
    Json(#[from] serde_json::Error),
    #[error("Channel name '{0}' is not a valid route segment")]
    InvalidName(String),
    #[error("Channel '{0}' is defined more than once")]
    Duplicate(String),
    #[error("No channels were defined")]
    Empty,
}

/// The read-only route → profile table, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTable {
    channels: HashMap<String, ChannelProfile>,
}

impl Default for ChannelTable {
    fn default() -> Self {
        let usd_en_us = FormattingOptions::new().with_currency("USD").with_locale("en-US");
        let profiles = vec![
            ChannelProfile::new("panama").with_flag("🇨🇦").with_formatting(usd_en_us.clone()),
            ChannelProfile::new("el-salvador").with_flag("🇺🇸").with_formatting(usd_en_us),
            ChannelProfile::new("costa-rica").with_flag("🇨🇷").with_formatting(
                FormattingOptions::new().with_currency("CRC").with_locale("en-US").with_narrow_symbol(true),
            ),
            ChannelProfile::new("shopify-aprovado"),
            ChannelProfile::new("shopify-venda")
                .with_gate(SaleGate::paid_only().with_allowed_currencies(&GATED_CURRENCIES)),
        ];
        Self { channels: profiles.into_iter().map(|p| (p.name.clone(), p)).collect() }
    }
}

impl ChannelTable {
    pub fn new(profiles: Vec<ChannelProfile>) -> Result<Self, ChannelConfigError> {
        if profiles.is_empty() {
            return Err(ChannelConfigError::Empty);
        }
        let mut channels = HashMap::with_capacity(profiles.len());
        for profile in profiles {
            if !is_valid_route_segment(&profile.name) {
                return Err(ChannelConfigError::InvalidName(profile.name));
            }
            if channels.contains_key(&profile.name) {
                return Err(ChannelConfigError::Duplicate(profile.name));
            }
            channels.insert(profile.name.clone(), profile);
        }
        Ok(Self { channels })
    }

    /// Parses a JSON array of [`ChannelProfile`]s.
    pub fn from_json(json: &str) -> Result<Self, ChannelConfigError> {
        let profiles: Vec<ChannelProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChannelConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn get(&self, name: &str) -> Option<&ChannelProfile> {
        self.channels.get(name)
    }

    /// Channel names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.channels.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

fn is_valid_route_segment(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
