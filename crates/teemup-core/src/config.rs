//! Configuration types for teemup.
//!
//! [`Config::load_from`] layers an optional TOML file over the embedded
//! defaults. [`Config::defaults`] returns the same defaults without touching
//! the filesystem (this is what the free [`parse`](crate::parse) functions
//! use).

use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_CONFIG: &str = r##"
[markup]
state_selector = "#__NEXT_DATA__"

[state]
entity_store_path = ["props", "pageProps", "__APOLLO_STATE__"]

[events]
active_status     = "ACTIVE"
online_venue_name = "Online event"
strict_group_refs = true
"##;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markup: MarkupConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub events: EventsConfig,
}

/// `[markup]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkupConfig {
    /// CSS selector for the script element holding the state JSON.
    #[serde(default = "default_state_selector")]
    pub state_selector: String,
}

fn default_state_selector() -> String { "#__NEXT_DATA__".to_string() }

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            state_selector: default_state_selector(),
        }
    }
}

/// `[state]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateConfig {
    /// Object keys leading from the decoded state to the flat entity store.
    #[serde(default = "default_entity_store_path")]
    pub entity_store_path: Vec<String>,
}

fn default_entity_store_path() -> Vec<String> {
    ["props", "pageProps", "__APOLLO_STATE__"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            entity_store_path: default_entity_store_path(),
        }
    }
}

/// `[events]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventsConfig {
    /// Only events whose `status` equals this value are projected.
    #[serde(default = "default_active_status")]
    pub active_status: String,
    /// Venue name (compared case-insensitively) that marks an online event.
    #[serde(default = "default_online_venue_name")]
    pub online_venue_name: String,
    /// When false, a group reference to a missing entity yields no group
    /// name instead of an error.
    #[serde(default = "default_strict_group_refs")]
    pub strict_group_refs: bool,
}

fn default_active_status() -> String { "ACTIVE".to_string() }
fn default_online_venue_name() -> String { crate::venue::ONLINE_VENUE_NAME.to_string() }
fn default_strict_group_refs() -> bool { true }

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            active_status: default_active_status(),
            online_venue_name: default_online_venue_name(),
            strict_group_refs: default_strict_group_refs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            markup: MarkupConfig::default(),
            state: StateConfig::default(),
            events: EventsConfig::default(),
        }
    }

    /// Load `path`, layered on top of the built-in defaults. A missing file
    /// yields the defaults; a malformed one is an error.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded teemup config");
        Ok(cfg)
    }

    /// Layer an in-memory TOML document on top of the built-in defaults.
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
