/// Configuration for lexdesk
///
/// Defaults, then `~/.lexdesk/config.json`, then an explicit file, then
/// `LEXDESK_*` environment variables. Later sources win.

use crate::core::recent::{DEFAULT_CAPACITY, DEFAULT_TITLE_MAX_CHARS};
use crate::error::{DeskError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_THINKING_DELAY_MS: u64 = 1500;

const ENV_RECENT_CAPACITY: &str = "LEXDESK_RECENT_CAPACITY";
const ENV_TITLE_MAX_CHARS: &str = "LEXDESK_TITLE_MAX_CHARS";
const ENV_THINKING_DELAY_MS: &str = "LEXDESK_THINKING_DELAY_MS";
const ENV_SEED_DEMO: &str = "LEXDESK_SEED_DEMO";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// How many recent requests the sidebar keeps
    pub recent_capacity: usize,
    /// Display titles are cut after this many characters
    pub title_max_chars: usize,
    /// Simulated thinking time before a page opens
    pub thinking_delay_ms: u64,
    /// Start sessions with a few example requests
    pub seed_demo_history: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            recent_capacity: DEFAULT_CAPACITY,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
            seed_demo_history: true,
        }
    }
}

impl DeskConfig {
    /// Load from every source in priority order
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let home = default_config_path().filter(|path| path.exists());
        Self::load_layered(home.as_deref(), explicit, |key| std::env::var(key).ok())
    }

    /// Stack the given files over the defaults, field by field, then env.
    ///
    /// A field a later file leaves out keeps whatever an earlier file set.
    pub fn load_layered<F>(home: Option<&Path>, explicit: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut merged = serde_json::to_value(Self::default())?;

        for path in home.into_iter().chain(explicit) {
            overlay(&mut merged, read_layer(path)?, path)?;
        }

        let mut config: Self = serde_json::from_value(merged)?;
        config.apply_env(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_RECENT_CAPACITY) {
            self.recent_capacity = parse_env(ENV_RECENT_CAPACITY, &value)?;
        }
        if let Some(value) = lookup(ENV_TITLE_MAX_CHARS) {
            self.title_max_chars = parse_env(ENV_TITLE_MAX_CHARS, &value)?;
        }
        if let Some(value) = lookup(ENV_THINKING_DELAY_MS) {
            self.thinking_delay_ms = parse_env(ENV_THINKING_DELAY_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED_DEMO) {
            self.seed_demo_history = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(DeskError::Config(format!(
                        "{} must be true or false, got '{}'",
                        ENV_SEED_DEMO, other
                    )))
                }
            };
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.recent_capacity == 0 {
            return Err(DeskError::Config(
                "recent_capacity must be at least 1".to_string(),
            ));
        }
        if self.title_max_chars == 0 {
            return Err(DeskError::Config(
                "title_max_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

/// `~/.lexdesk/config.json`, if there is a home directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lexdesk").join("config.json"))
}

fn read_layer(path: &Path) -> Result<serde_json::Value> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

// Copy every key of `layer` onto `base`
fn overlay(base: &mut serde_json::Value, layer: serde_json::Value, path: &Path) -> Result<()> {
    let serde_json::Value::Object(fields) = layer else {
        return Err(DeskError::Config(format!(
            "{} must contain a JSON object",
            path.display()
        )));
    };

    if let serde_json::Value::Object(base) = base {
        base.extend(fields);
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DeskError::Config(format!("{} has an invalid value '{}'", key, value)))
}
