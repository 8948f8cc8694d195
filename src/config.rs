//! Application configuration.
//!
//! Configuration is read from a YAML file and includes:
//! - The prefix for generated ticket ids
//! - The time zone used to display creation dates
//! - Whether status badges are colored
//! - Whether the store starts with sample tickets

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::error::{HelpdeskError, Result};
use crate::form::id::DEFAULT_ID_PREFIX;

pub const CONFIG_ENV: &str = "HELPDESK_CONFIG";
pub const TIMEZONE_ENV: &str = "HELPDESK_TIMEZONE";
pub const CONFIG_FILE: &str = "config.yaml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for generated ticket ids (default: SUP)
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// IANA time zone for displayed dates; the system zone when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Color status badges (default: true)
    #[serde(default = "default_color")]
    pub color: bool,

    /// Seed the store with sample tickets on start
    #[serde(default)]
    pub demo_tickets: bool,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            timezone: None,
            color: default_color(),
            demo_tickets: false,
        }
    }
}

impl Config {
    /// Locate the config file.
    ///
    /// An explicit path wins, then `HELPDESK_CONFIG`, then the platform
    /// config directory.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("com", "helpdesk", "helpdesk")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load configuration from file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve, load and apply environment overrides in one step
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_path(explicit) {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// `HELPDESK_TIMEZONE` replaces the configured zone; `NO_COLOR` turns color off
    pub fn apply_env_overrides(&mut self) {
        if let Ok(tz) = env::var(TIMEZONE_ENV)
            && !tz.is_empty()
        {
            self.timezone = Some(tz);
        }
        if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let prefix = self.id_prefix.trim();
        if prefix.is_empty() {
            return Err(HelpdeskError::Config(
                "id_prefix cannot be empty or only whitespace".to_string(),
            ));
        }
        if !prefix
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(HelpdeskError::Config(format!(
                "id_prefix '{prefix}' contains invalid characters. Use only letters, numbers, hyphens, and underscores"
            )));
        }
        Ok(())
    }

    /// Time zone for displayed dates
    pub fn time_zone(&self) -> Result<TimeZone> {
        match &self.timezone {
            Some(name) if name.eq_ignore_ascii_case("utc") => Ok(TimeZone::UTC),
            Some(name) => Ok(TimeZone::get(name)?),
            None => Ok(TimeZone::system()),
        }
    }
}
