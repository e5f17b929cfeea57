//! Configuration file handling.
//!
//! Mail relay settings live in a TOML file with a `[mail]` table.
//! Lookup chain: `--config` flag, `$CASEWATCH_CONFIG`, then
//! `~/.config/casewatch/config.toml`. The file is optional; only mail
//! dispatch needs it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CasewatchError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mail: Option<MailConfig>,
}

/// Transport settings for the notification relay, passed in explicitly
/// rather than held as process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Relay host name
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_use_tls")]
    pub use_tls: bool,

    /// Bearer token presented to the relay
    #[serde(default)]
    pub api_token: String,

    /// Address the notification is sent from
    pub from_address: String,

    /// Display name shown as the sender
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
}

fn default_port() -> u16 {
    443
}

fn default_use_tls() -> bool {
    true
}

fn default_sender_name() -> String {
    "USCIS Poller".to_string()
}

impl Config {
    /// Resolve the config file location.
    ///
    /// Priority:
    /// 1. explicit `--config` path
    /// 2. `$CASEWATCH_CONFIG` environment variable
    /// 3. `~/.config/casewatch/config.toml`
    pub fn discover_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var("CASEWATCH_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("casewatch").join("config.toml"))
    }

    /// Load the configuration, or defaults when no file exists. A path
    /// given explicitly must exist and parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CasewatchError> {
        let Some(path) = Self::discover_path(explicit) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            if explicit.is_some() {
                return Err(CasewatchError::Config {
                    path,
                    message: "file not found".to_string(),
                });
            }
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path).map_err(|e| CasewatchError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| CasewatchError::Config {
            path,
            message: e.to_string(),
        })
    }
}
