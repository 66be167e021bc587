//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/calsweep/config.toml` by default:
//!
//! ```toml
//! [google]
//! calendar_id = "primary"
//! access_token = "env::CALSWEEP_ACCESS_TOKEN"
//!
//! [deletion]
//! summaries = ["Standup", "Daily sync"]
//! ```
//!
//! The `access_token` value supports secret references (`pass::…`,
//! `env::…`); alternatively `token_path` points at a JSON file holding the
//! token, re-read on every call.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use calsweep_core::SummaryDenyList;
use calsweep_providers::google::GoogleConfig;
use calsweep_providers::{FileToken, StaticToken, TokenSource};

/// Configuration for the calsweep CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Google Calendar settings.
    pub google: GoogleSettings,

    /// Deletion settings.
    pub deletion: DeletionSettings,
}

/// Google Calendar provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleSettings {
    /// The calendar to operate on.
    pub calendar_id: String,

    /// Access token (supports `pass::` and `env::` prefixes).
    pub access_token: Option<String>,

    /// Path to a JSON token file with an `access_token` field.
    pub token_path: Option<PathBuf>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GoogleSettings {
    fn default() -> Self {
        Self {
            calendar_id: "primary".to_string(),
            access_token: None,
            token_path: None,
            timeout_secs: GoogleConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Settings for the deletion operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletionSettings {
    /// Titles of past events eligible for deletion (exact match).
    pub summaries: Vec<String>,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calsweep")
    }

    /// Builds the deny-list from the configured titles.
    pub fn deny_list(&self) -> SummaryDenyList {
        SummaryDenyList::new(self.deletion.summaries.clone())
    }
}

impl GoogleSettings {
    /// Converts to provider configuration.
    pub fn to_provider_config(&self) -> GoogleConfig {
        GoogleConfig::new()
            .with_calendar_id(&self.calendar_id)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// Builds the token source for provider calls.
    ///
    /// Precedence: the CLI/environment override, then the inline
    /// `access_token` (with `pass::`/`env::` references expanded), then
    /// `token_path`.
    pub fn token_source(
        &self,
        override_token: Option<&str>,
    ) -> Result<Arc<dyn TokenSource>, String> {
        if let Some(token) = override_token {
            return Ok(Arc::new(StaticToken::new(token)));
        }

        if let Some(ref raw) = self.access_token {
            let token = crate::secret::resolve(raw)
                .map_err(|e| format!("failed to resolve access_token: {}", e))?;
            return Ok(Arc::new(StaticToken::new(token)));
        }

        if let Some(ref path) = self.token_path {
            return Ok(Arc::new(FileToken::new(path)));
        }

        Err(format!(
            "no access token configured. Add to {}:\n  \
             [google]\n  \
             access_token = \"env::CALSWEEP_ACCESS_TOKEN\"\n\n  \
             Or pass --access-token / set $CALSWEEP_ACCESS_TOKEN",
            ClientConfig::default_path().display()
        ))
    }
}
