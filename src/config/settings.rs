//! User settings for WellSpace
//!
//! Manages display preferences and the category advisor connection.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::WellspacePaths;
use crate::error::WellspaceError;

/// Category advisor settings
///
/// The API key is never stored here; only the name of the environment
/// variable that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorSettings {
    /// Whether `expense add` asks for a category suggestion
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL of the generative language API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name used for suggestions
    #[serde(default = "default_model")]
    pub model: String,

    /// How long to wait for a suggestion before giving up
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Fallback variable consulted when `api_key_env` is unset
pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl AdvisorSettings {
    /// Look up the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        [self.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

/// User settings for WellSpace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of expenses shown in the dashboard's recent list
    #[serde(default = "default_recent_expense_limit")]
    pub recent_expense_limit: usize,

    #[serde(default)]
    pub advisor: AdvisorSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₦".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_expense_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_expense_limit: default_recent_expense_limit(),
            advisor: AdvisorSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &WellspacePaths) -> Result<Self, WellspaceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WellspaceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WellspaceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values that serde alone cannot reject
    pub fn validate(&self) -> Result<(), WellspaceError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(WellspaceError::Config(format!(
                "Invalid date_format '{}': not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WellspacePaths) -> Result<(), WellspaceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WellspaceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            WellspaceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

/// True when every strftime specifier in `format` is recognized
pub fn is_valid_date_format(format: &str) -> bool {
    !format.trim().is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
