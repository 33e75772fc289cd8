//! Settings file deserialization.

use super::{ClassificationRules, ConfigError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Parsed contents of the optional settings file.
///
/// Every key is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// API base URL, for GitHub Enterprise installations.
    pub api_base_url: Option<String>,

    /// Number of rows in the "most recent" and "oldest open" tables.
    pub top_n: usize,

    /// Window for the "recently updated" count in the markdown report.
    pub recent_activity_days: i64,

    /// Label and keyword sets.
    #[serde(flatten)]
    pub rules: ClassificationRules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            top_n: default_top_n(),
            recent_activity_days: default_recent_activity_days(),
            rules: ClassificationRules::default(),
        }
    }
}

pub(crate) fn default_top_n() -> usize {
    5
}

pub(crate) fn default_recent_activity_days() -> i64 {
    7
}

impl Settings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, malformed
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading settings");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates settings values.
    pub(crate) fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();
        let invalid = |message: String| ConfigError::ValidationError {
            path: path_str.clone(),
            message,
        };

        if self.top_n == 0 {
            return Err(invalid("top-n must be greater than zero".to_string()));
        }

        if self.recent_activity_days <= 0 {
            return Err(invalid(
                "recent-activity-days must be greater than zero".to_string(),
            ));
        }

        if let Some(base_url) = &self.api_base_url {
            if Url::parse(base_url).is_err() {
                return Err(invalid(format!(
                    "api-base-url is not a valid URL: {base_url}"
                )));
            }
        }

        if let Some(group) = self.rules.find_blank() {
            return Err(invalid(format!("{group} must not contain empty entries")));
        }

        Ok(())
    }
}
