//! Configuration loading.
//!
//! This module handles the optional `issue-dashboard.toml` settings file,
//! the classification rule sets and the repository identifier.

mod error;
mod repository;
mod rules;
mod settings;

pub use error::ConfigError;
pub use repository::RepositoryId;
pub use rules::{ClassificationRules, PriorityKeywords, TypeLabels};
pub use settings::Settings;

use std::path::Path;
use tracing::info;

/// Loads settings from `path`, or returns the defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError`] if a path is given and the file cannot be loaded
/// or fails validation.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => {
            let settings = Settings::load(path)?;
            info!(path = %path.display(), "Loaded settings file");
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}
