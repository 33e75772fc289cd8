//! Runner configuration.

use super::Pipeline;
use std::path::{Path, PathBuf};

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Repository in `owner/name` form.
    repository: String,
    /// GitHub token used for API calls.
    token: String,
    /// Which pipeline to run.
    pipeline: Pipeline,
    /// Directory the outputs are written under.
    output_root: PathBuf,
    /// Optional settings file.
    config_path: Option<PathBuf>,
}

impl RunnerConfig {
    /// Creates a new configuration writing into the current directory.
    pub fn new(repository: String, token: String, pipeline: Pipeline) -> Self {
        Self {
            repository,
            token,
            pipeline,
            output_root: PathBuf::from("."),
            config_path: None,
        }
    }

    /// Sets the output root directory.
    pub fn with_output_root(mut self, output_root: PathBuf) -> Self {
        self.output_root = output_root;
        self
    }

    /// Sets a settings file path.
    pub fn with_config_path(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    /// Returns the repository identifier as supplied.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the selected pipeline.
    pub fn pipeline(&self) -> Pipeline {
        self.pipeline
    }

    /// Returns the output root directory.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Returns the settings file path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
