//! Orchestrates a single fetch, classify, aggregate and render run.

mod config;
mod error;
mod pipeline;

pub use config::RunnerConfig;
pub use error::RunnerError;
pub use pipeline::{build, build_dashboard, build_report, BuildOptions, Pipeline};

use crate::config::{load_settings, RepositoryId, Settings};
use crate::fetch::fetch_issues;
use crate::issues::normalize;
use crate::summary::RunSummary;
use chrono::Utc;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::{info, warn};

/// Runs one pipeline against one repository.
pub struct Runner {
    config: RunnerConfig,
    repository: RepositoryId,
    settings: Settings,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// Loads the settings file, validates the repository identifier and
    /// creates the authenticated client. No request is made yet. The client
    /// never retries; a failed call fails the run.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let settings = load_settings(config.config_path())?;
        let repository: RepositoryId = config.repository().parse()?;

        let mut builder = Octocrab::builder()
            .personal_token(config.token().to_string())
            .add_retry_config(RetryConfig::None);
        if let Some(base_url) = &settings.api_base_url {
            builder = builder.base_uri(base_url.as_str())?;
        }
        let octocrab = builder.build()?;

        Ok(Self {
            config,
            repository,
            settings,
            octocrab,
        })
    }

    /// Executes the selected pipeline.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let pipeline = self.config.pipeline();
        let full_name = self.repository.full_name();
        info!(repo = %full_name, %pipeline, "Starting run");

        let fetched = fetch_issues(&self.octocrab, &self.repository, pipeline.state_filter()).await?;
        let records = normalize(&fetched.issues, &self.settings.rules, pipeline.priority_strategy());

        let options = BuildOptions {
            repository: &full_name,
            settings: &self.settings,
            output_root: self.config.output_root(),
            generated_at: Utc::now(),
        };
        let outputs = build(pipeline, &records, &options)?;

        let mut summary = RunSummary::new(pipeline);
        summary.pull_requests_skipped = fetched.pull_requests_skipped;
        summary.record_issues(&records);
        summary.outputs = outputs;
        if summary.is_empty() {
            warn!(repo = %full_name, "No issues found, wrote empty outputs");
        }
        Ok(summary)
    }
}
