//! The two pipelines and their offline build step.

use crate::classify::PriorityStrategy;
use crate::config::Settings;
use crate::fetch::StateFilter;
use crate::issues::IssueRecord;
use crate::render::{self, DashboardContext, RenderError, ReportContext};
use crate::stats::IssueStats;
use crate::templates::TemplateRenderer;
use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which outputs a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    /// All issues, label priorities, HTML dashboard with JSON summary.
    Dashboard,

    /// Open issues, body-text priorities, markdown report.
    Report,
}

impl Pipeline {
    /// Returns the issue states the pipeline fetches.
    #[must_use]
    pub fn state_filter(self) -> StateFilter {
        match self {
            Self::Dashboard => StateFilter::All,
            Self::Report => StateFilter::OpenOnly,
        }
    }

    /// Returns how the pipeline derives priorities.
    #[must_use]
    pub fn priority_strategy(self) -> PriorityStrategy {
        match self {
            Self::Dashboard => PriorityStrategy::Labels,
            Self::Report => PriorityStrategy::BodyText,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the build step besides the records.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions<'a> {
    /// Repository full name (`owner/name`).
    pub repository: &'a str,

    /// Loaded settings.
    pub settings: &'a Settings,

    /// Directory the outputs are written under.
    pub output_root: &'a Path,

    /// Time the snapshot was taken.
    pub generated_at: DateTime<Utc>,
}

/// Aggregates `records` and writes the dashboard outputs.
///
/// # Errors
///
/// Returns [`RenderError`] if any output cannot be rendered or written.
pub fn build_dashboard(
    records: &[IssueRecord],
    options: &BuildOptions<'_>,
) -> Result<Vec<PathBuf>, RenderError> {
    let stats = IssueStats::compute(records, options.settings.top_n);
    let context = DashboardContext {
        repository: options.repository,
        generated_at: options.generated_at,
    };
    render::write_dashboard(&stats, &TemplateRenderer::new(), context, options.output_root)
}

/// Aggregates `records` and writes the markdown report and its chart.
///
/// # Errors
///
/// Returns [`RenderError`] if any output cannot be rendered or written.
pub fn build_report(
    records: &[IssueRecord],
    options: &BuildOptions<'_>,
) -> Result<Vec<PathBuf>, RenderError> {
    let stats = IssueStats::compute(records, options.settings.top_n);
    let context = ReportContext {
        generated_at: options.generated_at,
        recent_activity_days: options.settings.recent_activity_days,
        top_n: options.settings.top_n,
    };
    render::write_report(
        records,
        &stats,
        &TemplateRenderer::new(),
        context,
        options.output_root,
    )
}

/// Runs the build step of `pipeline`.
///
/// # Errors
///
/// Returns [`RenderError`] if any output cannot be rendered or written.
pub fn build(
    pipeline: Pipeline,
    records: &[IssueRecord],
    options: &BuildOptions<'_>,
) -> Result<Vec<PathBuf>, RenderError> {
    match pipeline {
        Pipeline::Dashboard => build_dashboard(records, options),
        Pipeline::Report => build_report(records, options),
    }
}
