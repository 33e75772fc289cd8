#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod charts;
pub mod classify;
pub mod config;
pub mod fetch;
pub mod issues;
pub mod rate_limit;
pub mod render;
pub mod runner;
pub mod stats;
pub mod summary;
pub mod templates;

pub use classify::{classify_priority, classify_type, PriorityStrategy};
pub use config::{load_settings, ClassificationRules, ConfigError, RepositoryId, Settings};
pub use fetch::{fetch_issues, FetchError, FetchedIssues, StateFilter};
pub use issues::{normalize, IssueRecord, IssueState, IssueType, Priority, RawIssue};
pub use rate_limit::{check_core_rate_limit, RateLimitInfo};
pub use render::{MarkdownTable, RenderError, SummarySnapshot};
pub use runner::{
    build_dashboard, build_report, BuildOptions, Pipeline, Runner, RunnerConfig, RunnerError,
};
pub use stats::IssueStats;
pub use summary::RunSummary;
pub use templates::{TemplateError, TemplateRenderer};
