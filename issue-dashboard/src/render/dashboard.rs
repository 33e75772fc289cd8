//! Static HTML dashboard and its JSON summary.

use super::{write_output, RenderError};
use crate::charts::{self, ISSUE_CHARTS_FILE, MONTHLY_CHART_FILE};
use crate::issues::{Category, IssueRecord};
use crate::stats::{CategoryCounts, Histogram, IssueStats};
use crate::templates::{TemplateError, TemplateRenderer};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dashboard directory under the output root.
pub const DASHBOARD_DIR: &str = "dashboard";

/// Chart directory under the dashboard directory.
pub const IMAGE_DIR: &str = "img";

/// Dashboard page file name.
pub const INDEX_FILE: &str = "index.html";

/// JSON summary file name.
pub const SUMMARY_FILE: &str = "summary.json";

/// Inputs to the dashboard besides the aggregates.
#[derive(Debug, Clone, Copy)]
pub struct DashboardContext<'a> {
    /// Repository full name (`owner/name`).
    pub repository: &'a str,

    /// Time the snapshot was taken.
    pub generated_at: DateTime<Utc>,
}

/// Machine-readable snapshot of the dashboard aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySnapshot {
    pub total_issues: usize,
    pub open_issues: usize,
    pub closed_issues: usize,
    pub by_type: IndexMap<&'static str, usize>,
    pub by_priority: IndexMap<&'static str, usize>,
    pub by_state: IndexMap<&'static str, usize>,
    pub weekly: Histogram,
    pub monthly: Histogram,
    /// RFC 3339 timestamp.
    pub update_time: String,
}

impl SummarySnapshot {
    #[must_use]
    pub fn new(stats: &IssueStats, generated_at: DateTime<Utc>) -> Self {
        Self {
            total_issues: stats.total,
            open_issues: stats.open,
            closed_issues: stats.closed,
            by_type: stats.by_type.to_key_map(),
            by_priority: stats.by_priority.to_key_map(),
            by_state: stats.by_state.to_key_map(),
            weekly: stats.weekly.clone(),
            monthly: stats.monthly.clone(),
            update_time: generated_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct DashboardView<'a> {
    repository: &'a str,
    repository_url: String,
    update_time: String,
    total_issues: usize,
    open_issues: usize,
    closed_issues: usize,
    by_type: Vec<CountRow>,
    by_priority: Vec<CountRow>,
    issue_charts: String,
    monthly_chart: String,
    recent_issues: Vec<IssueRow<'a>>,
    oldest_issues: Vec<IssueRow<'a>>,
}

#[derive(Serialize)]
struct CountRow {
    key: &'static str,
    label: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct IssueRow<'a> {
    number: u64,
    title: &'a str,
    url: &'a str,
    issue_type: &'static str,
    priority: &'static str,
    created: String,
    assignee: &'a str,
}

fn count_rows<K: Category>(counts: &CategoryCounts<K>) -> Vec<CountRow> {
    counts
        .entries()
        .iter()
        .map(|entry| CountRow {
            key: entry.key.key(),
            label: entry.key.label(),
            count: entry.count,
        })
        .collect()
}

fn issue_rows(records: &[IssueRecord]) -> Vec<IssueRow<'_>> {
    records
        .iter()
        .map(|record| IssueRow {
            number: record.number,
            title: &record.title,
            url: &record.url,
            issue_type: record.issue_type.display_name(),
            priority: record.priority.display_name(),
            created: record
                .created_at
                .map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d").to_string()),
            assignee: record.assignee_or_default(),
        })
        .collect()
}

/// Renders the dashboard page.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn dashboard_html(
    stats: &IssueStats,
    renderer: &TemplateRenderer,
    context: DashboardContext<'_>,
) -> Result<String, TemplateError> {
    let view = DashboardView {
        repository: context.repository,
        repository_url: format!("https://github.com/{}", context.repository),
        update_time: context.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        total_issues: stats.total,
        open_issues: stats.open,
        closed_issues: stats.closed,
        by_type: count_rows(&stats.by_type),
        by_priority: count_rows(&stats.by_priority),
        issue_charts: format!("{IMAGE_DIR}/{ISSUE_CHARTS_FILE}"),
        monthly_chart: format!("{IMAGE_DIR}/{MONTHLY_CHART_FILE}"),
        recent_issues: issue_rows(&stats.most_recent_open),
        oldest_issues: issue_rows(&stats.oldest_open),
    };

    renderer.render_dashboard(&view)
}

/// Writes the dashboard page, summary and charts under
/// `<output_root>/dashboard`, returning the written paths.
///
/// # Errors
///
/// Returns [`RenderError`] if rendering or writing any file fails.
pub fn write_dashboard(
    stats: &IssueStats,
    renderer: &TemplateRenderer,
    context: DashboardContext<'_>,
    output_root: &Path,
) -> Result<Vec<PathBuf>, RenderError> {
    let dir = output_root.join(DASHBOARD_DIR);
    let images = dir.join(IMAGE_DIR);

    let issue_charts = images.join(ISSUE_CHARTS_FILE);
    charts::save_png(&charts::issue_charts(stats), &issue_charts)?;
    let monthly = images.join(MONTHLY_CHART_FILE);
    charts::save_png(&charts::monthly_chart(stats), &monthly)?;

    let index = dir.join(INDEX_FILE);
    write_output(&index, dashboard_html(stats, renderer, context)?)?;

    let summary = dir.join(SUMMARY_FILE);
    let snapshot = SummarySnapshot::new(stats, context.generated_at);
    write_output(&summary, serde_json::to_string_pretty(&snapshot)?)?;

    info!(dir = %dir.display(), total = stats.total, "Dashboard written");
    Ok(vec![index, summary, issue_charts, monthly])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{IssueState, IssueType, Priority};
    use chrono::TimeZone;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap()
    }

    fn context() -> DashboardContext<'static> {
        DashboardContext {
            repository: "octo/widgets",
            generated_at: generated_at(),
        }
    }

    fn record(number: u64, priority: Priority, state: IssueState) -> IssueRecord {
        IssueRecord {
            number,
            title: format!("Issue <{number}>"),
            issue_type: IssueType::Bug,
            priority,
            state,
            created_at: Some(Utc.with_ymd_and_hms(2024, 2, number as u32, 0, 0, 0).unwrap()),
            updated_at: None,
            closed_at: None,
            assignee: Some("octocat".to_string()),
            url: format!("https://github.com/octo/widgets/issues/{number}"),
        }
    }

    #[test]
    fn dashboard_lists_counts_and_issues() {
        let records = vec![
            record(1, Priority::High, IssueState::Open),
            record(2, Priority::Low, IssueState::Closed),
        ];
        let stats = IssueStats::compute(&records, 5);

        let html = dashboard_html(&stats, &TemplateRenderer::new(), context()).unwrap();

        assert!(html.contains("2024-03-05 12:30 UTC"));
        assert!(html.contains("bg-danger"));
        assert!(html.contains("https://github.com/octo/widgets/issues/1"));
        assert!(html.contains("octocat"));
        assert!(html.contains(r#"href="https://github.com/octo/widgets""#));
        assert!(html.contains("img/issue_charts.png"));
        // Titles are escaped.
        assert!(html.contains("Issue &lt;1&gt;"));
    }

    #[test]
    fn empty_dashboard_shows_no_data() {
        let stats = IssueStats::compute(&[], 5);
        let html = dashboard_html(&stats, &TemplateRenderer::new(), context()).unwrap();

        assert_eq!(html.matches("No data").count(), 4);
    }

    #[test]
    fn summary_keeps_count_order() {
        let records = vec![
            record(1, Priority::Low, IssueState::Open),
            record(2, Priority::High, IssueState::Open),
            record(3, Priority::Low, IssueState::Closed),
        ];
        let snapshot = SummarySnapshot::new(&IssueStats::compute(&records, 5), generated_at());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""by_priority":{"low":2,"high":1}"#));
        assert!(json.contains(r#""by_state":{"open":2,"closed":1}"#));
        assert!(json.contains(r#""update_time":"2024-03-05T12:30:00+00:00""#));
    }
}
