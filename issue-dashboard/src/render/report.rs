//! Markdown issue report.

use super::table::{MarkdownTable, NO_DATA};
use super::{write_output, RenderError};
use crate::charts;
use crate::issues::IssueRecord;
use crate::stats::{average_open_age_days, recently_updated, IssueStats};
use crate::templates::{TemplateError, TemplateRenderer};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Report file name under the output root.
pub const REPORT_FILE: &str = "issue-report.md";

/// Report chart file name under the output root.
pub const REPORT_CHART_FILE: &str = "issue-stats.png";

/// Inputs to the report besides the records.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext {
    /// Time the snapshot was taken; ages are measured against it.
    pub generated_at: DateTime<Utc>,

    /// Window for the recent activity count.
    pub recent_activity_days: i64,

    /// Rows in the oldest unresolved table.
    pub top_n: usize,
}

#[derive(Serialize)]
struct ReportView {
    generated_at: String,
    open_issues: usize,
    average_days_open: String,
    type_table: String,
    priority_table: String,
    recent_days: i64,
    recently_updated: usize,
    unresolved_heading: String,
    unresolved: String,
    chart: &'static str,
}

fn unresolved_section(stats: &IssueStats, top_n: usize) -> (String, String) {
    if stats.oldest_open.is_empty() {
        return (
            "Oldest unresolved issues".to_string(),
            "No unresolved issues".to_string(),
        );
    }

    let heading = if stats.open >= top_n {
        format!("Oldest unresolved issues (top {top_n})")
    } else {
        "Unresolved issues".to_string()
    };

    let mut table = MarkdownTable::new(["#", "Title", "Type", "Priority", "Created"]);
    for record in &stats.oldest_open {
        table.push_row([
            record.number.to_string(),
            record.title.clone(),
            record.issue_type.display_name().to_string(),
            record.priority.display_name().to_string(),
            record
                .created_at
                .map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d").to_string()),
        ]);
    }

    (heading, table.render())
}

/// Renders the markdown report.
///
/// `stats` must have been computed from `records`.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn report_markdown(
    records: &[IssueRecord],
    stats: &IssueStats,
    renderer: &TemplateRenderer,
    context: ReportContext,
) -> Result<String, TemplateError> {
    let now = context.generated_at;
    let (unresolved_heading, unresolved) = unresolved_section(stats, context.top_n);

    let view = ReportView {
        generated_at: now.format("%Y-%m-%d %H:%M UTC").to_string(),
        open_issues: stats.open,
        average_days_open: average_open_age_days(records, now)
            .map_or_else(|| NO_DATA.to_string(), |days| format!("{days:.1}")),
        type_table: MarkdownTable::from_counts("Type", &stats.by_type).render(),
        priority_table: MarkdownTable::from_counts("Priority", &stats.by_priority).render(),
        recent_days: context.recent_activity_days,
        recently_updated: recently_updated(records, now, context.recent_activity_days),
        unresolved_heading,
        unresolved,
        chart: REPORT_CHART_FILE,
    };

    renderer.render_report(&view)
}

/// Writes the report and its chart under `output_root`, returning the
/// written paths.
///
/// # Errors
///
/// Returns [`RenderError`] if rendering or writing any file fails.
pub fn write_report(
    records: &[IssueRecord],
    stats: &IssueStats,
    renderer: &TemplateRenderer,
    context: ReportContext,
    output_root: &Path,
) -> Result<Vec<PathBuf>, RenderError> {
    let report = output_root.join(REPORT_FILE);
    write_output(&report, report_markdown(records, stats, renderer, context)?)?;

    let chart = output_root.join(REPORT_CHART_FILE);
    charts::save_png(&charts::report_chart(stats), &chart)?;

    info!(path = %report.display(), open = stats.open, "Report written");
    Ok(vec![report, chart])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{IssueState, IssueType, Priority};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap()
    }

    fn context() -> ReportContext {
        ReportContext {
            generated_at: now(),
            recent_activity_days: 7,
            top_n: 5,
        }
    }

    fn open_record(number: u64, age_days: i64) -> IssueRecord {
        IssueRecord {
            number,
            title: format!("Issue {number}"),
            issue_type: IssueType::Task,
            priority: Priority::Medium,
            state: IssueState::Open,
            created_at: Some(now() - Duration::days(age_days)),
            updated_at: Some(now() - Duration::days(age_days.min(3))),
            closed_at: None,
            assignee: None,
            url: String::new(),
        }
    }

    fn render(records: &[IssueRecord]) -> String {
        let stats = IssueStats::compute(records, 5);
        report_markdown(records, &stats, &TemplateRenderer::new(), context()).unwrap()
    }

    #[test]
    fn empty_report_shows_no_data() {
        let report = render(&[]);

        assert!(report.contains("- Open issues: 0"));
        assert!(report.contains("- Average days open: No data"));
        assert!(report.contains("## 2. Issues by type\n\nNo data"));
        assert!(report.contains("## 3. Issues by priority\n\nNo data"));
        assert!(report.contains("Issues updated in the last 7 days: 0"));
        assert!(report.contains("## 5. Oldest unresolved issues\n\nNo unresolved issues"));
    }

    #[test]
    fn few_open_issues_are_all_listed() {
        let records = vec![open_record(1, 10), open_record(2, 20)];
        let report = render(&records);

        assert!(report.contains("## 5. Unresolved issues"));
        assert!(report.contains("- Average days open: 15.0"));
        assert!(report.contains("Issues updated in the last 7 days: 2"));
    }

    #[test]
    fn many_open_issues_list_top_five_oldest_first() {
        let records: Vec<IssueRecord> = (1..=7).map(|n| open_record(n, n as i64 * 10)).collect();
        let report = render(&records);

        assert!(report.contains("## 5. Oldest unresolved issues (top 5)"));
        let section = report.split("## 5.").nth(1).unwrap();
        let position = |needle: &str| section.find(needle).unwrap();
        assert!(position("Issue 7") < position("Issue 6"));
        assert!(position("Issue 4") < position("Issue 3"));
        assert!(!section.contains("Issue 2 "));
        assert!(!section.contains("Issue 1 "));
    }
}
