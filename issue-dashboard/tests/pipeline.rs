use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use issue_dashboard::render::{
    DASHBOARD_DIR, IMAGE_DIR, INDEX_FILE, REPORT_CHART_FILE, REPORT_FILE, SUMMARY_FILE,
};
use issue_dashboard::{
    build_dashboard, build_report, normalize, BuildOptions, IssueRecord, IssueState,
    IssueType, Priority, PriorityStrategy, RawIssue, Settings,
};
use serde_json::Value;
use tempfile::TempDir;

fn fixture() -> Vec<RawIssue> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/issues.json");
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn open_only(raws: Vec<RawIssue>) -> Vec<RawIssue> {
    raws.into_iter()
        .filter(|raw| raw.state == IssueState::Open)
        .collect()
}

fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()
}

fn options<'a>(settings: &'a Settings, output_root: &'a Path) -> BuildOptions<'a> {
    BuildOptions {
        repository: "octo/widgets",
        settings,
        output_root,
        generated_at: generated_at(),
    }
}

fn dashboard_records() -> Vec<IssueRecord> {
    normalize(&fixture(), &Settings::default().rules, PriorityStrategy::Labels)
}

fn report_records() -> Vec<IssueRecord> {
    normalize(
        &open_only(fixture()),
        &Settings::default().rules,
        PriorityStrategy::BodyText,
    )
}

fn read_summary(root: &Path) -> Value {
    let path = root.join(DASHBOARD_DIR).join(SUMMARY_FILE);
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn sum_values(object: &Value) -> u64 {
    object
        .as_object()
        .unwrap()
        .values()
        .map(|value| value.as_u64().unwrap())
        .sum()
}

/// Issue numbers of the table rows in the report's final section.
fn unresolved_rows(report: &str) -> Vec<u64> {
    let section = report.split("## 5.").nth(1).unwrap();
    section
        .lines()
        .filter(|line| line.starts_with('|'))
        .skip(2)
        .map(|line| line.split('|').nth(1).unwrap().trim().parse().unwrap())
        .collect()
}

#[test]
fn normalize_skips_pull_requests() {
    let records = dashboard_records();

    assert_eq!(records.len(), 9);
    assert!(records.iter().all(|record| record.number != 9));
}

#[test]
fn dashboard_writes_every_output() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();

    let outputs = build_dashboard(&dashboard_records(), &options(&settings, temp.path())).unwrap();

    let dashboard = temp.path().join(DASHBOARD_DIR);
    let expected = [
        dashboard.join(INDEX_FILE),
        dashboard.join(SUMMARY_FILE),
        dashboard.join(IMAGE_DIR).join("issue_charts.png"),
        dashboard.join(IMAGE_DIR).join("monthly_issues.png"),
    ];
    assert_eq!(outputs, expected);
    assert!(expected.iter().all(|path| path.is_file()));
}

#[test]
fn dashboard_counts_sum_to_total() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    build_dashboard(&dashboard_records(), &options(&settings, temp.path())).unwrap();

    let summary = read_summary(temp.path());
    assert_eq!(summary["total_issues"], 9);
    assert_eq!(summary["open_issues"], 7);
    assert_eq!(summary["closed_issues"], 2);
    assert_eq!(sum_values(&summary["by_type"]), 9);
    assert_eq!(sum_values(&summary["by_priority"]), 9);
    assert_eq!(sum_values(&summary["by_state"]), 9);
    assert_eq!(sum_values(&summary["monthly"]), 9);
    assert_eq!(summary["by_type"]["bug"], 3);
    assert_eq!(summary["by_priority"]["high"], 3);
    assert_eq!(summary["by_priority"]["unset"], 4);
    assert_eq!(summary["monthly"]["2024-02"], 3);
    assert_eq!(summary["update_time"], "2024-04-01T00:00:00+00:00");
}

#[test]
fn dashboard_page_links_repository_and_charts() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    build_dashboard(&dashboard_records(), &options(&settings, temp.path())).unwrap();

    let html = fs::read_to_string(temp.path().join(DASHBOARD_DIR).join(INDEX_FILE)).unwrap();
    assert!(html.contains("https://github.com/octo/widgets"));
    assert!(html.contains(r#"src="img/issue_charts.png""#));
    assert!(html.contains(r#"src="img/monthly_issues.png""#));
    assert!(html.contains("Feature Request"));
    assert!(!html.contains("No data"));
}

#[test]
fn report_priorities_come_from_body_text() {
    let records = report_records();
    let priority = |number: u64| {
        records
            .iter()
            .find(|record| record.number == number)
            .unwrap()
            .priority
    };

    assert_eq!(priority(1), Priority::Unset);
    assert_eq!(priority(2), Priority::Low);
    // "High" is capitalized and does not count as "high".
    assert_eq!(priority(4), Priority::Medium);
    // Matches both "critical" and "low"; high wins.
    assert_eq!(priority(6), Priority::High);
    assert_eq!(priority(8), Priority::High);
    assert_eq!(priority(10), Priority::Unset);
}

#[test]
fn report_lists_five_oldest_open_issues() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();

    let outputs = build_report(&report_records(), &options(&settings, temp.path())).unwrap();

    assert_eq!(
        outputs,
        [temp.path().join(REPORT_FILE), temp.path().join(REPORT_CHART_FILE)]
    );
    let report = fs::read_to_string(temp.path().join(REPORT_FILE)).unwrap();
    assert!(report.contains("- Open issues: 7"));
    assert!(report.contains("Issues updated in the last 7 days: 2"));
    assert!(report.contains("## 5. Oldest unresolved issues (top 5)"));
    assert_eq!(unresolved_rows(&report), [1, 2, 4, 5, 6]);
}

#[test]
fn report_with_few_issues_lists_all_of_them() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    let records: Vec<IssueRecord> = report_records().into_iter().take(3).collect();

    build_report(&records, &options(&settings, temp.path())).unwrap();

    let report = fs::read_to_string(temp.path().join(REPORT_FILE)).unwrap();
    assert!(report.contains("## 5. Unresolved issues"));
    assert_eq!(unresolved_rows(&report), [1, 2, 4]);
}

#[test]
fn empty_snapshot_produces_no_data_outputs() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();

    build_report(&[], &options(&settings, temp.path())).unwrap();
    build_dashboard(&[], &options(&settings, temp.path())).unwrap();

    let report = fs::read_to_string(temp.path().join(REPORT_FILE)).unwrap();
    assert!(report.contains("No data"));
    assert!(report.contains("No unresolved issues"));
    assert!(temp.path().join(REPORT_CHART_FILE).is_file());

    let summary = read_summary(temp.path());
    assert_eq!(summary["total_issues"], 0);
    assert!(summary["by_type"].as_object().unwrap().is_empty());

    let html = fs::read_to_string(temp.path().join(DASHBOARD_DIR).join(INDEX_FILE)).unwrap();
    assert!(html.contains("No data"));
}

#[test]
fn rebuilding_an_unchanged_snapshot_is_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let settings = Settings::default();
    let records = dashboard_records();

    build_dashboard(&records, &options(&settings, first.path())).unwrap();
    build_dashboard(&records, &options(&settings, second.path())).unwrap();

    assert_eq!(read_summary(first.path()), read_summary(second.path()));
    let chart = |root: &Path| {
        fs::read(root.join(DASHBOARD_DIR).join(IMAGE_DIR).join("issue_charts.png")).unwrap()
    };
    assert_eq!(chart(first.path()), chart(second.path()));
}

#[test]
fn bug_label_always_classifies_as_bug() {
    for record in dashboard_records() {
        let raw = fixture()
            .into_iter()
            .find(|raw| raw.number == record.number)
            .unwrap();
        if raw.labels.iter().any(|label| label == "bug") {
            assert_eq!(record.issue_type, IssueType::Bug);
        }
    }
}
