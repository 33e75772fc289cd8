//! Aggregation over a snapshot of issue records.
//!
//! Everything here is pure: counts per category, the most recent and
//! oldest open issues, and creation histograms.

mod counts;
mod timeline;

pub use counts::{CategoryCount, CategoryCounts};
pub use timeline::{histogram, month_key, top_open, week_key, CreatedOrder, Histogram};

use crate::issues::{IssueRecord, IssueState, IssueType, Priority};
use chrono::{DateTime, Duration, Utc};

/// Aggregates computed from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueStats {
    /// Number of issues.
    pub total: usize,

    /// Number of open issues.
    pub open: usize,

    /// Number of closed issues.
    pub closed: usize,

    /// Counts by type.
    pub by_type: CategoryCounts<IssueType>,

    /// Counts by priority.
    pub by_priority: CategoryCounts<Priority>,

    /// Counts by state.
    pub by_state: CategoryCounts<IssueState>,

    /// Most recently created open issues, newest first.
    pub most_recent_open: Vec<IssueRecord>,

    /// Longest-standing open issues, oldest first.
    pub oldest_open: Vec<IssueRecord>,

    /// Creations per ISO week.
    pub weekly: Histogram,

    /// Creations per calendar month.
    pub monthly: Histogram,
}

impl IssueStats {
    /// Aggregates `records`, keeping `top_n` rows in each issue list.
    #[must_use]
    pub fn compute(records: &[IssueRecord], top_n: usize) -> Self {
        let by_state = CategoryCounts::tally(records.iter().map(|record| record.state));

        Self {
            total: records.len(),
            open: by_state.get(IssueState::Open),
            closed: by_state.get(IssueState::Closed),
            by_type: CategoryCounts::tally(records.iter().map(|record| record.issue_type)),
            by_priority: CategoryCounts::tally(records.iter().map(|record| record.priority)),
            by_state,
            most_recent_open: top_open(records, top_n, CreatedOrder::NewestFirst),
            oldest_open: top_open(records, top_n, CreatedOrder::OldestFirst),
            weekly: histogram(records, week_key),
            monthly: histogram(records, month_key),
        }
    }

    /// Returns true if the snapshot held no issues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Number of records updated within `days` days before `now`.
#[must_use]
pub fn recently_updated(records: &[IssueRecord], now: DateTime<Utc>, days: i64) -> usize {
    let cutoff = now - Duration::days(days);
    records
        .iter()
        .filter(|record| record.updated_at.is_some_and(|updated| updated > cutoff))
        .count()
}

/// Mean age of open records in days, `None` if no open record has a
/// creation date.
#[must_use]
pub fn average_open_age_days(records: &[IssueRecord], now: DateTime<Utc>) -> Option<f64> {
    let ages: Vec<f64> = records
        .iter()
        .filter(|record| record.is_open())
        .filter_map(|record| record.created_at)
        .map(|created| (now - created).num_seconds() as f64 / 86_400.0)
        .collect();

    if ages.is_empty() {
        return None;
    }
    Some(ages.iter().sum::<f64>() / ages.len() as f64)
}
