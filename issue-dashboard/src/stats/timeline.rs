//! Creation-date bucketing and ordering.

use crate::issues::IssueRecord;
use chrono::{DateTime, Datelike, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Creation counts per time bucket, in chronological order.
pub type Histogram = BTreeMap<String, usize>;

/// Sort direction for creation dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedOrder {
    /// Newest first.
    NewestFirst,

    /// Oldest first.
    OldestFirst,
}

/// ISO week key, e.g. `2024-W09`.
#[must_use]
pub fn week_key(at: DateTime<Utc>) -> String {
    let week = at.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Calendar month key, e.g. `2024-03`.
#[must_use]
pub fn month_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m").to_string()
}

/// Counts creation dates per bucket. Records without a creation date are
/// not bucketed.
#[must_use]
pub fn histogram(records: &[IssueRecord], bucket: fn(DateTime<Utc>) -> String) -> Histogram {
    let mut counts = Histogram::new();
    for created_at in records.iter().filter_map(|record| record.created_at) {
        *counts.entry(bucket(created_at)).or_default() += 1;
    }
    counts
}

/// Returns up to `limit` open records ordered by creation date.
///
/// Records without a creation date sort last in either direction; ties are
/// broken by issue number.
#[must_use]
pub fn top_open(records: &[IssueRecord], limit: usize, order: CreatedOrder) -> Vec<IssueRecord> {
    let mut open: Vec<&IssueRecord> = records.iter().filter(|record| record.is_open()).collect();
    open.sort_by(|a, b| compare_created(a, b, order));
    open.into_iter().take(limit).cloned().collect()
}

fn compare_created(a: &IssueRecord, b: &IssueRecord, order: CreatedOrder) -> Ordering {
    let by_date = match (a.created_at, b.created_at) {
        (Some(x), Some(y)) => match order {
            CreatedOrder::NewestFirst => y.cmp(&x),
            CreatedOrder::OldestFirst => x.cmp(&y),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then(a.number.cmp(&b.number))
}
