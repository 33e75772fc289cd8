//! Issue records.
//!
//! A [`RawIssue`] is the API view of an issue; an [`IssueRecord`] is the
//! flat, classified record every later stage works on.

mod kind;
mod raw;

pub use kind::{Category, IssueState, IssueType, Priority};
pub use raw::RawIssue;

use crate::classify::{classify_priority, classify_type, PriorityStrategy};
use crate::config::ClassificationRules;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A normalized, classified issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    /// Issue number in the source tracker.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Derived issue type.
    #[serde(rename = "type")]
    pub issue_type: IssueType,

    /// Derived priority.
    pub priority: Priority,

    /// Open or closed.
    pub state: IssueState,

    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,

    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,

    /// Close time, for closed issues.
    pub closed_at: Option<DateTime<Utc>>,

    /// Login of the assignee, if any.
    pub assignee: Option<String>,

    /// Web URL of the issue.
    pub url: String,
}

impl IssueRecord {
    /// Classifies a raw issue into a record.
    #[must_use]
    pub fn from_raw(
        raw: &RawIssue,
        rules: &ClassificationRules,
        strategy: PriorityStrategy,
    ) -> Self {
        Self {
            number: raw.number,
            title: raw.title.clone(),
            issue_type: classify_type(&raw.labels, rules),
            priority: classify_priority(strategy, &raw.labels, raw.body.as_deref(), rules),
            state: raw.state,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            closed_at: raw.closed_at,
            assignee: raw.assignee.clone(),
            url: raw.url.clone(),
        }
    }

    /// Returns true if the issue is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    /// Returns the assignee login, or `Unassigned`.
    #[must_use]
    pub fn assignee_or_default(&self) -> &str {
        self.assignee.as_deref().unwrap_or("Unassigned")
    }
}

/// Classifies every raw issue, skipping pull requests.
#[must_use]
pub fn normalize(
    raws: &[RawIssue],
    rules: &ClassificationRules,
    strategy: PriorityStrategy,
) -> Vec<IssueRecord> {
    raws.iter()
        .filter(|raw| !raw.is_pull_request)
        .map(|raw| IssueRecord::from_raw(raw, rules, strategy))
        .collect()
}
