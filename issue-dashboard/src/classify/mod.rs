//! Issue classification.
//!
//! Derives an [`IssueType`] from labels and a [`Priority`] from either labels
//! or the free-text body. Every check is first-match-wins in the fixed
//! precedence order; no semantic parsing is attempted.

use crate::config::{ClassificationRules, PriorityKeywords};
use crate::issues::{IssueType, Priority};

/// Source of the priority signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityStrategy {
    /// Exact label membership (dashboard pipeline).
    Labels,

    /// Substring scan of the issue body (report pipeline).
    BodyText,
}

/// Derives the issue type from its labels.
///
/// `bug` wins over `enhancement`, which wins over `task`.
#[must_use]
pub fn classify_type(labels: &[String], rules: &ClassificationRules) -> IssueType {
    let has_any = |candidates: &[String]| labels.iter().any(|label| candidates.contains(label));

    if has_any(rules.type_labels.bug.as_slice()) {
        IssueType::Bug
    } else if has_any(rules.type_labels.enhancement.as_slice()) {
        IssueType::Enhancement
    } else if has_any(rules.type_labels.task.as_slice()) {
        IssueType::Task
    } else {
        IssueType::Other
    }
}

/// Derives the priority from label names.
#[must_use]
pub fn priority_from_labels(labels: &[String], keywords: &PriorityKeywords) -> Priority {
    first_matching(keywords, |candidate| {
        labels.iter().any(|label| label == candidate)
    })
}

/// Derives the priority by scanning the body for keywords.
///
/// Matching is case-sensitive, so `High` does not count as `high`. A missing
/// body is [`Priority::Unset`].
#[must_use]
pub fn priority_from_body(body: Option<&str>, keywords: &PriorityKeywords) -> Priority {
    let Some(body) = body else {
        return Priority::Unset;
    };

    first_matching(keywords, |candidate| body.contains(candidate))
}

/// Derives the priority with the given strategy.
#[must_use]
pub fn classify_priority(
    strategy: PriorityStrategy,
    labels: &[String],
    body: Option<&str>,
    rules: &ClassificationRules,
) -> Priority {
    match strategy {
        PriorityStrategy::Labels => priority_from_labels(labels, &rules.priority_keywords),
        PriorityStrategy::BodyText => priority_from_body(body, &rules.priority_keywords),
    }
}

fn first_matching(keywords: &PriorityKeywords, matches: impl Fn(&str) -> bool) -> Priority {
    let levels = [
        (Priority::High, &keywords.high),
        (Priority::Medium, &keywords.medium),
        (Priority::Low, &keywords.low),
    ];

    levels
        .into_iter()
        .find(|(_, candidates)| candidates.iter().any(|candidate| matches(candidate.as_str())))
        .map_or(Priority::Unset, |(priority, _)| priority)
}
