//! API-level issue data prior to classification.

use super::IssueState;
use chrono::{DateTime, Utc};
use octocrab::models::issues::Issue;
use serde::Deserialize;

/// An issue as returned by the tracker, reduced to the fields the
/// pipeline uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawIssue {
    /// Issue number.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Markdown body, if any.
    #[serde(default)]
    pub body: Option<String>,

    /// Label names.
    #[serde(default)]
    pub labels: Vec<String>,

    /// Open or closed.
    pub state: IssueState,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    /// Assignee login.
    #[serde(default)]
    pub assignee: Option<String>,

    /// Web URL.
    pub url: String,

    /// True for pull requests, which the list endpoint interleaves with issues.
    #[serde(default)]
    pub is_pull_request: bool,
}

impl From<&Issue> for RawIssue {
    fn from(issue: &Issue) -> Self {
        let state = match issue.state {
            octocrab::models::IssueState::Open => IssueState::Open,
            _ => IssueState::Closed,
        };

        Self {
            number: issue.number,
            title: issue.title.clone(),
            body: issue.body.clone(),
            labels: issue.labels.iter().map(|label| label.name.clone()).collect(),
            state,
            created_at: Some(issue.created_at),
            updated_at: Some(issue.updated_at),
            closed_at: issue.closed_at,
            assignee: issue.assignee.as_ref().map(|author| author.login.clone()),
            url: issue.html_url.to_string(),
            is_pull_request: issue.pull_request.is_some(),
        }
    }
}
