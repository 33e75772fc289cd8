//! Run summary types.

use crate::issues::IssueRecord;
use crate::runner::Pipeline;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Pipeline that ran.
    pub pipeline: Pipeline,

    /// Number of issues fetched, pull requests excluded.
    pub issues_fetched: usize,

    /// Number of pull requests dropped from the listing.
    pub pull_requests_skipped: usize,

    /// Number of open issues.
    pub open: usize,

    /// Number of closed issues.
    pub closed: usize,

    /// Files written, in order.
    pub outputs: Vec<PathBuf>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            issues_fetched: 0,
            pull_requests_skipped: 0,
            open: 0,
            closed: 0,
            outputs: Vec::new(),
        }
    }

    /// Counts `records` into the summary.
    pub fn record_issues(&mut self, records: &[IssueRecord]) {
        let open = records.iter().filter(|record| record.is_open()).count();
        self.issues_fetched += records.len();
        self.open += open;
        self.closed += records.len() - open;
    }

    /// Returns true if nothing was fetched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues_fetched == 0
    }
}
