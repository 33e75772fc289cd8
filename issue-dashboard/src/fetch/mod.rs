//! Issue retrieval using the GitHub issues API.
//!
//! Lists every issue of a repository page by page, drops the pull requests
//! the endpoint interleaves with issues, and reduces the rest to
//! [`RawIssue`]s. Any API failure aborts the fetch.

mod error;

pub use error::FetchError;

use crate::config::RepositoryId;
use crate::issues::RawIssue;
use crate::rate_limit::core_quota_exhausted;
use octocrab::models::issues::Issue;
use octocrab::{params, Octocrab, Page};
use tracing::{debug, info, info_span, Instrument};

/// Results per page for the list endpoint.
const RESULTS_PER_PAGE: u8 = 100;

/// Which issues to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    /// Open and closed issues.
    All,

    /// Open issues only.
    OpenOnly,
}

impl StateFilter {
    fn as_param(self) -> params::State {
        match self {
            Self::All => params::State::All,
            Self::OpenOnly => params::State::Open,
        }
    }
}

/// A snapshot of a repository's issues.
#[derive(Debug, Clone, Default)]
pub struct FetchedIssues {
    /// Issues, pull requests excluded.
    pub issues: Vec<RawIssue>,

    /// Number of pull requests dropped from the listing.
    pub pull_requests_skipped: usize,
}

/// Fetches every issue of `repository` matching `filter`.
///
/// # Errors
///
/// Returns [`FetchError::Unauthorized`] for a rejected token,
/// [`FetchError::RepositoryInaccessible`] when the repository cannot be
/// read, [`FetchError::RateLimitExceeded`] when no quota remains, and
/// [`FetchError::GitHubError`] for any other API failure.
pub async fn fetch_issues(
    octocrab: &Octocrab,
    repository: &RepositoryId,
    filter: StateFilter,
) -> Result<FetchedIssues, FetchError> {
    let full_name = repository.full_name();
    let span = info_span!("fetch", repo = %full_name, filter = ?filter);

    async {
        info!("Fetching issues");

        if let Some(reset_at) = core_quota_exhausted(octocrab).await {
            return Err(FetchError::RateLimitExceeded { reset_at });
        }

        let listed = list_all_issues(octocrab, repository, filter)
            .await
            .map_err(|e| FetchError::from_api(e, &full_name))?;

        let raws: Vec<RawIssue> = listed.iter().map(RawIssue::from).collect();
        let fetched = split_pull_requests(raws);

        info!(
            count = fetched.issues.len(),
            pull_requests_skipped = fetched.pull_requests_skipped,
            "Fetch complete"
        );
        Ok(fetched)
    }
    .instrument(span)
    .await
}

/// Lists issues with pagination.
async fn list_all_issues(
    octocrab: &Octocrab,
    repository: &RepositoryId,
    filter: StateFilter,
) -> Result<Vec<Issue>, octocrab::Error> {
    let mut page: Page<Issue> = octocrab
        .issues(&repository.owner, &repository.name)
        .list()
        .state(filter.as_param())
        .per_page(RESULTS_PER_PAGE)
        .send()
        .await?;

    let mut all_issues = std::mem::take(&mut page.items);
    debug!(count = all_issues.len(), "Fetched first page");

    while let Some(mut next_page) = octocrab.get_page::<Issue>(&page.next).await? {
        debug!(count = next_page.items.len(), "Fetched next page");
        all_issues.append(&mut next_page.items);
        page.next = next_page.next;

        if page.next.is_none() {
            break;
        }
    }

    Ok(all_issues)
}

/// Separates pull requests from issues.
fn split_pull_requests(raws: Vec<RawIssue>) -> FetchedIssues {
    let total = raws.len();
    let issues: Vec<RawIssue> = raws.into_iter().filter(|raw| !raw.is_pull_request).collect();

    FetchedIssues {
        pull_requests_skipped: total - issues.len(),
        issues,
    }
}
