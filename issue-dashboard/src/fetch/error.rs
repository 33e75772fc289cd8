//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching issues.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The token was rejected.
    #[error("GitHub rejected the access token (HTTP 401)")]
    Unauthorized,

    /// The repository does not exist or the token cannot see it.
    #[error("Repository '{repository}' is not accessible (HTTP {status})")]
    RepositoryInaccessible { repository: String, status: u16 },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, reset at {reset_at}")]
    RateLimitExceeded { reset_at: u64 },

    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}

impl FetchError {
    /// Maps an API error for `repository`, singling out authorization failures.
    pub(crate) fn from_api(error: octocrab::Error, repository: &str) -> Self {
        match status_code(&error) {
            Some(401) => Self::Unauthorized,
            Some(status @ (403 | 404)) => Self::RepositoryInaccessible {
                repository: repository.to_string(),
                status,
            },
            _ => Self::GitHubError(error),
        }
    }

    /// Returns true for credential and access failures.
    #[must_use]
    pub fn is_authorization_failure(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::RepositoryInaccessible { .. }
        )
    }
}

fn status_code(error: &octocrab::Error) -> Option<u16> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}
