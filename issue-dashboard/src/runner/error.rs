//! Runner error types.

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings or repository identifier errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Issue retrieval errors.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// Output rendering errors.
    #[error(transparent)]
    Render(#[from] crate::render::RenderError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
