//! Render error types.

use crate::charts::ChartError;
use crate::templates::TemplateError;

/// Errors raised while producing output files.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template rendering errors.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Chart rendering or saving errors.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// Failed to write an output file.
    #[error("Failed to write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the JSON summary.
    #[error("Failed to serialize summary: {0}")]
    JsonError(#[from] serde_json::Error),
}
