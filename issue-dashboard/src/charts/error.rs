//! Chart error types.

use thiserror::Error;

/// Errors that can occur while writing chart images.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Failed to create the output directory.
    #[error("Failed to create directory '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or write an image.
    #[error("Failed to write chart '{path}': {source}")]
    ImageError {
        path: String,
        #[source]
        source: image::ImageError,
    },
}
