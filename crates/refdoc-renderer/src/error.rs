//! Render error types.

use refdoc_model::ModelError;

/// Error rendering a reference document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Input tree is incomplete or has malformed records.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// Revision date is not a `YYYY-MM-DD` date.
    #[error("Invalid revision date {value:?}: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
    /// JSON serialization of the document failed.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
