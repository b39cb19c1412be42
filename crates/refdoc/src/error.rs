//! CLI error types.

use refdoc_config::ConfigError;
use refdoc_model::ModelError;
use refdoc_renderer::{RenderError, UnknownFormat};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Format(#[from] UnknownFormat),
}
