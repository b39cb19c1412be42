//! CLI command implementations.

mod check;
mod convert;
mod render;

use std::path::{Path, PathBuf};

use refdoc_model::{Overlay, ReferenceDocument};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use convert::ConvertArgs;
pub(crate) use render::RenderArgs;

/// Load the reference source and apply overlays in order.
fn load_source(source: &Path, overlays: &[PathBuf]) -> Result<ReferenceDocument, CliError> {
    let mut doc = ReferenceDocument::load(source)?;
    for path in overlays {
        let overlay = Overlay::load(path)?;
        tracing::info!(language = %overlay.language, path = %path.display(), "Applying overlay");
        doc = overlay.apply(&doc);
    }
    Ok(doc)
}

/// Write content to a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
    Ok(())
}
