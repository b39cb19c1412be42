//! `refdoc render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use refdoc_config::{CliSettings, Config};
use refdoc_renderer::{OutputFormat, render};

use super::{load_source, write_file};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Reference source file, YAML or JSON (overrides config).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: markdown, html or json (overrides config).
    #[arg(short, long)]
    format: Option<String>,

    /// Language overlay to apply. Repeat to stack overlays; replaces the
    /// configured list.
    #[arg(long = "overlay")]
    overlays: Vec<PathBuf>,

    /// Path to configuration file (default: auto-discover refdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source: self.input,
            overlays: (!self.overlays.is_empty()).then_some(self.overlays),
            output: self.output,
            format: self.format,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let format: OutputFormat = config.output_resolved.format.parse()?;

        let rendered = render_source(
            &config.source_resolved.path,
            &config.source_resolved.overlays,
            format,
        )?;

        match &config.output_resolved.path {
            Some(path) => {
                write_file(path, &rendered)?;
                output.success(&format!("Rendered {format} to {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Load, overlay and render a source file.
fn render_source(
    source: &Path,
    overlays: &[PathBuf],
    format: OutputFormat,
) -> Result<String, CliError> {
    let doc = load_source(source, overlays)?;
    let document = render(&doc)?;
    Ok(document.to_output(format)?)
}
