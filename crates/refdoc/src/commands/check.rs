//! `refdoc check` command implementation.

use std::path::PathBuf;

use clap::Args;
use refdoc_config::{CliSettings, Config};
use refdoc_model::{Diagnostic, lint};

use super::load_source;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Reference source file, YAML or JSON (overrides config).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Language overlay to apply before checking. Repeatable.
    #[arg(long = "overlay")]
    overlays: Vec<PathBuf>,

    /// Path to configuration file (default: auto-discover refdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source: self.input,
            overlays: (!self.overlays.is_empty()).then_some(self.overlays),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source = &config.source_resolved.path;

        output.info(&format!("Source: {}", source.display()));
        let diagnostics = check_source(&config)?;

        for diagnostic in &diagnostics {
            output.diagnostic(diagnostic);
        }
        if diagnostics.is_empty() {
            output.success("No problems found");
        } else {
            output.success(&format!(
                "Valid, with {} warning(s)",
                diagnostics.len()
            ));
        }
        Ok(())
    }
}

/// Validate the configured source. Structural errors fail; content issues
/// come back as diagnostics.
fn check_source(config: &Config) -> Result<Vec<Diagnostic>, CliError> {
    let doc = load_source(
        &config.source_resolved.path,
        &config.source_resolved.overlays,
    )?;
    let reference = doc.validate()?;
    Ok(lint(&reference))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use refdoc_model::ModelError;

    use super::*;

    fn config_for(dir: &Path, source: &str) -> Config {
        let path = dir.join("refdoc.toml");
        std::fs::write(dir.join("schedule.yaml"), source).unwrap();
        std::fs::write(&path, "[source]\npath = \"schedule.yaml\"\n").unwrap();
        Config::load(Some(&path), None).unwrap()
    }

    const BASE: &str = r"
name: Ref
revision_history_url: https://example.org/history
description: Reference.
document_conventions:
  term_definitions: {description: Terms., terms: []}
  presence_conditions: {description: Presence., conditions: []}
  field_types: {description: Types., types: []}
  field_signs: {description: Signs., signs: []}
dataset_files:
  description: Files.
  files:
";

    #[test]
    fn test_check_reports_lint_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let source = format!("{BASE}    - [agency.txt, Mandatory, Agencies.]\n");
        let config = config_for(dir.path(), &source);

        let diagnostics = check_source(&config).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].index, 0);
    }

    #[test]
    fn test_check_fails_on_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let source = format!("{BASE}    - [agency.txt, Required]\n");
        let config = config_for(dir.path(), &source);

        let result = check_source(&config);

        assert!(matches!(
            result,
            Err(CliError::Model(ModelError::MalformedRecord { index: 0, .. }))
        ));
    }
}
