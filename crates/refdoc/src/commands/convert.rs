//! `refdoc convert` command implementation.

use std::path::PathBuf;

use clap::Args;
use refdoc_model::{ModelError, yaml_to_json};

use super::write_file;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// YAML reference source.
    input: PathBuf,

    /// Output JSON file (default: input path with a `.json` extension).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if !self.input.exists() {
            return Err(ModelError::NotFound(self.input).into());
        }
        let target = self
            .output
            .unwrap_or_else(|| self.input.with_extension("json"));

        let yaml = std::fs::read_to_string(&self.input)?;
        let json = yaml_to_json(&yaml)?;
        write_file(&target, &json)?;

        output.success(&format!("Wrote {}", target.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_writes_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("schedule.yaml");
        std::fs::write(&input, "name: Ref\n").unwrap();

        ConvertArgs {
            input,
            output: None,
        }
        .execute()
        .unwrap();

        let json = std::fs::read_to_string(dir.path().join("schedule.json")).unwrap();
        assert_eq!(json, "{\n  \"name\": \"Ref\"\n}\n");
    }

    #[test]
    fn test_convert_missing_input() {
        let result = ConvertArgs {
            input: PathBuf::from("/nonexistent/schedule.yaml"),
            output: None,
        }
        .execute();
        assert!(matches!(result, Err(CliError::Model(ModelError::NotFound(_)))));
    }
}
