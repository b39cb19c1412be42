//! Configuration management for refdoc.
//!
//! Parses `refdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `source.path`
//! - `source.overlays`
//! - `output.path`
//! - `output.format`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "refdoc.toml";

/// Source file used when nothing is configured.
const DEFAULT_SOURCE: &str = "serializers/schedule.yaml";

/// Output format names accepted in `output.format`.
const KNOWN_FORMATS: [&str; 4] = ["markdown", "md", "html", "json"];

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the reference source file.
    pub source: Option<PathBuf>,
    /// Replace the configured overlays.
    pub overlays: Option<Vec<PathBuf>>,
    /// Override the output file.
    pub output: Option<PathBuf>,
    /// Override the output format.
    pub format: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Source section (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Output section (paths are relative strings from TOML).
    output: OutputConfigRaw,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    path: Option<String>,
    overlays: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
    format: Option<String>,
}

/// Resolved source configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SourceConfig {
    /// Reference document (YAML or JSON).
    pub path: PathBuf,
    /// Language overlays, applied in order.
    pub overlays: Vec<PathBuf>,
}

/// Resolved output configuration.
#[derive(Debug)]
pub struct OutputConfig {
    /// Output file. `None` writes to stdout.
    pub path: Option<PathBuf>,
    /// Output format name (one of `markdown`, `md`, `html`, `json`).
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: "markdown".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.path`").
        field: String,
        /// Error message (e.g., "${`REFDOC_OUT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `refdoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            self.source_resolved.path.clone_from(source);
        }
        if let Some(overlays) = &settings.overlays {
            self.source_resolved.overlays.clone_from(overlays);
        }
        if let Some(output) = &settings.output {
            self.output_resolved.path = Some(output.clone());
        }
        if let Some(format) = &settings.format {
            self.output_resolved.format.clone_from(format);
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_resolved.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "source.path cannot be empty".to_owned(),
            ));
        }

        let format = self.output_resolved.format.to_ascii_lowercase();
        if !KNOWN_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "output.format must be one of {}, got {:?}",
                KNOWN_FORMATS.join(", "),
                self.output_resolved.format
            )));
        }

        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            source_resolved: SourceConfig {
                path: base.join(DEFAULT_SOURCE),
                overlays: Vec::new(),
            },
            ..Self::default()
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.source.path {
            self.source.path = Some(expand::expand_env(path, "source.path")?);
        }
        if let Some(ref mut overlays) = self.source.overlays {
            for overlay in overlays.iter_mut() {
                *overlay = expand::expand_env(overlay, "source.overlays")?;
            }
        }
        if let Some(ref path) = self.output.path {
            self.output.path = Some(expand::expand_env(path, "output.path")?);
        }
        if let Some(ref format) = self.output.format {
            self.output.format = Some(expand::expand_env(format, "output.format")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.source_resolved = SourceConfig {
            path: config_dir.join(self.source.path.as_deref().unwrap_or(DEFAULT_SOURCE)),
            overlays: self
                .source
                .overlays
                .iter()
                .flatten()
                .map(|o| config_dir.join(o))
                .collect(),
        };

        self.output_resolved = OutputConfig {
            path: self.output.path.as_deref().map(|p| config_dir.join(p)),
            format: self
                .output
                .format
                .clone()
                .unwrap_or_else(|| OutputConfig::default().format),
        };
    }
}
