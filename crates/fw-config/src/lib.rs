//! Configuration management for formwire.
//!
//! Parses `formwire.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [compiler]
//! runtime_path = "::fw_runtime"
//! attribute_prefix = "n:"
//!
//! [output]
//! function_name = "render"
//! ```

use std::path::{Path, PathBuf};

use fw_compiler::{CompilerConfig, DEFAULT_ATTRIBUTE_PREFIX, DEFAULT_RUNTIME_PATH};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override runtime crate path.
    pub runtime_path: Option<String>,
    /// Override generated function name.
    pub function_name: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "formwire.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Compiler settings.
    pub compiler: CompilerSection,
    /// Generated code settings.
    pub output: OutputSection,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[compiler]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CompilerSection {
    /// Path of the runtime crate in generated code.
    pub runtime_path: String,
    /// Prefix of attribute-form directives.
    pub attribute_prefix: String,
}

impl Default for CompilerSection {
    fn default() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_owned(),
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_owned(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Name of the generated render function.
    pub function_name: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            function_name: "render".to_owned(),
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
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a string field to be a Rust identifier.
fn require_identifier(value: &str, field: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric());
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must be a Rust identifier, got '{value}'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `formwire.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(runtime_path) = &settings.runtime_path {
            self.compiler.runtime_path.clone_from(runtime_path);
        }
        if let Some(function_name) = &settings.function_name {
            self.output.function_name.clone_from(function_name);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.compiler.runtime_path, "compiler.runtime_path")?;
        require_non_empty(&self.compiler.attribute_prefix, "compiler.attribute_prefix")?;
        if !self.compiler.attribute_prefix.ends_with(':') {
            return Err(ConfigError::Validation(
                "compiler.attribute_prefix must end with ':'".to_owned(),
            ));
        }
        require_identifier(&self.output.function_name, "output.function_name")?;
        Ok(())
    }

    /// Compiler settings for this configuration.
    #[must_use]
    pub fn compiler_config(&self) -> CompilerConfig {
        CompilerConfig::new()
            .with_runtime_path(self.compiler.runtime_path.as_str())
            .with_attribute_prefix(self.compiler.attribute_prefix.as_str())
    }
}
