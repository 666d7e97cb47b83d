//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod compile;

use std::path::{Path, PathBuf};

use clap::Args;
use fw_compiler::{CompiledTemplate, Compiler};
use fw_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use compile::CompileArgs;

/// Arguments shared by commands that read a template.
#[derive(Args)]
pub(crate) struct TemplateArgs {
    /// Template file.
    pub(crate) template: PathBuf,

    /// Path to configuration file (default: auto-discover formwire.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl TemplateArgs {
    /// Load configuration with CLI overrides.
    pub(crate) fn load_config(&self, settings: &CliSettings) -> Result<Config, CliError> {
        Ok(Config::load(self.config.as_deref(), Some(settings))?)
    }

    /// Read and compile the template.
    pub(crate) fn compile(&self, config: &Config) -> Result<CompiledTemplate, CliError> {
        compile_file(&self.template, config)
    }
}

/// Read and compile a template file.
pub(crate) fn compile_file(path: &Path, config: &Config) -> Result<CompiledTemplate, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Template {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(template = %path.display(), "Compiling template");
    Compiler::new(config.compiler_config())
        .compile(&source)
        .map_err(|source| CliError::Compile {
            path: path.to_path_buf(),
            source,
        })
}
