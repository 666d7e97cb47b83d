//! `fw compile` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use fw_config::CliSettings;

use super::TemplateArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the compile command.
#[derive(Args)]
pub(crate) struct CompileArgs {
    #[command(flatten)]
    pub(crate) template: TemplateArgs,

    /// Runtime crate path in generated code (overrides config).
    #[arg(long, env = "FW_RUNTIME_PATH")]
    runtime_path: Option<String>,

    /// Name of the generated function (overrides config).
    #[arg(short, long)]
    function: Option<String>,

    /// Write the generated code to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CompileArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            runtime_path: self.runtime_path.clone(),
            function_name: self.function.clone(),
        };
        let config = self.template.load_config(&cli_settings)?;
        let compiled = self.template.compile(&config)?;
        let source = compiled.to_rust_source(
            &config.output.function_name,
            &config.compiler.runtime_path,
        );

        if let Some(path) = &self.output {
            std::fs::write(path, &source)?;
            Output::new().success(&format!("Wrote {}", path.display()));
        } else {
            Term::stdout().write_str(&source)?;
        }
        Ok(())
    }
}
