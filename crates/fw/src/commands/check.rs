//! `fw check` command implementation.

use clap::Args;
use fw_config::CliSettings;

use super::TemplateArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) template: TemplateArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.template.load_config(&CliSettings::default())?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let compiled = self.template.compile(&config)?;
        let directives = compiled.code().count();

        output.success(&format!(
            "{}: OK ({directives} code segments)",
            self.template.template.display()
        ));
        Ok(())
    }
}
