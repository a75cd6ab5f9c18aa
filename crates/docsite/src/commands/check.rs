//! `docsite check` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Treat warnings as errors.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.config.load_site(output)?;

        output.info(&format!(
            "{} nav items, {} sidebar prefixes, version {}",
            site.nav().len(),
            site.sidebar().len(),
            site.version()
        ));

        if self.strict && !site.warnings().is_empty() {
            return Err(CliError::Warnings(site.warnings().len()));
        }

        output.success("Configuration OK");
        Ok(())
    }
}
