//! `docsite nav` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl NavArgs {
    /// Print the resolved top navigation as JSON.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.config.load_site(output)?;
        output.data(&serde_json::to_string_pretty(site.nav())?)?;
        Ok(())
    }
}
