//! `docsite sidebar` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path to resolve (e.g. /guide/installation).
    path: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl SidebarArgs {
    /// Print the navigation chrome for a page as JSON.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.config.load_site(output)?;
        let chrome = site.chrome(&self.path);

        match chrome.sidebar_prefix {
            Some(prefix) => output.info(&format!("Matched prefix: {prefix}")),
            None => output.info("No sidebar for this path"),
        }
        output.data(&serde_json::to_string_pretty(&chrome)?)?;
        Ok(())
    }
}
