//! CLI command implementations.

mod check;
mod nav;
mod render;
mod sidebar;

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, Config};
use docsite_site::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use render::RenderArgs;
pub(crate) use sidebar::SidebarArgs;

/// Configuration options shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long, env = "DOCSITE_CONFIG")]
    config: Option<PathBuf>,

    /// Site version shown in computed labels (overrides config and DOCSITE_VERSION).
    #[arg(long = "site-version")]
    site_version: Option<String>,

    /// Base path the site is deployed under (overrides config).
    #[arg(long)]
    base: Option<String>,
}

impl ConfigArgs {
    /// Load, validate and build the site, printing warnings.
    pub(crate) fn load_site(&self, output: &Output) -> Result<SiteConfig, CliError> {
        let cli_settings = CliSettings {
            version: self.site_version.clone(),
            base: self.base.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let site = config.into_site()?;
        for warning in site.warnings() {
            output.warning(&warning.to_string());
        }
        Ok(site)
    }
}
