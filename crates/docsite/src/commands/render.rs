//! `docsite render` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_site::PageRequest;
use docsite_theme::PageLayout;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page path to render (e.g. /guide/installation).
    path: String,

    #[command(flatten)]
    config: ConfigArgs,

    /// Page title (default: site title).
    #[arg(long)]
    title: Option<String>,

    /// File with the page body HTML.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Source file relative to the docs root, for the edit link.
    #[arg(long)]
    source: Option<String>,

    /// Last-updated text shown on doc pages.
    #[arg(long)]
    last_updated: Option<String>,

    /// Render with the home layout.
    #[arg(long)]
    home: bool,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Render one page through the composed theme.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.config.load_site(output)?;

        let content = match &self.content {
            Some(path) => std::fs::read_to_string(path)?,
            None => String::new(),
        };
        let request = PageRequest {
            path: self.path,
            title: self.title.unwrap_or_default(),
            content,
            layout: if self.home {
                PageLayout::Home
            } else {
                PageLayout::Doc
            },
            source_path: self.source,
            last_updated: self.last_updated,
        };
        let html = site.render(&request);

        match &self.output {
            Some(path) => {
                std::fs::write(path, html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.data(&html)?,
        }
        Ok(())
    }
}
