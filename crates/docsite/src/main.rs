//! docsite CLI - documentation site configuration.
//!
//! Provides commands for:
//! - `check`: Validate `docsite.toml` and report every problem
//! - `nav`: Print the resolved top navigation as JSON
//! - `sidebar`: Print the sidebar selected for a page path as JSON
//! - `render`: Render one page through the composed theme

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, RenderArgs, SidebarArgs};
use output::Output;

/// docsite - documentation site configuration.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (configuration discovery and build summary).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration.
    Check(CheckArgs),
    /// Print the resolved top navigation.
    Nav(NavArgs),
    /// Print the sidebar for a page path.
    Sidebar(SidebarArgs),
    /// Render a page.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Nav(args) => args.execute(&output),
        Commands::Sidebar(args) => args.execute(&output),
        Commands::Render(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&err.to_string());
        std::process::exit(1);
    }
}
