//! crumbtrail CLI - BreadcrumbList JSON-LD renderer.
//!
//! Provides commands for:
//! - `render`: Print the BreadcrumbList JSON-LD for a page
//! - `paths`: Print the distinct ancestry paths of a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PathsArgs, RenderArgs};
use output::Output;

/// crumbtrail - BreadcrumbList JSON-LD for multi-parent content trees.
#[derive(Parser)]
#[command(name = "crumbtrail", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the BreadcrumbList JSON-LD for a page.
    Render(RenderArgs),
    /// Print each distinct ancestry path of a page, root first.
    Paths(PathsArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.site.verbose,
            Self::Paths(args) => args.site.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Paths(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
