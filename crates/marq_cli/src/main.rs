//! marq CLI
//!
//! Renders markdown documents as laid-out draw operations and tree dumps.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod io;

/// marq - markdown layout renderer
#[derive(Parser)]
#[command(name = "marq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the document tree of a markdown file
    Tree {
        /// Markdown file to parse
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the draw operations laying out a markdown file
    Layout {
        /// Markdown file to lay out
        file: PathBuf,

        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280.0)]
        width: f32,

        /// Theme configuration file (JSON)
        #[arg(long)]
        theme: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Tree { file, format } => commands::tree::run(&file, &format),
        Commands::Layout { file, width, theme } => {
            commands::layout::run(&file, width, theme.as_deref())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
