//! Dirscribe CLI - render a directory tree as an indented text file.
//!
//! Run `ds` to scan the current directory and write `project-structure.txt`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Dirscribe: render a directory tree as indented text.
///
/// Walks the given directory depth-first, skips common dependency and
/// build-artifact folders, writes the rendering to a file and echoes it
/// to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "ds",
    author,
    version,
    about = "Dirscribe: render a directory tree as indented text",
    long_about = None
)]
struct Cli {
    /// Directory to scan (defaults to current directory).
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file path.
    #[arg(short, long, default_value = "project-structure.txt")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .init();

    let text = dirscribe_core::generate(&cli.path, &cli.output)?;

    // Every rendered line already ends with '\n'; println adds the one
    // extra trailing newline the stdout echo carries.
    println!("{}", text);

    Ok(())
}
