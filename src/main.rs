//! Zama-KB main entry point
//!
//! Runs the full sync sequence: ignore-list maintenance, repository
//! clone/pull, the breadth-first docs crawl, and the metadata record.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use zama_kb::config::{load_config, Config};
use zama_kb::{crawl, output, repo};

/// Zama-KB: mirror the Zama docs into a local Markdown knowledge base
#[derive(Parser, Debug)]
#[command(name = "zama-kb")]
#[command(version)]
#[command(about = "Mirror the Zama docs site into local Markdown", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file; built-in defaults are used when
    /// omitted
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    // Keep the mirror and the tool itself out of version control
    repo::ensure_gitignore(Path::new(".gitignore"), &config.repo.gitignore)?;

    std::fs::create_dir_all(&config.output.base_dir)?;

    // The crawl proceeds even when the repository step fails
    if let Err(e) = repo::sync_repo(&config.repo.url, Path::new(&config.repo.dir)) {
        tracing::warn!("repository sync failed: {e}");
    }

    let report = crawl(config.clone()).await?;

    let metadata_path = output::write_sync_metadata(
        Path::new(&config.output.base_dir),
        &config.repo.url,
        &report.crawled,
    )?;
    tracing::info!(
        pages = report.crawled.len(),
        failed = report.failed,
        metadata = %metadata_path.display(),
        "sync complete"
    );

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("zama_kb=info,warn"),
            1 => EnvFilter::new("zama_kb=debug,info"),
            2 => EnvFilter::new("zama_kb=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
