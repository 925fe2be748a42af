//! Brickset CLI - Queries over a LEGO set dataset
//!
//! Usage:
//!   brickset                         - Run every query and print a report
//!   brickset --json                  - Same report as JSON
//!   brickset contains <PACKAGING>    - Check for a packaging type
//!   brickset tags                    - List distinct tags
//!   brickset pieces                  - Total pieces
//!   brickset packaging               - Sets grouped by packaging type
//!   brickset themes                  - Pieces per theme

use std::path::PathBuf;

use anyhow::Context;
use brickset::{LegoSetRepository, PackagingType};
use clap::Parser;
use cli::commands::write_json;
use cli::{QueryCommand, Report};
use shared::BricksetConfig;
use tracing::debug;

#[derive(Parser)]
#[command(name = "brickset")]
#[command(about = "Brickset - Queries over a LEGO set dataset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<QueryCommand>,

    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dataset file, overrides the configured one
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Packaging type checked by the full report
    #[arg(short, long, default_value = "BLISTER_PACK")]
    packaging: PackagingType,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BricksetConfig::from_file(path)?,
        None => BricksetConfig::default(),
    };
    if let Some(data) = &cli.data {
        config = config.with_dataset_path(data);
    }
    debug!(dataset = %config.dataset_path().display(), "resolved dataset");

    let repo = LegoSetRepository::open(&config).with_context(|| {
        format!(
            "failed to load dataset '{}'",
            config.dataset_path().display()
        )
    })?;

    let mut out = std::io::stdout().lock();

    match &cli.command {
        Some(command) => command.run(&repo, cli.json, &mut out)?,
        None => {
            let report = Report::build(&repo, repo.source(), cli.packaging);
            if cli.json {
                write_json(&mut out, &report)?;
            } else {
                report.write_text(&mut out)?;
            }
        }
    }

    Ok(())
}
