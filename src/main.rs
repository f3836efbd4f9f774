//! fixture-format - converts test fixtures through archive, compression and
//! disk-image formats using the host's tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fixture_format::ToolConfig;

#[derive(Parser)]
#[command(name = "fixture-format")]
#[command(about = "Convert test fixtures through tar/gzip/xz/qcow2 chains")]
#[command(
    after_help = "EXAMPLES:\n  fixture-format convert cirros.img /tmp/t gz tar   -> /tmp/t/cirros.img.gz.tar\n  fixture-format convert tinyCore.iso /tmp/t qcow2  -> /tmp/t/tinyCore.qcow2\n  fixture-format preflight --strict"
)]
struct Cli {
    /// Log every command that runs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a fixture and print the path of the result
    Convert {
        /// Source fixture
        src: PathBuf,
        /// Directory receiving staged copies and outputs (created if missing)
        target_dir: PathBuf,
        /// Formats to apply in order: tar, gz, xz, qcow2, raw (leading dot optional)
        formats: Vec<String>,
        /// Print the resulting path without running anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List supported formats and the tool configuration
    Formats {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check that the host tools for the given formats are installed
    Preflight {
        /// Formats to check tools for (default: all)
        formats: Vec<String>,
        /// Exit with an error if any tool is missing
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present; variables already set in the environment win
    dotenvy::dotenv().ok();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ToolConfig::load();

    match cli.command {
        Commands::Convert {
            src,
            target_dir,
            formats,
            dry_run,
        } => {
            commands::cmd_convert(&src, &target_dir, &formats, dry_run, config)?;
        }

        Commands::Formats { json } => {
            commands::cmd_formats(json, &config)?;
        }

        Commands::Preflight { formats, strict } => {
            commands::cmd_preflight(&formats, strict, &config)?;
        }
    }

    Ok(())
}
