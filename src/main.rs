use std::path::PathBuf;
use std::process::ExitCode;

use block_schema_sync::config::SyncConfig;
use block_schema_sync::schema::check_fixtures;
use block_schema_sync::sync::sync;
use block_schema_sync::version::discover_versions;
use clap::{Parser, Subcommand};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "block-schema-sync")]
#[command(
    version,
    about = "Keep README.md and package.json pointing at the newest schema version"
)]
struct Cli {
    /// Package root containing the schema directory (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// JSON file overriding the package layout
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Point README.md and package.json at the newest schema version (default)
    Sync,
    /// Print the newest schema version directory
    Latest {
        /// Print every version directory, newest first
        #[arg(long)]
        all: bool,
    },
    /// Check schema metadata and validate every example against its schema
    Check,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    block_schema_sync::logging::init(cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = match &cli.config {
        Some(path) => SyncConfig::from_file(path)?,
        None => SyncConfig::default(),
    };

    match cli.command.unwrap_or(Command::Sync) {
        Command::Sync => {
            let Some(report) = sync(&root, &config)? else {
                error!("No schema versions found");
                return Ok(ExitCode::FAILURE);
            };
            if report.changed() {
                info!("All files updated successfully");
            } else {
                info!("All files already reference {}", report.latest.dir_name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Latest { all } => {
            let versions = discover_versions(&config.schema_root(&root))?;
            if versions.is_empty() {
                error!("No schema versions found");
                return Ok(ExitCode::FAILURE);
            }
            let shown = if all { versions.len() } else { 1 };
            for version in versions.iter().take(shown) {
                println!("{}", version.dir_name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let report = check_fixtures(&root, &config)?;
            for failure in &report.failures {
                error!("{}: {}", failure.path.display(), failure.reason);
            }
            info!(
                "Checked {} schemas and {} examples, {} failures",
                report.schemas_checked,
                report.examples_checked,
                report.failures.len()
            );
            Ok(if report.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
