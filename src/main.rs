//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `article_harvester` library that
//! handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use article_harvester::initialization::init_logger_with;
use article_harvester::{
    init_db_pool_with_path, run_harvest, run_migrations, start_api_server, ApiState, Cli, Command,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = cli.log_level.clone();
    let log_format = cli.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match cli.command {
        Command::Harvest(config) => match run_harvest(config).await {
            Ok(report) => {
                println!(
                    "✅ Processed {} URL{} ({} stored, {} skipped as duplicates, {} failed) in {:.1}s",
                    report.total_urls + report.skipped_existing,
                    if report.total_urls + report.skipped_existing == 1 {
                        ""
                    } else {
                        "s"
                    },
                    report.stored,
                    report.skipped_existing,
                    report.failed,
                    report.elapsed_seconds
                );
                println!("Total articles in database: {}", report.total_in_db);
                println!("Results saved in {}", report.db_path.display());
                Ok(())
            }
            Err(e) => {
                eprintln!("article_harvester error: {:#}", e);
                process::exit(1);
            }
        },
        Command::Serve(config) => {
            let pool = init_db_pool_with_path(&config.db_path)
                .await
                .context("Failed to initialize database pool")?;
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;

            let state = ApiState { pool };
            if let Err(e) = start_api_server(config.port, state).await {
                eprintln!("article_harvester error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
    }
}
