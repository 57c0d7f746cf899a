use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use ledger_cli::data::load_datasets;
use ledger_cli::seeder::{self, SeedSummary};
use ledger_config::DatabaseConfig;
use ledger_core::SeedError;
use ledger_observability::init_console_logging;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ledger-seed")]
#[command(
    about = "Ledger seeder - creates the dashboard tables and fills them with placeholder data",
    long_about = None
)]
struct Cli {
    /// JSON file with users, customers, invoices and revenue to seed instead
    /// of the built-in placeholder data
    #[arg(short = 'd', long, value_name = "FILE")]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_console_logging();

    match run(cli).await {
        Ok(summary) => {
            info!(
                %summary,
                inserted = summary.total_inserted(),
                skipped = summary.total_skipped(),
                "Seed complete"
            );
            println!("✅ Database seeded successfully");
        }
        Err(e) => {
            error!(error = %e, "Seed failed");
            eprintln!("\n❌ Seed failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Loads data and config, then seeds on a single connection that is closed
/// whether or not seeding succeeded.
async fn run(cli: Cli) -> Result<SeedSummary, SeedError> {
    let datasets = load_datasets(cli.data.as_deref())?;
    let config = DatabaseConfig::from_env()?;

    let mut conn = ledger_db::connect(&config).await?;

    println!("🌱 Seeding database...");
    let result = seeder::seed(&mut conn, &datasets).await;

    ledger_db::close(conn).await;
    result
}
