use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use storage::Database;

mod fixture;
mod loader;

use fixture::Fixture;
use loader::FixtureLoader;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Tournament platform fixture seeder", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding *.json fixture files
    #[arg(long, default_value = "fixtures")]
    fixtures: PathBuf,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Parse and validate fixture files without touching the database
    #[arg(long)]
    validate_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!(
        "Scanning for fixture files in: {}",
        cli.fixtures.display()
    );

    let mut json_files = Vec::new();
    let mut entries = tokio::fs::read_dir(&cli.fixtures)
        .await
        .with_context(|| format!("Failed to read fixture directory {}", cli.fixtures.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            json_files.push(path);
        }
    }

    if json_files.is_empty() {
        tracing::warn!("No JSON fixture files found in {}", cli.fixtures.display());
        return Ok(());
    }

    json_files.sort();
    tracing::info!("Found {} fixture file(s)", json_files.len());

    let db = if cli.validate_only {
        None
    } else {
        tracing::info!("Connecting to database...");
        let db = Database::new(&cli.database_url)
            .await
            .context("Failed to connect to database")?;
        db.run_migrations()
            .await
            .context("Failed to run migrations")?;
        Some(db)
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for (idx, path) in json_files.iter().enumerate() {
        tracing::info!(
            "[{}/{}] Processing: {}",
            idx + 1,
            json_files.len(),
            path.display()
        );

        match process_fixture_file(path, db.as_ref()).await {
            Ok(_) => {
                success_count += 1;
                tracing::info!("  ✓ Success");
            }
            Err(e) => {
                error_count += 1;
                tracing::error!("  ✗ Error: {:#}", e);
            }
        }
    }

    tracing::info!("Summary: {} succeeded, {} failed", success_count, error_count);

    if error_count > 0 {
        anyhow::bail!("{} fixture file(s) failed", error_count);
    }

    Ok(())
}

async fn process_fixture_file(path: &PathBuf, db: Option<&Database>) -> anyhow::Result<()> {
    let json_content = tokio::fs::read_to_string(path).await?;
    let fixture: Fixture = serde_json::from_str(&json_content)
        .with_context(|| format!("Invalid fixture file {}", path.display()))?;

    tracing::info!(
        "Loaded competition: {} ({} edition(s))",
        fixture.competition.name,
        fixture.editions.len()
    );

    if let Some(db) = db {
        FixtureLoader::new(db.pool()).load(&fixture).await?;
    }

    Ok(())
}
