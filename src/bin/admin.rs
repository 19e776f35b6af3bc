//! CLI administration tool for the redirector.
//!
//! Lets operators and external schedulers work on the mapping table without
//! going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Purge expired mappings now (suitable for cron)
//! cargo run --bin admin -- sweep --yes
//!
//! # Inspect a mapping without deleting it
//! cargo run --bin admin -- get aZ3kQ9x
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Row counts
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` (required)

use redirector::application::services::MappingService;
use redirector::config::Config;
use redirector::domain::entities::MappingStatus;
use redirector::domain::repositories::MappingRepository;
use redirector::infrastructure::persistence::PgMappingRepository;
use redirector::utils::http_date::format_iso_millis;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the redirector.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Delete every expired mapping
    Sweep {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a mapping and its status
    Get {
        /// Mapping id
        id: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show row counts
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
    let service = MappingService::new(repo.clone());

    match cli.command {
        Commands::Sweep { yes } => sweep(&service, yes).await?,
        Commands::Get { id } => show_mapping(repo, &id).await?,
        Commands::Db { action } => handle_db_action(action, &service, &pool).await?,
    }

    Ok(())
}

/// Purges expired mappings, asking first unless `skip_confirm` is set.
async fn sweep(service: &MappingService, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Sweep expired mappings".bright_blue().bold());
    println!();

    let expired = service
        .count_expired()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {:?}", e))?;
    if expired == 0 {
        println!("{}", "  Nothing to purge".green());
        return Ok(());
    }

    println!(
        "  Expired mappings: {}",
        expired.to_string().bright_yellow().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete them?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let purged = service
        .sweep()
        .await
        .map_err(|e| anyhow::anyhow!("Sweep failed: {:?}", e))?;

    println!(
        "{}",
        format!("✅ Purged {} mappings", purged).green().bold()
    );
    Ok(())
}

/// Prints a mapping without the lazy deletion a `/get` request would trigger.
async fn show_mapping(repo: Arc<PgMappingRepository>, id: &str) -> Result<()> {
    let mapping = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {:?}", e))?
        .context("Mapping not found")?;

    let status = match mapping.status_at(Utc::now().timestamp_millis()) {
        MappingStatus::Active => "ACTIVE".green(),
        MappingStatus::Expired => "EXPIRED".red(),
    };

    let created_at = chrono::DateTime::from_timestamp_millis(mapping.created_at)
        .map(format_iso_millis)
        .unwrap_or_else(|| mapping.created_at.to_string());

    println!("{}", "🔗 Mapping".bright_blue().bold());
    println!();
    println!("  ID:      {}", mapping.id.cyan());
    println!("  URL:     {}", mapping.target_url.bright_white());
    println!("  Created: {}", created_at.bright_black());
    println!("  TTL:     {}s", mapping.ttl_seconds);
    println!("  Expires: {}", format_iso_millis(mapping.expires_at()));
    println!("  Status:  {}", status);
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, service: &MappingService, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => check_database(pool).await?,
        DbAction::Info => show_database_info(service, pool).await?,
    }

    Ok(())
}

/// Checks database connection.
async fn check_database(pool: &PgPool) -> Result<()> {
    print!("Checking database connection... ");

    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => println!("{}", "✅ OK".green().bold()),
        Err(e) => {
            println!("{}", "❌ FAILED".red().bold());
            return Err(e.into());
        }
    }

    Ok(())
}

/// Shows row counts for the mapping table.
async fn show_database_info(service: &MappingService, pool: &PgPool) -> Result<()> {
    println!("{}", "💾 Database Info".bright_blue().bold());
    println!();

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;
    let (total, expired) = tokio::try_join!(service.count(), service.count_expired())
        .map_err(|e| anyhow::anyhow!("Database error: {:?}", e))?;

    println!("  PostgreSQL: {}", version.bright_black());
    println!("  Mappings:   {}", total.to_string().bright_white().bold());
    println!(
        "  Expired:    {} {}",
        expired.to_string().bright_yellow(),
        "(awaiting sweep)".bright_black()
    );
    println!();

    Ok(())
}
