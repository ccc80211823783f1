//! CLI administration tool for tinyurl.
//!
//! Converts between ids and short codes, looks up stored mappings, and
//! performs database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Encode an id into its short code
//! cargo run --bin admin -- encode 1000000
//!
//! # Decode a short code into its id
//! cargo run --bin admin -- decode CBx5v
//!
//! # Look up the long URL behind a short code
//! cargo run --bin admin -- lookup CBx5v
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `lookup` and `db`): PostgreSQL connection string

use tinyurl::application::services::UrlMappingService;
use tinyurl::config::DEFAULT_HOST;
use tinyurl::infrastructure::persistence::PgUrlMappingRepository;
use tinyurl::utils::codec;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinyurl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Encode a numeric id into its short code
    Encode {
        /// Mapping id (positive integer)
        id: u64,
    },

    /// Decode a short code into its numeric id
    Decode {
        /// Short code, e.g. "CBx5v"
        code: String,
    },

    /// Look up the long URL behind a short code
    Lookup {
        /// Short code, e.g. "CBx5v"
        code: String,
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

    /// Show database info and mapping counts
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { id } => handle_encode(id),
        Commands::Decode { code } => handle_decode(&code)?,
        Commands::Lookup { code } => handle_lookup(&connect().await?, &code).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn handle_encode(id: u64) {
    let code = codec::num_to_str(id);

    println!("  Id:   {}", id.to_string().bright_black());
    println!("  Code: {}", code.bright_yellow().bold());
}

fn handle_decode(code: &str) -> Result<()> {
    let id = codec::str_to_num(code).with_context(|| format!("Cannot decode '{code}'"))?;

    println!("  Code: {}", code.cyan());
    println!("  Id:   {}", id.to_string().bright_yellow().bold());

    Ok(())
}

/// Resolves a short code against the database, the same way the HTTP API does.
async fn handle_lookup(pool: &PgPool, code: &str) -> Result<()> {
    println!("{}", "🔎 Lookup".bright_blue().bold());
    println!();

    let host = std::env::var("TINYURL_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let repo = Arc::new(PgUrlMappingRepository::new(Arc::new(pool.clone())));
    let service = UrlMappingService::new(repo, host);

    match service.resolve(code).await {
        Ok(mapping) => {
            println!("  Short URL: {}", service.qualified_short_url(code).cyan());
            println!("  Id:        {}", mapping.id.to_string().bright_black());
            println!("  Long URL:  {}", mapping.long_url.bright_green().bold());
        }
        Err(e) if e.status_code().is_client_error() => {
            println!("{} {}", "❌ Not found:".red(), e);
        }
        Err(e) => return Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let repo = PgUrlMappingRepository::new(Arc::new(pool.clone()));
            let (count, max_id) = repo
                .summary()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read mappings: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Mappings:   {}",
                count.to_string().bright_green().bold()
            );
            if let Some(max_id) = max_id {
                println!(
                    "  Latest:     {} ({})",
                    max_id.to_string().bright_black(),
                    codec::num_to_str(max_id).bright_yellow()
                );
            }
            println!();
        }
    }

    Ok(())
}
