//! CLI administration tool for url-alias.
//!
//! Looks up captured failures by the correlation id users see on the error
//! page, and reports basic counts, without going through the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Show the diagnostic detail behind an error code
//! cargo run --bin admin -- errors show 3f1c2b9e-...
//!
//! # List the most recent failures
//! cargo run --bin admin -- errors list --limit 20
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use url_alias::application::services::ErrorSink;
use url_alias::domain::entities::ErrorRecord;
use url_alias::infrastructure::persistence::PgErrorRepository;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-alias.
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
    /// Inspect captured failures
    Errors {
        #[command(subcommand)]
        action: ErrorsAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Error record subcommands.
#[derive(Subcommand)]
enum ErrorsAction {
    /// Show the full detail of one failure
    Show {
        /// Correlation id shown to the user (prompted for if omitted)
        id: Option<String>,
    },

    /// List the most recent failures
    List {
        /// Maximum number of records to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Errors { action } => handle_errors_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches error record commands.
async fn handle_errors_action(action: ErrorsAction, pool: &PgPool) -> Result<()> {
    let sink = ErrorSink::new(Arc::new(PgErrorRepository::new(Arc::new(pool.clone()))));

    match action {
        ErrorsAction::Show { id } => show_error(&sink, id).await,
        ErrorsAction::List { limit } => list_errors(&sink, limit).await,
    }
}

fn format_time(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Prints the diagnostic detail recorded under a correlation id.
async fn show_error(sink: &ErrorSink, id: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => Input::new()
            .with_prompt("Error code")
            .interact_text()?,
    };

    let record = sink
        .find(id.trim())
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, id.trim()))?;

    println!("{}", "🔎 Error Record".bright_blue().bold());
    println!();
    println!("  ID:    {}", record.id.bright_yellow());
    println!("  Time:  {}", format_time(record.timestamp).cyan());
    println!();
    println!("{}", record.detail);
    println!();

    Ok(())
}

/// Lists recent failures, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Recent Errors
///
///   Time                 ID                                    Detail
///   ──────────────────────────────────────────────────────────────────────────
///   2024-01-15 10:30:00  3f1c2b9e-7a4d-4c1e-9b2f-0d8e6a5c4b3a  GET /abc: Database error: ...
/// ```
async fn list_errors(sink: &ErrorSink, limit: i64) -> Result<()> {
    println!("{}", "📋 Recent Errors".bright_blue().bold());
    println!();

    let records: Vec<ErrorRecord> = sink
        .recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list errors: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No errors recorded".green());
        return Ok(());
    }

    println!(
        "  {:<20} {:<37} {}",
        "Time".bright_white().bold(),
        "ID".bright_white().bold(),
        "Detail".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        let summary: String = record
            .detail
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(60)
            .collect();

        println!(
            "  {:<20} {:<37} {}",
            format_time(record.timestamp).bright_black(),
            record.id.cyan(),
            summary
        );
    }

    println!();
    println!(
        "  Shown: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows the number of aliases, recorded visits and captured errors.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let views_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM views")
        .fetch_one(pool)
        .await?;

    let errors_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM errors")
        .fetch_one(pool)
        .await?;

    println!(
        "  Aliases: {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Visits:  {}",
        views_count.to_string().bright_green().bold()
    );
    println!(
        "  Errors:  {}",
        errors_count.to_string().bright_yellow().bold()
    );
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
