//! CLI administration tool for deep-link-router.
//!
//! Manages deep links and short links directly in PostgreSQL, through the
//! same services the HTTP API uses.
//!
//! # Usage
//!
//! ```bash
//! # Create a deep link (prompts for missing fields)
//! cargo run --bin admin -- link add --code summer --ios myapp://summer --fallback https://example.com
//!
//! # List deep links
//! cargo run --bin admin -- link list
//!
//! # Remove a deep link
//! cargo run --bin admin -- link rm summer
//!
//! # Shorten a URL
//! cargo run --bin admin -- short add https://example.com/a/long/path
//!
//! # Show recent clicks
//! cargo run --bin admin -- clicks summer --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; `DATABASE_URL` (or the `DB_*` components) is required.

use deep_link_router::config::{self, Config};
use deep_link_router::api::dto::links::CreateLinkRequest;
use deep_link_router::infrastructure::persistence::postgres_store;
use deep_link_router::server::connect_pool;
use deep_link_router::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing deep-link-router.
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
    /// Manage deep links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Manage short links
    Short {
        #[command(subcommand)]
        action: ShortAction,
    },

    /// Show recent click events for a deep link
    Clicks {
        /// Deep-link code
        code: String,

        /// Number of events to show (1-500)
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Deep-link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a deep link
    Add {
        /// Link code (first path segment of the public URL)
        #[arg(short, long)]
        code: Option<String>,

        /// Destination for iOS clients
        #[arg(long)]
        ios: Option<String>,

        /// Destination for Android clients
        #[arg(long)]
        android: Option<String>,

        /// Destination for every other client
        #[arg(long)]
        fallback: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all deep links
    List,

    /// Show one deep link
    Show { code: String },

    /// Delete a deep link
    Rm {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Short-link subcommands.
#[derive(Subcommand)]
enum ShortAction {
    /// Shorten a URL
    Add { url: String },

    /// List all short links
    List,

    /// Delete a short link
    Rm {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, &pool).await?,
        Commands::Short { action } => handle_short_action(action, &config, &pool).await?,
        Commands::Clicks { code, limit } => show_clicks(&code, limit, &config, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn build_state(config: &Config, pool: &PgPool) -> Result<AppState> {
    AppState::from_config(postgres_store(Arc::new(pool.clone())), config)
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn display_or_dash(value: Option<&str>) -> ColoredString {
    match value {
        Some(v) if !v.is_empty() => v.normal(),
        _ => "-".bright_black(),
    }
}

/// Dispatches deep-link commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let state = build_state(config, pool)?;
    let service = &state.deep_link_service;

    match action {
        LinkAction::Add {
            code,
            ios,
            android,
            fallback,
            yes,
        } => {
            println!("{}", "🔗 Create Deep Link".bright_blue().bold());
            println!();

            let code = match code {
                Some(c) => c,
                None => Input::new().with_prompt("Code").interact_text()?,
            };
            let fallback = match fallback {
                Some(f) => Some(f),
                None => {
                    let value: String = Input::new()
                        .with_prompt("Fallback URL (empty for none)")
                        .allow_empty(true)
                        .interact_text()?;
                    Some(value).filter(|v| !v.is_empty())
                }
            };

            println!("  Code:     {}", code.cyan());
            println!("  iOS:      {}", display_or_dash(ios.as_deref()));
            println!("  Android:  {}", display_or_dash(android.as_deref()));
            println!("  Fallback: {}", display_or_dash(fallback.as_deref()));
            println!();

            if !yes && !confirm("Create this link?", true)? {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            let request = CreateLinkRequest {
                code,
                ios_url: ios,
                android_url: android,
                fallback_url: fallback,
            };
            request
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid link: {}", e))?;

            let link = service
                .create_link(request.into())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

            println!();
            println!("{}", "✅ Link created successfully!".green().bold());
            println!(
                "  {}",
                format!("{}/{}", config.base_url.trim_end_matches('/'), link.code)
                    .bright_yellow()
            );
            println!();
        }
        LinkAction::List => {
            println!("{}", "📋 Deep Links".bright_blue().bold());
            println!();

            let links = service
                .list_links()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

            if links.is_empty() {
                println!("{}", "  No links found".yellow());
                return Ok(());
            }

            println!(
                "  {:<24} {:<20} {}",
                "Code".bright_white().bold(),
                "Created".bright_white().bold(),
                "Fallback".bright_white().bold()
            );
            println!("  {}", "─".repeat(75).bright_black());

            for link in &links {
                println!(
                    "  {:<24} {:<20} {}",
                    link.code.cyan(),
                    link.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    display_or_dash(link.fallback_url.as_deref())
                );
            }

            println!();
            println!("  Total: {}", links.len().to_string().bright_white().bold());
            println!();
        }
        LinkAction::Show { code } => {
            let link = service
                .get_link(&code)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("{}", "🔗 Deep Link".bright_blue().bold());
            println!();
            println!("  Code:     {}", link.code.cyan());
            println!("  iOS:      {}", display_or_dash(link.ios_url.as_deref()));
            println!("  Android:  {}", display_or_dash(link.android_url.as_deref()));
            println!("  Fallback: {}", display_or_dash(link.fallback_url.as_deref()));
            println!(
                "  Created:  {}",
                link.created_at.format("%Y-%m-%d %H:%M:%S").to_string().bright_black()
            );
            println!();
        }
        LinkAction::Rm { code, yes } => {
            println!("  Link: {}", code.cyan());
            println!();

            if !yes && !confirm("Delete this link?", false)? {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            service
                .delete_link(&code)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

            println!("{}", "✅ Link deleted".green().bold());
        }
    }

    Ok(())
}

/// Dispatches short-link commands.
async fn handle_short_action(action: ShortAction, config: &Config, pool: &PgPool) -> Result<()> {
    let state = build_state(config, pool)?;
    let service = &state.short_link_service;

    match action {
        ShortAction::Add { url } => {
            let link = service
                .create_short_link(url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create short link: {}", e))?;

            println!("{}", "✅ Short link created!".green().bold());
            println!("  {}", state.settings.short_url(&link.id).bright_yellow());
            println!();
        }
        ShortAction::List => {
            println!("{}", "📋 Short Links".bright_blue().bold());
            println!();

            let links = service
                .list_short_links()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list short links: {}", e))?;

            if links.is_empty() {
                println!("{}", "  No short links found".yellow());
                return Ok(());
            }

            for link in &links {
                println!(
                    "  {:<12} {:<20} {}",
                    link.id.cyan(),
                    link.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    link.original_url
                );
            }

            println!();
            println!("  Total: {}", links.len().to_string().bright_white().bold());
            println!();
        }
        ShortAction::Rm { id, yes } => {
            if !yes && !confirm(&format!("Delete short link {id}?"), false)? {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            service
                .delete_short_link(&id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete short link: {}", e))?;

            println!("{}", "✅ Short link deleted".green().bold());
        }
    }

    Ok(())
}

/// Prints the most recent click events for a code.
async fn show_clicks(code: &str, limit: i64, config: &Config, pool: &PgPool) -> Result<()> {
    let state = build_state(config, pool)?;

    let events = state
        .click_logger
        .recent(code, limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load clicks: {}", e))?;

    println!("{} {}", "📊 Clicks for".bright_blue().bold(), code.cyan());
    println!();

    if events.is_empty() {
        println!("{}", "  No clicks recorded".yellow());
        return Ok(());
    }

    for event in &events {
        println!(
            "  {:<20} {:<40} {}",
            event
                .created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            display_or_dash(Some(event.ip.as_str())),
            event.user_agent
        );
    }

    println!();
    println!("  Shown: {}", events.len().to_string().bright_white().bold());
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

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;
            let short_links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shortened_links")
                .fetch_one(pool)
                .await?;
            let clicks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM click_logs")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL:  {}", version.bright_white());
            println!("  Links:       {}", links.to_string().bright_green().bold());
            println!(
                "  Short links: {}",
                short_links.to_string().bright_green().bold()
            );
            println!("  Clicks:      {}", clicks.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
