//! Callboard CLI - outbound call analytics in the terminal
//!
//! Fetches the call-record feed, runs the aggregation pipeline and renders
//! stat cards, chart datasets and the searchable call table.

mod api;
mod config;
mod render;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use callboard::services::{analytics, view};

use api::FeedClient;
use config::Config;

#[derive(Parser)]
#[command(name = "callboard")]
#[command(about = "Callboard CLI - outbound call analytics dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Feed URL override (otherwise CALLBOARD_FEED_URL or the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary stat cards
    Stats,

    /// Show the chart datasets (outcomes, sessions, engagement, correlation)
    Charts,

    /// List call records with search and status filtering
    Calls {
        /// Free-text search over business name, phone number and call id
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact status to keep ("all" keeps everything)
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Show full detail for one call
    Show {
        /// Call ID
        call_id: String,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set the feed URL (prompts when not provided)
    SetUrl {
        /// Feed URL
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats => cmd_stats(cli.url).await,
        Commands::Charts => cmd_charts(cli.url).await,
        Commands::Calls { search, status } => cmd_calls(cli.url, search, status).await,
        Commands::Show { call_id } => cmd_show(cli.url, call_id).await,
        Commands::Config { action } => cmd_config(action),
    }
}

/// Resolve the feed URL: flag > environment > config file.
fn resolve_feed_url(flag: Option<String>) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url);
    }
    if let Ok(url) = std::env::var("CALLBOARD_FEED_URL") {
        return Ok(url);
    }
    if let Some(url) = Config::load()?.feed_url {
        return Ok(url);
    }

    bail!("No feed URL configured. Run 'callboard config set-url' or pass --url.");
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_stats(url: Option<String>) -> Result<()> {
    let client = FeedClient::new(&resolve_feed_url(url)?);
    let records = client.fetch_records().await?;

    if records.is_empty() {
        println!("{}", "No Call Data Available".bold());
        println!(
            "{}",
            "No calls found. Try refreshing or check your feed connection.".dimmed()
        );
        return Ok(());
    }

    println!("{}", "AI Call Center Dashboard".bold());
    println!(
        "{}\n",
        format!("Last updated: {}", Local::now().format("%Y-%m-%d %H:%M:%S")).dimmed()
    );

    render::stats(&view::stat_cards(&analytics::summarize(&records)));

    Ok(())
}

async fn cmd_charts(url: Option<String>) -> Result<()> {
    let client = FeedClient::new(&resolve_feed_url(url)?);
    let records = client.fetch_records().await?;

    render::charts(&view::charts(&records));

    Ok(())
}

async fn cmd_calls(url: Option<String>, search: String, status: String) -> Result<()> {
    let client = FeedClient::new(&resolve_feed_url(url)?);
    let records = client.fetch_records().await?;

    render::table(&view::call_table(&records, &search, &status));

    Ok(())
}

async fn cmd_show(url: Option<String>, call_id: String) -> Result<()> {
    let client = FeedClient::new(&resolve_feed_url(url)?);
    let records = client.fetch_records().await?;

    let record = records
        .iter()
        .find(|record| record.call_id == call_id);

    match record {
        Some(record) => {
            render::detail(&view::call_detail(record));
            Ok(())
        }
        None => bail!("No call with ID '{}'", call_id),
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{} {:?}", "Config file:".dimmed(), Config::config_path()?);
            match &config.feed_url {
                Some(url) => println!("{} {}", "Feed URL:".dimmed(), url),
                None => println!("{}", "Feed URL: (not set)".dimmed()),
            }
        }

        ConfigAction::SetUrl { url } => {
            let mut config = Config::load()?;

            let url = match url {
                Some(url) => url,
                None => Input::new()
                    .with_prompt("Feed URL")
                    .interact_text()
                    .context("Failed to read feed URL")?,
            };

            config.set_feed_url(url);
            config.save()?;

            println!(
                "{} Feed URL saved to {:?}",
                "✓".green(),
                Config::config_path()?
            );
        }
    }

    Ok(())
}
