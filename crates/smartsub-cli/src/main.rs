//! SmartSub CLI - Subscription tracker with budget insights
//!
//! Usage:
//!   smartsub add --name Netflix --cost 649 --renewal 2024-01-12
//!   smartsub list                 List tracked subscriptions
//!   smartsub insights             Renewal alerts, suggestions, duplicates
//!   smartsub summary              Monthly cost and spend distribution

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let mut tracker = commands::open_tracker(cli.data.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Add {
            name,
            cost,
            cycle,
            category,
            renewal,
        } => commands::cmd_add(
            &mut tracker,
            &name,
            cost,
            &cycle,
            category.as_deref(),
            &renewal,
        ),
        Commands::List => commands::cmd_list(&tracker),
        Commands::Remove { number } => commands::cmd_remove(&mut tracker, number),
        Commands::Insights { as_of, json } => {
            commands::cmd_insights(&tracker, as_of.as_deref(), json)
        }
        Commands::Summary { json } => commands::cmd_summary(&tracker, json),
        Commands::Categorize { name } => commands::cmd_categorize(&tracker, &name),
    }
}
