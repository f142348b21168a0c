//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SmartSub - Track recurring subscriptions and get budget alerts
#[derive(Parser)]
#[command(name = "smartsub")]
#[command(about = "Subscription tracker with renewal, duplicate and spending alerts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subscription data file (CSV)
    ///
    /// Defaults to `data_file` from the config, else subscriptions_data.csv.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Config file (TOML)
    ///
    /// Defaults to ~/.local/share/smartsub/config.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Track a new subscription
    Add {
        /// Service name (e.g. Netflix)
        #[arg(short, long)]
        name: String,

        /// Cost per billing cycle
        #[arg(short, long)]
        cost: f64,

        /// Billing cycle: monthly, quarterly, yearly
        #[arg(long, default_value = "monthly")]
        cycle: String,

        /// Category (suggested from the name if not specified)
        #[arg(long)]
        category: Option<String>,

        /// Next renewal date (YYYY-MM-DD)
        #[arg(short, long)]
        renewal: String,
    },

    /// List tracked subscriptions
    List,

    /// Delete a subscription by its number in `list`
    Remove {
        /// Subscription number as shown by `list` (starting at 1)
        number: usize,
    },

    /// Show renewal alerts, spending suggestions and duplicates
    Insights {
        /// Date to evaluate renewals against (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show monthly cost, yearly projection and spend distribution
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest a category for a service name
    Categorize {
        /// Service name
        name: String,
    },
}
