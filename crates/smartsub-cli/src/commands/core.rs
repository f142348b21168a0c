//! Shared command utilities
//!
//! This module contains:
//! - `open_tracker` - Resolve config and data file, open the store
//! - `load_records` - Load for a read-only pass, reporting store errors

use std::path::Path;

use anyhow::{Context, Result};
use smartsub_core::{Config, CsvStore, Subscription, SubscriptionStore, Tracker};

/// Open the tracker over the CSV store
///
/// An explicit `--data` path wins over the configured data file.
pub fn open_tracker(data: Option<&Path>, config: Option<&Path>) -> Result<Tracker<CsvStore>> {
    let config = Config::load(config).context("Failed to load config")?;
    let path = data
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.data_file.clone());

    tracing::debug!(path = %path.display(), "Using data file");
    Ok(Tracker::with_config(CsvStore::new(path), &config))
}

/// Load the collection for display; an unreadable store is reported and
/// treated as empty
pub fn load_records<S: SubscriptionStore>(tracker: &Tracker<S>) -> Vec<Subscription> {
    let loaded = tracker.load_or_empty();
    if let Some(e) = loaded.error {
        println!("❌ Error loading data file: {}", e);
    }
    loaded.records
}
