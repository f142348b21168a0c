//! SmartSub Core Library
//!
//! Shared functionality for the SmartSub subscription tracker:
//! - Keyword categorizer with an explicit precedence table
//! - Essential/discretionary priority classification
//! - Cost normalization to monthly figures
//! - Insight engine (renewal alerts, spending suggestions, duplicates)
//! - Flat-file record store behind a pluggable trait
//! - Spend summary and config loading

pub mod categorize;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod normalize;
pub mod priority;
pub mod store;
pub mod summary;
pub mod tracker;

pub use categorize::{categorize, CategoryRules, KeywordRule, RuleMatch};
pub use config::Config;
pub use error::{Error, Result};
pub use insights::{generate_insights, Insight, InsightEngine, InsightSettings, Severity};
pub use models::{
    BillingCycle, Category, EnrichedSubscription, NewSubscription, Priority, Subscription,
};
pub use normalize::{normalize, normalize_raw};
pub use priority::priority;
pub use store::{CsvStore, MemoryStore, SubscriptionStore};
pub use summary::SpendSummary;
pub use tracker::{enrich, Tracker};
