//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_tracker, load_records)
//! - `insights` - Insight and summary reports
//! - `subscriptions` - Subscription management (add, list, remove, categorize)

pub mod core;
pub mod insights;
pub mod subscriptions;

// Re-export command functions for main.rs
pub use self::core::*;
pub use insights::*;
pub use subscriptions::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
