//! Insight Engine - Budget Alerts for Tracked Subscriptions
//!
//! The Insight Engine runs a fixed sequence of detectors over the whole
//! record collection and turns it into an ordered list of alerts.
//!
//! ## Detectors (in run order)
//!
//! - **Renewal** - Critical alert for renewals within the next few days
//! - **Spending Strategy** - Suggests pausing the costliest discretionary service
//! - **Duplicate** - Warns about services tracked more than once
//!
//! Detectors never fail on bad data: a record they can't evaluate is left
//! out of that detector's output only.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use smartsub_core::insights::generate_insights;
//!
//! let today = chrono::Local::now().date_naive();
//! for insight in generate_insights(&records, today) {
//!     println!("{}: {}", insight.title, insight.message);
//! }
//! ```

pub mod duplicates;
pub mod engine;
pub mod renewal;
pub mod spending_strategy;
pub mod types;

pub use duplicates::DuplicateDetector;
pub use engine::{generate_insights, AnalysisContext, Detector, InsightEngine};
pub use renewal::RenewalDetector;
pub use spending_strategy::SpendingStrategyDetector;
pub use types::{Insight, InsightKind, InsightSettings, Severity};
