//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Detectors that can produce insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// A subscription renews within the alert window
    Renewal,
    /// The costliest discretionary subscription, as a pause candidate
    SpendingStrategy,
    /// The same service is tracked more than once
    Duplicate,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Renewal => "renewal",
            InsightKind::SpendingStrategy => "spending_strategy",
            InsightKind::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Something to consider
    Suggestion,
    /// Worth attention
    Warning,
    /// Requires immediate attention
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Suggestion => "suggestion",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// Numeric rank for display (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Suggestion => 1,
            Severity::Warning => 2,
            Severity::Critical => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suggestion" => Ok(Severity::Suggestion),
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// An alert produced by a detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Detector that produced this insight
    pub kind: InsightKind,
    pub severity: Severity,
    /// Short title (e.g., "Renewal Alert: Netflix")
    pub title: String,
    /// One-line message (e.g., "Renews in 2 day(s). Cost: ₹649.00")
    pub message: String,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Tunables for insight generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSettings {
    /// Symbol printed in front of costs
    pub currency: String,
    /// Renewals at most this many days out raise an alert
    pub renewal_window_days: i64,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            renewal_window_days: 2,
        }
    }
}

impl InsightSettings {
    /// Format a cost with the configured currency symbol
    pub fn format_cost(&self, cost: f64) -> String {
        format!("{}{:.2}", self.currency, cost)
    }
}
