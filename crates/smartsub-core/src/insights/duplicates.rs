//! Duplicate Detection
//!
//! Warns once per service name that is tracked more than once. Names are
//! compared exactly (case-sensitive, untrimmed). Warnings follow the order
//! in which each duplicated name first appears.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::Result;

use super::engine::{AnalysisContext, Detector};
use super::types::{Insight, InsightKind, Severity};

/// Detector for repeated service names
pub struct DuplicateDetector;

impl DuplicateDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for DuplicateDetector {
    fn id(&self) -> InsightKind {
        InsightKind::Duplicate
    }

    fn name(&self) -> &'static str {
        "Duplicate Found"
    }

    fn detect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Insight>> {
        // Records without a name can't be matched against anything
        let named: Vec<&str> = ctx
            .records
            .iter()
            .map(|r| r.name.as_str())
            .filter(|name| !name.is_empty())
            .collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for name in &named {
            *counts.entry(name).or_insert(0) += 1;
        }

        let mut reported = HashSet::new();
        let mut insights = Vec::new();

        for name in named {
            if counts[name] < 2 || !reported.insert(name) {
                continue;
            }

            debug!(service = name, count = counts[name], "Duplicate subscription");
            insights.push(Insight::new(
                InsightKind::Duplicate,
                Severity::Warning,
                "Duplicate Found",
                format!("You have multiple subscriptions for '{}'.", name),
            ));
        }

        Ok(insights)
    }
}
