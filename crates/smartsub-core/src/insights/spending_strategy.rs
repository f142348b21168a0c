//! Spending Strategy Insight
//!
//! Suggests pausing the most expensive discretionary (2nd priority)
//! subscription. Costs are compared as billed, not normalized. At most one
//! suggestion is produced; ties go to the earlier record.

use tracing::debug;

use crate::error::Result;
use crate::models::{Priority, Subscription};

use super::engine::{AnalysisContext, Detector};
use super::types::{Insight, InsightKind, Severity};

/// Detector for the best pause candidate
pub struct SpendingStrategyDetector;

impl SpendingStrategyDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpendingStrategyDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Most expensive discretionary record, skipping ones with an unusable cost
fn most_expensive_discretionary(records: &[Subscription]) -> Option<&Subscription> {
    let mut best: Option<&Subscription> = None;

    for record in records {
        if record.priority() != Priority::Second {
            continue;
        }
        if !record.cost.is_finite() {
            debug!(service = %record.name, cost = record.cost, "Skipping unusable cost");
            continue;
        }
        if best.map_or(true, |b| record.cost > b.cost) {
            best = Some(record);
        }
    }

    best
}

impl Detector for SpendingStrategyDetector {
    fn id(&self) -> InsightKind {
        InsightKind::SpendingStrategy
    }

    fn name(&self) -> &'static str {
        "Spending Strategy"
    }

    fn detect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Insight>> {
        let Some(candidate) = most_expensive_discretionary(ctx.records) else {
            return Ok(vec![]);
        };

        Ok(vec![Insight::new(
            InsightKind::SpendingStrategy,
            Severity::Suggestion,
            "Spending Strategy",
            format!(
                "Consider pausing '{}' ({}) if you need to save money.",
                candidate.name,
                ctx.settings.format_cost(candidate.cost)
            ),
        )])
    }
}
