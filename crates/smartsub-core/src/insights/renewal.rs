//! Renewal Alerts
//!
//! Flags subscriptions whose next billing falls within the renewal window
//! (today through `renewal_window_days` days out). Past renewal dates and
//! records whose date can't be parsed produce nothing.

use tracing::debug;

use crate::error::Result;

use super::engine::{AnalysisContext, Detector};
use super::types::{Insight, InsightKind, Severity};

/// Detector for imminent renewals
pub struct RenewalDetector;

impl RenewalDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RenewalDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for RenewalDetector {
    fn id(&self) -> InsightKind {
        InsightKind::Renewal
    }

    fn name(&self) -> &'static str {
        "Renewal Alert"
    }

    fn detect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Insight>> {
        let window = 0..=ctx.settings.renewal_window_days;
        let mut insights = Vec::new();

        for record in ctx.records {
            let renewal = match record.renewal() {
                Ok(date) => date,
                Err(e) => {
                    debug!(service = %record.name, error = %e, "Skipping renewal check");
                    continue;
                }
            };

            let days_until = (renewal - ctx.as_of).num_days();
            if !window.contains(&days_until) {
                continue;
            }

            insights.push(Insight::new(
                InsightKind::Renewal,
                Severity::Critical,
                format!("Renewal Alert: {}", record.name),
                format!(
                    "Renews in {} day(s). Cost: {}",
                    days_until,
                    ctx.settings.format_cost(record.cost)
                ),
            ));
        }

        Ok(insights)
    }
}
