//! Insight Engine - runs the detectors over a record collection

use chrono::NaiveDate;

use crate::models::Subscription;
use crate::Result;

use super::types::{Insight, InsightKind, InsightSettings};
use super::{DuplicateDetector, RenewalDetector, SpendingStrategyDetector};

/// Context provided to detectors
pub struct AnalysisContext<'a> {
    /// The full record collection, in stored order
    pub records: &'a [Subscription],
    /// Date the analysis is run for (usually today)
    pub as_of: NaiveDate,
    pub settings: &'a InsightSettings,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(records: &'a [Subscription], as_of: NaiveDate, settings: &'a InsightSettings) -> Self {
        Self {
            records,
            as_of,
            settings,
        }
    }
}

/// Trait for insight detectors
///
/// Detectors skip records they can't evaluate instead of failing. An `Err`
/// is reserved for failures of the detector as a whole; the engine logs it
/// and moves on to the next detector.
pub trait Detector {
    /// Unique identifier for this detector
    fn id(&self) -> InsightKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze the collection and produce insights
    fn detect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Insight>>;
}

/// The main insight engine
///
/// Detectors run in registration order and their output is concatenated
/// without re-sorting, so an earlier detector's insights are listed first.
pub struct InsightEngine {
    detectors: Vec<Box<dyn Detector>>,
    settings: InsightSettings,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in detectors and default settings
    pub fn new() -> Self {
        Self::with_settings(InsightSettings::default())
    }

    /// Create an engine with the built-in detectors
    pub fn with_settings(settings: InsightSettings) -> Self {
        let mut engine = Self {
            detectors: vec![],
            settings,
        };

        engine.register(Box::new(RenewalDetector::new()));
        engine.register(Box::new(SpendingStrategyDetector::new()));
        engine.register(Box::new(DuplicateDetector::new()));

        engine
    }

    /// Register a detector after the existing ones
    pub fn register(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    pub fn settings(&self) -> &InsightSettings {
        &self.settings
    }

    /// Run all detectors and collect their insights
    pub fn analyze(&self, records: &[Subscription], as_of: NaiveDate) -> Vec<Insight> {
        let ctx = AnalysisContext::new(records, as_of, &self.settings);
        let mut all_insights = vec![];

        for detector in &self.detectors {
            match detector.detect(&ctx) {
                Ok(insights) => {
                    tracing::debug!(
                        detector = detector.id().as_str(),
                        count = insights.len(),
                        "Detector complete"
                    );
                    all_insights.extend(insights);
                }
                Err(e) => {
                    tracing::warn!(
                        detector = detector.id().as_str(),
                        error = %e,
                        "Detector failed"
                    );
                }
            }
        }

        all_insights
    }

    /// Get the registered detectors, in run order
    pub fn detector_kinds(&self) -> Vec<InsightKind> {
        self.detectors.iter().map(|d| d.id()).collect()
    }
}

/// Generate insights for a collection with the default settings
pub fn generate_insights(records: &[Subscription], as_of: NaiveDate) -> Vec<Insight> {
    InsightEngine::new().analyze(records, as_of)
}
