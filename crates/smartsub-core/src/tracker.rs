//! Tracker session: one load → enrich → analyze pass over a store
//!
//! Every mutation is a read-modify-write of the whole collection. If the
//! store can't be read, a mutation fails without saving, so a corrupt file
//! is never overwritten with an empty collection.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::categorize::{CategoryRules, RuleMatch};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::insights::{Insight, InsightEngine};
use crate::models::{Category, EnrichedSubscription, NewSubscription, Subscription, DATE_FORMAT};
use crate::normalize::sanitize_cost;
use crate::store::SubscriptionStore;
use crate::summary::SpendSummary;

/// Records loaded for one pass, with the store error if loading failed
#[derive(Debug)]
pub struct Loaded {
    pub records: Vec<Subscription>,
    pub error: Option<Error>,
}

/// Subscription tracker over an injected store
pub struct Tracker<S> {
    store: S,
    rules: CategoryRules,
    engine: InsightEngine,
}

impl<S: SubscriptionStore> Tracker<S> {
    /// Create a tracker with the built-in rules and insight settings
    pub fn new(store: S) -> Self {
        Self {
            store,
            rules: CategoryRules::default(),
            engine: InsightEngine::new(),
        }
    }

    /// Create a tracker using configured rules and insight settings
    pub fn with_config(store: S, config: &Config) -> Self {
        Self {
            store,
            rules: config.rules.clone(),
            engine: InsightEngine::with_settings(config.insights.clone()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &InsightEngine {
        &self.engine
    }

    /// Load the collection
    pub fn load(&self) -> Result<Vec<Subscription>> {
        self.store.load()
    }

    /// Load the collection, starting empty if the store can't be read
    pub fn load_or_empty(&self) -> Loaded {
        match self.store.load() {
            Ok(records) => Loaded {
                records,
                error: None,
            },
            Err(e) => {
                warn!(error = %e, "Failed to load subscriptions, starting empty");
                Loaded {
                    records: vec![],
                    error: Some(e),
                }
            }
        }
    }

    /// Suggest a category for a service name
    pub fn suggest_category(&self, name: &str) -> Category {
        self.rules.categorize(name)
    }

    /// Explain which rule suggests a category for a service name
    pub fn explain_category(&self, name: &str) -> Option<RuleMatch> {
        self.rules.explain(name)
    }

    /// Track a new subscription
    ///
    /// The category defaults to the suggestion for the name. Returns the
    /// record as stored.
    pub fn add(&mut self, new: NewSubscription) -> Result<Subscription> {
        if new.name.trim().is_empty() {
            return Err(Error::InvalidData("Service name must not be empty".into()));
        }

        let category = new
            .category
            .unwrap_or_else(|| self.rules.categorize(&new.name));

        let subscription = Subscription {
            name: new.name,
            cost: sanitize_cost(new.cost),
            billing_cycle: Some(new.billing_cycle),
            category,
            renewal_date: new.renewal_date.format(DATE_FORMAT).to_string(),
        };

        let mut records = self.store.load()?;
        records.push(subscription.clone());
        self.store.save(&records)?;

        info!(service = %subscription.name, category = %subscription.category, "Added subscription");
        Ok(subscription)
    }

    /// Delete the subscription at a position in the stored order
    pub fn remove(&mut self, index: usize) -> Result<Subscription> {
        let mut records = self.store.load()?;
        if index >= records.len() {
            return Err(Error::NotFound(format!(
                "No subscription at index {} ({} tracked)",
                index,
                records.len()
            )));
        }

        let removed = records.remove(index);
        self.store.save(&records)?;

        info!(service = %removed.name, index, "Removed subscription");
        Ok(removed)
    }

    /// Generate insights for a collection
    pub fn insights(&self, records: &[Subscription], as_of: NaiveDate) -> Vec<Insight> {
        self.engine.analyze(records, as_of)
    }

    /// Dashboard metrics for a collection
    pub fn summary(&self, records: &[Subscription]) -> SpendSummary {
        SpendSummary::from_records(records)
    }
}

/// Attach derived fields to every record
pub fn enrich(records: Vec<Subscription>) -> Vec<EnrichedSubscription> {
    records.into_iter().map(EnrichedSubscription::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{InsightSettings, Severity};
    use crate::models::{BillingCycle, Priority};
    use crate::store::MemoryStore;

    /// Store whose load always fails, like a corrupt file
    struct BrokenStore {
        saves: usize,
    }

    impl SubscriptionStore for BrokenStore {
        fn load(&self) -> Result<Vec<Subscription>> {
            Err(Error::Store("corrupt".into()))
        }

        fn save(&mut self, _records: &[Subscription]) -> Result<()> {
            self.saves += 1;
            Ok(())
        }
    }

    fn new_sub(name: &str, cost: f64, renewal: NaiveDate) -> NewSubscription {
        NewSubscription {
            name: name.to_string(),
            cost,
            billing_cycle: BillingCycle::Monthly,
            category: None,
            renewal_date: renewal,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_suggests_category() {
        let mut tracker = Tracker::new(MemoryStore::new());
        let stored = tracker
            .add(new_sub("Amazon Prime", 1499.0, date(2024, 2, 1)))
            .unwrap();

        assert_eq!(stored.category, Category::Entertainment);
        assert_eq!(stored.renewal_date, "2024-02-01");
        assert_eq!(tracker.store().records().len(), 1);
        assert_eq!(tracker.store().save_count(), 1);
    }

    #[test]
    fn test_add_keeps_user_category() {
        let mut tracker = Tracker::new(MemoryStore::new());
        let mut new = new_sub("Amazon Prime", 1499.0, date(2024, 2, 1));
        new.category = Some(Category::Shopping);

        let stored = tracker.add(new).unwrap();
        assert_eq!(stored.category, Category::Shopping);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut tracker = Tracker::new(MemoryStore::new());
        let result = tracker.add(new_sub("   ", 10.0, date(2024, 2, 1)));
        assert!(matches!(result, Err(Error::InvalidData(_))));
        assert_eq!(tracker.store().save_count(), 0);
    }

    #[test]
    fn test_add_coerces_negative_cost() {
        let mut tracker = Tracker::new(MemoryStore::new());
        let stored = tracker.add(new_sub("Hulu", -8.0, date(2024, 2, 1))).unwrap();
        assert_eq!(stored.cost, 0.0);
    }

    #[test]
    fn test_remove_by_index() {
        let mut tracker = Tracker::new(MemoryStore::new());
        tracker.add(new_sub("A", 1.0, date(2024, 2, 1))).unwrap();
        tracker.add(new_sub("B", 2.0, date(2024, 2, 1))).unwrap();
        tracker.add(new_sub("C", 3.0, date(2024, 2, 1))).unwrap();

        let removed = tracker.remove(1).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<String> = tracker.load().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut tracker = Tracker::new(MemoryStore::new());
        assert!(matches!(tracker.remove(0), Err(Error::NotFound(_))));
        assert_eq!(tracker.store().save_count(), 0);
    }

    #[test]
    fn test_broken_store_loads_empty_and_never_saves() {
        let mut tracker = Tracker::new(BrokenStore { saves: 0 });

        let loaded = tracker.load_or_empty();
        assert!(loaded.records.is_empty());
        assert!(matches!(loaded.error, Some(Error::Store(_))));

        assert!(tracker.add(new_sub("Netflix", 1.0, date(2024, 2, 1))).is_err());
        assert!(tracker.remove(0).is_err());
        assert_eq!(tracker.store().saves, 0);
    }

    #[test]
    fn test_with_config_uses_settings() {
        let mut config = Config::default();
        config.insights = InsightSettings {
            currency: "$".to_string(),
            renewal_window_days: 0,
        };
        let mut tracker = Tracker::with_config(MemoryStore::new(), &config);
        tracker.add(new_sub("Netflix", 15.49, date(2024, 1, 10))).unwrap();
        tracker.add(new_sub("Hulu", 7.99, date(2024, 1, 11))).unwrap();

        let records = tracker.load().unwrap();
        let insights = tracker.insights(&records, date(2024, 1, 10));
        let critical: Vec<&Insight> = insights
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .collect();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].message, "Renews in 0 day(s). Cost: $15.49");
    }

    #[test]
    fn test_enrich() {
        let mut tracker = Tracker::new(MemoryStore::new());
        let mut new = new_sub("Dropbox", 120.0, date(2024, 2, 1));
        new.billing_cycle = BillingCycle::Yearly;
        new.category = Some(Category::Software);
        tracker.add(new).unwrap();

        let enriched = enrich(tracker.load().unwrap());
        assert_eq!(enriched[0].monthly_cost, 10.0);
        assert_eq!(enriched[0].priority, Priority::First);
    }
}
