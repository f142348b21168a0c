//! Integration tests for smartsub-core
//!
//! These tests exercise the full load → enrich → insights workflow against
//! an on-disk store.

use chrono::NaiveDate;
use smartsub_core::{
    categorize, enrich, generate_insights, normalize, normalize_raw, priority,
    store::read_records, BillingCycle, Category, CsvStore, InsightSettings, MemoryStore,
    NewSubscription, Priority, Severity, SpendSummary, Subscription, SubscriptionStore, Tracker,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A store file as a user might have left it: one duplicate, one bad date,
/// one bad cost, renewals around 2024-01-10
fn sample_csv() -> &'static str {
    "Name,Cost,Billing Cycle,Category,Renewal Date
Netflix,649,Monthly,Entertainment,2024-01-12
Spotify,119,Monthly,Music,2024-01-13
Adobe CC,1675,Yearly,Software,2024-01-10
Netflix,199,Monthly,Entertainment,2024-02-05
Gym,oops,Quarterly,Fitness,not-a-date
Amazon Prime,1499,Yearly,Entertainment,2024-01-09
"
}

fn record(name: &str, cost: f64, category: Category, renewal: &str) -> Subscription {
    Subscription {
        name: name.to_string(),
        cost,
        billing_cycle: Some(BillingCycle::Monthly),
        category,
        renewal_date: renewal.to_string(),
    }
}

// =============================================================================
// Component Properties
// =============================================================================

#[test]
fn test_categorizer_properties() {
    assert_eq!(categorize("Netflix"), Category::Entertainment);
    assert_eq!(categorize("Amazon Prime"), Category::Entertainment);
    assert_eq!(categorize("Random Startup Tool"), Category::Uncategorized);
}

#[test]
fn test_priority_properties() {
    for category in Category::all() {
        let expected = match category {
            Category::Utilities | Category::Productivity | Category::Software | Category::Fitness => {
                Priority::First
            }
            _ => Priority::Second,
        };
        assert_eq!(priority(*category), expected);
    }
}

#[test]
fn test_normalizer_properties() {
    assert_eq!(normalize(120.0, BillingCycle::Yearly), 10.0);
    assert_eq!(normalize(30.0, BillingCycle::Quarterly), 10.0);
    assert_eq!(normalize(42.5, BillingCycle::Monthly), 42.5);
    assert_eq!(normalize_raw("bad", "Monthly"), 0.0);
}

// =============================================================================
// Insight Properties
// =============================================================================

#[test]
fn test_renewal_boundary() {
    let as_of = date(2024, 1, 10);
    let two_days = [record("A", 1.0, Category::Software, "2024-01-12")];
    let three_days = [record("A", 1.0, Category::Software, "2024-01-13")];
    let past = [record("A", 1.0, Category::Software, "2024-01-09")];

    let insights = generate_insights(&two_days, as_of);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].severity, Severity::Critical);

    assert!(generate_insights(&three_days, as_of).is_empty());
    assert!(generate_insights(&past, as_of).is_empty());
}

#[test]
fn test_duplicate_grouping() {
    let records: Vec<Subscription> = ["A", "B", "A", "A"]
        .iter()
        .map(|n| record(n, 1.0, Category::Software, "2030-01-01"))
        .collect();

    let warnings: Vec<_> = generate_insights(&records, date(2024, 1, 10))
        .into_iter()
        .filter(|i| i.severity == Severity::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("'A'"));
}

#[test]
fn test_empty_input() {
    assert!(generate_insights(&[], date(2024, 1, 10)).is_empty());
    assert!(enrich(vec![]).is_empty());
    assert_eq!(SpendSummary::from_records(&[]).active_services, 0);
}

#[test]
fn test_suggestion_selection() {
    let records = [
        record("Five", 5.0, Category::Music, "2030-01-01"),
        record("Forty", 40.0, Category::Entertainment, "2030-01-01"),
        record("Twelve", 12.0, Category::Shopping, "2030-01-01"),
    ];
    let suggestions: Vec<_> = generate_insights(&records, date(2024, 1, 10))
        .into_iter()
        .filter(|i| i.severity == Severity::Suggestion)
        .collect();
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].message.contains("'Forty'"));

    let essentials = [record("Gym", 50.0, Category::Fitness, "2030-01-01")];
    assert!(generate_insights(&essentials, date(2024, 1, 10))
        .iter()
        .all(|i| i.severity != Severity::Suggestion));
}

// =============================================================================
// Store Workflows
// =============================================================================

#[test]
fn test_full_pass_over_stored_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions_data.csv");
    std::fs::write(&path, sample_csv()).unwrap();

    let tracker = Tracker::new(CsvStore::new(&path));
    let records = tracker.load().unwrap();
    assert_eq!(records.len(), 6);

    let insights = tracker.insights(&records, date(2024, 1, 10));
    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Renewal Alert: Netflix",
            "Renewal Alert: Adobe CC",
            "Spending Strategy",
            "Duplicate Found",
        ]
    );
    assert_eq!(insights[0].message, "Renews in 2 day(s). Cost: ₹649.00");
    assert_eq!(insights[1].message, "Renews in 0 day(s). Cost: ₹1675.00");
    // Largest discretionary cost as billed, not normalized
    assert_eq!(
        insights[2].message,
        "Consider pausing 'Amazon Prime' (₹1499.00) if you need to save money."
    );

    let enriched = enrich(records);
    let gym = enriched.iter().find(|e| e.subscription.name == "Gym").unwrap();
    assert_eq!(gym.monthly_cost, 0.0);
    assert_eq!(gym.priority, Priority::First);
}

#[test]
fn test_add_remove_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subs.csv");
    let mut tracker = Tracker::new(CsvStore::new(&path));

    tracker
        .add(NewSubscription {
            name: "Notion".to_string(),
            cost: 96.0,
            billing_cycle: BillingCycle::Yearly,
            category: None,
            renewal_date: date(2024, 6, 1),
        })
        .unwrap();
    tracker
        .add(NewSubscription {
            name: "Hulu".to_string(),
            cost: 7.99,
            billing_cycle: BillingCycle::Monthly,
            category: None,
            renewal_date: date(2024, 1, 11),
        })
        .unwrap();

    // A fresh store sees the written file
    let reopened = CsvStore::new(&path);
    let records = reopened.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].category, Category::Productivity);
    assert_eq!(records[1].category, Category::Entertainment);

    let summary = SpendSummary::from_records(&records);
    assert!((summary.total_monthly - 15.99).abs() < 1e-9);

    tracker.remove(0).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Name,Cost,Billing Cycle,Category,Renewal Date\nHulu,7.99,Monthly,Entertainment,2024-01-11\n"
    );
}

#[test]
fn test_corrupt_store_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subs.csv");
    std::fs::write(&path, b"Name,Cost\n\xff,1\n").unwrap();

    let mut tracker = Tracker::new(CsvStore::new(&path));
    let loaded = tracker.load_or_empty();
    assert!(loaded.records.is_empty());
    assert!(loaded.error.is_some());
    assert!(tracker.insights(&loaded.records, date(2024, 1, 10)).is_empty());

    // Mutations refuse to overwrite the unreadable file
    assert!(tracker.remove(0).is_err());
    assert_eq!(std::fs::read(&path).unwrap(), b"Name,Cost\n\xff,1\n");
}

#[test]
fn test_memory_store_is_interchangeable() {
    let records = read_records(sample_csv().as_bytes()).unwrap();
    let tracker = Tracker::new(MemoryStore::with_records(records));
    let loaded = tracker.load().unwrap();

    let settings = InsightSettings::default();
    assert_eq!(tracker.engine().settings(), &settings);
    assert_eq!(tracker.insights(&loaded, date(2024, 1, 10)).len(), 4);
}
