//! Subscription command implementations

use anyhow::{bail, Context, Result};
use smartsub_core::models::parse_date;
use smartsub_core::{
    enrich, priority, BillingCycle, Category, NewSubscription, Priority, SubscriptionStore,
    Tracker,
};

use super::{load_records, truncate};

pub fn cmd_add<S: SubscriptionStore>(
    tracker: &mut Tracker<S>,
    name: &str,
    cost: f64,
    cycle: &str,
    category: Option<&str>,
    renewal: &str,
) -> Result<()> {
    let billing_cycle: BillingCycle = cycle.parse().map_err(anyhow::Error::msg)?;
    let category = category
        .map(|c| c.parse::<Category>().map_err(anyhow::Error::msg))
        .transpose()?;
    let renewal_date = parse_date(renewal).context("Invalid --renewal (use YYYY-MM-DD)")?;

    if cost < 0.0 || !cost.is_finite() {
        bail!("Cost must be a non-negative number");
    }

    let stored = tracker.add(NewSubscription {
        name: name.to_string(),
        cost,
        billing_cycle,
        category,
        renewal_date,
    })?;

    println!(
        "✅ Added {} ({}, {})",
        stored.name,
        stored.category,
        priority(stored.category)
    );

    Ok(())
}

pub fn cmd_list<S: SubscriptionStore>(tracker: &Tracker<S>) -> Result<()> {
    let records = load_records(tracker);

    if records.is_empty() {
        println!("👋 No subscriptions tracked yet. Add one with:");
        println!("  smartsub add --name Netflix --cost 649 --renewal YYYY-MM-DD");
        return Ok(());
    }

    let currency = &tracker.engine().settings().currency;

    println!();
    println!("📋 Your Subscriptions");
    println!("   ─────────────────────────────────────────────────────────────");

    for (i, sub) in enrich(records).into_iter().enumerate() {
        let icon = match sub.priority {
            Priority::First => "🟢",
            Priority::Second => "🟠",
        };
        let cycle = sub
            .subscription
            .billing_cycle
            .map(|c| c.label())
            .unwrap_or("?");

        println!(
            "   {:>3}. {} {:20} │ {}{:>9.2} {:<9} │ {:13} │ renews {}",
            i + 1,
            icon,
            truncate(&sub.subscription.name, 20),
            currency,
            sub.subscription.cost,
            cycle,
            sub.subscription.category.label(),
            sub.subscription.renewal_date,
        );
    }

    Ok(())
}

pub fn cmd_remove<S: SubscriptionStore>(tracker: &mut Tracker<S>, number: usize) -> Result<()> {
    if number == 0 {
        bail!("Subscription numbers start at 1 (see `smartsub list`)");
    }

    let removed = tracker.remove(number - 1)?;
    println!("🗑️  Deleted {}", removed.name);

    Ok(())
}

pub fn cmd_categorize<S: SubscriptionStore>(tracker: &Tracker<S>, name: &str) -> Result<()> {
    let category = tracker.suggest_category(name);

    println!("   Category: {}", category);
    println!("   Priority: {}", priority(category));
    match tracker.explain_category(name) {
        Some(m) => println!("   Matched:  \"{}\" (rule #{})", m.keyword, m.precedence + 1),
        None => println!("   Matched:  no keyword"),
    }

    Ok(())
}
