//! Insight and summary command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use smartsub_core::models::parse_date;
use smartsub_core::{Insight, Severity, SubscriptionStore, Tracker};

use super::load_records;

pub fn cmd_insights<S: SubscriptionStore>(
    tracker: &Tracker<S>,
    as_of: Option<&str>,
    json: bool,
) -> Result<()> {
    let as_of = match as_of {
        Some(s) => parse_date(s).context("Invalid --as-of (use YYYY-MM-DD)")?,
        None => today(),
    };

    let records = load_records(tracker);
    let insights = tracker.insights(&records, as_of);

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!();
    println!("💡 Insights ({})", as_of);
    println!("   ─────────────────────────────────────────────────────────────");

    if insights.is_empty() {
        println!("   ✅ All systems go! No alerts detected.");
        return Ok(());
    }

    let urgent = needs_attention(&insights);
    if urgent > 0 {
        println!("   {} of {} need attention", urgent, insights.len());
        println!();
    }

    for insight in &insights {
        let icon = match insight.severity {
            Severity::Critical => "🚨",
            Severity::Warning => "⚠️ ",
            Severity::Suggestion => "💡",
        };
        println!("   {} {}", icon, insight.title);
        println!("      {}", insight.message);
    }

    Ok(())
}

pub fn cmd_summary<S: SubscriptionStore>(tracker: &Tracker<S>, json: bool) -> Result<()> {
    let records = load_records(tracker);
    let summary = tracker.summary(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let currency = &tracker.engine().settings().currency;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💳 SmartSub Summary           │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Monthly Cost:      {}{:.2}", currency, summary.total_monthly);
    println!("  Yearly Projection: {}{:.2}", currency, summary.yearly_projection);
    println!("  Active Services:   {}", summary.active_services);

    if !summary.by_category.is_empty() {
        println!();
        println!("  Spend Distribution");
        for cat in &summary.by_category {
            println!(
                "    {:14} {}{:>9.2}/mo  {:>5.1}%",
                cat.category.label(),
                currency,
                cat.monthly_amount,
                cat.percentage
            );
        }
    }

    Ok(())
}

/// Count insights at warning level or above
pub fn needs_attention(insights: &[Insight]) -> usize {
    insights
        .iter()
        .filter(|i| i.severity.rank() >= Severity::Warning.rank())
        .count()
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
