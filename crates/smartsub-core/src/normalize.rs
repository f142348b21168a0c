//! Cost normalization to a monthly figure
//!
//! Normalization runs inline over a whole collection, so none of these
//! functions fail: anything that can't be interpreted becomes 0.0.

use crate::models::BillingCycle;

/// Currency symbols tolerated in front of a cost cell
const CURRENCY_SYMBOLS: &[char] = &['₹', '$', '€', '£', '¥'];

/// Normalize a per-cycle cost to a monthly cost
pub fn normalize(cost: f64, cycle: BillingCycle) -> f64 {
    let cost = sanitize_cost(cost);
    match cycle {
        BillingCycle::Monthly => cost,
        BillingCycle::Quarterly | BillingCycle::Yearly => cost / cycle.months(),
    }
}

/// Normalize raw table cells (cost text and cycle text)
///
/// Returns 0.0 for an unparsable cost or an unrecognized cycle.
pub fn normalize_raw(cost: &str, cycle: &str) -> f64 {
    match cycle.parse::<BillingCycle>() {
        Ok(cycle) => normalize(parse_cost(cost), cycle),
        Err(_) => 0.0,
    }
}

/// Coerce a cost cell to a non-negative finite number
pub fn parse_cost(s: &str) -> f64 {
    let cleaned: String = s
        .trim()
        .trim_start_matches(CURRENCY_SYMBOLS)
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned.parse::<f64>().map(sanitize_cost).unwrap_or(0.0)
}

/// Clamp a cost to a non-negative finite value
pub fn sanitize_cost(cost: f64) -> f64 {
    if cost.is_finite() && cost > 0.0 {
        cost
    } else {
        0.0
    }
}
