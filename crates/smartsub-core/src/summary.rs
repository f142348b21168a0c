//! Spend summary: monthly total, yearly projection, per-category distribution

use serde::{Deserialize, Serialize};

use crate::models::{Category, Subscription};

/// Monthly spend in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: Category,
    pub monthly_amount: f64,
    /// Share of the total monthly spend, 0-100
    pub percentage: f64,
    pub subscription_count: usize,
}

/// Dashboard metrics for the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendSummary {
    pub total_monthly: f64,
    pub yearly_projection: f64,
    pub active_services: usize,
    /// Categories with spend, in category precedence order
    pub by_category: Vec<CategorySpending>,
}

impl SpendSummary {
    pub fn from_records(records: &[Subscription]) -> Self {
        let total_monthly: f64 = records.iter().map(Subscription::monthly_cost).sum();

        let by_category = Category::all()
            .iter()
            .filter_map(|category| {
                let in_category: Vec<&Subscription> =
                    records.iter().filter(|r| r.category == *category).collect();
                let monthly_amount: f64 = in_category.iter().map(|r| r.monthly_cost()).sum();

                if monthly_amount <= 0.0 {
                    return None;
                }

                Some(CategorySpending {
                    category: *category,
                    monthly_amount,
                    percentage: monthly_amount / total_monthly * 100.0,
                    subscription_count: in_category.len(),
                })
            })
            .collect();

        Self {
            total_monthly,
            yearly_projection: total_monthly * 12.0,
            active_services: records.len(),
            by_category,
        }
    }
}
