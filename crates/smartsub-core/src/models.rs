//! Domain models for SmartSub

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::priority::priority;

/// Date format used for renewal dates in the store and on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A tracked subscription, as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub name: String,
    /// Amount billed per cycle (not normalized)
    pub cost: f64,
    /// `None` when the stored cycle was not recognized
    pub billing_cycle: Option<BillingCycle>,
    pub category: Category,
    /// Next billing date as stored; see [`Subscription::renewal`]
    pub renewal_date: String,
}

impl Subscription {
    /// Parse the stored renewal date
    pub fn renewal(&self) -> Result<NaiveDate> {
        parse_date(&self.renewal_date)
    }

    /// Cost normalized to a monthly figure
    pub fn monthly_cost(&self) -> f64 {
        match self.billing_cycle {
            Some(cycle) => normalize(self.cost, cycle),
            None => 0.0,
        }
    }

    pub fn priority(&self) -> Priority {
        priority(self.category)
    }
}

/// Input for creating a subscription
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub name: String,
    pub cost: f64,
    pub billing_cycle: BillingCycle,
    /// Suggested from the name when not given
    pub category: Option<Category>,
    pub renewal_date: NaiveDate,
}

/// A subscription with its derived fields
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedSubscription {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub monthly_cost: f64,
    pub priority: Priority,
}

impl From<Subscription> for EnrichedSubscription {
    fn from(subscription: Subscription) -> Self {
        Self {
            monthly_cost: subscription.monthly_cost(),
            priority: subscription.priority(),
            subscription,
        }
    }
}

/// Subscription billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Label as written in the record store
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }

    /// Number of months covered by one billing
    pub fn months(&self) -> f64 {
        match self {
            Self::Monthly => 1.0,
            Self::Quarterly => 3.0,
            Self::Yearly => 12.0,
        }
    }
}

impl std::str::FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            _ => Err(format!("Unknown billing cycle: {}", s)),
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Spending category of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entertainment,
    Music,
    Productivity,
    Utilities,
    Software,
    Fitness,
    Shopping,
    Uncategorized,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entertainment => "entertainment",
            Self::Music => "music",
            Self::Productivity => "productivity",
            Self::Utilities => "utilities",
            Self::Software => "software",
            Self::Fitness => "fitness",
            Self::Shopping => "shopping",
            Self::Uncategorized => "uncategorized",
        }
    }

    /// Label as written in the record store
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entertainment => "Entertainment",
            Self::Music => "Music",
            Self::Productivity => "Productivity",
            Self::Utilities => "Utilities",
            Self::Software => "Software",
            Self::Fitness => "Fitness",
            Self::Shopping => "Shopping",
            Self::Uncategorized => "Uncategorized",
        }
    }

    /// Get all categories, in keyword precedence order
    pub fn all() -> &'static [Category] {
        &[
            Self::Entertainment,
            Self::Music,
            Self::Productivity,
            Self::Utilities,
            Self::Software,
            Self::Fitness,
            Self::Shopping,
            Self::Uncategorized,
        ]
    }

    /// Parse a stored category, falling back to `Uncategorized`
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Uncategorized)
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Two-tier spending priority derived from the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Essential
    First,
    /// Discretionary
    Second,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "1st Priority",
            Self::Second => "2nd Priority",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| Error::InvalidData(format!("Invalid date '{}': {}", s, e)))
}
