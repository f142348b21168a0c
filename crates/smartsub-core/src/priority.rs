//! Essential vs. discretionary classification

use crate::models::{Category, Priority};

/// Categories treated as essential spending
pub const ESSENTIAL_CATEGORIES: &[Category] = &[
    Category::Utilities,
    Category::Productivity,
    Category::Software,
    Category::Fitness,
];

/// Map a category to its priority tier
pub fn priority(category: Category) -> Priority {
    if ESSENTIAL_CATEGORIES.contains(&category) {
        Priority::First
    } else {
        Priority::Second
    }
}
