//! Keyword categorizer for service names
//!
//! Categorization is deterministic substring matching over an ordered rule
//! table. Rules are checked top to bottom and the first category with a
//! keyword contained in the lower-cased name wins, so the table order is the
//! precedence order. "prime" is a keyword of both Entertainment and Shopping;
//! Entertainment comes first, so "Amazon Prime" is Entertainment.
//!
//! ## Usage
//!
//! ```rust
//! use smartsub_core::categorize::{categorize, CategoryRules, KeywordRule};
//! use smartsub_core::models::Category;
//!
//! assert_eq!(categorize("Netflix"), Category::Entertainment);
//!
//! let mut rules = CategoryRules::default();
//! rules.insert(0, KeywordRule::new(Category::Fitness, ["prime"]));
//! assert_eq!(rules.categorize("Amazon Prime"), Category::Fitness);
//! ```

use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::models::Category;

/// One row of the rule table: a category and the keywords that select it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRule {
    pub category: Category,
    /// Lower-cased substrings
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// Create a rule; keywords are lower-cased and blank ones dropped
    pub fn new<I, S>(category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { category, keywords }
    }

    /// First keyword contained in an already lower-cased name
    fn matched_keyword(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(|k| k.as_str())
    }
}

/// Which rule and keyword selected a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    pub category: Category,
    pub keyword: String,
    /// Position of the winning rule in the table
    pub precedence: usize,
}

/// Ordered keyword rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRules {
    rules: Vec<KeywordRule>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::new(vec![
            KeywordRule::new(
                Category::Entertainment,
                ["netflix", "hulu", "disney", "hbo", "prime", "cinema", "youtube", "tv"],
            ),
            KeywordRule::new(
                Category::Music,
                ["spotify", "apple music", "tidal", "deezer", "pandora", "music", "sound"],
            ),
            KeywordRule::new(
                Category::Productivity,
                [
                    "notion", "evernote", "todoist", "linear", "jira", "slack", "zoom", "office",
                    "microsoft",
                ],
            ),
            KeywordRule::new(
                Category::Utilities,
                [
                    "internet", "electric", "water", "gas", "mobile", "phone", "verizon", "at&t",
                    "t-mobile",
                ],
            ),
            KeywordRule::new(
                Category::Software,
                [
                    "adobe", "figma", "github", "gitlab", "aws", "cloud", "hosting", "domain",
                    "chatgpt", "openai",
                ],
            ),
            KeywordRule::new(
                Category::Fitness,
                ["gym", "fitness", "yoga", "peloton", "strava", "health", "myfitnesspal"],
            ),
            KeywordRule::new(
                Category::Shopping,
                ["amazon", "walmart", "costco", "prime", "delivery", "uber"],
            ),
        ])
    }
}

impl CategoryRules {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Rules in precedence order
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Append a rule with the lowest precedence
    pub fn push(&mut self, rule: KeywordRule) {
        self.rules.push(rule);
    }

    /// Insert a rule at an explicit precedence position (0 = checked first)
    ///
    /// Positions past the end append.
    pub fn insert(&mut self, position: usize, rule: KeywordRule) {
        let position = position.min(self.rules.len());
        self.rules.insert(position, rule);
    }

    /// Suggest a category for a service name
    pub fn categorize(&self, name: &str) -> Category {
        self.explain(name)
            .map(|m| m.category)
            .unwrap_or(Category::Uncategorized)
    }

    /// Like [`categorize`](Self::categorize), but reports the winning rule
    ///
    /// Returns `None` when nothing matched (the name is Uncategorized).
    pub fn explain(&self, name: &str) -> Option<RuleMatch> {
        let lowered = name.to_lowercase();
        let found = self.rules.iter().enumerate().find_map(|(i, rule)| {
            rule.matched_keyword(&lowered).map(|keyword| RuleMatch {
                category: rule.category,
                keyword: keyword.to_string(),
                precedence: i,
            })
        });

        debug!(
            service = name,
            category = ?found.as_ref().map(|m| m.category),
            "Categorized service"
        );
        found
    }
}

/// The built-in rule table
pub fn default_rules() -> &'static CategoryRules {
    static RULES: OnceLock<CategoryRules> = OnceLock::new();
    RULES.get_or_init(CategoryRules::default)
}

/// Suggest a category using the built-in rule table
pub fn categorize(name: &str) -> Category {
    default_rules().categorize(name)
}
