//! Configuration loading
//!
//! Config is loaded with a three-step resolution:
//! 1. An explicit path (e.g. `--config`), if it exists
//! 2. The override in the data dir (~/.local/share/smartsub/config.toml)
//! 3. The embedded defaults (compiled into binary)
//!
//! A `[[categories]]` table in the file replaces the built-in keyword rules
//! wholesale, in file order.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::categorize::{CategoryRules, KeywordRule};
use crate::error::{Error, Result};
use crate::insights::InsightSettings;
use crate::models::Category;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/smartsub.toml");

/// Data file used when no config names one
pub const DEFAULT_DATA_FILE: &str = "subscriptions_data.csv";

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Flat file holding the subscription records
    pub data_file: PathBuf,
    /// Settings for insight generation
    pub insights: InsightSettings,
    /// Keyword rules for category suggestions
    pub rules: CategoryRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            insights: InsightSettings::default(),
            rules: CategoryRules::default(),
        }
    }
}

impl Config {
    /// Load configuration (explicit path, then data dir override, then defaults)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let candidates = override_path
            .map(Path::to_path_buf)
            .into_iter()
            .chain(default_config_path());

        for path in candidates {
            if path.exists() {
                debug!(path = %path.display(), "Loading config");
                let content = fs::read_to_string(&path)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
                return parse_config(&content);
            }
        }

        parse_config(DEFAULT_CONFIG)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("smartsub").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    defaults: Option<RawDefaults>,
    categories: Option<Vec<RawCategoryRule>>,
}

#[derive(Debug, Deserialize)]
struct RawDefaults {
    data_file: Option<PathBuf>,
    currency: Option<String>,
    renewal_window_days: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawCategoryRule {
    category: String,
    keywords: Vec<String>,
}

/// Parse config TOML on top of the built-in defaults
pub fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(defaults) = raw.defaults {
        if let Some(data_file) = defaults.data_file {
            config.data_file = data_file;
        }
        if let Some(currency) = defaults.currency {
            config.insights.currency = currency;
        }
        if let Some(days) = defaults.renewal_window_days {
            if days < 0 {
                return Err(Error::Config(format!(
                    "renewal_window_days must not be negative (got {})",
                    days
                )));
            }
            config.insights.renewal_window_days = days;
        }
    }

    if let Some(categories) = raw.categories {
        let rules = categories
            .into_iter()
            .map(|rule| {
                let category: Category = rule.category.parse().map_err(Error::Config)?;
                Ok(KeywordRule::new(category, rule.keywords))
            })
            .collect::<Result<Vec<_>>>()?;
        config.rules = CategoryRules::new(rules);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_config_matches_builtin_rules() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.rules, CategoryRules::default());
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.insights.currency, "₹");
        assert_eq!(config.insights.renewal_window_days, 2);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.rules, CategoryRules::default());
        assert_eq!(config.insights, InsightSettings::default());
    }

    #[test]
    fn test_partial_defaults() {
        let config = parse_config(
            r#"
[defaults]
currency = "$"
"#,
        )
        .unwrap();
        assert_eq!(config.insights.currency, "$");
        assert_eq!(config.insights.renewal_window_days, 2);
    }

    #[test]
    fn test_category_rules_replace_builtin() {
        let config = parse_config(
            r#"
[[categories]]
category = "Shopping"
keywords = ["prime"]

[[categories]]
category = "entertainment"
keywords = ["netflix"]
"#,
        )
        .unwrap();

        assert_eq!(config.rules.rules().len(), 2);
        assert_eq!(config.rules.categorize("Amazon Prime"), Category::Shopping);
        assert_eq!(config.rules.categorize("Spotify"), Category::Uncategorized);
    }

    #[test]
    fn test_unknown_category_is_error() {
        let result = parse_config(
            r#"
[[categories]]
category = "groceries"
keywords = ["kroger"]
"#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_negative_window_is_error() {
        let result = parse_config("[defaults]\nrenewal_window_days = -1\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(parse_config("[defaults"), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\ndata_file = \"subs.csv\"\nrenewal_window_days = 5").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.data_file, PathBuf::from("subs.csv"));
        assert_eq!(config.insights.renewal_window_days, 5);
    }
}
