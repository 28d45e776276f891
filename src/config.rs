//! Roster configuration.
//!
//! Every field has a default, so a config document only needs the values it
//! wants to change:
//!
//! ```rust
//! use roster_pager::config::Config;
//!
//! let config = Config::from_json(r#"{ "per_page": 5, "item_plural": "Members" }"#).unwrap();
//! assert_eq!(config.per_page, 5);
//! assert_eq!(config.item_singular, "Student");
//! assert_eq!(config.item_plural, "Members");
//! ```

use crate::error::{Error, Result};
use crate::filter::MatchMode;
use serde::{Deserialize, Serialize};

/// Number of entries shown per page unless configured otherwise.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Settings for a roster [`Roster`](crate::Roster).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entries per page. Must be at least 1.
    pub per_page: usize,
    /// Noun used in the heading when exactly one entry is listed.
    pub item_singular: String,
    /// Noun used in the heading for any other count.
    pub item_plural: String,
    /// Placeholder shown in the empty search bar.
    pub placeholder: String,
    /// Label of the search button.
    pub button_label: String,
    /// How the search text is matched against entries.
    pub match_mode: MatchMode,
    /// Whether the search bar is mounted at all.
    pub show_search_bar: bool,
    /// Whether the key help footer is rendered.
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            item_singular: "Student".to_string(),
            item_plural: "Students".to_string(),
            placeholder: "Search for students...".to_string(),
            button_label: "Search".to_string(),
            match_mode: MatchMode::default(),
            show_search_bar: true,
            show_help: true,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed JSON and
    /// [`Error::InvalidConfig`] for out-of-range values.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::InvalidConfig {
                field: "per_page",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Sets entries per page (builder pattern). Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the heading nouns (builder pattern).
    pub fn with_item_names(mut self, singular: &str, plural: &str) -> Self {
        self.item_singular = singular.to_string();
        self.item_plural = plural.to_string();
        self
    }

    /// Sets the search placeholder (builder pattern).
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// Sets the match mode (builder pattern).
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Mounts or omits the search bar (builder pattern).
    pub fn with_search_bar(mut self, show: bool) -> Self {
        self.show_search_bar = show;
        self
    }

    /// Shows or hides the help footer (builder pattern).
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.per_page, 10);
        assert_eq!(config.item_singular, "Student");
        assert_eq!(config.item_plural, "Students");
        assert_eq!(config.placeholder, "Search for students...");
        assert_eq!(config.button_label, "Search");
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert!(config.show_search_bar);
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "match_mode": "fuzzy", "show_help": false }"#).unwrap();
        assert_eq!(config.match_mode, MatchMode::Fuzzy);
        assert!(!config.show_help);
        assert_eq!(config.per_page, 10);
    }

    #[test]
    fn test_from_json_rejects_zero_per_page() {
        let err = Config::from_json(r#"{ "per_page": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { field: "per_page", .. }));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Config::from_json("not json"),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_builder_clamps_per_page() {
        assert_eq!(Config::new().with_per_page(0).per_page, 1);
    }
}
