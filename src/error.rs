//! Error type for the roster components.
//!
//! Nothing in this crate surfaces an error to the rendered view; the
//! controller logs these and falls back to a sensible state.

use thiserror::Error;

/// Errors produced while configuring or driving a roster.
#[derive(Debug, Error)]
pub enum Error {
    /// A navigation label could not be read as a page number.
    #[error("invalid page label {label:?}, expected a positive integer")]
    InvalidPageLabel {
        /// The label as received.
        label: String,
    },

    /// A configuration value is out of range.
    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The configuration document could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
