//! Error handling for the betting strategy.

use std::collections::BTreeMap;
use thiserror::Error;

/// Main error type for the betting strategy
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required fields were absent or null
    #[error("Required kwargs {} were not provided.", render_list(.0))]
    MissingFields(Vec<&'static str>),

    /// The rounded confidence has no entry in the base amount table
    #[error(
        "No amount was found in bet_amount_per_threshold={} for confidence={:?}.",
        render_table(.table),
        .confidence
    )]
    ThresholdLookup {
        table: BTreeMap<String, i64>,
        confidence: f64,
    },

    /// A field was present but had the wrong type or a non-finite value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type for the betting strategy
pub type Result<T> = std::result::Result<T, Error>;

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

// ['a', 'b']
fn render_list(items: &[&str]) -> String {
    let inner: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", inner.join(", "))
}

// {'0.7': 100, '0.8': 150}
fn render_table(table: &BTreeMap<String, i64>) -> String {
    let inner: Vec<String> = table
        .iter()
        .map(|(k, v)| format!("{}: {}", quote(k), v))
        .collect();
    format!("{{{}}}", inner.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let err = Error::MissingFields(vec!["market_trend", "last_bet_outcome"]);
        assert_eq!(
            err.to_string(),
            "Required kwargs ['market_trend', 'last_bet_outcome'] were not provided."
        );
    }

    #[test]
    fn test_threshold_lookup_display() {
        let mut table = BTreeMap::new();
        table.insert("0.8".to_string(), 150);
        table.insert("0.7".to_string(), 100);
        let err = Error::ThresholdLookup { table, confidence: 0.9 };
        assert_eq!(
            err.to_string(),
            "No amount was found in bet_amount_per_threshold={'0.7': 100, '0.8': 150} for confidence=0.9."
        );
    }

    #[test]
    fn test_empty_table_display() {
        let err = Error::ThresholdLookup { table: BTreeMap::new(), confidence: 1.0 };
        assert_eq!(
            err.to_string(),
            "No amount was found in bet_amount_per_threshold={} for confidence=1.0."
        );
    }

    #[test]
    fn test_error_display() {
        let config_error = Error::ConfigError("unsupported value".to_string());
        assert_eq!(config_error.to_string(), "Configuration error: unsupported value");

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let wrapped_io_error = Error::from(io_error);
        assert!(wrapped_io_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("it's"), "'it\\'s'");
    }
}
