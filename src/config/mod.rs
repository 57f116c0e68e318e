//! Input configuration for the betting strategy.
//!
//! Callers hand the strategy a loosely-typed bundle of named values. This module
//! owns the typed record those values are deserialized into, and helpers that
//! read a bundle from a TOML or JSON file so file-supplied inputs go through the
//! same validation path as in-memory ones.

use crate::utils::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Keyword bundle accepted by a strategy's `run`.
pub type Bundle = Map<String, Value>;

/// Fields every bundle must carry, in canonical order.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "confidence",
    "bet_amount_per_threshold",
    "market_trend",
    "last_bet_outcome",
];

/// Strongly-typed strategy inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRequest {
    /// Model certainty, expected in [0.0, 1.0]
    pub confidence: f64,

    /// Signed trend multiplier; positive means favorable
    pub market_trend: f64,

    /// Outcome label of the previous bet; only "loss" changes the result
    pub last_bet_outcome: String,

    /// Base bet amount keyed by one-decimal threshold string (e.g. "0.7").
    /// Kept last so it serializes as a trailing TOML table.
    pub bet_amount_per_threshold: BTreeMap<String, i64>,
}

impl BetRequest {
    pub fn new(
        confidence: f64,
        bet_amount_per_threshold: BTreeMap<String, i64>,
        market_trend: f64,
        last_bet_outcome: impl Into<String>,
    ) -> Self {
        Self {
            confidence,
            market_trend,
            last_bet_outcome: last_bet_outcome.into(),
            bet_amount_per_threshold,
        }
    }

    /// Deserialize and validate a bundle that has already been checked for
    /// missing fields and stripped of unknown ones.
    pub fn from_fields(fields: Bundle) -> Result<Self> {
        let request: Self = serde_json::from_value(Value::Object(fields))
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }

    /// Reject numeric inputs that cannot produce a bet amount.
    pub fn validate(&self) -> Result<()> {
        if !self.confidence.is_finite() {
            return Err(Error::InvalidInput(format!(
                "confidence must be finite, got {}",
                self.confidence
            )));
        }
        if !self.market_trend.is_finite() {
            return Err(Error::InvalidInput(format!(
                "market_trend must be finite, got {}",
                self.market_trend
            )));
        }
        Ok(())
    }

    /// Convert back into a keyword bundle.
    pub fn to_bundle(&self) -> Result<Bundle> {
        match serde_json::to_value(self)? {
            | Value::Object(map) => Ok(map),
            | other => Err(Error::InvalidInput(format!("expected an object, got {other}"))),
        }
    }

    /// Save the request as TOML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize bet request: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Parse a TOML document into a keyword bundle.
pub fn bundle_from_toml_str(content: &str) -> Result<Bundle> {
    Ok(toml::from_str(content)?)
}

/// Load a keyword bundle from disk. Files ending in `.json` are read as JSON,
/// everything else as TOML.
pub fn bundle_from_file<P: AsRef<Path>>(path: P) -> Result<Bundle> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        bundle_from_toml_str(&content)
    }
}
