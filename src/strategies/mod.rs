//! Betting strategies.
//!
//! Every strategy takes a keyword bundle and answers with either a bet amount
//! or a single error message.

mod dynamic_betting;

pub use dynamic_betting::{
    check_missing_fields, dynamic_bet_amount, remove_irrelevant_fields, run, threshold_key,
    DynamicBettingStrategy, LOSS_MULTIPLIER, LOSS_OUTCOME,
};

use crate::config::Bundle;
use serde::{Deserialize, Serialize};

/// Trait for all betting strategies
pub trait BettingStrategy: Send + Sync {
    /// Get the name of the strategy
    fn name(&self) -> &str;

    /// Evaluate the strategy against a keyword bundle
    fn run(&self, kwargs: &Bundle) -> StrategyResponse;

    fn box_clone(&self) -> Box<dyn BettingStrategy>;
}

impl Clone for Box<dyn BettingStrategy> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Result of a strategy run.
///
/// Serializes to `{"bet_amount": 110}` or `{"error": ["message"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyResponse {
    BetAmount(i64),
    Error((String,)),
}

impl StrategyResponse {
    pub fn error(message: impl Into<String>) -> Self {
        StrategyResponse::Error((message.into(),))
    }

    pub fn bet_amount(&self) -> Option<i64> {
        match self {
            | StrategyResponse::BetAmount(amount) => Some(*amount),
            | StrategyResponse::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            | StrategyResponse::BetAmount(_) => None,
            | StrategyResponse::Error((message,)) => Some(message.as_str()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StrategyResponse::Error(_))
    }
}

impl From<crate::Result<i64>> for StrategyResponse {
    fn from(result: crate::Result<i64>) -> Self {
        match result {
            | Ok(amount) => StrategyResponse::BetAmount(amount),
            | Err(e) => StrategyResponse::error(e.to_string()),
        }
    }
}
