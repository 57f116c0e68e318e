//! # Dynamic Betting Strategy
//! Sizes a bet from model confidence, a base amount table, market trend and the
//! outcome of the previous bet.
//!
//! ```
//! use dynamic_betting::run;
//! use serde_json::json;
//!
//! let kwargs = json!({
//!     "confidence": 0.7,
//!     "bet_amount_per_threshold": {"0.7": 100},
//!     "market_trend": 0.1,
//!     "last_bet_outcome": "loss",
//! });
//! let response = run(kwargs.as_object().unwrap());
//! assert_eq!(response.bet_amount(), Some(165));
//! ```

pub use crate::utils::error::{Error, Result};

pub mod config;
pub mod strategies;
pub mod utils;

pub use crate::config::{BetRequest, Bundle, REQUIRED_FIELDS};
pub use crate::strategies::{run, BettingStrategy, DynamicBettingStrategy, StrategyResponse};
pub use crate::utils::init_logging;
