//! Dynamic bet sizing.
//!
//! Looks up a base amount by rounded confidence, scales it by the market trend
//! and raises it after a losing bet:
//!
//! amount = trunc(base[round(confidence, 1)] * (1 + market_trend) * (1.5 if last bet lost))

use super::{BettingStrategy, StrategyResponse};
use crate::config::{BetRequest, Bundle, REQUIRED_FIELDS};
use crate::utils::error::{Error, Result};
use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Outcome label that triggers the loss multiplier (exact, case-sensitive).
pub const LOSS_OUTCOME: &str = "loss";

/// Multiplier applied after a losing bet.
pub const LOSS_MULTIPLIER: f64 = 1.5;

/// Required fields that are absent or null, in canonical order.
/// Empty strings, zeros and empty tables count as present.
pub fn check_missing_fields(kwargs: &Bundle) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| kwargs.get(*field).map_or(true, |v| v.is_null()))
        .collect()
}

/// Copy of `kwargs` holding only the required fields.
pub fn remove_irrelevant_fields(kwargs: &Bundle) -> Bundle {
    kwargs
        .iter()
        .filter(|(key, _)| REQUIRED_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Table key for a confidence value: the exact binary value rounded half-to-even
/// to one decimal, always printed with one fractional digit ("0.7", "1.0").
/// Negative values that round to zero keep their sign ("-0.0").
pub fn threshold_key(confidence: f64) -> Result<String> {
    let exact = Decimal::from_f64_retain(confidence).ok_or_else(|| {
        Error::InvalidInput(format!("confidence {} cannot be used as a threshold", confidence))
    })?;
    let rounded = exact.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() && confidence.is_sign_negative() {
        return Ok("-0.0".to_string());
    }
    Ok(format!("{:.1}", rounded))
}

/// Adjust the base bet amount for the confidence threshold by market trend and
/// the previous outcome. Negative trends below -1.0 yield negative amounts.
pub fn dynamic_bet_amount(
    confidence: f64,
    bet_amount_per_threshold: &BTreeMap<String, i64>,
    market_trend: f64,
    last_bet_outcome: &str,
) -> Result<i64> {
    let threshold = threshold_key(confidence)?;
    let base = match bet_amount_per_threshold.get(&threshold) {
        | Some(base) => *base,
        | None => {
            return Err(Error::ThresholdLookup {
                table: bet_amount_per_threshold.clone(),
                confidence,
            })
        }
    };

    let mut adjusted = base as f64 * (1.0 + market_trend);
    if last_bet_outcome == LOSS_OUTCOME {
        adjusted *= LOSS_MULTIPLIER;
    }

    if !adjusted.is_finite() || adjusted >= i64::MAX as f64 || adjusted < i64::MIN as f64 {
        return Err(Error::InvalidInput(format!(
            "adjusted bet amount {} is out of range",
            adjusted
        )));
    }
    let amount = adjusted.trunc() as i64;
    debug!(
        "threshold={} base={} trend={} outcome={:?} -> bet_amount={}",
        threshold, base, market_trend, last_bet_outcome, amount
    );
    Ok(amount)
}

fn evaluate(kwargs: &Bundle) -> Result<i64> {
    let missing = check_missing_fields(kwargs);
    if !missing.is_empty() {
        return Err(Error::MissingFields(missing));
    }

    let request = BetRequest::from_fields(remove_irrelevant_fields(kwargs))?;
    dynamic_bet_amount(
        request.confidence,
        &request.bet_amount_per_threshold,
        request.market_trend,
        &request.last_bet_outcome,
    )
}

/// Run the strategy. Unknown keys are ignored; every failure is reported as
/// a single error message rather than propagated.
pub fn run(kwargs: &Bundle) -> StrategyResponse {
    let result = evaluate(kwargs);
    if let Err(e) = &result {
        warn!("dynamic betting strategy rejected input: {}", e);
    }
    result.into()
}

/// Stateless [`BettingStrategy`] wrapper around [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicBettingStrategy;

impl DynamicBettingStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl BettingStrategy for DynamicBettingStrategy {
    fn name(&self) -> &str {
        "dynamic_betting_strategy"
    }

    fn run(&self, kwargs: &Bundle) -> StrategyResponse {
        run(kwargs)
    }

    fn box_clone(&self) -> Box<dyn BettingStrategy> {
        Box::new(*self)
    }
}
