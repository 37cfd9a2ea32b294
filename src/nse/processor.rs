use super::models::{OptionChain, OptionData};
use crate::error::{OiError, OiResult, OptionSide};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Sentiment metrics derived from one option chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolMetrics {
    pub spot: f64,
    pub pcr: f64,
    pub resistance: f64,
    pub support: f64,
}

/// Open interest keyed by strike, iterated in ascending strike order
#[derive(Debug, Clone, Default)]
pub struct StrikeOiMap {
    inner: BTreeMap<OrderedFloat<f64>, f64>,
}

impl StrikeOiMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same strike replace earlier ones
    pub fn insert(&mut self, strike: f64, open_interest: f64) {
        self.inner.insert(OrderedFloat(strike), open_interest);
    }

    pub fn get(&self, strike: f64) -> Option<f64> {
        self.inner.get(&OrderedFloat(strike)).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.inner.values().sum()
    }

    /// Strike holding the largest open interest; lowest strike wins ties
    pub fn max_strike(&self) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for (strike, &oi) in &self.inner {
            match best {
                Some((_, best_oi)) if oi <= best_oi => {}
                _ => best = Some((strike.0, oi)),
            }
        }
        best.map(|(strike, _)| strike)
    }
}

/// Split per-strike entries into call and put open interest maps
pub fn build_oi_maps(data: &[OptionData]) -> (StrikeOiMap, StrikeOiMap) {
    let mut call_oi = StrikeOiMap::new();
    let mut put_oi = StrikeOiMap::new();

    for item in data {
        if let Some(ce) = &item.call {
            call_oi.insert(item.strike_price, ce.open_interest);
        }
        if let Some(pe) = &item.put {
            put_oi.insert(item.strike_price, pe.open_interest);
        }
    }

    (call_oi, put_oi)
}

/// Round to 2 decimals, halves away from zero
pub fn round_ratio(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reduce an option chain to spot, PCR, resistance and support
pub fn compute_metrics(chain: &OptionChain) -> OiResult<SymbolMetrics> {
    let (call_oi, put_oi) = build_oi_maps(&chain.records.data);

    let resistance = call_oi
        .max_strike()
        .ok_or(OiError::EmptyOpenInterestData { side: OptionSide::Call })?;
    let support = put_oi
        .max_strike()
        .ok_or(OiError::EmptyOpenInterestData { side: OptionSide::Put })?;

    let total_call = call_oi.total();
    if total_call == 0.0 {
        return Err(OiError::EmptyOpenInterestData { side: OptionSide::Call });
    }
    let pcr = round_ratio(put_oi.total() / total_call);

    Ok(SymbolMetrics {
        spot: chain.records.underlying_value,
        pcr,
        resistance,
        support,
    })
}
