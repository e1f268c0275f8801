#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, TaError};
use crate::ta::rma::{rma_with, validate_length, RmaConfig, Strategy};
use crate::vars::series::Series;

/// Parameters of an RSI computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsiConfig {
    /// Window length of both underlying RMA computations.
    pub length: usize,
    /// Strategy of both underlying RMA computations.
    pub strategy: Strategy,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            length: 14,
            strategy: Strategy::Exact,
        }
    }
}

impl RsiConfig {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_length(self.length)
    }
}

/// Splits a delta series into its upward and downward moves.
///
/// `upward = max(delta, 0)` and `downward = max(-delta, 0)`; NaN deltas stay
/// NaN in both.
pub fn directional_moves<K: Clone>(delta: &Series<K>) -> (Series<K>, Series<K>) {
    let upward = delta.map(|d| clip_lower(d, 0.0));
    let downward = delta.map(|d| clip_lower(-d, 0.0));
    (upward, downward)
}

fn clip_lower(value: f64, floor: f64) -> f64 {
    if value < floor {
        floor
    } else {
        value
    }
}

/// Relative Strength Index of `source` with the exact RMA strategy.
///
/// Needs at least `length + 1` values. The result starts at input position
/// `length`. A window without downward moves yields exactly 100, one without
/// upward moves exactly 0, and a window with neither yields NaN.
///
/// https://www.tradingview.com/pine-script-reference/v5/#fun_ta.rsi
pub fn rsi<K: Clone + PartialEq>(source: &Series<K>, length: usize) -> Result<Series<K>> {
    rsi_with(source, &RsiConfig::new(length))
}

pub fn rsi_with<K: Clone + PartialEq>(source: &Series<K>, config: &RsiConfig) -> Result<Series<K>> {
    config.validate()?;

    let required = config.length + 1;
    if source.len() < required {
        debug!(
            "Rejecting RSI input of {} values for length {}",
            source.len(),
            config.length
        );
        return Err(TaError::InsufficientData {
            required,
            actual: source.len(),
        });
    }

    let delta = source.diff();
    let (upward, downward) = directional_moves(&delta);

    let rma_config = RmaConfig::new(config.length).with_strategy(config.strategy);
    let up_rma = rma_with(&upward, &rma_config)?;
    let down_rma = rma_with(&downward, &rma_config)?;
    trace!(
        "RSI smoothing produced {} upward and {} downward values",
        up_rma.len(),
        down_rma.len()
    );

    // Both RMAs come from the same delta index and length, so their keys match.
    let rsi = up_rma.zip_with(&down_rma, |up, down| {
        let relative_strength = up / down;
        100.0 - 100.0 / (1.0 + relative_strength)
    })?;

    debug!(
        "Computed RSI over {} values with length {}: {} outputs",
        source.len(),
        config.length,
        rsi.len()
    );

    Ok(rsi.with_name("RSI"))
}
