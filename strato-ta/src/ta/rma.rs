use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TaError};
use crate::ta::ewm::{ewm_mean, EwmOptions};
use crate::ta::sma::{rolling_mean, seed};
use crate::vars::series::Series;

/// How RMA values are produced from the seed onward.
///
/// The two strategies agree on the seed and converge further out, but differ
/// in the first `length` outputs: the vectorized form weights the seed as one
/// ordinary observation of an adjusted exponential mean, while the exact form
/// carries it as the literal starting value of the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Sequential `alpha * x + (1 - alpha) * prev` starting from the seed.
    #[default]
    Exact,
    /// Rolling-mean seed followed by the raw values, smoothed with an
    /// exponentially weighted mean.
    Vectorized,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Vectorized => "vectorized",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = TaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exact" => Ok(Strategy::Exact),
            "vectorized" => Ok(Strategy::Vectorized),
            other => Err(TaError::invalid_argument(
                "strategy",
                format!("unrecognized token '{other}', expected 'exact' or 'vectorized'"),
            )),
        }
    }
}

/// Parameters of an RMA computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RmaConfig {
    /// Seed window size; the smoothing factor is `1 / length`.
    pub length: usize,
    pub strategy: Strategy,
    /// Weighting options for the vectorized strategy. Ignored by `Exact`.
    pub ewm: EwmOptions,
}

impl Default for RmaConfig {
    fn default() -> Self {
        Self {
            length: 14,
            strategy: Strategy::Exact,
            ewm: EwmOptions::default(),
        }
    }
}

impl RmaConfig {
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

    pub fn with_ewm(mut self, ewm: EwmOptions) -> Self {
        self.ewm = ewm;
        self
    }

    pub fn alpha(&self) -> f64 {
        1.0 / self.length as f64
    }

    pub fn validate(&self) -> Result<()> {
        validate_length(self.length)
    }
}

pub(crate) fn validate_length(length: usize) -> Result<()> {
    if length == 0 {
        debug!("Rejecting zero window length");
        return Err(TaError::invalid_argument("length", "must be at least 1"));
    }
    Ok(())
}

fn check_input(len: usize, length: usize) -> Result<()> {
    validate_length(length)?;
    if len < length {
        debug!("Rejecting RMA input of {} values for length {}", len, length);
        return Err(TaError::InsufficientData {
            required: length,
            actual: len,
        });
    }
    Ok(())
}

/// RMA by direct recursion from the seed.
///
/// Returns `src.len() - length + 1` values; value `k` lines up with input
/// position `length - 1 + k`.
///
/// https://www.tradingview.com/pine-script-reference/v5/#fun_ta.rma
pub fn rma_exact(src: &[f64], length: usize) -> Result<Vec<f64>> {
    check_input(src.len(), length)?;

    let alpha = 1.0 / length as f64;
    let initial_sma = seed(src, length);
    let mut rma_values = Vec::with_capacity(src.len() - length + 1);
    rma_values.push(initial_sma);

    src[length..].iter().fold(initial_sma, |prev_rma, &v| {
        let new_rma = alpha * v + (1.0 - alpha) * prev_rma;
        rma_values.push(new_rma);
        new_rma
    });

    Ok(rma_values)
}

/// RMA as an exponentially weighted mean over `[rolling mean seed, rest..]`.
///
/// Output alignment matches [`rma_exact`]. The first value is the seed; the
/// following `length - 1` values differ from the exact recursion because the
/// weighting normalises by the accumulated weight.
pub fn rma_vectorized(src: &[f64], length: usize, options: &EwmOptions) -> Result<Vec<f64>> {
    check_input(src.len(), length)?;

    let alpha = 1.0 / length as f64;
    let mut combined = rolling_mean(&src[..length], length);
    combined.extend_from_slice(&src[length..]);

    let mut smoothed = ewm_mean(&combined, alpha, options);
    Ok(smoothed.split_off(length - 1))
}

/// Relative Moving Average of `source` using `strategy`.
///
/// Fails with [`TaError::InvalidArgument`] for a zero `length` and with
/// [`TaError::InsufficientData`] when `source` has fewer than `length` values.
/// The result starts at input position `length - 1` and keeps its index keys.
pub fn rma<K: Clone>(source: &Series<K>, length: usize, strategy: Strategy) -> Result<Series<K>> {
    rma_with(source, &RmaConfig::new(length).with_strategy(strategy))
}

/// Like [`rma`], with the strategy given by its token (`"exact"` or
/// `"vectorized"`).
pub fn rma_by_name<K: Clone>(source: &Series<K>, length: usize, strategy: &str) -> Result<Series<K>> {
    let strategy = strategy.parse::<Strategy>()?;
    rma(source, length, strategy)
}

pub fn rma_with<K: Clone>(source: &Series<K>, config: &RmaConfig) -> Result<Series<K>> {
    config.validate()?;
    debug!(
        "Computing {} RMA over {} values with length {}",
        config.strategy,
        source.len(),
        config.length
    );

    let values = match config.strategy {
        Strategy::Exact => rma_exact(source.values(), config.length)?,
        Strategy::Vectorized => rma_vectorized(source.values(), config.length, &config.ewm)?,
    };

    Ok(source.realign(config.length - 1, values)?.with_name("RMA"))
}
