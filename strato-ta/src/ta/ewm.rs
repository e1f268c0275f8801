#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weighting options for [`ewm_mean`].
///
/// The defaults reproduce `pandas.Series.ewm(alpha=..).mean()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EwmOptions {
    /// Divide by the decaying sum of weights instead of using the plain
    /// recursion `alpha * x + (1 - alpha) * prev`.
    pub adjust: bool,
    /// Skip NaN values entirely instead of letting them age the weights.
    pub ignore_na: bool,
    /// Observations required before a value is emitted. Zero behaves as one.
    pub min_periods: usize,
}

impl Default for EwmOptions {
    fn default() -> Self {
        Self {
            adjust: true,
            ignore_na: false,
            min_periods: 0,
        }
    }
}

impl EwmOptions {
    pub fn with_adjust(mut self, adjust: bool) -> Self {
        self.adjust = adjust;
        self
    }

    pub fn with_ignore_na(mut self, ignore_na: bool) -> Self {
        self.ignore_na = ignore_na;
        self
    }

    pub fn with_min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = min_periods;
        self
    }
}

/// Exponentially weighted mean with smoothing factor `alpha` in `(0, 1]`.
///
/// Leading NaN values produce NaN until the first observation, which becomes
/// the starting value with weight one. With `adjust` the running value after
/// `k` further observations is the weighted average
/// `sum((1 - alpha)^(k - j) * x[j]) / sum((1 - alpha)^(k - j))`.
pub fn ewm_mean(src: &[f64], alpha: f64, options: &EwmOptions) -> Vec<f64> {
    let Some((&first, rest)) = src.split_first() else {
        return Vec::new();
    };

    let min_periods = options.min_periods.max(1);
    let old_wt_factor = 1.0 - alpha;
    let new_wt = if options.adjust { 1.0 } else { alpha };

    let mut ewm = Vec::with_capacity(src.len());
    let mut weighted = first;
    let mut nobs = usize::from(!first.is_nan());
    let mut old_wt = 1.0;
    ewm.push(if nobs >= min_periods { weighted } else { f64::NAN });

    for &cur in rest {
        let is_observation = !cur.is_nan();
        nobs += usize::from(is_observation);

        if !weighted.is_nan() {
            if is_observation || !options.ignore_na {
                old_wt *= old_wt_factor;
                if is_observation {
                    // Equal values leave the mean unchanged; skipping the
                    // update keeps constant inputs exactly constant.
                    if weighted != cur {
                        weighted = (old_wt * weighted + new_wt * cur) / (old_wt + new_wt);
                    }
                    if options.adjust {
                        old_wt += new_wt;
                    } else {
                        old_wt = 1.0;
                    }
                }
            }
        } else if is_observation {
            weighted = cur;
        }

        ewm.push(if nobs >= min_periods { weighted } else { f64::NAN });
    }

    ewm
}
