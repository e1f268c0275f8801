/// Rolling arithmetic mean over full windows of `length` values.
///
/// Positions before the first full window are NaN, as is any window that
/// contains a NaN. The output has the same length as `src`.
pub fn rolling_mean(src: &[f64], length: usize) -> Vec<f64> {
    let mut sma_values = Vec::with_capacity(src.len());

    for i in 0..src.len() {
        if length == 0 || i + 1 < length {
            sma_values.push(f64::NAN);
        } else {
            sma_values.push(window_mean(&src[i + 1 - length..=i]));
        }
    }

    sma_values
}

/// Mean of the first `length` values, the anchor of the RMA recursion.
///
/// Callers guarantee `1 <= length <= src.len()`.
pub(crate) fn seed(src: &[f64], length: usize) -> f64 {
    window_mean(&src[..length])
}

// Compensated (Kahan) summation, so long windows of similar magnitudes do not
// drift.
fn window_mean(window: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;

    for &value in window {
        if value.is_nan() {
            return f64::NAN;
        }
        let y = value - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }

    sum / window.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_mean_needs_full_window() {
        let sma_values = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert!(sma_values[0].is_nan());
        assert!(sma_values[1].is_nan());
        assert_eq!(&sma_values[2..], &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_rolling_mean_nan_window() {
        let sma_values = rolling_mean(&[1.0, f64::NAN, 3.0, 4.0, 5.0], 2);
        assert!(sma_values[1].is_nan());
        assert!(sma_values[2].is_nan());
        assert_eq!(sma_values[3], 3.5);
        assert_eq!(sma_values[4], 4.5);
    }

    #[test]
    fn test_seed() {
        assert_eq!(seed(&[2.0, 4.0, 6.0, 100.0], 3), 4.0);
        assert_eq!(seed(&[7.5], 1), 7.5);
    }
}
