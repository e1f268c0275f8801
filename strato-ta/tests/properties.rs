//! Property tests for the RMA and RSI invariants.

use proptest::prelude::*;
use strato_ta::Strategy as Smoothing;
use strato_ta::{rma, rsi, Series};

/// Finite prices in a plausible range.
fn prices(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..10_000.0, min_len..=max_len)
}

/// A walk whose every step moves the price, so no window is flat.
fn moving_prices(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    let step = prop_oneof![0.01f64..5.0, -5.0f64..-0.01];
    prop::collection::vec(step, min_len..=max_len).prop_map(|steps| {
        let mut price = 1_000.0;
        steps
            .into_iter()
            .map(|s| {
                price += s;
                price
            })
            .collect()
    })
}

fn smoothing() -> impl Strategy<Value = Smoothing> {
    prop_oneof![Just(Smoothing::Exact), Just(Smoothing::Vectorized)]
}

proptest! {
    #[test]
    fn rma_output_is_aligned(
        values in prices(1, 120),
        length in 1usize..30,
        strategy in smoothing(),
    ) {
        prop_assume!(values.len() >= length);
        let source = Series::from(values.clone());
        let result = rma(&source, length, strategy).unwrap();

        prop_assert_eq!(result.len(), values.len() - length + 1);
        let expected_index: Vec<usize> = (length - 1..values.len()).collect();
        prop_assert_eq!(result.index(), expected_index.as_slice());
    }

    #[test]
    fn exact_rma_follows_recurrence(values in prices(2, 120), length in 1usize..30) {
        prop_assume!(values.len() >= length);
        let alpha = 1.0 / length as f64;
        let result = rma(&Series::from(values.clone()), length, Smoothing::Exact).unwrap();
        let out = result.values();

        for k in 1..out.len() {
            prop_assert_eq!(out[k], alpha * values[length + k - 1] + (1.0 - alpha) * out[k - 1]);
        }
    }

    #[test]
    fn rma_stays_within_input_range(
        values in prices(1, 120),
        length in 1usize..30,
        strategy in smoothing(),
    ) {
        prop_assume!(values.len() >= length);
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let result = rma(&Series::from(values), length, strategy).unwrap();

        for &v in result.values() {
            prop_assert!(v >= lo - 1e-6 && v <= hi + 1e-6, "{} outside [{}, {}]", v, lo, hi);
        }
    }

    #[test]
    fn rsi_is_bounded(values in moving_prices(2, 150), length in 1usize..30) {
        prop_assume!(values.len() > length);
        let result = rsi(&Series::from(values.clone()), length).unwrap();

        prop_assert_eq!(result.len(), values.len() - length);
        for &v in result.values() {
            prop_assert!((0.0..=100.0).contains(&v), "rsi {} out of bounds", v);
        }
    }

    #[test]
    fn rma_is_bit_identical_across_calls(
        values in prices(1, 80),
        length in 1usize..20,
        strategy in smoothing(),
    ) {
        prop_assume!(values.len() >= length);
        let source = Series::from(values);
        let first = rma(&source, length, strategy).unwrap();
        let second = rma(&source, length, strategy).unwrap();

        let first_bits: Vec<u64> = first.values().iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u64> = second.values().iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(first_bits, second_bits);
    }
}
