//! Deterministic synthetic input data
//!
//! The consuming test fixture rebuilds the same input from the element count
//! and `max_input_val` alone, so this must stay a pure function of those two
//! values.

/// Arithmetic progression of `count` values scaled into `(0, max_val]`
///
/// Element `i` is `(i + 1) * max_val / count`. The sequence is strictly
/// increasing for positive `max_val` and its last element is `max_val`.
///
/// # Example
///
/// ```
/// use pooling_testgen::oracle::sequence::tensor_data;
///
/// assert_eq!(tensor_data(4, 8.0), vec![2.0, 4.0, 6.0, 8.0]);
/// ```
#[must_use]
pub fn tensor_data(count: usize, max_val: f64) -> Vec<f64> {
    let n = count as f64;
    (1..=count).map(|i| i as f64 * max_val / n).collect()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_strictly_increasing_and_bounded(count in 1usize..5000, exp in 0i32..26) {
            let max_val = 2f64.powi(exp);
            let data = tensor_data(count, max_val);
            prop_assert_eq!(data.len(), count);
            prop_assert!(data.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(data.iter().all(|&v| v > 0.0 && v <= max_val));
            prop_assert_eq!(*data.last().unwrap(), max_val);
        }
    }
}
