//! Spatial extent selection
//!
//! Picks the input heights and widths tested for a given window and stride.
//! The extents must be:
//!
//! - divisible by 4
//! - divisible by 2 but not by 4
//! - not divisible by 2
//!
//! and the smallest must leave room for at least two output positions along
//! the strided axis, which means it must be at least `window + stride`.

/// Candidate spatial extents for a pooling window and stride
///
/// The first value is always `window + stride`. The remaining two fill in the
/// divisibility classes the first one misses.
///
/// # Example
///
/// ```
/// use pooling_testgen::shape::candidate_extents;
///
/// assert_eq!(candidate_extents(1, 1), [2, 3, 4]);
/// assert_eq!(candidate_extents(3, 2), [5, 6, 8]);
/// ```
#[must_use]
pub const fn candidate_extents(window: usize, stride: usize) -> [usize; 3] {
    let base = window + stride;
    if base % 2 == 1 {
        // odd start: base+1 and base+3 are the two even classes
        [base, base + 1, base + 3]
    } else {
        [base, base + 1, base + 2]
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn class(extent: usize) -> u8 {
        if extent % 4 == 0 {
            0
        } else if extent % 2 == 0 {
            2
        } else {
            1
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn test_extents_distinct_classes(window in 1usize..64, stride in 1usize..64) {
            let extents = candidate_extents(window, stride);
            prop_assert_eq!(extents[0], window + stride);
            prop_assert!(extents.iter().all(|&e| e >= window + stride));

            let mut classes: Vec<u8> = extents.iter().map(|&e| class(e)).collect();
            classes.sort_unstable();
            prop_assert_eq!(classes, vec![0, 1, 2]);

            prop_assert!(extents[0] < extents[1] && extents[1] < extents[2]);
        }
    }
}
