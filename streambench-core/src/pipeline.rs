//! Pipeline Variants
//!
//! Three ways to compute the same thing from a sample: keep the even values,
//! drop duplicates, double them and sort ascending. They differ only in step
//! order and technique, which is exactly what the benchmark measures.
//!
//! Doubling widens to `i64`, so it is injective over every `i32` and the
//! variants agree on any input, negative values included.

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

#[inline]
fn double(value: i32) -> i64 {
    i64::from(value) * 2
}

#[inline]
fn is_even(value: i64) -> bool {
    value % 2 == 0
}

/// Whether a doubled value came from an even input (`2x` with `x` even).
#[inline]
fn doubled_from_even(value: i64) -> bool {
    value % 4 == 0
}

/// Double, sort, dedup, then filter evens.
///
/// Sorting and dedup run over the full input before anything is discarded.
/// Parity is tested on the value before doubling; `v % 2` on a doubled value
/// would keep every element and let doubled odds through.
pub fn unoptimized_pipeline(numbers: &[i32]) -> Vec<i64> {
    let mut doubled: Vec<i64> = numbers.iter().copied().map(double).collect();
    doubled.sort_unstable();
    doubled.dedup();
    doubled.into_iter().filter(|&v| doubled_from_even(v)).collect()
}

/// Filter evens, dedup, double, then sort.
///
/// Shrinks the working set before the expensive steps. Dedup keeps the first
/// occurrence of each value.
pub fn optimized_pipeline(numbers: &[i32]) -> Vec<i64> {
    let mut seen = FxHashSet::default();
    let mut result: Vec<i64> = numbers
        .iter()
        .copied()
        .filter(|&v| is_even(i64::from(v)))
        .filter(|&v| seen.insert(v))
        .map(double)
        .collect();
    result.sort_unstable();
    result
}

/// Hand-written loop: insert each doubled even value into a set, then copy
/// the set out and sort it.
pub fn for_loop_pipeline(numbers: &[i32]) -> Vec<i64> {
    let mut unique = FxHashSet::default();
    for &n in numbers {
        if n % 2 == 0 {
            unique.insert(double(n));
        }
    }

    let mut result = Vec::with_capacity(unique.len());
    result.extend(unique);
    result.sort_unstable();
    result
}

/// One of the benchmarked pipeline implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Double, sort, dedup, filter
    Unoptimized,
    /// Filter, dedup, double, sort (the baseline)
    Optimized,
    /// Explicit loop with set-based dedup
    ForLoop,
}

impl Variant {
    /// Every variant, in the order each trial runs them
    pub const ALL: [Variant; 3] = [Variant::Unoptimized, Variant::Optimized, Variant::ForLoop];

    /// Variant all others are compared against
    pub const BASELINE: Variant = Variant::Optimized;

    /// Stable identifier used in reports
    pub fn id(self) -> &'static str {
        match self {
            Variant::Unoptimized => "unoptimized",
            Variant::Optimized => "optimized",
            Variant::ForLoop => "for-loop",
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Variant::Unoptimized => "unoptimized pipeline",
            Variant::Optimized => "optimized pipeline",
            Variant::ForLoop => "for loop operations",
        }
    }

    /// Whether this is the reference variant for relative differences
    pub fn is_baseline(self) -> bool {
        self == Self::BASELINE
    }

    /// Position in [`Variant::ALL`]
    pub fn index(self) -> usize {
        match self {
            Variant::Unoptimized => 0,
            Variant::Optimized => 1,
            Variant::ForLoop => 2,
        }
    }

    /// Run this variant over `numbers`
    pub fn run(self, numbers: &[i32]) -> Vec<i64> {
        match self {
            Variant::Unoptimized => unoptimized_pipeline(numbers),
            Variant::Optimized => optimized_pipeline(numbers),
            Variant::ForLoop => for_loop_pipeline(numbers),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCENARIO: [i32; 14] = [6, 7, 1, 2, 3, 3, 3, 8, 9, 1, 4, 5, 10, 10];

    #[test]
    fn test_scenario_every_variant() {
        for variant in Variant::ALL {
            assert_eq!(variant.run(&SCENARIO), vec![4, 8, 12, 16, 20], "{variant}");
        }
    }

    #[test]
    fn test_empty_input() {
        for variant in Variant::ALL {
            assert!(variant.run(&[]).is_empty(), "{variant}");
        }
    }

    #[test]
    fn test_no_even_values() {
        let odds = [1, 3, 5, 7, 7, -9];
        for variant in Variant::ALL {
            assert!(variant.run(&odds).is_empty(), "{variant}");
        }
    }

    #[test]
    fn test_negative_values() {
        let input = [-4, -3, -2, -2, 0, 2, i32::MIN, i32::MAX - 1];
        let expected = vec![
            i64::from(i32::MIN) * 2,
            -8,
            -4,
            0,
            4,
            (i64::from(i32::MAX) - 1) * 2,
        ];
        for variant in Variant::ALL {
            assert_eq!(variant.run(&input), expected, "{variant}");
        }
    }

    #[test]
    fn test_even_check_after_doubling_filters_nothing() {
        let mut doubled: Vec<i64> = SCENARIO.iter().copied().map(double).collect();
        doubled.sort_unstable();
        doubled.dedup();

        // A plain `% 2` check after doubling keeps all ten distinct values,
        // doubled odds included, and would break agreement with the others.
        let naive: Vec<i64> = doubled.iter().copied().filter(|&v| is_even(v)).collect();
        assert_eq!(naive.len(), 10);
        assert_ne!(naive, optimized_pipeline(&SCENARIO));

        let filtered: Vec<i64> = doubled.into_iter().filter(|&v| doubled_from_even(v)).collect();
        assert_eq!(filtered, unoptimized_pipeline(&SCENARIO));
    }

    #[test]
    fn test_variant_registry() {
        assert_eq!(Variant::ALL.len(), 3);
        assert_eq!(
            Variant::ALL.iter().filter(|v| v.is_baseline()).count(),
            1
        );
        for (position, variant) in Variant::ALL.into_iter().enumerate() {
            assert_eq!(variant.index(), position);
            assert_eq!(variant.to_string(), variant.id());
        }
        assert_eq!(Variant::ForLoop.to_string(), "for-loop");
    }

    fn assert_well_formed(output: &[i64]) -> Result<(), TestCaseError> {
        for pair in output.windows(2) {
            prop_assert!(pair[0] < pair[1], "not strictly ascending: {:?}", pair);
        }
        prop_assert!(output.iter().all(|&v| is_even(v)));
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_variants_agree(numbers: Vec<i32>) {
            let expected = optimized_pipeline(&numbers);
            prop_assert_eq!(unoptimized_pipeline(&numbers), expected.clone());
            prop_assert_eq!(for_loop_pipeline(&numbers), expected);
        }

        #[test]
        fn prop_variants_agree_on_small_range(numbers in prop::collection::vec(0i32..1000, 0..500)) {
            let expected = for_loop_pipeline(&numbers);
            prop_assert_eq!(unoptimized_pipeline(&numbers), expected.clone());
            prop_assert_eq!(optimized_pipeline(&numbers), expected);
        }

        #[test]
        fn prop_outputs_are_sorted_unique_even(numbers: Vec<i32>) {
            for variant in Variant::ALL {
                assert_well_formed(&variant.run(&numbers))?;
            }
        }

        #[test]
        fn prop_runs_are_repeatable(numbers: Vec<i32>) {
            for variant in Variant::ALL {
                prop_assert_eq!(variant.run(&numbers), variant.run(&numbers));
            }
        }
    }
}
