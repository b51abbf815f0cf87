//! Percentile Computation
//!
//! Percentiles are always taken over every trial, outliers included.

use serde::{Deserialize, Serialize};

/// Tail percentiles reported for each pipeline variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    /// 50th percentile (median)
    pub p50: f64,
    /// 90th percentile
    pub p90: f64,
    /// 95th percentile
    pub p95: f64,
    /// 99th percentile
    pub p99: f64,
    /// 99.9th percentile
    pub p999: f64,
}

/// Sort a copy of `samples` in ascending order.
///
/// NaN values compare as equal so a stray NaN never panics the sort.
pub fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Percentile of an already ascending slice, interpolating linearly between
/// the two nearest ranks.
pub fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let last = sorted.len() - 1;
            let rank = (percentile.clamp(0.0, 100.0) / 100.0) * last as f64;
            let lower = rank.floor() as usize;
            let upper = (lower + 1).min(last);
            let fraction = rank - lower as f64;
            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
    }
}

/// Percentile of unsorted samples.
///
/// ```
/// use streambench_stats::compute_percentile;
///
/// let trials = [300.0, 100.0, 200.0];
/// assert_eq!(compute_percentile(&trials, 50.0), 200.0);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    percentile_of_sorted(&sorted_copy(samples), percentile)
}

/// Compute every reported percentile with a single sort
pub fn compute_percentiles(samples: &[f64]) -> Percentiles {
    let sorted = sorted_copy(samples);
    Percentiles {
        p50: percentile_of_sorted(&sorted, 50.0),
        p90: percentile_of_sorted(&sorted, 90.0),
        p95: percentile_of_sorted(&sorted, 95.0),
        p99: percentile_of_sorted(&sorted, 99.0),
        p999: percentile_of_sorted(&sorted, 99.9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_of_odd_count() {
        let p50 = compute_percentile(&[5.0, 1.0, 3.0, 2.0, 4.0], 50.0);
        assert!((p50 - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_interpolates_even_count() {
        let p50 = compute_percentile(&[1.0, 2.0, 3.0, 4.0], 50.0);
        assert!((p50 - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tail_percentiles() {
        let samples: Vec<f64> = (1..=1000).map(f64::from).collect();
        let p = compute_percentiles(&samples);

        assert!(p.p90 > 899.0 && p.p90 < 902.0);
        assert!(p.p99 > 985.0 && p.p99 < 995.0);
        assert!(p.p999 > 998.0 && p.p999 <= 1000.0);
    }

    #[test]
    fn test_out_of_range_percentile_is_clamped() {
        let samples = [1.0, 2.0, 3.0];
        assert_eq!(compute_percentile(&samples, 150.0), 3.0);
        assert_eq!(compute_percentile(&samples, -10.0), 1.0);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(compute_percentile(&[42.0], 99.0), 42.0);
        assert_eq!(compute_percentile(&[], 50.0), 0.0);
        assert_eq!(compute_percentiles(&[]), Percentiles::default());
    }
}
