//! Summary Statistics
//!
//! Mean, median and standard deviation come from the trials left after
//! outlier removal. Min, max and percentiles come from every trial.

use crate::outliers::{OutlierAnalysis, OutlierMethod, detect_outliers};
use crate::percentiles::{Percentiles, compute_percentiles, percentile_of_sorted, sorted_copy};

/// Per-variant summary of trial timings (all values in nanoseconds)
#[derive(Debug, Clone)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,

    pub min: f64,
    pub max: f64,
    pub percentiles: Percentiles,

    pub sample_count: usize,
    pub outlier_count: usize,
    pub outlier_analysis: OutlierAnalysis,
}

/// Statistics over raw cycle-counter deltas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CyclesStatistics {
    /// Mean cycles per trial
    pub mean_cycles: f64,
    /// Median cycles per trial
    pub median_cycles: f64,
    /// Fewest cycles observed
    pub min_cycles: u64,
    /// Most cycles observed
    pub max_cycles: u64,
    /// Total cycles over total nanoseconds; roughly the counter frequency in GHz
    pub cycles_per_ns: f64,
}

fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sample (n - 1) standard deviation
fn std_dev_of(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Summarize a series of per-trial timings
pub fn compute_summary(samples: &[f64], outlier_method: OutlierMethod) -> SummaryStatistics {
    let analysis = detect_outliers(samples, outlier_method);
    let cleaned = sorted_copy(&analysis.cleaned_samples);
    let all = sorted_copy(&analysis.all_samples);

    let mean = mean_of(&cleaned);

    SummaryStatistics {
        mean,
        median: percentile_of_sorted(&cleaned, 50.0),
        std_dev: std_dev_of(&cleaned, mean),
        min: all.first().copied().unwrap_or(0.0),
        max: all.last().copied().unwrap_or(0.0),
        percentiles: compute_percentiles(&all),
        sample_count: all.len(),
        outlier_count: analysis.outlier_indices.len(),
        outlier_analysis: analysis,
    }
}

impl SummaryStatistics {
    /// Relative standard deviation, in percent
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            self.std_dev / self.mean * 100.0
        }
    }

    /// Interquartile range over every trial
    pub fn iqr(&self) -> f64 {
        let sorted = sorted_copy(&self.outlier_analysis.all_samples);
        percentile_of_sorted(&sorted, 75.0) - percentile_of_sorted(&sorted, 25.0)
    }

    /// Whether the trials agree closely enough to trust the mean
    pub fn is_stable(&self, cv_threshold: f64) -> bool {
        self.coefficient_of_variation() < cv_threshold
    }
}

/// Compute cycle statistics from parallel series of cycle deltas and nanoseconds.
///
/// Platforms without a cycle counter report zero cycles; the result is then
/// all zeros as well.
pub fn compute_cycles_stats(cycles: &[u64], nanos: &[f64]) -> CyclesStatistics {
    if cycles.is_empty() || cycles.iter().all(|&c| c == 0) {
        return CyclesStatistics::default();
    }

    let as_f64: Vec<f64> = cycles.iter().map(|&c| c as f64).collect();
    let total_nanos: f64 = nanos.iter().sum();
    let total_cycles: f64 = as_f64.iter().sum();

    CyclesStatistics {
        mean_cycles: mean_of(&as_f64),
        median_cycles: percentile_of_sorted(&sorted_copy(&as_f64), 50.0),
        min_cycles: cycles.iter().copied().min().unwrap_or(0),
        max_cycles: cycles.iter().copied().max().unwrap_or(0),
        cycles_per_ns: if total_nanos > 0.0 {
            total_cycles / total_nanos
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let summary = compute_summary(&[1.0, 2.0, 3.0, 4.0, 5.0], OutlierMethod::default());

        assert!((summary.mean - 3.0).abs() < 0.01);
        assert!((summary.median - 3.0).abs() < 0.01);
        assert!((summary.std_dev - 1.5811).abs() < 0.001);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.sample_count, 5);
    }

    #[test]
    fn test_outlier_excluded_from_mean_but_not_max() {
        let samples = [100.0, 101.0, 99.0, 100.0, 102.0, 5000.0];
        let summary = compute_summary(&samples, OutlierMethod::default());

        assert!(summary.mean < 110.0);
        assert_eq!(summary.max, 5000.0);
        assert!(summary.percentiles.p99 > 1000.0);
        assert_eq!(summary.outlier_count, 1);
    }

    #[test]
    fn test_constant_series_is_stable() {
        let summary = compute_summary(&[250.0; 8], OutlierMethod::None);

        assert_eq!(summary.coefficient_of_variation(), 0.0);
        assert_eq!(summary.iqr(), 0.0);
        assert!(summary.is_stable(5.0));
    }

    #[test]
    fn test_single_trial() {
        let summary = compute_summary(&[42.0], OutlierMethod::default());

        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.percentiles.p999, 42.0);
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[], OutlierMethod::default());

        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.max, 0.0);
    }

    #[test]
    fn test_cycles_stats() {
        let cycles = [3000u64, 3100, 2900, 3050, 2950];
        let nanos = [1000.0, 1033.0, 967.0, 1017.0, 983.0];
        let stats = compute_cycles_stats(&cycles, &nanos);

        assert!((stats.mean_cycles - 3000.0).abs() < 1.0);
        assert_eq!(stats.median_cycles, 3000.0);
        assert_eq!(stats.min_cycles, 2900);
        assert_eq!(stats.max_cycles, 3100);
        assert!((stats.cycles_per_ns - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_cycles_stats_without_counter() {
        let stats = compute_cycles_stats(&[0, 0, 0], &[10.0, 11.0, 12.0]);
        assert_eq!(stats, CyclesStatistics::default());
    }
}
