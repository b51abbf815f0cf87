#![warn(missing_docs)]
//! streambench statistics
//!
//! Turns per-trial timings into the figures the benchmark reports:
//! - Percentiles over every trial (tail latency keeps its outliers)
//! - IQR outlier detection
//! - Summary statistics and cycle-counter statistics
//! - Relative difference against a baseline, guarded against a zero baseline
//! - Two-sample comparison with Cohen's d effect size

mod comparison;
mod outliers;
mod percentiles;
mod summary;

pub use comparison::{
    ComparisonConfig, ComparisonError, ComparisonResult, EffectInterpretation,
    compare_distributions, relative_difference,
};
pub use outliers::{DEFAULT_IQR_FENCE, OutlierAnalysis, OutlierMethod, detect_outliers};
pub use percentiles::{
    Percentiles, compute_percentile, compute_percentiles, percentile_of_sorted, sorted_copy,
};
pub use summary::{CyclesStatistics, SummaryStatistics, compute_cycles_stats, compute_summary};

/// Outlier share (percent) above which a run is flagged as noisy
pub const NOISY_OUTLIER_PERCENT: f64 = 10.0;

/// Coefficient of variation (percent) below which a variant counts as stable
pub const STABLE_CV_PERCENT: f64 = 5.0;
