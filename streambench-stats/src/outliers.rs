//! Outlier Detection
//!
//! Tukey fences over the interquartile range. Outliers are only excluded from
//! the central-tendency figures; min, max and percentiles keep them.

use crate::percentiles::{percentile_of_sorted, sorted_copy};

/// Tukey's conventional fence multiplier
pub const DEFAULT_IQR_FENCE: f64 = 1.5;

/// Method for outlier detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierMethod {
    /// Outliers lie outside `[Q1 - fence * IQR, Q3 + fence * IQR]`
    Iqr {
        /// IQR multiplier
        fence: f64,
    },
    /// Keep every sample
    None,
}

impl Default for OutlierMethod {
    fn default() -> Self {
        OutlierMethod::Iqr {
            fence: DEFAULT_IQR_FENCE,
        }
    }
}

/// Result of outlier analysis
#[derive(Debug, Clone)]
pub struct OutlierAnalysis {
    /// Every sample, in trial order
    pub all_samples: Vec<f64>,
    /// Samples inside the fences, in trial order
    pub cleaned_samples: Vec<f64>,
    /// Trial indices flagged as outliers
    pub outlier_indices: Vec<usize>,
    /// Count below the lower fence
    pub low_outlier_count: usize,
    /// Count above the upper fence
    pub high_outlier_count: usize,
    /// Lower fence
    pub lower_bound: f64,
    /// Upper fence
    pub upper_bound: f64,
}

impl OutlierAnalysis {
    /// Percentage of trials flagged as outliers
    pub fn outlier_percentage(&self) -> f64 {
        if self.all_samples.is_empty() {
            return 0.0;
        }
        self.outlier_indices.len() as f64 * 100.0 / self.all_samples.len() as f64
    }

    /// A high outlier share usually means the machine was busy during the run
    pub fn is_noisy(&self, threshold_pct: f64) -> bool {
        self.outlier_percentage() > threshold_pct
    }

    fn unfiltered(samples: &[f64]) -> Self {
        Self {
            all_samples: samples.to_vec(),
            cleaned_samples: samples.to_vec(),
            outlier_indices: Vec::new(),
            low_outlier_count: 0,
            high_outlier_count: 0,
            lower_bound: f64::NEG_INFINITY,
            upper_bound: f64::INFINITY,
        }
    }
}

/// Detect outliers in per-trial timings
pub fn detect_outliers(samples: &[f64], method: OutlierMethod) -> OutlierAnalysis {
    match method {
        OutlierMethod::Iqr { fence } if !samples.is_empty() => iqr_outliers(samples, fence),
        _ => OutlierAnalysis::unfiltered(samples),
    }
}

fn iqr_outliers(samples: &[f64], fence: f64) -> OutlierAnalysis {
    let sorted = sorted_copy(samples);
    let q1 = percentile_of_sorted(&sorted, 25.0);
    let q3 = percentile_of_sorted(&sorted, 75.0);
    let iqr = q3 - q1;
    let lower_bound = q1 - fence * iqr;
    let upper_bound = q3 + fence * iqr;

    let mut analysis = OutlierAnalysis {
        all_samples: samples.to_vec(),
        cleaned_samples: Vec::with_capacity(samples.len()),
        outlier_indices: Vec::new(),
        low_outlier_count: 0,
        high_outlier_count: 0,
        lower_bound,
        upper_bound,
    };

    for (index, &sample) in samples.iter().enumerate() {
        if sample < lower_bound {
            analysis.outlier_indices.push(index);
            analysis.low_outlier_count += 1;
        } else if sample > upper_bound {
            analysis.outlier_indices.push(index);
            analysis.high_outlier_count += 1;
        } else {
            analysis.cleaned_samples.push(sample);
        }
    }

    analysis
}
