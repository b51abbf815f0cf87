//! Baseline Comparison
//!
//! Relative difference of a candidate against a baseline, plus a two-sample
//! comparison of full trial series with Cohen's d as effect size.

use crate::outliers::OutlierMethod;
use crate::summary::{SummaryStatistics, compute_summary};

/// Percentage difference of `candidate` relative to `baseline`:
/// `(candidate - baseline) * 100 / baseline`.
///
/// A zero baseline has no meaningful percentage and is reported as
/// [`ComparisonError::ZeroBaseline`] instead of dividing by zero.
///
/// ```
/// use streambench_stats::{ComparisonError, relative_difference};
///
/// assert_eq!(relative_difference(150.0, 100.0), Ok(50.0));
/// assert_eq!(relative_difference(80.0, 100.0), Ok(-20.0));
/// assert_eq!(relative_difference(10.0, 0.0), Err(ComparisonError::ZeroBaseline));
/// ```
pub fn relative_difference(candidate: f64, baseline: f64) -> Result<f64, ComparisonError> {
    if baseline == 0.0 || !baseline.is_finite() {
        return Err(ComparisonError::ZeroBaseline);
    }
    Ok((candidate - baseline) * 100.0 / baseline)
}

/// Result of comparing two trial series
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// Summary of the baseline series
    pub baseline_stats: SummaryStatistics,
    /// Summary of the candidate series
    pub candidate_stats: SummaryStatistics,
    /// `(candidate - baseline) * 100 / baseline` over the cleaned means
    pub relative_change: f64,
    /// Candidate mean minus baseline mean, in nanoseconds
    pub absolute_change: f64,
    /// Cohen's d over the pooled standard deviation
    pub effect_size: f64,
    /// Effect size bucket
    pub effect_interpretation: EffectInterpretation,
    /// Effect is at least small and the change exceeds the threshold
    pub is_significant: bool,
}

/// Interpretation of effect size magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectInterpretation {
    /// |d| < 0.2
    Negligible,
    /// 0.2 <= |d| < 0.5
    Small,
    /// 0.5 <= |d| < 0.8
    Medium,
    /// |d| >= 0.8
    Large,
}

impl std::fmt::Display for EffectInterpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EffectInterpretation::Negligible => "negligible",
            EffectInterpretation::Small => "small",
            EffectInterpretation::Medium => "medium",
            EffectInterpretation::Large => "large",
        };
        f.write_str(label)
    }
}

/// Configuration for comparison
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Minimum |relative change| in percent to call a difference significant
    pub significance_threshold: f64,
    /// Outlier handling for both series
    pub outlier_method: OutlierMethod,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            significance_threshold: 5.0,
            outlier_method: OutlierMethod::default(),
        }
    }
}

/// Compare a candidate trial series against a baseline series
pub fn compare_distributions(
    baseline: &[f64],
    candidate: &[f64],
    config: &ComparisonConfig,
) -> Result<ComparisonResult, ComparisonError> {
    match (baseline.len(), candidate.len()) {
        (0, _) => return Err(ComparisonError::EmptyBaseline),
        (_, 0) => return Err(ComparisonError::EmptyCandidate),
        (1, _) => return Err(ComparisonError::InsufficientBaseline),
        (_, 1) => return Err(ComparisonError::InsufficientCandidate),
        _ => {}
    }

    let baseline_stats = compute_summary(baseline, config.outlier_method);
    let candidate_stats = compute_summary(candidate, config.outlier_method);

    let absolute_change = candidate_stats.mean - baseline_stats.mean;
    let relative_change = relative_difference(candidate_stats.mean, baseline_stats.mean)?;

    let n1 = baseline_stats.outlier_analysis.cleaned_samples.len() as f64;
    let n2 = candidate_stats.outlier_analysis.cleaned_samples.len() as f64;
    let pooled_variance = ((n1 - 1.0) * baseline_stats.std_dev.powi(2)
        + (n2 - 1.0) * candidate_stats.std_dev.powi(2))
        / (n1 + n2 - 2.0).max(1.0);
    let pooled_std = pooled_variance.sqrt();

    let effect_size = if pooled_std > 0.0 {
        absolute_change / pooled_std
    } else if absolute_change == 0.0 {
        0.0
    } else {
        // Zero spread with distinct means: the series do not overlap at all
        absolute_change.signum() * f64::INFINITY
    };
    let effect_interpretation = interpret_effect_size(effect_size);

    let is_significant = effect_interpretation != EffectInterpretation::Negligible
        && relative_change.abs() >= config.significance_threshold;

    Ok(ComparisonResult {
        baseline_stats,
        candidate_stats,
        relative_change,
        absolute_change,
        effect_size,
        effect_interpretation,
        is_significant,
    })
}

/// Bucket an effect size using Cohen's conventions
fn interpret_effect_size(d: f64) -> EffectInterpretation {
    match d.abs() {
        x if x < 0.2 => EffectInterpretation::Negligible,
        x if x < 0.5 => EffectInterpretation::Small,
        x if x < 0.8 => EffectInterpretation::Medium,
        _ => EffectInterpretation::Large,
    }
}

/// Errors from comparison operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error("baseline average is zero; relative difference is undefined")]
    ZeroBaseline,
    #[error("baseline samples are empty")]
    EmptyBaseline,
    #[error("candidate samples are empty")]
    EmptyCandidate,
    #[error("baseline needs at least 2 samples")]
    InsufficientBaseline,
    #[error("candidate needs at least 2 samples")]
    InsufficientCandidate,
}
