//! Report Building
//!
//! Assembles the report from the raw outcome (totals and integer averages)
//! and the per-variant statistics.

use super::metadata::build_report_meta;
use super::statistics::VariantStatistics;
use streambench_core::{BenchOutcome, Variant};
use streambench_report::{
    Percent, RelativeDifference, Report, ReportConfig, ReportSummary, VariantMetrics,
    VariantReport,
};
use streambench_stats::{
    ComparisonConfig, ComparisonResult, NOISY_OUTLIER_PERCENT, compare_distributions,
};

/// Cohen's d, when it is a finite number.
///
/// Two zero-spread series with different means give an infinite d, which
/// JSON cannot represent. The interpretation still records the effect.
fn finite_effect_size(comparison: &ComparisonResult) -> Option<f64> {
    Some(comparison.effect_size).filter(|d| d.is_finite())
}

/// Build a complete report
///
/// # Arguments
/// * `outcome` - Totals and per-trial measurements from the runner
/// * `stats` - Output of [`super::compute_statistics`] for the same outcome
/// * `seed` - Seed the samples were drawn with, if any
/// * `total_duration_ms` - Wall-clock duration of the whole run
pub fn build_report(
    outcome: &BenchOutcome,
    stats: &[VariantStatistics],
    seed: Option<u64>,
    total_duration_ms: f64,
) -> Report {
    let config = outcome.config();

    let variants: Vec<VariantReport> = stats
        .iter()
        .map(|s| VariantReport {
            variant: s.variant,
            label: s.variant.label().to_string(),
            is_baseline: s.variant.is_baseline(),
            total_ns: u64::try_from(outcome.total_ns(s.variant)).unwrap_or(u64::MAX),
            average_ns: outcome.average_ns(s.variant),
            metrics: VariantMetrics::from(&s.summary).with_cycles(&s.cycles),
        })
        .collect();

    let baseline_series = stats
        .iter()
        .find(|s| s.variant.is_baseline())
        .map(|s| s.nanos.as_slice())
        .unwrap_or_default();

    let comparison_config = ComparisonConfig::default();
    let differences: Vec<RelativeDifference> = stats
        .iter()
        .filter(|s| !s.variant.is_baseline())
        .map(|s| {
            let percent = Percent::from(outcome.relative_to_baseline(s.variant));
            if let Percent::Undefined { reason } = &percent {
                tracing::warn!(variant = %s.variant, "Relative difference undefined: {}", reason);
            }

            let comparison = compare_distributions(baseline_series, &s.nanos, &comparison_config);
            if let Err(e) = &comparison {
                tracing::debug!(variant = %s.variant, "Skipping distribution comparison: {}", e);
            }
            let comparison = comparison.ok();

            RelativeDifference {
                variant: s.variant,
                baseline: Variant::BASELINE,
                difference_ns: i64::try_from(outcome.difference_ns(s.variant)).unwrap_or(i64::MAX),
                percent,
                effect_size: comparison.as_ref().and_then(finite_effect_size),
                effect: comparison
                    .as_ref()
                    .map(|c| c.effect_interpretation.to_string()),
                is_significant: comparison.as_ref().is_some_and(|c| c.is_significant),
            }
        })
        .collect();

    let fastest = variants
        .iter()
        .min_by_key(|v| v.average_ns)
        .map(|v| v.variant);

    let noisy_variants = stats
        .iter()
        .filter(|s| s.summary.outlier_analysis.is_noisy(NOISY_OUTLIER_PERCENT))
        .map(|s| s.variant)
        .collect();

    Report {
        meta: build_report_meta(ReportConfig {
            trials: config.trials,
            sample_size: config.sample_size,
            value_bound: config.value_bound,
            seed,
            verify_outputs: config.verify_outputs,
        }),
        variants,
        differences,
        summary: ReportSummary {
            trials: outcome.trial_count(),
            fastest,
            outputs_verified: config.verify_outputs,
            noisy_variants,
            total_duration_ms,
        },
    }
}
