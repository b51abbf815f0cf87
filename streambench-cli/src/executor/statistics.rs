//! Statistics Computation
//!
//! Summarizes each variant's per-trial timings on the calling thread.

use streambench_core::{BenchOutcome, Variant};
use streambench_stats::{
    CyclesStatistics, OutlierMethod, SummaryStatistics, compute_cycles_stats, compute_summary,
};

/// Statistics for one variant
#[derive(Debug, Clone)]
pub struct VariantStatistics {
    /// Variant the series belongs to
    pub variant: Variant,
    /// Per-trial wall-clock nanoseconds
    pub nanos: Vec<f64>,
    /// Summary of `nanos`
    pub summary: SummaryStatistics,
    /// Cycle-counter statistics
    pub cycles: CyclesStatistics,
}

/// Compute statistics for every variant, in [`Variant::ALL`] order
pub fn compute_statistics(outcome: &BenchOutcome) -> Vec<VariantStatistics> {
    Variant::ALL
        .into_iter()
        .map(|variant| {
            let nanos = outcome.nanos_series(variant);
            let summary = compute_summary(&nanos, OutlierMethod::default());
            let cycles = compute_cycles_stats(&outcome.cycles_series(variant), &nanos);
            VariantStatistics {
                variant,
                nanos,
                summary,
                cycles,
            }
        })
        .collect()
}
