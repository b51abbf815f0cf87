//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use streambench_core::Variant;
use streambench_stats::{
    ComparisonError, CyclesStatistics, STABLE_CV_PERCENT, SummaryStatistics,
};

/// Current version of the JSON layout
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub variants: Vec<VariantReport>,
    pub differences: Vec<RelativeDifference>,
    pub summary: ReportSummary,
}

impl Report {
    /// Entry for `variant`, if it was measured
    pub fn variant(&self, variant: Variant) -> Option<&VariantReport> {
        self.variants.iter().find(|v| v.variant == variant)
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub system: SystemInfo,
    pub config: ReportConfig,
}

/// Run parameters captured in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub trials: usize,
    pub sample_size: usize,
    pub value_bound: i32,
    pub seed: Option<u64>,
    pub verify_outputs: bool,
}

/// Host the benchmark ran on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_cores: u32,
    pub has_cycle_counter: bool,
}

/// Timing results for one pipeline variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantReport {
    pub variant: Variant,
    pub label: String,
    pub is_baseline: bool,
    /// Sum over all trials
    pub total_ns: u64,
    /// `total_ns / trials`, truncated
    pub average_ns: u64,
    pub metrics: VariantMetrics,
}

/// Distribution of per-trial timings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantMetrics {
    pub samples: usize,
    pub mean_ns: f64,
    pub median_ns: f64,
    pub std_dev_ns: f64,
    pub min_ns: f64,
    pub max_ns: f64,
    pub p50_ns: f64,
    pub p90_ns: f64,
    pub p95_ns: f64,
    pub p99_ns: f64,
    pub p999_ns: f64,
    pub outliers: usize,
    pub iqr_ns: f64,
    pub coefficient_of_variation: f64,
    /// Coefficient of variation below the stability threshold
    pub stable: bool,
    // Zero on platforms without a cycle counter
    pub mean_cycles: f64,
    pub median_cycles: f64,
    pub min_cycles: u64,
    pub max_cycles: u64,
    pub cycles_per_ns: f64,
}

impl VariantMetrics {
    /// Attach cycle-counter statistics
    pub fn with_cycles(mut self, cycles: &CyclesStatistics) -> Self {
        self.mean_cycles = cycles.mean_cycles;
        self.median_cycles = cycles.median_cycles;
        self.min_cycles = cycles.min_cycles;
        self.max_cycles = cycles.max_cycles;
        self.cycles_per_ns = cycles.cycles_per_ns;
        self
    }
}

impl From<&SummaryStatistics> for VariantMetrics {
    fn from(stats: &SummaryStatistics) -> Self {
        Self {
            samples: stats.sample_count,
            mean_ns: stats.mean,
            median_ns: stats.median,
            std_dev_ns: stats.std_dev,
            min_ns: stats.min,
            max_ns: stats.max,
            p50_ns: stats.percentiles.p50,
            p90_ns: stats.percentiles.p90,
            p95_ns: stats.percentiles.p95,
            p99_ns: stats.percentiles.p99,
            p999_ns: stats.percentiles.p999,
            outliers: stats.outlier_count,
            iqr_ns: stats.iqr(),
            coefficient_of_variation: stats.coefficient_of_variation(),
            stable: stats.is_stable(STABLE_CV_PERCENT),
            ..Default::default()
        }
    }
}

/// Percentage of a relative difference, or why it has none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Percent {
    Defined { value: f64 },
    Undefined { reason: String },
}

impl Percent {
    /// The percentage, when defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Percent::Defined { value } => Some(*value),
            Percent::Undefined { .. } => None,
        }
    }
}

impl From<Result<f64, ComparisonError>> for Percent {
    fn from(result: Result<f64, ComparisonError>) -> Self {
        match result {
            Ok(value) => Percent::Defined { value },
            Err(e) => Percent::Undefined {
                reason: e.to_string(),
            },
        }
    }
}

/// Average of one variant compared against the baseline's average
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeDifference {
    pub variant: Variant,
    pub baseline: Variant,
    /// `average - baseline average`, in nanoseconds
    pub difference_ns: i64,
    /// `difference * 100 / baseline average`
    pub percent: Percent,
    /// Cohen's d over the per-trial series, when enough trials ran
    pub effect_size: Option<f64>,
    pub effect: Option<String>,
    pub is_significant: bool,
}

/// Run summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub trials: usize,
    pub fastest: Option<Variant>,
    pub outputs_verified: bool,
    pub noisy_variants: Vec<Variant>,
    pub total_duration_ms: f64,
}
