#![warn(missing_docs)]
//! streambench report
//!
//! Serializable results of a benchmark run:
//! - Per-variant totals, integer averages and timing distributions
//! - Relative differences against the baseline (or why they are undefined)
//! - JSON rendering for machine consumption

mod json;
mod report;

pub use json::{generate_json_report, parse_json_report};
pub use report::{
    Percent, RelativeDifference, Report, ReportConfig, ReportMeta, ReportSummary, SCHEMA_VERSION,
    SystemInfo, VariantMetrics, VariantReport,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format nanoseconds with the largest unit that keeps the value readable
pub fn format_duration(nanos: f64) -> String {
    let abs = nanos.abs();
    if abs < 1_000.0 {
        format!("{:.0} ns", nanos)
    } else if abs < 1_000_000.0 {
        format!("{:.2} µs", nanos / 1_000.0)
    } else if abs < 1_000_000_000.0 {
        format!("{:.2} ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2} s", nanos / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use streambench_core::Variant;
    use streambench_stats::ComparisonError;

    fn sample_report() -> Report {
        Report {
            meta: ReportMeta {
                schema_version: SCHEMA_VERSION,
                version: "0.1.0".to_string(),
                timestamp: Utc::now(),
                system: SystemInfo {
                    os: "linux".to_string(),
                    arch: "x86_64".to_string(),
                    cpu_cores: 1,
                    has_cycle_counter: false,
                },
                config: ReportConfig {
                    trials: 2,
                    sample_size: 10,
                    value_bound: 1000,
                    seed: Some(7),
                    verify_outputs: true,
                },
            },
            variants: vec![VariantReport {
                variant: Variant::Optimized,
                label: Variant::Optimized.label().to_string(),
                is_baseline: true,
                total_ns: 0,
                average_ns: 0,
                metrics: VariantMetrics::default(),
            }],
            differences: vec![RelativeDifference {
                variant: Variant::ForLoop,
                baseline: Variant::Optimized,
                difference_ns: 12,
                percent: Percent::from(Err::<f64, _>(ComparisonError::ZeroBaseline)),
                effect_size: None,
                effect: None,
                is_significant: false,
            }],
            summary: ReportSummary {
                trials: 2,
                outputs_verified: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(512.0), "512 ns");
        assert_eq!(format_duration(1_500.0), "1.50 µs");
        assert_eq!(format_duration(2_250_000.0), "2.25 ms");
        assert_eq!(format_duration(3_000_000_000.0), "3.00 s");
        assert_eq!(format_duration(-1_500.0), "-1.50 µs");
    }

    #[test]
    fn test_percent_from_result() {
        assert_eq!(
            Percent::from(Ok::<_, ComparisonError>(12.5)).value(),
            Some(12.5)
        );
        assert_eq!(
            Percent::from(Err::<f64, _>(ComparisonError::ZeroBaseline)).value(),
            None
        );
    }

    #[test]
    fn test_metrics_stability_and_iqr() {
        use streambench_stats::{OutlierMethod, compute_summary};

        let steady = VariantMetrics::from(&compute_summary(&[500.0; 6], OutlierMethod::None));
        assert!(steady.stable);
        assert_eq!(steady.iqr_ns, 0.0);

        let jumpy = VariantMetrics::from(&compute_summary(
            &[100.0, 300.0, 200.0, 400.0],
            OutlierMethod::None,
        ));
        assert!(!jumpy.stable);
        assert_eq!(jumpy.iqr_ns, 150.0);
    }

    #[test]
    fn test_json_shape() {
        let json = generate_json_report(&sample_report()).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["meta"]["schema_version"], 1);
        assert_eq!(value["variants"][0]["variant"], "optimized");
        assert_eq!(value["differences"][0]["variant"], "for-loop");
        assert_eq!(value["differences"][0]["percent"]["status"], "undefined");
    }

    #[test]
    fn test_json_parses_back() {
        let report = sample_report();
        let parsed = parse_json_report(&generate_json_report(&report).expect("serialize"))
            .expect("parse");

        assert_eq!(parsed.meta.config, report.meta.config);
        assert!(parsed.variant(Variant::Optimized).is_some_and(|v| v.is_baseline));
        assert!(parsed.variant(Variant::Unoptimized).is_none());
        assert_eq!(parsed.differences[0].percent.value(), None);
        assert_eq!(parsed.differences[0].percent, report.differences[0].percent);
    }
}
