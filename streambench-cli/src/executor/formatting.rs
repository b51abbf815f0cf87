//! Output Formatting
//!
//! Human-readable rendering of a report: the averages and relative
//! differences first, then the per-variant distributions.

use std::fmt::Write;
use streambench_core::Variant;
use streambench_report::{Percent, Report, format_duration};

/// Render a percentage, or `undefined` when the baseline average was zero
pub fn format_percent(percent: &Percent) -> String {
    match percent.value() {
        Some(value) => format!("{:.2}%", value),
        None => "undefined".to_string(),
    }
}

/// Format a report for terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut out = String::new();

    for v in &report.variants {
        let _ = writeln!(
            out,
            "Average time taken for {}: {} nanoseconds",
            v.label, v.average_ns
        );
    }

    for d in &report.differences {
        let _ = writeln!(
            out,
            "Average time difference ({} - {}): {} nanoseconds - {}",
            d.variant.id().replace('-', " "),
            d.baseline.id(),
            d.difference_ns,
            format_percent(&d.percent)
        );
    }

    let _ = writeln!(out, "\nTrial Statistics ({} trials)", report.summary.trials);
    let _ = writeln!(out, "{}", "-".repeat(60));

    for v in &report.variants {
        let m = &v.metrics;
        let marker = if v.is_baseline { " (baseline)" } else { "" };
        let stability = if m.stable { "" } else { "  [unstable]" };
        let _ = writeln!(out, "  {}{}{}", v.variant, marker, stability);
        let _ = writeln!(
            out,
            "      mean: {}  median: {}  stddev: {}",
            format_duration(m.mean_ns),
            format_duration(m.median_ns),
            format_duration(m.std_dev_ns)
        );
        let _ = writeln!(
            out,
            "      min: {}  max: {}  outliers: {}/{}",
            format_duration(m.min_ns),
            format_duration(m.max_ns),
            m.outliers,
            m.samples
        );
        let _ = writeln!(
            out,
            "      p50: {}  p95: {}  p99: {}  iqr: {}  cv: {:.1}%",
            format_duration(m.p50_ns),
            format_duration(m.p95_ns),
            format_duration(m.p99_ns),
            format_duration(m.iqr_ns),
            m.coefficient_of_variation
        );
        if m.mean_cycles > 0.0 {
            let _ = writeln!(
                out,
                "      cycles: mean {:.0}  median {:.0}  ({:.2} GHz)",
                m.mean_cycles, m.median_cycles, m.cycles_per_ns
            );
        }
    }

    let with_effect: Vec<_> = report
        .differences
        .iter()
        .filter_map(|d| Some((d, d.effect.as_deref()?)))
        .collect();
    if !with_effect.is_empty() {
        let baseline = report
            .variant(Variant::BASELINE)
            .map_or(Variant::BASELINE.label(), |v| v.label.as_str());
        let _ = writeln!(out, "\nComparison vs {}", baseline);
        let _ = writeln!(out, "{}", "-".repeat(60));
        for (d, effect) in with_effect {
            let icon = if d.is_significant { "✓" } else { "~" };
            // No effect size when both series have zero spread
            let d_value = d
                .effect_size
                .map_or_else(|| "no spread".to_string(), |e| format!("d = {:.2}", e));
            let _ = writeln!(
                out,
                "  {} {:<12} {:>10}  effect: {} ({})",
                icon,
                d.variant.id(),
                format_percent(&d.percent),
                effect,
                d_value
            );
        }
    }

    let _ = writeln!(out, "\nSummary");
    let _ = writeln!(out, "{}", "-".repeat(60));
    if let Some(fastest) = report.summary.fastest {
        let _ = writeln!(out, "  Fastest: {}", fastest);
    }
    let _ = writeln!(
        out,
        "  Outputs verified: {}",
        if report.summary.outputs_verified {
            "yes"
        } else {
            "no"
        }
    );
    if !report.summary.noisy_variants.is_empty() {
        let names: Vec<String> = report
            .summary
            .noisy_variants
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(out, "  Noisy: {} (many outlier trials)", names.join(", "));
    }
    let _ = writeln!(
        out,
        "  Duration: {:.2} ms",
        report.summary.total_duration_ms
    );

    out
}
