#![warn(missing_docs)]
//! # streambench
//!
//! Functional collection pipelines next to their hand-written loop
//! equivalents, and a micro-benchmark of two orderings of the same pipeline:
//!
//! - **unoptimized**: double, sort, dedup, filter
//! - **optimized** (baseline): filter, dedup, double, sort
//! - **for-loop**: one pass inserting doubled evens into a hash set, then sort
//!
//! All three produce the same sorted, deduplicated, doubled even values. The
//! runner times each on a fresh random sample per trial, averages the totals
//! and reports how far the others fall from the baseline in percent.
//!
//! ## Quick Start
//!
//! ```
//! use streambench::{RunConfig, Variant, run_trials};
//! use rand::SeedableRng;
//!
//! let config = RunConfig { trials: 3, sample_size: 1_000, ..Default::default() };
//! let outcome = run_trials(&config, rand::rngs::StdRng::seed_from_u64(1)).unwrap();
//!
//! for variant in Variant::ALL {
//!     println!("{}: {} ns", variant, outcome.average_ns(variant));
//! }
//! ```

pub use streambench_core::{
    BenchOutcome, Elapsed, RunConfig, RunError, SampleGenerator, Timer, TrialMeasurement, Variant,
    for_loop_pipeline, generate_samples, optimized_pipeline, run_trial, run_trials,
    unoptimized_pipeline,
};

pub use streambench_stats::{
    ComparisonError, SummaryStatistics, compare_distributions, compute_summary,
    relative_difference,
};

pub use streambench_report::{OutputFormat, Percent, Report, generate_json_report};

/// Run the streambench CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     streambench::run()
/// }
/// ```
pub use streambench_cli::run;
