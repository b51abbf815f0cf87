#![warn(missing_docs)]
//! streambench core
//!
//! Everything that runs inside a trial:
//! - Three equivalent pipeline variants (`unoptimized`, `optimized`, `for-loop`)
//! - Uniform random sample generation
//! - High-precision timing (cycle counter alongside a monotonic clock)
//! - The trial runner that accumulates per-variant totals and averages

mod measure;
mod pipeline;
mod runner;
mod sample;

pub use measure::{Elapsed, HAS_CYCLE_COUNTER, Instant, Timer, time};
pub use pipeline::{Variant, for_loop_pipeline, optimized_pipeline, unoptimized_pipeline};
pub use runner::{
    BenchOutcome, DEFAULT_TRIALS, RunConfig, RunError, TrialMeasurement, run_trial, run_trials,
};
pub use sample::{DEFAULT_SAMPLE_SIZE, DEFAULT_VALUE_BOUND, SampleGenerator, generate_samples};
