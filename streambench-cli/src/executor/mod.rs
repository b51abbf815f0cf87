//! Benchmark Executor
//!
//! Runs the trials and turns their measurements into a report.
//!
//! ```text
//! RunConfig + RNG
//!       │
//!       ▼
//! ┌─────────────┐
//! │   trials    │  streambench_core::run_trials
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Per-variant summaries and cycle stats
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Averages, relative differences, metadata
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```

mod formatting;
mod metadata;
mod report;
mod statistics;

pub use formatting::{format_human_output, format_percent};
pub use metadata::build_report_meta;
pub use report::build_report;
pub use statistics::{VariantStatistics, compute_statistics};

use rand::SeedableRng;
use rand::rngs::StdRng;
use streambench_core::{BenchOutcome, RunConfig, RunError, run_trials};

/// Run the trials, seeding the sample RNG when a seed is given
pub fn execute(config: &RunConfig, seed: Option<u64>) -> Result<BenchOutcome, RunError> {
    match seed {
        Some(seed) => run_trials(config, StdRng::seed_from_u64(seed)),
        None => run_trials(config, rand::thread_rng()),
    }
}
