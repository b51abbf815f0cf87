//! Trial Runner
//!
//! Runs every pipeline variant against a fresh sample per trial, timing each
//! call on its own, and accumulates per-variant totals.
//!
//! ```text
//! for each trial:
//!     sample  = generate(sample_size, value_bound)      (untimed)
//!     for each variant:
//!         Timer::start → variant.run(sample) → stop      (timed)
//!     verify outputs agree                               (untimed)
//! averages    = total / trials
//! difference  = (avg_other - avg_baseline) * 100 / avg_baseline
//! ```

use crate::measure::{Elapsed, time};
use crate::pipeline::Variant;
use crate::sample::{DEFAULT_SAMPLE_SIZE, DEFAULT_VALUE_BOUND, SampleGenerator};
use rand::Rng;
use streambench_stats::{ComparisonError, relative_difference};

/// Default number of trials
pub const DEFAULT_TRIALS: usize = 100;

/// Parameters of a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of trials; each draws a new sample
    pub trials: usize,
    /// Integers per sample
    pub sample_size: usize,
    /// Exclusive upper bound of sample values
    pub value_bound: i32,
    /// Check after each trial that all variants produced the same output
    pub verify_outputs: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            sample_size: DEFAULT_SAMPLE_SIZE,
            value_bound: DEFAULT_VALUE_BOUND,
            verify_outputs: true,
        }
    }
}

/// Timings of every variant for one trial, indexed like [`Variant::ALL`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialMeasurement {
    timings: [Elapsed; 3],
}

impl TrialMeasurement {
    /// Timing recorded for `variant`
    pub fn get(&self, variant: Variant) -> Elapsed {
        self.timings[variant.index()]
    }

    fn record(&mut self, variant: Variant, elapsed: Elapsed) {
        self.timings[variant.index()] = elapsed;
    }
}

/// Aggregated outcome of all trials
#[derive(Debug, Clone)]
pub struct BenchOutcome {
    config: RunConfig,
    totals_ns: [u128; 3],
    trials: Vec<TrialMeasurement>,
}

impl BenchOutcome {
    fn new(config: RunConfig) -> Self {
        let capacity = config.trials;
        Self {
            config,
            totals_ns: [0; 3],
            trials: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, trial: TrialMeasurement) {
        for variant in Variant::ALL {
            self.totals_ns[variant.index()] += u128::from(trial.get(variant).nanos);
        }
        self.trials.push(trial);
    }

    /// Configuration the run used
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Number of completed trials
    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    /// Per-trial measurements in execution order
    pub fn trials(&self) -> &[TrialMeasurement] {
        &self.trials
    }

    /// Total nanoseconds spent in `variant` across all trials
    pub fn total_ns(&self, variant: Variant) -> u128 {
        self.totals_ns[variant.index()]
    }

    /// Integer average: total nanoseconds divided by trial count
    pub fn average_ns(&self, variant: Variant) -> u64 {
        let trials = self.trials.len() as u128;
        if trials == 0 {
            return 0;
        }
        u64::try_from(self.total_ns(variant) / trials).unwrap_or(u64::MAX)
    }

    /// Average minus the baseline average, in nanoseconds
    pub fn difference_ns(&self, variant: Variant) -> i128 {
        i128::from(self.average_ns(variant)) - i128::from(self.average_ns(Variant::BASELINE))
    }

    /// Percentage difference of `variant`'s average against the baseline's.
    ///
    /// Errors with [`ComparisonError::ZeroBaseline`] when the baseline average
    /// truncated to zero nanoseconds.
    pub fn relative_to_baseline(&self, variant: Variant) -> Result<f64, ComparisonError> {
        relative_difference(
            self.average_ns(variant) as f64,
            self.average_ns(Variant::BASELINE) as f64,
        )
    }

    /// Per-trial wall-clock nanoseconds for `variant`
    pub fn nanos_series(&self, variant: Variant) -> Vec<f64> {
        self.trials
            .iter()
            .map(|t| t.get(variant).nanos as f64)
            .collect()
    }

    /// Per-trial cycle deltas for `variant`
    pub fn cycles_series(&self, variant: Variant) -> Vec<u64> {
        self.trials.iter().map(|t| t.get(variant).cycles).collect()
    }
}

/// Errors raised while running trials
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("trial count must be at least 1")]
    NoTrials,
    #[error("value bound must be positive, got {0}")]
    InvalidValueBound(i32),
    #[error("trial {trial}: {variant} output differs from {baseline} output")]
    OutputMismatch {
        trial: usize,
        variant: Variant,
        baseline: Variant,
    },
}

/// Run one trial: time every variant on `sample`, then optionally verify
/// that their outputs agree.
pub fn run_trial(
    trial: usize,
    sample: &[i32],
    verify: bool,
) -> Result<TrialMeasurement, RunError> {
    let mut measurement = TrialMeasurement::default();
    let mut outputs: [Vec<i64>; 3] = Default::default();

    for variant in Variant::ALL {
        let (output, elapsed) = time(|| variant.run(std::hint::black_box(sample)));
        measurement.record(variant, elapsed);
        outputs[variant.index()] = output;
    }

    if verify {
        verify_outputs(trial, &outputs)?;
    }

    Ok(measurement)
}

/// First variant whose output differs from the baseline's, in
/// [`Variant::ALL`] order
fn first_mismatch(outputs: &[Vec<i64>; 3]) -> Option<Variant> {
    let expected = &outputs[Variant::BASELINE.index()];
    Variant::ALL
        .into_iter()
        .find(|v| &outputs[v.index()] != expected)
}

fn verify_outputs(trial: usize, outputs: &[Vec<i64>; 3]) -> Result<(), RunError> {
    match first_mismatch(outputs) {
        Some(variant) => Err(RunError::OutputMismatch {
            trial,
            variant,
            baseline: Variant::BASELINE,
        }),
        None => Ok(()),
    }
}

/// Run `config.trials` trials, drawing samples from `rng`.
pub fn run_trials<R: Rng>(config: &RunConfig, rng: R) -> Result<BenchOutcome, RunError> {
    if config.trials == 0 {
        return Err(RunError::NoTrials);
    }
    if config.value_bound <= 0 {
        return Err(RunError::InvalidValueBound(config.value_bound));
    }

    tracing::info!(
        trials = config.trials,
        sample_size = config.sample_size,
        value_bound = config.value_bound,
        verify = config.verify_outputs,
        "Running pipeline comparison"
    );

    let mut generator = SampleGenerator::new(config.sample_size, config.value_bound, rng);
    let mut outcome = BenchOutcome::new(config.clone());

    for trial in 0..config.trials {
        let sample = generator.next_sample();
        let measurement = run_trial(trial, &sample, config.verify_outputs)?;

        tracing::debug!(
            trial,
            unoptimized_ns = measurement.get(Variant::Unoptimized).nanos,
            optimized_ns = measurement.get(Variant::Optimized).nanos,
            for_loop_ns = measurement.get(Variant::ForLoop).nanos,
            "Trial complete"
        );

        outcome.push(measurement);
    }

    if outcome.average_ns(Variant::BASELINE) == 0 {
        tracing::warn!(
            "Baseline average is 0 ns; relative differences are undefined for this run"
        );
    }

    Ok(outcome)
}
