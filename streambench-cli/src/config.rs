//! Configuration loading from streambench.toml
//!
//! The file is optional. It is discovered by walking up from the current
//! directory; command-line flags override whatever it sets.

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use streambench_core::{DEFAULT_SAMPLE_SIZE, DEFAULT_TRIALS, DEFAULT_VALUE_BOUND, RunConfig};
use streambench_report::OutputFormat;

/// Name of the configuration file looked up during discovery
pub const CONFIG_FILE_NAME: &str = "streambench.toml";

/// streambench configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StreamConfig {
    /// Benchmark runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of trials
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Integers generated per trial
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Exclusive upper bound of generated integers
    #[serde(default = "default_value_bound")]
    pub value_bound: i32,
    /// Seed for reproducible samples; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Check that all variants agree on every trial
    #[serde(default = "default_true")]
    pub verify_outputs: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            sample_size: default_sample_size(),
            value_bound: default_value_bound(),
            seed: None,
            verify_outputs: true,
        }
    }
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}
fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}
fn default_value_bound() -> i32 {
    DEFAULT_VALUE_BOUND
}
fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Print the collection demonstrations before the benchmark
    #[serde(default = "default_true")]
    pub show_demos: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_demos: true,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl StreamConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Walk up from the current directory looking for `streambench.toml`
    pub fn discover() -> Option<Self> {
        Self::discover_from(std::env::current_dir().ok()?)
    }

    /// Walk up from `start` looking for `streambench.toml`.
    ///
    /// A file found this way changes the default run, so its path is logged
    /// at `info`.
    pub fn discover_from(start: impl Into<PathBuf>) -> Option<Self> {
        let mut dir = start.into();
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                return match Self::load(&candidate) {
                    Ok(config) => {
                        tracing::info!(path = %candidate.display(), "Using discovered configuration");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!("Ignoring {}: {:#}", candidate.display(), e);
                        None
                    }
                };
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Reject settings the runner cannot execute
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.runner.trials == 0 {
            bail!("runner.trials must be at least 1");
        }
        if self.runner.value_bound <= 0 {
            bail!(
                "runner.value_bound must be positive, got {}",
                self.runner.value_bound
            );
        }
        self.output_format()?;
        Ok(())
    }

    /// Parsed output format
    pub fn output_format(&self) -> anyhow::Result<OutputFormat> {
        self.output
            .format
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
    }

    /// Runner parameters for [`streambench_core::run_trials`]
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            trials: self.runner.trials,
            sample_size: self.runner.sample_size,
            value_bound: self.runner.value_bound,
            verify_outputs: self.runner.verify_outputs,
        }
    }

    /// Default configuration as a commented TOML document
    pub fn default_toml() -> String {
        r#"# streambench configuration

[runner]
# Number of trials; each trial draws a fresh sample
trials = 100
# Integers generated per trial
sample_size = 10000
# Values are drawn uniformly from [0, value_bound)
value_bound = 1000
# Fixed seed for reproducible samples (uncomment to enable)
# seed = 42
# Check that every variant produced the same output on each trial
verify_outputs = true

[output]
# Output format: human or json
format = "human"
# Print the collection demonstrations before the benchmark
show_demos = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StreamConfig::default();
        assert_eq!(config.runner.trials, 100);
        assert_eq!(config.runner.sample_size, 10_000);
        assert_eq!(config.runner.value_bound, 1000);
        assert_eq!(config.runner.seed, None);
        assert!(config.runner.verify_outputs);
        assert_eq!(config.output.format, "human");
        assert!(config.output.show_demos);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: StreamConfig = toml::from_str(
            r#"
            [runner]
            trials = 5
            seed = 9
        "#,
        )
        .unwrap();

        assert_eq!(config.runner.trials, 5);
        assert_eq!(config.runner.seed, Some(9));
        // Unset keys keep their defaults
        assert_eq!(config.runner.sample_size, 10_000);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_default_toml_matches_default() {
        let parsed: StreamConfig = toml::from_str(&StreamConfig::default_toml()).unwrap();
        assert_eq!(parsed, StreamConfig::default());
    }

    #[test]
    fn test_run_config() {
        let mut config = StreamConfig::default();
        config.runner.verify_outputs = false;
        config.runner.trials = 3;

        let run = config.run_config();
        assert_eq!(run.trials, 3);
        assert!(!run.verify_outputs);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = StreamConfig::default();
        config.runner.trials = 0;
        assert!(config.validate().is_err());

        let mut config = StreamConfig::default();
        config.runner.value_bound = 0;
        assert!(config.validate().is_err());

        let mut config = StreamConfig::default();
        config.output.format = "html".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_discover_from_finds_ancestor_file() {
        let root = tempfile::tempdir().expect("tempdir");
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).expect("mkdir");
        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[runner]\ntrials = 7\n",
        )
        .expect("write config");

        let config = StreamConfig::discover_from(&nested).expect("discovered");
        assert_eq!(config.runner.trials, 7);
        assert_eq!(config.runner.sample_size, 10_000);
    }

    #[test]
    fn test_discover_from_skips_unparseable_file() {
        let root = tempfile::tempdir().expect("tempdir");
        std::fs::write(root.path().join(CONFIG_FILE_NAME), "[runner\n").expect("write");

        assert_eq!(StreamConfig::discover_from(root.path()), None);
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let err = StreamConfig::load("/nonexistent/streambench.toml").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/streambench.toml"));
    }
}
