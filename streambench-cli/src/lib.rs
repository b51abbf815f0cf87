#![warn(missing_docs)]
//! streambench CLI
//!
//! Command-line harness around the pipeline benchmark. With no arguments it
//! prints the collection demonstrations and then runs the benchmark with the
//! default parameters (100 trials of 10,000 values in `[0, 1000)`).
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     streambench_cli::run()
//! }
//! ```

mod config;
mod demos;
mod executor;

pub use config::*;
pub use demos::{
    GREETED, MATCHING_NUMBERS, MatchChecks, NUMBERS, Person, even_doubled, flatten_sorted,
    grade_lists, greetings, match_checks, people, person_names, render_demos, sum_via_fold,
    sum_via_loop,
};
pub use executor::{
    VariantStatistics, build_report, build_report_meta, compute_statistics, execute,
    format_human_output, format_percent,
};

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use streambench_report::{OutputFormat, Report, generate_json_report};

/// streambench CLI arguments
#[derive(Parser, Debug, Default)]
#[command(name = "streambench")]
#[command(
    author,
    version,
    about = "Functional pipelines versus loops, with a pipeline-ordering micro-benchmark"
)]
pub struct Cli {
    /// Optional subcommand; defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Number of trials
    #[arg(long, short = 'n')]
    pub trials: Option<usize>,

    /// Integers generated per trial
    #[arg(long)]
    pub sample_size: Option<usize>,

    /// Exclusive upper bound of generated integers
    #[arg(long)]
    pub value_bound: Option<i32>,

    /// Seed for reproducible samples
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Skip checking that all variants agree on every trial
    #[arg(long)]
    pub no_verify: bool,

    /// Run the benchmark without the demonstrations
    #[arg(long)]
    pub skip_demos: bool,

    /// Configuration file (default: discover streambench.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Demonstrations followed by the benchmark (default)
    Run,
    /// Demonstrations only
    Demos,
    /// Benchmark only
    Bench,
    /// Print a default streambench.toml
    InitConfig,
}

/// Parse arguments from the process and run.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run with pre-parsed arguments, writing to stdout
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to_writer(&cli, &mut out)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "streambench=debug"
    } else {
        "streambench=info"
    };
    // Logs go to stderr so stdout carries only the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layer configuration: defaults, then streambench.toml, then CLI flags.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<StreamConfig> {
    let mut config = match &cli.config {
        Some(path) => StreamConfig::load(path)?,
        None => StreamConfig::discover().unwrap_or_default(),
    };

    if let Some(trials) = cli.trials {
        config.runner.trials = trials;
    }
    if let Some(sample_size) = cli.sample_size {
        config.runner.sample_size = sample_size;
    }
    if let Some(value_bound) = cli.value_bound {
        config.runner.value_bound = value_bound;
    }
    if cli.seed.is_some() {
        config.runner.seed = cli.seed;
    }
    if let Some(format) = &cli.format {
        config.output.format = format.clone();
    }
    if cli.no_verify {
        config.runner.verify_outputs = false;
    }
    if cli.skip_demos {
        config.output.show_demos = false;
    }

    config.validate()?;
    Ok(config)
}

/// Run with pre-parsed arguments, writing all output to `out`
pub fn run_to_writer(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Run);
    if command == Commands::InitConfig {
        write!(out, "{}", StreamConfig::default_toml())?;
        return Ok(());
    }

    let config = resolve_config(cli)?;
    let format = config.output_format()?;

    let show_demos = match command {
        Commands::Demos => true,
        Commands::Bench => false,
        _ => config.output.show_demos,
    };
    if show_demos {
        if format == OutputFormat::Json {
            tracing::debug!("Demonstrations are omitted from JSON output");
        } else {
            write!(out, "{}", render_demos())?;
        }
    }

    if command == Commands::Demos {
        return Ok(());
    }

    let report = run_benchmark(&config)?;
    match format {
        OutputFormat::Human => write!(out, "{}", format_human_output(&report))?,
        OutputFormat::Json => writeln!(out, "{}", generate_json_report(&report)?)?,
    }
    out.flush()?;
    Ok(())
}

/// Run the trials described by `config` and build the report
pub fn run_benchmark(config: &StreamConfig) -> anyhow::Result<Report> {
    let start = Instant::now();
    let outcome = execute(&config.run_config(), config.runner.seed)?;
    let stats = compute_statistics(&outcome);
    let total_duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        trials = outcome.trial_count(),
        duration_ms = total_duration_ms,
        "Benchmark complete"
    );

    Ok(build_report(
        &outcome,
        &stats,
        config.runner.seed,
        total_duration_ms,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_cli(extra: &[&str]) -> Cli {
        let mut args = vec![
            "streambench",
            "--trials",
            "2",
            "--sample-size",
            "100",
            "--seed",
            "5",
        ];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).expect("valid arguments")
    }

    fn output_of(cli: &Cli) -> String {
        let mut buf = Vec::new();
        run_to_writer(cli, &mut buf).expect("run");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_no_arguments_parse() {
        let cli = Cli::try_parse_from(["streambench"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.trials.is_none());
        assert!(!cli.no_verify);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = quick_cli(&["--no-verify", "--skip-demos", "--format", "json"]);
        let config = resolve_config(&cli).expect("config");

        assert_eq!(config.runner.trials, 2);
        assert_eq!(config.runner.sample_size, 100);
        assert_eq!(config.runner.seed, Some(5));
        assert!(!config.runner.verify_outputs);
        assert!(!config.output.show_demos);
        assert_eq!(config.output_format().expect("format"), OutputFormat::Json);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let cli = Cli::try_parse_from(["streambench", "--trials", "0"]).expect("parse");
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_default_run_prints_demos_then_benchmark() {
        let text = output_of(&quick_cli(&[]));

        let demo = text.find("Example 1").expect("demos printed");
        let example7 = text.find("Example 7").expect("benchmark banner");
        let bench = text
            .find("Average time taken for unoptimized pipeline")
            .expect("benchmark printed");
        assert!(demo < example7 && example7 < bench);
    }

    #[test]
    fn test_demos_subcommand() {
        let text = output_of(&quick_cli(&["demos"]));
        assert!(text.contains("Hello, Alice!"));
        assert!(!text.contains("Average time taken"));
    }

    #[test]
    fn test_bench_subcommand_json() {
        let text = output_of(&quick_cli(&["--format", "json", "bench"]));
        let report = streambench_report::parse_json_report(&text).expect("json report");

        assert_eq!(report.summary.trials, 2);
        assert_eq!(report.variants.len(), 3);
        assert_eq!(report.differences.len(), 2);
        assert_eq!(report.meta.config.seed, Some(5));
    }

    #[test]
    fn test_init_config() {
        let text = output_of(&quick_cli(&["init-config"]));
        let parsed: StreamConfig = toml::from_str(&text).expect("toml");
        assert_eq!(parsed, StreamConfig::default());
    }
}
