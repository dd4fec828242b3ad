//! nrtest-summary CLI
//!
//! Entry point for the `nrtest-summary` command-line tool.

use clap::{ArgAction, Parser};
use nrtest_summary::config::ConfigOverrides;
use nrtest_summary::{summarize_file, ExitCode, OutputFormat, SummaryConfig, SummaryError};
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nrtest-summary")]
#[command(about = "Summarize an nrtest JSON report as CI output variables", version)]
struct Cli {
    /// Path to the nrtest JSON report
    report: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::KeyValue)]
    format: OutputFormat,

    /// Path to a TOML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Top-level field holding the test entries (default: Tests)
    #[arg(long)]
    collection_field: Option<String>,

    /// Boolean field on each test entry (default: passed)
    #[arg(long)]
    passed_field: Option<String>,

    /// Exit with status 1 when any test failed
    #[arg(long)]
    fail_on_test_failure: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Suppress all logging
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(code.as_i32());
}

fn run(cli: &Cli) -> Result<ExitCode, SummaryError> {
    let overrides = ConfigOverrides {
        collection_field: cli.collection_field.clone(),
        passed_field: cli.passed_field.clone(),
        fail_on_test_failure: cli.fail_on_test_failure.then_some(true),
    };
    let config = SummaryConfig::build(cli.config.as_deref(), &overrides)?;

    let summary = summarize_file(&cli.report, &config)?;

    // Render fully before writing so a failure never leaves partial output
    let output = cli.format.render(&summary)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(config.exit_code_for(&summary))
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}
