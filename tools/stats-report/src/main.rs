mod data_structures;
mod parsing;
mod report;
mod tables;

use argh::FromArgs;
use env_logger::Env;
use log::{error, info};
use parsing::parse_dataset;
use report::generate_report;
use std::path::PathBuf;
use think_stats::prelude::*;
use thiserror::Error;

/// Frequency, mode and effect size report for tabulated survey data
#[derive(FromArgs, Debug)]
pub struct Args {
    /// input dataset (.json or .json.zst)
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// number of most common values to list (default: 5)
    #[argh(option, short = 't', default = "5")]
    top: usize,

    /// decimal places for percentages (default: 2)
    #[argh(option, short = 'p', default = "2")]
    precision: usize,

    /// also list every value with its count, ordered by value
    #[argh(switch, short = 'c')]
    value_counts: bool,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    verbose: bool,
}

/// Errors that can occur while producing a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Input file does not exist: {0}")]
    MissingInput(PathBuf),

    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] report::AnalysisError),
}

type Result<T> = core::result::Result<T, ReportError>;

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let mut settings = ReportSettings {
        top_modes: args.top,
        percentage_precision: args.precision,
        value_counts: args.value_counts,
    };
    settings.sanitize();

    if !args.input.exists() {
        return Err(ReportError::MissingInput(args.input));
    }

    let dataset = parse_dataset(&args.input)?;
    let report = generate_report(&dataset, &settings)?;
    println!("{}", report.text);

    if !report.passed() {
        error!("{} check(s) failed", report.failed_checks);
        std::process::exit(1);
    }

    info!("{}: All checks passed.", args.input.display());
    Ok(())
}
