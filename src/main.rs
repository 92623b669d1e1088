mod analysis;
mod collector;
mod domain;
mod error;
mod formulas;
mod report;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::analysis::analyze_people;
use crate::collector::collect_people;
use crate::report::{ReportFormat, render};

/// BMI and exercise calorie report for a group of people.
#[derive(Parser, Debug)]
#[command(name = "fitnessreport")]
#[command(about = "Interactive BMI, calorie and overweight report")]
#[command(version)]
struct Args {
    /// Read answers from a file instead of the terminal, one per line.
    /// Can also be set via FITNESS_INPUT environment variable.
    #[arg(long, value_name = "FILE", env = "FITNESS_INPUT")]
    input: Option<PathBuf>,

    /// Report format.
    /// Can also be set via FITNESS_FORMAT environment variable.
    #[arg(long, value_enum, env = "FITNESS_FORMAT", default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            log::info!("Reading answers from {}", path.display());
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    // Keep stdout clean for machine-readable output
    let prompts: Box<dyn Write> = match args.format {
        ReportFormat::Text => Box::new(io::stdout()),
        ReportFormat::Json => Box::new(io::stderr()),
    };

    let people = collect_people(input, prompts).context("Failed to collect fitness data")?;

    let report = analyze_people(&people);
    if report.is_empty() {
        log::info!("No people entered");
    }

    let stdout = io::stdout();
    render(&report, args.format, stdout.lock()).context("Failed to write report")?;

    Ok(())
}
