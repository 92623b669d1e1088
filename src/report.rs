//! Report rendering in plain text or JSON.

use std::io::Write;

use clap::ValueEnum;

use crate::analysis::FitnessReport;

/// Output format for the session report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Writes the report in the requested format.
pub fn render<W: Write>(
    report: &FitnessReport,
    format: ReportFormat,
    out: W,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => render_text(report, out)?,
        ReportFormat::Json => render_json(report, out)?,
    }
    Ok(())
}

/// Writes the two-section console report.
///
/// BMI is shown with two decimals. Calories are shown exactly as computed
/// and always carry a fractional part (`105.0`, not `105`).
pub fn render_text<W: Write>(report: &FitnessReport, mut out: W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Fitness analysis:")?;
    for person in &report.people {
        writeln!(
            out,
            "{}: BMI = {:.2}, Calories burned = {:?}",
            person.name, person.bmi, person.calories_burned
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Overweight people:")?;
    for person in &report.overweight {
        writeln!(out, "{}: BMI = {:.2}", person.name, person.bmi)?;
    }

    Ok(())
}

/// Writes the report as a pretty-printed JSON document.
pub fn render_json<W: Write>(report: &FitnessReport, mut out: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    Ok(())
}
