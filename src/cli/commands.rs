//! Command implementations

use super::{Cli, OutputFormat};
use crate::browser::Launcher;
use crate::pipeline::{Pipeline, Report};
use anyhow::{Context, Result};

/// Resolve the documentation URL, print it and optionally open it
pub fn run(cli: &Cli, launcher: &dyn Launcher) -> Result<Report> {
    let pipeline = Pipeline::new(cli.settings())?;
    let report = pipeline.resolve(&cli.path)?;

    match cli.format {
        OutputFormat::Json => print_report_json(&report)?,
        OutputFormat::Text => print_report_text(&report),
    }

    if pipeline.settings().open_browser {
        launcher.open(&report.url)?;
    } else {
        tracing::debug!("not opening browser");
    }

    Ok(report)
}

/// Print the report as JSON
pub fn print_report_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

/// Print the documentation URL
pub fn print_report_text(report: &Report) {
    println!("{}", report.url);
}
