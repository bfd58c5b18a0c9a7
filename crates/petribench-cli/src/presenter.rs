//! Presenters that write workload results to an output stream.

use std::io::{self, Write};

use petribench_core::{FizzBuzz, WorkloadReport};

use crate::output::{banner_lines, completion_lines, summary_lines, OutputFormat};

/// Trait for presenting workload results.
///
/// The three memory-workload hooks are called in order: banner, summary,
/// completion.
pub trait ReportPresenter: Send + Sync {
    /// Present the banner printed before any work happens.
    fn present_banner(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Present the counts derived by the memory workload.
    fn present_summary(&self, report: &WorkloadReport, out: &mut dyn Write) -> io::Result<()>;

    /// Present the aggregate total and the completion marker.
    fn present_completion(&self, total: usize, out: &mut dyn Write) -> io::Result<()>;

    /// Present the FizzBuzz workload.
    fn present_fizzbuzz(&self, items: &[FizzBuzz], out: &mut dyn Write) -> io::Result<()>;
}

/// Plain-text presenter producing the harness-parsed lines.
pub struct TextPresenter;

impl ReportPresenter for TextPresenter {
    fn present_banner(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in banner_lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn present_summary(&self, report: &WorkloadReport, out: &mut dyn Write) -> io::Result<()> {
        for line in summary_lines(report) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn present_completion(&self, total: usize, out: &mut dyn Write) -> io::Result<()> {
        for line in completion_lines(total) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn present_fizzbuzz(&self, items: &[FizzBuzz], out: &mut dyn Write) -> io::Result<()> {
        for item in items {
            writeln!(out, "{item}")?;
        }
        Ok(())
    }
}

/// JSON presenter: one document per run, nothing else on stdout.
pub struct JsonPresenter;

impl ReportPresenter for JsonPresenter {
    fn present_banner(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn present_summary(&self, report: &WorkloadReport, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    }

    fn present_completion(&self, total: usize, _out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!(total, "json output complete");
        Ok(())
    }

    fn present_fizzbuzz(&self, items: &[FizzBuzz], out: &mut dyn Write) -> io::Result<()> {
        let lines: Vec<String> = items.iter().map(ToString::to_string).collect();
        serde_json::to_writer_pretty(&mut *out, &lines)?;
        writeln!(out)
    }
}

/// Select the presenter for an output format.
#[must_use]
pub fn presenter_for(format: OutputFormat) -> Box<dyn ReportPresenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter),
        OutputFormat::Json => Box::new(JsonPresenter),
    }
}
