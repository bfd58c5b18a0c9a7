//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;

use petribench_cli::{presenter_for, ReportPresenter};
use petribench_core::constants::FIZZBUZZ_LIMIT;
use petribench_core::{fizzbuzz, run_memory_workload, FizzBuzz, Variant, Workload};

use crate::config::AppConfig;

/// Run the application, writing results to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run the application against an arbitrary writer.
pub fn run_with_output(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let workload = config.workload()?;
    let format = config.format()?;
    let presenter = presenter_for(format);
    tracing::info!(?workload, %format, "starting workload");

    match workload {
        Workload::Memory => {
            let total = run_memory(config.variant()?, presenter.as_ref(), out)?;
            tracing::debug!(total, "memory workload finished");
        }
        Workload::FizzBuzz => {
            let items: Vec<FizzBuzz> = fizzbuzz(FIZZBUZZ_LIMIT).collect();
            presenter.present_fizzbuzz(&items, out)?;
        }
    }
    Ok(())
}

/// Banner, allocator, then the aggregate total. Returns the total.
pub fn run_memory(
    variant: Variant,
    presenter: &dyn ReportPresenter,
    out: &mut dyn Write,
) -> Result<usize> {
    presenter.present_banner(out)?;
    let total = memory_allocator(variant, presenter, out)?;
    presenter.present_completion(total, out)?;
    Ok(total)
}

/// Allocate the datasets for `variant`, print the derived counts, and return
/// the sum of every produced collection length.
pub fn memory_allocator(
    variant: Variant,
    presenter: &dyn ReportPresenter,
    out: &mut dyn Write,
) -> Result<usize> {
    let report = run_memory_workload(variant)?;
    presenter.present_summary(&report, out)?;
    Ok(report.total_operations)
}
