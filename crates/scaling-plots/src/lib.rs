// File: crates/scaling-plots/src/lib.rs
// Summary: Scaling report pipeline: locate CSV -> load + validate table -> render four charts.

pub mod charts;
pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod table;
pub mod telemetry;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

pub use charts::{report_plans, ChartPlan};
pub use config::ReportConfig;
pub use error::ReportError;
pub use record::{BenchmarkRecord, Metric};
pub use report::ConsoleReporter;
pub use table::BenchmarkTable;

/// Run the whole report inside `dir`: read the input there and write every chart there.
///
/// Input problems come back as a [`ReportError`] inside the `anyhow::Error` (check with
/// `downcast_ref`) and are raised before any image is written. Other failures are
/// rendering or I/O errors.
pub fn run<W: Write>(cfg: &ReportConfig, dir: &Path, reporter: &mut ConsoleReporter<W>) -> Result<Vec<PathBuf>> {
    let input = table::locate_input(dir, cfg)?;

    reporter.reading()?;
    let table = table::load_table(&input)?;
    reporter.summary(&table)?;

    reporter.generating()?;
    let plans = report_plans();
    let mut written = Vec::with_capacity(plans.len());
    for plan in &plans {
        let path = charts::render_plan(&table, plan, cfg, dir)?;
        reporter.generated(&path)?;
        written.push(path);
    }

    reporter.completion(&plans)?;
    Ok(written)
}
