// File: crates/scaling-plots/src/main.rs
// Summary: Report entry point; renders the scaling charts from the CSV in the working directory.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use scaling_plots::{telemetry, ConsoleReporter, ReportConfig, ReportError};

fn main() -> Result<ExitCode> {
    telemetry::init_subscriber(telemetry::get_subscriber("warn"))?;

    let cfg = ReportConfig::default();
    let stdout = std::io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock());

    match scaling_plots::run(&cfg, Path::new("."), &mut reporter) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<ReportError>() {
            Some(input_err) => {
                tracing::debug!(error = %input_err, "input rejected");
                reporter.error(input_err)?;
                Ok(ExitCode::from(1))
            }
            None => Err(err),
        },
    }
}
