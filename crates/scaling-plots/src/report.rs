// File: crates/scaling-plots/src/report.rs
// Summary: Console reporter: progress lines, table summary, closing file list, and error diagnostics.

use std::io::{self, Write};
use std::path::Path;

use crate::charts::ChartPlan;
use crate::error::ReportError;
use crate::table::BenchmarkTable;

pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn reading(&mut self) -> io::Result<()> {
        writeln!(self.out, "Reading benchmark data...")
    }

    pub fn summary(&mut self, table: &BenchmarkTable) -> io::Result<()> {
        writeln!(self.out, "  Loaded {} data rows", table.len())?;
        writeln!(self.out, "  Programs: {}", array_list(&table.programs()))?;
        writeln!(self.out, "  Worker types: {}", array_list(&table.worker_types()))?;
        let scales: Vec<String> = table.scales().iter().map(|s| s.to_string()).collect();
        writeln!(self.out, "  Scales: [{}]", scales.join(", "))?;
        writeln!(self.out)
    }

    pub fn generating(&mut self) -> io::Result<()> {
        writeln!(self.out, "Generating performance analysis plots...")
    }

    pub fn generated(&mut self, path: &Path) -> io::Result<()> {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_else(|| path.to_string_lossy());
        writeln!(self.out, "  Generated: {}", name)
    }

    pub fn completion(&mut self, plans: &[ChartPlan]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "All {} plots generated successfully!", plans.len())?;
        writeln!(self.out)?;
        writeln!(self.out, "Plot Files:")?;
        for (i, plan) in plans.iter().enumerate() {
            writeln!(self.out, "  {}. {:<31}({})", i + 1, plan.file_name(), plan.purpose())?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Next Steps:")?;
        writeln!(self.out, "  1. Open plots to verify data visualization")?;
        writeln!(self.out, "  2. Analyze trends and identify optimal scale for each workload")?;
        writeln!(self.out, "  3. Compare Part C baseline with Part D scaling results")?;
        writeln!(self.out, "  4. Include plots in PA01 report")?;
        writeln!(self.out)
    }

    pub fn error(&mut self, err: &ReportError) -> io::Result<()> {
        match err {
            ReportError::MissingInput { path, producer } => {
                writeln!(self.out, "Error: {} not found", path.display())?;
                writeln!(self.out, "Please run Part D benchmark first: {}", producer)
            }
            ReportError::Malformed { source } => writeln!(self.out, "Error reading CSV: {}", source),
            ReportError::NoColumns | ReportError::TooManyFields { .. } => {
                writeln!(self.out, "Error reading CSV: {}", err)
            }
            ReportError::MissingColumns { required, .. } => {
                writeln!(self.out, "Error: CSV missing required columns: {}", quoted_list(required))
            }
        }
    }
}

/// `['a', 'b']`
fn quoted_list<S: AsRef<str>>(items: &[S]) -> String {
    let parts: Vec<String> = items.iter().map(|s| format!("'{}'", s.as_ref())).collect();
    format!("[{}]", parts.join(", "))
}

/// `['a' 'b']`, the way array-valued distinct sets are usually printed.
fn array_list<S: AsRef<str>>(items: &[S]) -> String {
    let parts: Vec<String> = items.iter().map(|s| format!("'{}'", s.as_ref())).collect();
    format!("[{}]", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::report_plans;
    use crate::record::BenchmarkRecord;
    use std::path::PathBuf;

    fn output(f: impl FnOnce(&mut ConsoleReporter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut r = ConsoleReporter::new(Vec::new());
        f(&mut r).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    fn rec(program: &str, worker: &str, scale: u32) -> BenchmarkRecord {
        BenchmarkRecord {
            program: program.into(),
            worker_type: worker.into(),
            scale,
            avg_cpu_percent: 1.0,
            avg_memory_percent: 1.0,
            execution_time_sec: 1.0,
        }
    }

    #[test]
    fn summary_lists_distinct_values() {
        let table = BenchmarkTable::new(vec![rec("progA", "cpu", 8), rec("progB", "io", 2), rec("progA", "cpu", 2)]);
        let text = output(|r| r.summary(&table));
        assert_eq!(
            text,
            "  Loaded 3 data rows\n  Programs: ['progA' 'progB']\n  Worker types: ['cpu' 'io']\n  Scales: [2, 8]\n\n"
        );
    }

    #[test]
    fn completion_aligns_purposes() {
        let text = output(|r| r.completion(&report_plans()));
        assert!(text.contains("All 4 plots generated successfully!"));
        assert!(text.contains("  1. MT25081_cpu_vs_components.png  (CPU utilization scaling)\n"));
        assert!(text.contains("  3. MT25081_io_vs_components.png   (I/O CPU utilization scaling)\n"));
        assert!(text.contains("  4. MT25081_time_vs_components.png (Execution time comparison)\n"));
    }

    #[test]
    fn missing_input_names_producer() {
        let err = ReportError::MissingInput { path: PathBuf::from("in.csv"), producer: "bash make.sh".into() };
        let text = output(|r| r.error(&err));
        assert_eq!(text, "Error: in.csv not found\nPlease run Part D benchmark first: bash make.sh\n");
    }

    #[test]
    fn missing_columns_lists_all_required() {
        let err = ReportError::MissingColumns {
            missing: vec!["Scale".into()],
            required: vec!["Program".into(), "Scale".into()],
        };
        let text = output(|r| r.error(&err));
        assert_eq!(text, "Error: CSV missing required columns: ['Program', 'Scale']\n");
    }

    #[test]
    fn parse_failures_share_one_prefix() {
        assert_eq!(output(|r| r.error(&ReportError::NoColumns)), "Error reading CSV: No columns to parse from file\n");
        let err = ReportError::TooManyFields { line: 4, expected: 6, found: 8 };
        assert_eq!(
            output(|r| r.error(&err)),
            "Error reading CSV: Error tokenizing data. Expected 6 fields in line 4, saw 8\n"
        );
    }

    #[test]
    fn generated_prints_file_name_only() {
        let text = output(|r| r.generated(Path::new("/tmp/x/MT25081_cpu_vs_components.png")));
        assert_eq!(text, "  Generated: MT25081_cpu_vs_components.png\n");
    }
}
