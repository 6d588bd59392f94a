// File: crates/scaling-plots/src/table.rs
// Summary: Input locator, CSV table loader with schema check, and row selection helpers.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info};

use crate::config::{ReportConfig, REQUIRED_COLUMNS};
use crate::error::ReportError;
use crate::record::BenchmarkRecord;

/// Resolve the input file under `dir`; fails when it does not exist.
pub fn locate_input(dir: &Path, cfg: &ReportConfig) -> Result<PathBuf, ReportError> {
    let path = dir.join(&cfg.input_file);
    if !path.is_file() {
        return Err(ReportError::MissingInput { path: cfg.input_file.clone(), producer: cfg.producer_command.clone() });
    }
    debug!(path = %path.display(), "located input");
    Ok(path)
}

/// Names from `REQUIRED_COLUMNS` that are absent from `headers`.
pub fn missing_columns(headers: &StringRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|&&want| !headers.iter().any(|h| h == want))
        .map(|s| s.to_string())
        .collect()
}

/// Parse the benchmark CSV at `path`. Headers are checked before any row is converted.
///
/// Short rows are padded with empty cells, so their missing measurements read as NaN.
/// Rows longer than the header are rejected.
pub fn load_table(path: &Path) -> Result<BenchmarkTable, ReportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(ReportError::NoColumns);
    }
    debug!(?headers, "parsed header");

    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(ReportError::MissingColumns {
            missing,
            required: REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect(),
        });
    }

    let width = headers.len();
    let mut records = Vec::new();
    for row in rdr.records() {
        let mut row = row?;
        if row.len() > width {
            let line = row.position().map_or(0, |p| p.line());
            return Err(ReportError::TooManyFields { line, expected: width, found: row.len() });
        }
        if row.len() < width {
            debug!(line = row.position().map(|p| p.line()), fields = row.len(), "padding short row");
            while row.len() < width {
                row.push_field("");
            }
        }
        records.push(row.deserialize::<BenchmarkRecord>(Some(&headers))?);
    }
    info!(rows = records.len(), "loaded benchmark table");
    Ok(BenchmarkTable::new(records))
}

/// Loaded benchmark rows in file order; read-only for the rest of the run.
#[derive(Clone, Debug, Default)]
pub struct BenchmarkTable {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkTable {
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct program values in first-seen order.
    pub fn programs(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(|r| r.program.as_str()))
    }

    /// Distinct worker types in first-seen order.
    pub fn worker_types(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(|r| r.worker_type.as_str()))
    }

    /// Distinct scales, ascending.
    pub fn scales(&self) -> Vec<u32> {
        let mut v: Vec<u32> = self.records.iter().map(|r| r.scale).collect();
        v.sort_unstable();
        v.dedup();
        v
    }

    /// Rows matching both `worker_type` and `program`, in file order.
    pub fn select<'a>(&'a self, worker_type: &'a str, program: &'a str) -> impl Iterator<Item = &'a BenchmarkRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.worker_type == worker_type && r.program == program)
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Program,Worker_Type,Scale,AvgCPU_Percent,AvgMemory_Percent,ExecutionTime_Sec";

    fn write_csv(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("table.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_rows_and_summaries() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!(
            "{HEADER}\nprogB,mem,4,1.0,0.5,9.0\nprogA,cpu,8,76.0,3.08,4.0\nprogA,cpu,2,10.0,1.0,5.0\nprogB,cpu,2,50.0,0.4,3.0\n"
        );
        let table = load_table(&write_csv(dir.path(), &body)).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.programs(), vec!["progB", "progA"]);
        assert_eq!(table.worker_types(), vec!["mem", "cpu"]);
        assert_eq!(table.scales(), vec![2, 4, 8]);
        assert_eq!(table.select("cpu", "progA").count(), 2);
    }

    #[test]
    fn extra_columns_and_order_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let body = "Run,Scale,Program,ExecutionTime_Sec,Worker_Type,AvgMemory_Percent,AvgCPU_Percent\n\
                    1, 3 ,progA,2.5,io,0.2,11.0\n";
        let table = load_table(&write_csv(dir.path(), body)).unwrap();
        let r = &table.records()[0];
        assert_eq!(r.program, "progA");
        assert_eq!(r.scale, 3);
        assert_eq!(r.avg_cpu_percent, 11.0);
        assert_eq!(r.execution_time_sec, 2.5);
    }

    #[test]
    fn header_only_is_an_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_table(&write_csv(dir.path(), &format!("{HEADER}\n"))).unwrap();
        assert!(table.is_empty());
        assert!(table.scales().is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let body = "Program,Worker_Type,Scale,AvgCPU_Percent,AvgMemory_Percent\nprogA,cpu,2,1,1\n";
        match load_table(&write_csv(dir.path(), body)) {
            Err(ReportError::MissingColumns { missing, required }) => {
                assert_eq!(missing, vec!["ExecutionTime_Sec".to_string()]);
                assert_eq!(required.len(), 6);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn bad_number_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!("{HEADER}\nprogA,cpu,two,1,1,1\n");
        assert!(matches!(load_table(&write_csv(dir.path(), &body)), Err(ReportError::Malformed { .. })));
    }

    #[test]
    fn empty_metric_cell_reads_as_nan() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!("{HEADER}\nprogA,cpu,2,10.0,,5.0\nprogA,cpu,4,20.0,1.0,4.0\n");
        let table = load_table(&write_csv(dir.path(), &body)).unwrap();
        assert_eq!(table.len(), 2);
        let r = &table.records()[0];
        assert_eq!(r.avg_cpu_percent, 10.0);
        assert!(r.avg_memory_percent.is_nan());
        assert_eq!(r.execution_time_sec, 5.0);
    }

    #[test]
    fn short_row_is_padded_with_nan() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!("{HEADER}\nprogA,cpu,2,10.0,1.0,5.0\nprogA,cpu,4\n");
        let table = load_table(&write_csv(dir.path(), &body)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.scales(), vec![2, 4]);
        let r = &table.records()[1];
        assert_eq!((r.program.as_str(), r.worker_type.as_str(), r.scale), ("progA", "cpu", 4));
        assert!(r.avg_cpu_percent.is_nan());
        assert!(r.avg_memory_percent.is_nan());
        assert!(r.execution_time_sec.is_nan());
    }

    #[test]
    fn long_row_is_rejected_with_its_line() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!("{HEADER}\nprogA,cpu,2,1,1,1\nprogA,cpu,4,1,1,1,9\n");
        match load_table(&write_csv(dir.path(), &body)) {
            Err(ReportError::TooManyFields { line, expected, found }) => {
                assert_eq!((line, expected, found), (3, 6, 7));
            }
            other => panic!("expected TooManyFields, got {other:?}"),
        }
    }

    #[test]
    fn headers_are_matched_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let body = "Program,Worker_Type, Scale,AvgCPU_Percent,AvgMemory_Percent,ExecutionTime_Sec\nprogA,cpu,2,1,1,1\n";
        match load_table(&write_csv(dir.path(), body)) {
            Err(ReportError::MissingColumns { missing, .. }) => assert_eq!(missing, vec!["Scale".to_string()]),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_has_no_columns() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_table(&write_csv(dir.path(), "")), Err(ReportError::NoColumns)));
    }

    #[test]
    fn locate_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ReportConfig::default();
        match locate_input(dir.path(), &cfg) {
            Err(ReportError::MissingInput { path, producer }) => {
                assert_eq!(path, PathBuf::from(crate::config::INPUT_FILE));
                assert_eq!(producer, crate::config::PRODUCER_COMMAND);
            }
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }
}
