// File: crates/scaling-plots/src/record.rs
// Summary: One benchmark measurement row and the numeric fields charts can plot.

use serde::{Deserialize, Deserializer};

use crate::config::{COL_CPU, COL_MEMORY, COL_TIME};

/// Cell texts that stand for a missing measurement.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One (program, worker type, scale) measurement. Extra CSV columns are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    #[serde(rename = "Program")]
    pub program: String,
    #[serde(rename = "Worker_Type")]
    pub worker_type: String,
    #[serde(rename = "Scale", deserialize_with = "scale_cell")]
    pub scale: u32,
    #[serde(rename = "AvgCPU_Percent", deserialize_with = "metric_cell")]
    pub avg_cpu_percent: f64,
    #[serde(rename = "AvgMemory_Percent", deserialize_with = "metric_cell")]
    pub avg_memory_percent: f64,
    #[serde(rename = "ExecutionTime_Sec", deserialize_with = "metric_cell")]
    pub execution_time_sec: f64,
}

/// Measurement cell: surrounding blanks ignored, empty or NA text reads as NaN.
fn metric_cell<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(d)?;
    let cell = raw.trim();
    if NA_VALUES.contains(&cell) {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .map_err(|_| serde::de::Error::custom(format!("could not convert string to float: '{cell}'")))
}

/// Scale cell: a non-negative integer, surrounding blanks ignored.
fn scale_cell<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let raw = String::deserialize(d)?;
    let cell = raw.trim();
    cell.parse::<u32>()
        .map_err(|_| serde::de::Error::custom(format!("invalid scale '{cell}': expected a non-negative integer")))
}

/// Numeric field plotted on a chart's y axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    CpuPercent,
    MemoryPercent,
    ExecutionTime,
}

impl Metric {
    pub fn value(&self, r: &BenchmarkRecord) -> f64 {
        match self {
            Metric::CpuPercent => r.avg_cpu_percent,
            Metric::MemoryPercent => r.avg_memory_percent,
            Metric::ExecutionTime => r.execution_time_sec,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Metric::CpuPercent => COL_CPU,
            Metric::MemoryPercent => COL_MEMORY,
            Metric::ExecutionTime => COL_TIME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_picks_field() {
        let r = BenchmarkRecord {
            program: "progA".into(),
            worker_type: "cpu".into(),
            scale: 8,
            avg_cpu_percent: 76.0,
            avg_memory_percent: 3.08,
            execution_time_sec: 4.0,
        };
        assert_eq!(Metric::CpuPercent.value(&r), 76.0);
        assert_eq!(Metric::MemoryPercent.value(&r), 3.08);
        assert_eq!(Metric::ExecutionTime.value(&r), 4.0);
        assert_eq!(Metric::ExecutionTime.column(), "ExecutionTime_Sec");
    }

    fn parse(body: &str) -> csv::Result<BenchmarkRecord> {
        let text = format!("Program,Worker_Type,Scale,AvgCPU_Percent,AvgMemory_Percent,ExecutionTime_Sec\n{body}\n");
        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        rdr.deserialize().next().expect("one row")
    }

    #[test]
    fn empty_and_na_metrics_read_as_nan() {
        let r = parse("progA,cpu,2,10.0,,NaN").unwrap();
        assert_eq!(r.avg_cpu_percent, 10.0);
        assert!(r.avg_memory_percent.is_nan());
        assert!(r.execution_time_sec.is_nan());

        let r = parse("progA,cpu,2,N/A, ,null").unwrap();
        assert!(r.avg_cpu_percent.is_nan());
        assert!(r.avg_memory_percent.is_nan());
        assert!(r.execution_time_sec.is_nan());
    }

    #[test]
    fn numeric_cells_are_trimmed_text_cells_are_not() {
        let r = parse(" progA,cpu , 4 , 1.5,0.25 ,3").unwrap();
        assert_eq!(r.program, " progA");
        assert_eq!(r.worker_type, "cpu ");
        assert_eq!(r.scale, 4);
        assert_eq!(r.avg_cpu_percent, 1.5);
        assert_eq!(r.avg_memory_percent, 0.25);
    }

    #[test]
    fn bad_cells_are_rejected() {
        let err = parse("progA,cpu,2,ten,1,1").unwrap_err();
        assert!(err.to_string().contains("could not convert string to float: 'ten'"), "{err}");
        assert!(parse("progA,cpu,,1,1,1").is_err());
        assert!(parse("progA,cpu,two,1,1,1").is_err());
    }
}
