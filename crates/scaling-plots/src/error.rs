// File: crates/scaling-plots/src/error.rs
// Summary: The recognized, fatal input errors of a report run.

use std::path::PathBuf;

use thiserror::Error;

/// Input problems that stop the run before any chart is drawn.
/// Everything else (rendering, writing images) travels as a plain `anyhow::Error`.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{} not found", path.display())]
    MissingInput { path: PathBuf, producer: String },

    /// Unreadable CSV or a cell that does not convert; the source carries the position.
    #[error("error reading CSV: {source}")]
    Malformed {
        #[from]
        source: csv::Error,
    },

    /// The file has no header row at all.
    #[error("No columns to parse from file")]
    NoColumns,

    /// A data row longer than the header.
    #[error("Error tokenizing data. Expected {expected} fields in line {line}, saw {found}")]
    TooManyFields { line: u64, expected: usize, found: usize },

    #[error("CSV missing required columns: {missing:?}")]
    MissingColumns { missing: Vec<String>, required: Vec<String> },
}
