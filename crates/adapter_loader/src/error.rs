//! Error types for dataset loading.

use mrio_model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling an input bundle from disk.
///
/// Every variant is fatal: a dataset with a missing or malformed table
/// cannot be analysed, and the loader surfaces the problem before any
/// computation starts.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// A required table file is absent from the dataset directory.
    #[error("required table '{table}' not found at {path}")]
    MissingTable {
        /// Logical table name (e.g. `intermediate_use`).
        table: &'static str,
        /// Path that was probed.
        path: PathBuf,
    },

    /// A table cell could not be parsed as a finite number.
    #[error("table '{table}' row {row}, column {column}: {message}")]
    MalformedCell {
        /// Logical table name.
        table: &'static str,
        /// Zero-based row index of the offending record.
        row: usize,
        /// Zero-based column index of the offending field.
        column: usize,
        /// Parser message.
        message: String,
    },

    /// Rows of a table disagree on column count.
    #[error("table '{table}' row {row} has {got} columns, expected {expected}")]
    RaggedTable {
        /// Logical table name.
        table: &'static str,
        /// Zero-based row index of the offending record.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },

    /// The assembled bundle failed shape validation against the region
    /// partition.
    #[error(transparent)]
    Shape(#[from] ModelError),

    /// Underlying CSV reader failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
