//! Headerless CSV table readers.
//!
//! Dataset tables are plain numeric CSV with no header row: matrices one
//! data row per sector row, vectors one value per line. Harmonisation of
//! the raw statistical sources into this form happens before the data
//! reaches this crate.

use crate::LoaderError;
use nalgebra::{DMatrix, DVector};
use std::path::Path;

/// Read a dense matrix from a headerless CSV file.
///
/// The column count is fixed by the first row; subsequent rows must match
/// it exactly. Shape agreement with the region partition is the bundle's
/// concern, not the reader's.
pub fn read_matrix(table: &'static str, path: &Path) -> Result<DMatrix<f64>, LoaderError> {
    let rows = read_rows(table, path)?;
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);

    let mut matrix = DMatrix::zeros(n_rows, n_cols);
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            matrix[(i, j)] = value;
        }
    }
    Ok(matrix)
}

/// Read a vector from a headerless CSV file with one value per line.
pub fn read_vector(table: &'static str, path: &Path) -> Result<DVector<f64>, LoaderError> {
    let rows = read_rows(table, path)?;
    let mut values = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        if row.len() != 1 {
            return Err(LoaderError::RaggedTable {
                table,
                row: i,
                expected: 1,
                got: row.len(),
            });
        }
        values.push(row[0]);
    }
    Ok(DVector::from_vec(values))
}

fn read_rows(table: &'static str, path: &Path) -> Result<Vec<Vec<f64>>, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::MissingTable {
            table,
            path: path.to_path_buf(),
        });
    }

    // Flexible mode so field-count disagreements reach our own check below,
    // which reports the table name and offending row.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let mut row = Vec::with_capacity(record.len());
        for (j, field) in record.iter().enumerate() {
            let value: f64 = field.parse().map_err(|e: std::num::ParseFloatError| {
                LoaderError::MalformedCell {
                    table,
                    row: i,
                    column: j,
                    message: e.to_string(),
                }
            })?;
            // f64::from_str accepts "inf" and "NaN"; harmonised tables must
            // not contain them.
            if !value.is_finite() {
                return Err(LoaderError::MalformedCell {
                    table,
                    row: i,
                    column: j,
                    message: format!("non-finite value '{}'", field),
                });
            }
            row.push(value);
        }
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(LoaderError::RaggedTable {
                    table,
                    row: i,
                    expected: first.len(),
                    got: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
