//! Thin adapter between the input files and the typed loaders: file reading,
//! header skipping and comma-separated field splitting.

use crate::error::{LoadError, RowError};
use std::io;
use std::path::Path;

pub fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Data rows with their 1-based line numbers. The first line is the header
/// and is never yielded.
pub fn data_rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().skip(1).map(|(i, row)| (i + 1, row))
}

/// Splits a row on commas, trimming whitespace around each field.
pub fn fields(row: &str, expected: usize) -> Result<Vec<&str>, RowError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(RowError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}
