use crate::night::DateRangeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What is wrong with a single data row.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid room count {value:?}")]
    RoomCount { value: String },

    #[error("invalid date {value:?}")]
    Date { value: String },

    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    #[error("hotel {0:?} is not in the catalog")]
    UnknownHotel(String),
}

/// Failure while loading the catalog or the booking ledger. All of these are
/// terminal for the run: the load either completes fully or yields nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file {} does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{file}, line {line}: {source}")]
    Row {
        file: String,
        line: usize,
        #[source]
        source: RowError,
    },
}
