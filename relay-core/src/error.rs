//! Error type of the library.
use thiserror::Error;

/// Error in operations on [`Record`](crate::record::Record) entries.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The record has no entry with the given key.
    #[error("no record entry with key: {0}")]
    RecordKeyError(String),

    /// The entry exists but holds a value of a different type.
    #[error("record entry is not of type {0}")]
    RecordValueTypeError(String),
}
