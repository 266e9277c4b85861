//! Error types in sylva
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid argument {0}")]
    InvalidArgument(String),
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("malformed value {value:?} in numeric column {column}")]
    MalformedValue { column: usize, value: String },
    #[error("row has {got} fields, expected {expected}")]
    RowLength { expected: usize, got: usize },
    #[error("row {row} has {got} fields, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
