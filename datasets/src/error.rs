use thiserror::Error;

/// Errors raised while reading a table
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("csv error {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Table(#[from] sylva::error::Error),
}
