//! `sylva-datasets` reads tables of raw fields and provides small datasets for tests and examples.
//!
//! ## The Big Picture
//!
//! `sylva-datasets` is a crate in the `sylva` workspace. Models in `sylva` are fitted on a
//! [`sylva::Table`] of raw string fields, and this crate is the place where such tables come
//! from: CSV files, a bundled toy dataset and random generators.
//!
//! ## Current State
//!
//! * [`read_csv`]: reads any CSV source without interpreting its fields
//! * [`play_tennis`]: the classic 14-row weather dataset, with the label in column 4
//! * [`generate`]: random tables for regression and classification with a known structure
//!
//! ## Using a dataset
//!
//! ```rust
//! let table = sylva_datasets::play_tennis();
//! assert_eq!(table.nrows(), 14);
//! assert_eq!(table.column_names()[4], "play");
//! ```

mod dataset;
mod error;
pub mod generate;

pub use dataset::*;
pub use error::ReadError;
