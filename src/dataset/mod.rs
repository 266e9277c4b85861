//! Datasets
//!
//! This module implements the table of raw string fields that every model in sylva is fitted on.
use ndarray::Array2;

use crate::error::{Error, Result};

mod impl_table;

/// Table
///
/// The fundamental structure of a dataset. It holds an ordered sequence of rows, each an ordered
/// sequence of raw string fields, with every row having the same number of columns. Fields are
/// never parsed on ingestion: whether a column is numeric, categorical or missing is decided by
/// the algorithms when they read it.
///
/// The records are stored as an `Array2<String>` in standard (row-major) layout with
/// dimensionality (nrows, ncols). There is no separate target array, the label is one of the
/// columns and is chosen when a model is fitted.
///
/// # Example
///
/// ```rust
/// use sylva::Table;
///
/// let table = Table::from_rows(vec![
///     vec!["sunny", "85", "no"],
///     vec!["rainy", "?", "yes"],
/// ])
/// .unwrap()
/// .with_column_names(vec!["outlook", "temperature", "play"]);
///
/// assert_eq!(table.nrows(), 2);
/// assert_eq!(table.field(1, 1), "?");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    records: Array2<String>,
    column_names: Vec<String>,
}

impl Table {
    /// Creates a table from a matrix of fields
    pub fn new(records: Array2<String>) -> Table {
        Table {
            records: records.as_standard_layout().into_owned(),
            column_names: Vec::new(),
        }
    }

    /// Creates a table from rows of fields
    ///
    /// Fails with `Error::RaggedRows` if a row's length differs from the first row's.
    pub fn from_rows<I, R, S>(rows: I) -> Result<Table>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut fields = Vec::new();
        let mut ncols = None;
        let mut nrows = 0;

        for (idx, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *ncols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(Error::RaggedRows {
                    row: idx,
                    expected,
                    got: row.len(),
                });
            }

            fields.extend(row.iter().map(|field| field.as_ref().to_string()));
            nrows += 1;
        }

        let records = Array2::from_shape_vec((nrows, ncols.unwrap_or(0)), fields)?;

        Ok(Table::new(records))
    }

    /// Attaches descriptive column names
    pub fn with_column_names<I: Into<String>>(mut self, names: Vec<I>) -> Table {
        self.column_names = names.into_iter().map(|name| name.into()).collect();
        self
    }

    /// Returns the column names, generating `column-{i}` names if none were attached
    pub fn column_names(&self) -> Vec<String> {
        if self.column_names.len() == self.ncols() {
            self.column_names.clone()
        } else {
            (0..self.ncols())
                .map(|idx| format!("column-{}", idx))
                .collect()
        }
    }

    /// Returns the underlying matrix of fields
    pub fn records(&self) -> &Array2<String> {
        &self.records
    }

    pub fn nrows(&self) -> usize {
        self.records.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.records.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.nrows() == 0
    }

    /// Returns the raw field at (`row`, `col`)
    ///
    /// ### Panics
    ///
    /// If either index is out of bounds
    pub fn field(&self, row: usize, col: usize) -> &str {
        &self.records[(row, col)]
    }
}
