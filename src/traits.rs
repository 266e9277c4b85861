//! Provide traits for different classes of algorithms
//!

use crate::dataset::Table;
use crate::error::Result;

/// Fittable algorithms
///
/// A fittable algorithm takes a table of raw fields and creates a concept of some kind about it.
/// The label column, if any, is part of the algorithm's hyperparameters rather than of the table.
pub trait Fit<E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, table: &Table) -> std::result::Result<Self::Object, E>;
}

/// Predict with a fitted model
///
/// A row is given as its raw fields, laid out exactly like the rows the model was fitted on,
/// label column included. The value found in the label column is ignored.
pub trait Predict {
    /// Predicts the label of a single row
    fn predict<S: AsRef<str>>(&self, row: &[S]) -> Result<String>;

    /// Predicts the label of every row of a table, stopping at the first error
    fn predict_records(&self, table: &Table) -> Result<Vec<String>> {
        (0..table.nrows())
            .map(|idx| self.predict(&table.row_fields(idx)))
            .collect()
    }
}
