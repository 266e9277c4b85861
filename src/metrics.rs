//! Common metrics for predictions over raw labels
//!
//! Predictions of sylva models are strings, so both metrics take slices of anything string-like:
//! the predicted labels and the ground truth, index by index.

use crate::error::{Error, Result};
use crate::value::{to_number, Value};

fn check_lengths(predictions: usize, truth: usize) -> Result<()> {
    if predictions != truth {
        return Err(Error::InvalidArgument(format!(
            "{} predictions compared to {} ground truth labels",
            predictions, truth
        )));
    }
    if predictions == 0 {
        return Err(Error::InvalidArgument(
            "no predictions to compare".to_string(),
        ));
    }

    Ok(())
}

/// Fraction of predictions equal to the ground truth, ignoring surrounding whitespace
pub fn accuracy<P: AsRef<str>, T: AsRef<str>>(predictions: &[P], truth: &[T]) -> Result<f64> {
    check_lengths(predictions.len(), truth.len())?;

    let correct = predictions
        .iter()
        .zip(truth)
        .filter(|(p, t)| p.as_ref().trim() == t.as_ref().trim())
        .count();

    Ok(correct as f64 / predictions.len() as f64)
}

/// Mean absolute error between numeric predictions and numeric ground truth
///
/// Pairs where either side is missing are skipped. A field which is neither a number nor missing
/// fails with `Error::MalformedValue`, where `column` is 0 for predictions and 1 for the ground
/// truth.
pub fn mean_absolute_error<P: AsRef<str>, T: AsRef<str>>(
    predictions: &[P],
    truth: &[T],
) -> Result<f64> {
    check_lengths(predictions.len(), truth.len())?;

    let parse = |column: usize, field: &str| {
        to_number(field).map_err(|err| Error::MalformedValue {
            column,
            value: err.value,
        })
    };

    let mut sum = 0.0;
    let mut count = 0;
    for (p, t) in predictions.iter().zip(truth) {
        if let (Value::Number(p), Value::Number(t)) = (parse(0, p.as_ref())?, parse(1, t.as_ref())?)
        {
            sum += (p - t).abs();
            count += 1;
        }
    }

    if count == 0 {
        return Err(Error::InvalidArgument(
            "no pair of non-missing numeric labels".to_string(),
        ));
    }

    Ok(sum / count as f64)
}
