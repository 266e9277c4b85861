use rand::{rngs::SmallRng, Rng, SeedableRng};
use sylva::{
    error::{Error, Result},
    ParamGuard,
};
use sylva_trees::DEFAULT_MAX_ATTEMPTS;

use crate::RandomForest;

/// Number of trees grown when the ensemble size is not specified
pub const DEFAULT_ENSEMBLE_SIZE: usize = 30;

/// The set of hyperparameters that can be specified for fitting a
/// [random forest](struct.RandomForest.html).
///
/// Every member tree is fitted on the full table with the same label column and attempt budget.
/// Members only differ by the seed of their random generator, which is drawn from `rng`.
///
/// ### Example
///
/// ```rust
/// use rand::{rngs::SmallRng, SeedableRng};
/// use sylva::prelude::*;
/// use sylva_ensemble::RandomForestParams;
///
/// let table = Table::from_rows(vec![
///     vec!["A", "1"],
///     vec!["A", "2"],
///     vec!["B", "10"],
///     vec!["B", "11"],
/// ])
/// .unwrap();
///
/// let forest = RandomForestParams::new_fixed_rng(SmallRng::seed_from_u64(42))
///     .ensemble_size(10)
///     .label_column(1)
///     .fit(&table)
///     .unwrap();
///
/// assert_eq!(forest.ensemble_size(), 10);
/// assert_eq!(forest.predict(&["A", "?"]).unwrap(), "1.5");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RandomForestValidParams<R> {
    ensemble_size: usize,
    label_column: usize,
    max_attempts: usize,
    rng: R,
}

impl<R> RandomForestValidParams<R> {
    pub fn ensemble_size(&self) -> usize {
        self.ensemble_size
    }

    pub fn label_column(&self) -> usize {
        self.label_column
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RandomForestParams<R>(RandomForestValidParams<R>);

impl RandomForestParams<SmallRng> {
    pub fn new() -> Self {
        Self::new_fixed_rng(SmallRng::from_entropy())
    }
}

impl<R: Rng + Clone> RandomForestParams<R> {
    /// Default parameters drawing the seed of every member tree from `rng`
    pub fn new_fixed_rng(rng: R) -> Self {
        Self(RandomForestValidParams {
            ensemble_size: DEFAULT_ENSEMBLE_SIZE,
            label_column: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng,
        })
    }

    /// Sets the number of trees in the forest
    pub fn ensemble_size(mut self, ensemble_size: usize) -> Self {
        self.0.ensemble_size = ensemble_size;
        self
    }

    /// Sets the index of the column holding the labels, shared by every tree
    pub fn label_column(mut self, label_column: usize) -> Self {
        self.0.label_column = label_column;
        self
    }

    /// Sets the split attempt budget of every tree
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.0.max_attempts = max_attempts;
        self
    }
}

impl Default for RandomForestParams<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomForest {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `ensemble_size = 30`
    /// * `label_column = 0`
    /// * `max_attempts = 6`
    /// * a `SmallRng` seeded from the operating system
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> RandomForestParams<SmallRng> {
        RandomForestParams::new()
    }
}

impl<R> ParamGuard for RandomForestParams<R> {
    type Checked = RandomForestValidParams<R>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.ensemble_size == 0 {
            Err(Error::Parameters(
                "Ensemble size should be at least one, but was 0".to_string(),
            ))
        } else if self.0.max_attempts == 0 {
            Err(Error::Parameters(
                "Maximum number of split attempts should be at least one, but was 0".to_string(),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() -> Result<()> {
        let params = RandomForest::params().check()?;

        assert_eq!(params.ensemble_size(), DEFAULT_ENSEMBLE_SIZE);
        assert_eq!(params.label_column(), 0);
        assert_eq!(params.max_attempts(), DEFAULT_MAX_ATTEMPTS);

        Ok(())
    }

    #[test]
    fn builder_sets_values() -> Result<()> {
        let params = RandomForestParams::new_fixed_rng(SmallRng::seed_from_u64(3))
            .ensemble_size(7)
            .label_column(2)
            .max_attempts(12)
            .check()?;

        assert_eq!(params.ensemble_size(), 7);
        assert_eq!(params.label_column(), 2);
        assert_eq!(params.max_attempts(), 12);

        Ok(())
    }

    #[test]
    fn zero_ensemble_size_is_rejected() {
        let params = RandomForest::params().ensemble_size(0);

        assert!(matches!(params.check_ref(), Err(Error::Parameters(_))));
    }

    #[test]
    #[should_panic]
    /// Check that a zero attempt budget panics
    fn panic_zero_max_attempts() {
        RandomForest::params().max_attempts(0).check_unwrap();
    }
}
