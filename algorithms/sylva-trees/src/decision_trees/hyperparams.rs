use rand::{rngs::SmallRng, Rng, SeedableRng};
use sylva::{
    error::{Error, Result},
    ParamGuard,
};

use crate::{DecisionTree, DEFAULT_MAX_ATTEMPTS};

/// The set of hyperparameters that can be specified for fitting a
/// [decision tree](struct.DecisionTree.html).
///
/// ### Example
///
/// ```rust
/// use rand::{rngs::SmallRng, SeedableRng};
/// use sylva::prelude::*;
/// use sylva_trees::DecisionTreeParams;
///
/// let table = Table::from_rows(vec![
///     vec!["A", "1"],
///     vec!["A", "2"],
///     vec!["B", "10"],
///     vec!["B", "11"],
/// ])
/// .unwrap();
///
/// // Fix the random generator to make the tree reproducible
/// let params = DecisionTreeParams::new_fixed_rng(SmallRng::seed_from_u64(42))
///     .label_column(1)
///     .max_attempts(6);
///
/// let tree = params.fit(&table).unwrap();
/// assert_eq!(tree.predict(&["B", "?"]).unwrap(), "10.5");
/// ```
///
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionTreeValidParams<R> {
    label_column: usize,
    max_attempts: usize,
    rng: R,
}

impl<R> DecisionTreeValidParams<R> {
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
pub struct DecisionTreeParams<R>(DecisionTreeValidParams<R>);

impl DecisionTreeParams<SmallRng> {
    /// Default parameters with a generator seeded from the operating system
    pub fn new() -> Self {
        Self::new_fixed_rng(SmallRng::from_entropy())
    }
}

impl<R: Rng + Clone> DecisionTreeParams<R> {
    /// Default parameters drawing every split proposal from `rng`
    pub fn new_fixed_rng(rng: R) -> Self {
        Self(DecisionTreeValidParams {
            label_column: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng,
        })
    }

    /// Sets the index of the column holding the labels
    pub fn label_column(mut self, label_column: usize) -> Self {
        self.0.label_column = label_column;
        self
    }

    /// Sets how many split proposals a node draws before it becomes a leaf
    ///
    /// A node over `n` rows never draws more than `n - 1` proposals.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.0.max_attempts = max_attempts;
        self
    }
}

impl Default for DecisionTreeParams<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `label_column = 0`
    /// * `max_attempts = 6`
    /// * a `SmallRng` seeded from the operating system
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> DecisionTreeParams<SmallRng> {
        DecisionTreeParams::new()
    }
}

impl<R> ParamGuard for DecisionTreeParams<R> {
    type Checked = DecisionTreeValidParams<R>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.max_attempts == 0 {
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
        let params = DecisionTree::params().check()?;

        assert_eq!(params.label_column(), 0);
        assert_eq!(params.max_attempts(), DEFAULT_MAX_ATTEMPTS);

        Ok(())
    }

    #[test]
    fn builder_sets_values() -> Result<()> {
        let params = DecisionTreeParams::new_fixed_rng(SmallRng::seed_from_u64(1))
            .label_column(3)
            .max_attempts(10)
            .check()?;

        assert_eq!(params.label_column(), 3);
        assert_eq!(params.max_attempts(), 10);

        Ok(())
    }

    #[test]
    #[should_panic]
    /// Check that a zero attempt budget panics
    fn panic_zero_max_attempts() {
        DecisionTree::params().max_attempts(0).check_unwrap();
    }
}
