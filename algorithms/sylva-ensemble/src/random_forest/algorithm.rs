use rand::{rngs::SmallRng, Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use sylva::{
    error::{Error, Result},
    summarize_labels,
    traits::*,
    Table,
};
use sylva_trees::{check_table, DecisionTree, DecisionTreeParams};
use tracing::{debug, info, instrument};

use super::RandomForestValidParams;

/// A fitted forest of randomized decision trees
///
/// Every member is a [`DecisionTree`] fitted on the whole table with the same label column. Members
/// differ only by the seed of their generator, so the diversity of the forest comes entirely from
/// the random split proposals.
///
/// The prediction of the forest is the [summary](sylva::summarize_labels) of the predictions of its
/// members: their mean if all of them are numeric, their most frequent value otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl<R: Rng + Clone> Fit<Error> for RandomForestValidParams<R> {
    type Object = RandomForest;

    /// Fit `ensemble_size` trees on `table`
    ///
    /// The seeds of the members are drawn from a clone of the configured generator before any tree
    /// is grown, then the trees are grown in parallel. The resulting forest does not depend on the
    /// number of threads.
    #[instrument(skip_all, fields(nrows = table.nrows(), ncols = table.ncols()))]
    fn fit(&self, table: &Table) -> Result<Self::Object> {
        check_table(table, self.label_column())?;

        info!(
            ensemble_size = self.ensemble_size(),
            label_column = self.label_column(),
            "fitting random forest"
        );

        let mut rng = self.rng().clone();
        let seeds: Vec<u64> = (0..self.ensemble_size()).map(|_| rng.gen()).collect();

        let label_column = self.label_column();
        let max_attempts = self.max_attempts();
        let trees = seeds
            .into_par_iter()
            .map(|seed| -> Result<DecisionTree> {
                DecisionTreeParams::new_fixed_rng(SmallRng::seed_from_u64(seed))
                    .label_column(label_column)
                    .max_attempts(max_attempts)
                    .fit(table)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            num_leaves = trees.iter().map(|tree| tree.num_leaves()).sum::<usize>(),
            "random forest complete"
        );

        Ok(RandomForest { trees })
    }
}

impl RandomForest {
    /// Return the member trees, in the order they were drawn
    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Return the number of member trees
    pub fn ensemble_size(&self) -> usize {
        self.trees.len()
    }

    /// Predict the label of `row` with every member tree
    pub fn member_predictions<S: AsRef<str>>(&self, row: &[S]) -> Result<Vec<String>> {
        self.trees.iter().map(|tree| tree.predict(row)).collect()
    }
}

impl Predict for RandomForest {
    /// Predicts the label of `row` by summarizing the predictions of the members
    ///
    /// Fails with the first error returned by a member.
    fn predict<S: AsRef<str>>(&self, row: &[S]) -> Result<String> {
        let predictions = self.member_predictions(row)?;

        Ok(summarize_labels(&predictions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomForestParams;
    use sylva::ParamGuard;

    fn params(seed: u64) -> RandomForestParams<SmallRng> {
        RandomForestParams::new_fixed_rng(SmallRng::seed_from_u64(seed))
    }

    fn groups() -> Result<Table> {
        Table::from_rows(vec![
            vec!["A", "1"],
            vec!["A", "2"],
            vec!["B", "10"],
            vec!["B", "11"],
        ])
    }

    #[test]
    fn seeded_single_tree_forest_is_reproducible() -> Result<()> {
        let table = groups()?;
        let params = params(42).ensemble_size(1).label_column(1);

        let first = params.fit(&table)?;
        let second = params.fit(&table)?;

        assert_eq!(first, second);
        assert_eq!(first.ensemble_size(), 1);
        assert_eq!(first.predict(&["A", "?"])?, "1.5");
        assert_eq!(first.predict(&["B", "?"])?, "10.5");

        Ok(())
    }

    #[test]
    fn members_are_seeded_from_the_master_generator() -> Result<()> {
        let table = groups()?;
        let forest = params(7).ensemble_size(4).label_column(1).fit(&table)?;

        let mut master = SmallRng::seed_from_u64(7);
        for member in forest.trees() {
            let seed: u64 = master.gen();
            let tree: Result<DecisionTree> =
                DecisionTreeParams::new_fixed_rng(SmallRng::seed_from_u64(seed))
                    .label_column(1)
                    .fit(&table);

            assert_eq!(member, &tree?);
        }

        Ok(())
    }

    #[test]
    fn prediction_summarizes_members() -> Result<()> {
        let table = Table::from_rows(vec![
            vec!["1", "x", "1.0"],
            vec!["2", "y", "2.0"],
            vec!["3", "x", "4.0"],
            vec!["4", "y", "8.0"],
            vec!["5", "x", "16.0"],
        ])?;
        let forest = params(3).ensemble_size(15).label_column(2).fit(&table)?;

        for row in [["2.5", "x", "?"], ["9", "y", "?"], ["?", "x", "?"]].iter() {
            let members = forest.member_predictions(row)?;

            assert_eq!(members.len(), 15);
            assert_eq!(forest.predict(row)?, summarize_labels(&members));
        }

        Ok(())
    }

    #[test]
    fn categorical_votes() -> Result<()> {
        let table = Table::from_rows(vec![
            vec!["red", "stop"],
            vec!["red", "stop"],
            vec!["green", "go"],
            vec!["green", "go"],
        ])?;
        let forest = params(0).ensemble_size(5).label_column(1).fit(&table)?;

        assert_eq!(forest.predict(&["red", "?"])?, "stop");
        assert_eq!(forest.predict(&["green", "?"])?, "go");
        assert_eq!(
            forest.predict_records(&table)?,
            vec!["stop", "stop", "go", "go"]
        );

        Ok(())
    }

    #[test]
    fn invalid_arguments_build_nothing() -> Result<()> {
        let empty = Table::from_rows(Vec::<Vec<&str>>::new())?;
        let result: Result<RandomForest> = params(0).fit(&empty);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result: Result<RandomForest> = params(0).label_column(2).fit(&groups()?);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        Ok(())
    }

    #[test]
    fn invalid_parameters() -> Result<()> {
        let result: Result<RandomForest> = params(0).ensemble_size(0).fit(&groups()?);
        assert!(matches!(result, Err(Error::Parameters(_))));

        assert!(params(0).max_attempts(0).check().is_err());

        Ok(())
    }

    #[test]
    fn row_errors_propagate() -> Result<()> {
        let forest = params(1).ensemble_size(3).label_column(1).fit(&groups()?)?;

        assert!(matches!(
            forest.predict(&["A"]),
            Err(Error::RowLength {
                expected: 2,
                got: 1
            })
        ));

        Ok(())
    }
}
