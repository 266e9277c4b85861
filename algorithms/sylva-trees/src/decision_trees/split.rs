//! Randomized split proposals
//!
//! A split is not searched for: a random row and a random non-label column are drawn and the
//! field found there becomes the split value. Proposals that leave one side empty are discarded
//! and redrawn, up to an attempt budget.
use rand::Rng;
use sylva::{
    value::{to_number, ParseValueError, Value},
    Table,
};
use tracing::trace;

/// Default number of split proposals drawn before a node gives up and becomes a leaf
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// How a split compares a field against its value
#[derive(Debug, Clone, Copy, PartialEq)]
enum Predicate {
    /// Numeric split on the missing sentinel: true iff the field is missing
    IsMissing,
    /// Numeric split on a number: true iff the field is a number `>=` the threshold
    AtLeast(f64),
    /// Categorical split: true iff the trimmed field equals the value
    Equals,
}

/// The split descriptor of an internal node
///
/// A rule is made of the column it reads, the (trimmed) field value it compares against and
/// whether that value is numeric. Rows for which the rule holds go to the "true branch", all
/// others to the "false branch".
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRule {
    column: usize,
    value: String,
    predicate: Predicate,
}

impl SplitRule {
    /// Creates the rule splitting column `column` on the field `value`
    ///
    /// A value accepted by [`to_number`] makes a numeric rule, any other value a categorical one.
    pub fn new(column: usize, value: &str) -> SplitRule {
        let value = value.trim();
        let predicate = match to_number(value) {
            Ok(Value::Missing) => Predicate::IsMissing,
            Ok(Value::Number(threshold)) => Predicate::AtLeast(threshold),
            Err(_) => Predicate::Equals,
        };

        SplitRule {
            column,
            value: value.to_string(),
            predicate,
        }
    }

    /// Returns the index of the column the rule reads
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the value the rule compares against
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the rule compares numerically
    pub fn is_numeric(&self) -> bool {
        self.predicate != Predicate::Equals
    }

    /// Evaluates the rule on a field of the rule's column
    ///
    /// Numeric rules fail if the field is neither a number nor missing. Categorical rules never
    /// fail.
    pub fn test(&self, field: &str) -> Result<bool, ParseValueError> {
        match self.predicate {
            Predicate::Equals => Ok(field.trim() == self.value),
            Predicate::IsMissing => to_number(field).map(|value| value.is_missing()),
            Predicate::AtLeast(threshold) => to_number(field).map(|value| value.at_least(threshold)),
        }
    }
}

/// Result of a split search
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    /// A partition of the rows into two non-empty sides
    Partition {
        false_rows: Vec<usize>,
        true_rows: Vec<usize>,
        rule: SplitRule,
    },
    /// No proposal within the attempt budget separated the rows
    NoSplitFound,
}

/// Proposes a random split of all rows of `table`
///
/// Draws at most `min(6, nrows - 1)` proposals, each from a uniformly chosen row and a uniformly
/// chosen column other than `label_column`, and returns the first one which leaves both sides
/// non-empty. Row indices in the returned partition refer to `table`.
///
/// ```rust
/// use rand::{rngs::SmallRng, SeedableRng};
/// use sylva::Table;
/// use sylva_trees::{divide_data, SplitOutcome};
///
/// let table = Table::from_rows(vec![vec!["a", "1"], vec!["a", "2"], vec!["a", "3"]]).unwrap();
/// let mut rng = SmallRng::seed_from_u64(42);
///
/// // every row agrees on the only feature column
/// assert_eq!(divide_data(&table, 1, &mut rng), SplitOutcome::NoSplitFound);
/// ```
pub fn divide_data<G: Rng + ?Sized>(table: &Table, label_column: usize, rng: &mut G) -> SplitOutcome {
    let rows = (0..table.nrows()).collect::<Vec<_>>();
    divide_rows(table, &rows, label_column, DEFAULT_MAX_ATTEMPTS, rng)
}

/// Proposes a random split of the subset `rows` of `table`
pub(crate) fn divide_rows<G: Rng + ?Sized>(
    table: &Table,
    rows: &[usize],
    label_column: usize,
    max_attempts: usize,
    rng: &mut G,
) -> SplitOutcome {
    let ncols = table.ncols();
    // a table made of the label alone has nothing to split on
    if ncols < 2 || rows.len() < 2 {
        return SplitOutcome::NoSplitFound;
    }

    let attempts = max_attempts.min(rows.len() - 1);
    for _ in 0..attempts {
        let row = rows[rng.gen_range(0..rows.len())];
        let mut column = rng.gen_range(0..ncols - 1);
        if column >= label_column {
            column += 1;
        }

        let rule = SplitRule::new(column, table.field(row, column));

        // malformed fields are not at least any threshold, nor missing
        let (true_rows, false_rows): (Vec<usize>, Vec<usize>) = rows
            .iter()
            .copied()
            .partition(|&idx| rule.test(table.field(idx, column)).unwrap_or(false));

        if true_rows.is_empty() || false_rows.is_empty() {
            continue;
        }

        return SplitOutcome::Partition {
            false_rows,
            true_rows,
            rule,
        };
    }

    trace!(nrows = rows.len(), attempts, "no split found");
    SplitOutcome::NoSplitFound
}
