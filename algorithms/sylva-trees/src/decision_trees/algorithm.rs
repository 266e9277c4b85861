//! Randomized decision trees
//!
use rand::Rng;
use sylva::{
    error::{Error, Result},
    traits::*,
    Table,
};
use tracing::{debug, instrument};

use super::split::{divide_rows, SplitOutcome, SplitRule};
use super::{DecisionTreeValidParams, NodeIter};

/// A node in the decision tree
///
/// Nodes live in the arena of their [`DecisionTree`] and refer to their children by index. Every
/// node remembers its depth and how many training rows reached it. The two children of an
/// internal node were fitted on disjoint, non-empty subsets of its rows whose union is the node's
/// own rows, so their `n_samples` add up to the parent's.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// A terminal node predicting the summary of the labels of its rows
    Leaf {
        prediction: String,
        depth: usize,
        n_samples: usize,
    },
    /// A node routing rows to one of its children according to a split rule
    Internal {
        rule: SplitRule,
        false_branch: usize,
        true_branch: usize,
        depth: usize,
        n_samples: usize,
    },
}

impl TreeNode {
    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Returns the depth of the node in the decision tree
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { depth, .. } | TreeNode::Internal { depth, .. } => *depth,
        }
    }

    /// Returns the number of training rows which reached this node
    pub fn n_samples(&self) -> usize {
        match self {
            TreeNode::Leaf { n_samples, .. } | TreeNode::Internal { n_samples, .. } => *n_samples,
        }
    }

    /// Returns `Some(prediction)` for leaf nodes and `None` for internal nodes.
    pub fn prediction(&self) -> Option<&str> {
        match self {
            TreeNode::Leaf { prediction, .. } => Some(prediction.as_str()),
            TreeNode::Internal { .. } => None,
        }
    }

    /// Returns the split rule of internal nodes and `None` for leaf nodes
    pub fn split(&self) -> Option<&SplitRule> {
        match self {
            TreeNode::Internal { rule, .. } => Some(rule),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Returns the arena indices of the false and true branch of internal nodes
    pub fn branches(&self) -> Option<(usize, usize)> {
        match self {
            TreeNode::Internal {
                false_branch,
                true_branch,
                ..
            } => Some((*false_branch, *true_branch)),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Points the branch selected by `holds` at the arena index `child`
    fn attach(&mut self, holds: bool, child: usize) {
        if let TreeNode::Internal {
            false_branch,
            true_branch,
            ..
        } = self
        {
            if holds {
                *true_branch = child;
            } else {
                *false_branch = child;
            }
        }
    }
}

/// A subset of rows waiting to become a node
struct PendingNode {
    rows: Vec<usize>,
    depth: usize,
    /// Arena index of the parent and the branch the rows were routed to
    parent: Option<(usize, bool)>,
}

/// Grows the nodes of a tree over all rows of `table`, root first
///
/// Nodes are fitted depth first with the false branch before the true branch. The pending
/// subsets are kept on an explicit stack, so the depth of the tree is not bounded by the call
/// stack.
fn grow<G: Rng + ?Sized>(
    table: &Table,
    label_column: usize,
    max_attempts: usize,
    rng: &mut G,
) -> Vec<TreeNode> {
    let mut nodes: Vec<TreeNode> = Vec::new();
    let mut pending = vec![PendingNode {
        rows: (0..table.nrows()).collect(),
        depth: 0,
        parent: None,
    }];

    while let Some(PendingNode {
        rows,
        depth,
        parent,
    }) = pending.pop()
    {
        let idx = nodes.len();
        if let Some((parent, holds)) = parent {
            nodes[parent].attach(holds, idx);
        }

        match divide_rows(table, &rows, label_column, max_attempts, rng) {
            SplitOutcome::Partition {
                false_rows,
                true_rows,
                rule,
            } => {
                // branches point back at the node until their children are pushed
                nodes.push(TreeNode::Internal {
                    rule,
                    false_branch: idx,
                    true_branch: idx,
                    depth,
                    n_samples: rows.len(),
                });
                pending.push(PendingNode {
                    rows: true_rows,
                    depth: depth + 1,
                    parent: Some((idx, true)),
                });
                pending.push(PendingNode {
                    rows: false_rows,
                    depth: depth + 1,
                    parent: Some((idx, false)),
                });
            }
            SplitOutcome::NoSplitFound => nodes.push(TreeNode::Leaf {
                prediction: table.summarize_rows(&rows, label_column),
                depth,
                n_samples: rows.len(),
            }),
        }
    }

    nodes
}

/// A fitted randomized decision tree
///
/// ### Structure
/// A decision tree is a binary tree where:
/// * each internal node holds a [split rule](SplitRule) on a column other than the label column;
///   rows satisfying the rule fall in the true branch, the others in the false branch,
/// * each leaf holds the summary of the labels of the training rows that reached it: their mean if
///   all of them are numeric, their most frequent value otherwise.
///
/// ### Algorithm
///
/// Starting with a single root node over every row, a node is fitted by drawing random split
/// proposals (a random row, a random non-label column, and the field found there) until one
/// leaves both sides non-empty. The children are then fitted on the two sides. A node whose
/// proposals all fail within the attempt budget becomes a leaf. A node over a single row always is
/// a leaf, so fitting terminates.
///
/// ### Predictions
///
/// To predict the label of a row, the tree is traversed from the root to a leaf, evaluating the
/// split rules on the row's fields. The prediction is the label stored in the reached leaf.
///
/// ### Example
///
/// ```rust
/// use sylva::prelude::*;
/// use sylva_trees::DecisionTree;
///
/// let table = Table::from_rows(vec![
///     vec!["sunny", "30", "no"],
///     vec!["sunny", "25", "no"],
///     vec!["rainy", "?", "yes"],
///     vec!["rainy", "12", "yes"],
/// ])
/// .unwrap();
///
/// let tree = DecisionTree::params().label_column(2).fit(&table).unwrap();
///
/// // every training row reaches a leaf
/// for idx in 0..table.nrows() {
///     assert!(tree.predict(&table.row_fields(idx)).is_ok());
/// }
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    num_columns: usize,
    label_column: usize,
}

/// Checks that a table can be fitted on with the given label column
///
/// Fails with `Error::InvalidArgument` if the table has no row, or if the label column is out of
/// range.
pub fn check_table(table: &Table, label_column: usize) -> Result<()> {
    if table.is_empty() {
        return Err(Error::InvalidArgument(
            "expected at least one row of data".to_string(),
        ));
    }
    if label_column >= table.ncols() {
        return Err(Error::InvalidArgument(format!(
            "label_column={} out of range for data with {} columns",
            label_column,
            table.ncols()
        )));
    }

    Ok(())
}

impl<R> DecisionTreeValidParams<R> {
    /// Fits a decision tree drawing every split proposal from `rng`
    #[instrument(skip_all, fields(nrows = table.nrows(), ncols = table.ncols()))]
    pub fn fit_with_rng<G: Rng + ?Sized>(&self, table: &Table, rng: &mut G) -> Result<DecisionTree> {
        check_table(table, self.label_column())?;

        let nodes = grow(table, self.label_column(), self.max_attempts(), rng);

        let tree = DecisionTree {
            nodes,
            num_columns: table.ncols(),
            label_column: self.label_column(),
        };
        debug!(
            num_leaves = tree.num_leaves(),
            max_depth = tree.max_depth(),
            "fitted decision tree"
        );

        Ok(tree)
    }
}

impl<R: Rng + Clone> Fit<Error> for DecisionTreeValidParams<R> {
    type Object = DecisionTree;

    /// Fit a decision tree on `table`, predicting the configured label column.
    ///
    /// The configured generator is cloned, so fitting the same parameters twice on the same table
    /// grows the same tree.
    fn fit(&self, table: &Table) -> Result<Self::Object> {
        let mut rng = self.rng().clone();
        self.fit_with_rng(table, &mut rng)
    }
}

impl Predict for DecisionTree {
    /// Predicts the label of `row`
    ///
    /// Fails with `Error::RowLength` if the row is not as wide as the training rows, and with
    /// `Error::MalformedValue` if a numeric split meets a field which is neither a number nor
    /// missing.
    fn predict<S: AsRef<str>>(&self, row: &[S]) -> Result<String> {
        if row.len() != self.num_columns {
            return Err(Error::RowLength {
                expected: self.num_columns,
                got: row.len(),
            });
        }

        self.make_prediction(row).map(|label| label.to_string())
    }
}

impl DecisionTree {
    /// Create a node iterator in level-order (BFT)
    pub fn iter_nodes(&self) -> NodeIter {
        NodeIter::new(&self.nodes)
    }

    /// Return root node of the tree
    pub fn root_node(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// Return the node stored at arena index `idx`
    pub fn node(&self, idx: usize) -> Option<&TreeNode> {
        self.nodes.get(idx)
    }

    /// Return every node of the tree in depth-first order, root first
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Return the number of columns of the rows the tree was fitted on
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Return the index of the label column
    pub fn label_column(&self) -> usize {
        self.label_column
    }

    /// Return max depth of the tree
    pub fn max_depth(&self) -> usize {
        self.iter_nodes()
            .fold(0, |max, node| usize::max(max, node.depth()))
    }

    /// Return the number of leaves in this tree
    pub fn num_leaves(&self) -> usize {
        self.iter_nodes().filter(|node| node.is_leaf()).count()
    }
}

impl DecisionTree {
    /// Walks `row` from the root down to a leaf
    fn make_prediction<S: AsRef<str>>(&self, row: &[S]) -> Result<&str> {
        let mut node = self.root_node();

        loop {
            match node {
                TreeNode::Leaf { prediction, .. } => return Ok(prediction.as_str()),
                TreeNode::Internal {
                    rule,
                    false_branch,
                    true_branch,
                    ..
                } => {
                    let column = rule.column();
                    let holds = rule
                        .test(row[column].as_ref())
                        .map_err(|err| Error::MalformedValue {
                            column,
                            value: err.value,
                        })?;

                    node = &self.nodes[if holds { *true_branch } else { *false_branch }];
                }
            }
        }
    }
}
