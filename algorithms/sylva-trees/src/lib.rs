//!
//! # Randomized decision trees
//! `sylva-trees` provides decision trees whose splits are drawn at random rather than searched
//! for, over tables of raw string fields.
//!
//! # The big picture
//!
//! `sylva-trees` is a crate in the `sylva` workspace. A tree is grown by repeatedly picking a
//! random row and a random non-label column and splitting on the value found there: numeric
//! values split by `>=`, the missing sentinel splits missing from present, anything else splits
//! on equality. A node becomes a leaf when no proposal within the attempt budget separates its
//! rows; the leaf stores the [summary](sylva::summarize_labels) of its labels.
//!
//! Because numeric-ness is inferred from the fields, the same [`DecisionTree`] performs
//! regression and classification.
//!
//! # Current state
//!
//! `sylva-trees` provides [single-tree fitting](DecisionTree) and the [splitter](divide_data)
//! it is built on. Ensembles live in `sylva-ensemble`.
//!

mod decision_trees;

pub use decision_trees::*;

// Re-export the common Result alias for convenience
pub use sylva::error::Result;
