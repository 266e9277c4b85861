//! `sylva` grows randomized decision forests over tables of raw strings.
//!
//! Rows are ingested as they are, without a schema. Whether a column is numeric, categorical or
//! missing is decided at runtime from its fields, so the same models serve both regression
//! (numeric labels, summarized by their mean) and classification (categorical labels, summarized
//! by majority vote).
//!
//! ## The big picture
//!
//! This crate holds what every algorithm of the workspace shares:
//!
//! * [`Table`], the dataset of raw string fields,
//! * the [numeric interpretation](value) of a field, with `""` and `?` as the missing sentinel,
//! * [label summarization](summarize_labels), used by tree leaves and forest votes alike,
//! * the [`Fit`](traits::Fit) and [`Predict`](traits::Predict) traits and the
//!   [`ParamGuard`] for hyperparameter checking,
//! * a small set of [metrics].
//!
//! The algorithms live in their own crates: `sylva-trees` for single decision trees and
//! `sylva-ensemble` for random forests. `sylva-datasets` reads CSV files into a [`Table`].
//!

pub mod benchmarks;
pub mod dataset;
pub mod error;
pub mod metrics;
mod param_guard;
pub mod prelude;
pub mod summary;
pub mod traits;
pub mod value;

pub use dataset::Table;
pub use param_guard::ParamGuard;
pub use summary::summarize_labels;
