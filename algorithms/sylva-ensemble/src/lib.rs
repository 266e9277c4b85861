//! # Forests of randomized decision trees
//!
//! An ensemble method combines the predictions of several base estimators in order to improve
//! robustness over a single estimator.
//!
//! ## Random Forest
//!
//! [`RandomForest`] combines randomized decision trees (see `sylva-trees`) fitted on the same
//! table. Since each tree draws its splits at random, the members disagree and their summarized
//! prediction is smoother than the prediction of any of them. No bootstrap resampling takes place:
//! every member sees every row.
//!
//! The members are grown in parallel on the `rayon` thread pool. Each member owns a generator
//! seeded from the forest's generator, so a seeded forest is reproducible.
//!
//! ## Example
//!
//! This example fits a forest of 20 trees on a generated regression table and checks its error on
//! held out rows.
//!
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use sylva::{metrics, prelude::*};
//! use sylva_ensemble::RandomForestParams;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let (train, test) = sylva_datasets::generate::step_regression(300, &mut rng)
//!     .split_with_ratio(0.8);
//!
//! let forest = RandomForestParams::new_fixed_rng(rng)
//!     .ensemble_size(20)
//!     .label_column(2)
//!     .fit(&train)
//!     .unwrap();
//!
//! let predictions = forest.predict_records(&test).unwrap();
//! let truth = test.column(2).to_vec();
//! let error = metrics::mean_absolute_error(&predictions, &truth).unwrap();
//! assert!(error < 2.0);
//! ```
//!
mod random_forest;

pub use random_forest::*;
