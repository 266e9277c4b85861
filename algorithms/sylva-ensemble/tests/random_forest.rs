// sylva-ensemble/tests/random_forest.rs

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sylva::metrics;
use sylva::prelude::*;
use sylva_datasets::{generate, play_tennis};
use sylva_ensemble::RandomForestParams;

#[test]
fn color_classes_high_accuracy() {
    let mut rng = SmallRng::seed_from_u64(42);
    let (train, valid) = generate::color_classes(250, &mut rng)
        .shuffle(&mut rng)
        .split_with_ratio(0.8);

    let model = RandomForestParams::new_fixed_rng(rng)
        .ensemble_size(25)
        .label_column(2)
        .fit(&train)
        .expect("Training failed");

    let preds = model.predict_records(&valid).expect("Prediction failed");
    let accuracy = metrics::accuracy(&preds, &valid.column(2).to_vec()).unwrap();

    assert!(
        accuracy >= 0.9,
        "Expected ≥90% accuracy, got {:.2}",
        accuracy
    );
}

#[test]
fn step_regression_low_error() {
    let mut rng = SmallRng::seed_from_u64(11);
    let (train, valid) = generate::step_regression(400, &mut rng).split_with_ratio(0.75);

    let model = RandomForestParams::new_fixed_rng(rng)
        .ensemble_size(30)
        .label_column(2)
        .fit(&train)
        .expect("Training failed");

    let preds = model.predict_records(&valid).expect("Prediction failed");
    let error = metrics::mean_absolute_error(&preds, &valid.column(2).to_vec()).unwrap();

    assert!(error < 1.0, "Expected an error below 1.0, got {:.2}", error);
}

#[test]
fn play_tennis_fits_training_rows() {
    let table = play_tennis();
    let model = RandomForestParams::new_fixed_rng(SmallRng::seed_from_u64(5))
        .label_column(4)
        .fit(&table)
        .expect("Training failed");

    assert_eq!(model.ensemble_size(), 30);
    assert!(model.trees().iter().all(|tree| tree.label_column() == 4));

    let preds = model.predict_records(&table).expect("Prediction failed");
    let accuracy = metrics::accuracy(&preds, &table.column(4).to_vec()).unwrap();
    assert!(
        accuracy >= 0.8,
        "Expected ≥80% training accuracy, got {:.2}",
        accuracy
    );
}

#[test]
fn forest_does_not_depend_on_thread_count() {
    let mut rng = SmallRng::seed_from_u64(2);
    let table = generate::step_regression(100, &mut rng);
    let params = RandomForestParams::new_fixed_rng(SmallRng::seed_from_u64(9))
        .ensemble_size(8)
        .label_column(2);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .expect("Thread pool failed");
    let sequential = pool.install(|| params.fit(&table)).expect("Training failed");
    let parallel = params.fit(&table).expect("Training failed");

    assert_eq!(sequential, parallel);
}
