use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sylva::benchmarks::config;
use sylva::prelude::*;
use sylva_datasets::generate;
use sylva_trees::DecisionTreeParams;

fn decision_tree_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    // Controls how many rows are generated
    let training_set_sizes = &[100, 1000, 10000, 100000];

    let hyperparams = DecisionTreeParams::new_fixed_rng(SmallRng::seed_from_u64(42)).label_column(2);

    let mut group = c.benchmark_group("decision_tree");
    config::set_default_benchmark_configs(&mut group);

    for n in training_set_sizes.iter() {
        let table = generate::step_regression(*n, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(n), &table, |b, t| {
            b.iter(|| hyperparams.fit(t))
        });
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = config::get_default_profiling_configs();
    targets = decision_tree_bench
}
#[cfg(target_os = "windows")]
criterion_group!(benches, decision_tree_bench);

criterion_main!(benches);
