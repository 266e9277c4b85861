//! Utility functions for randomly generating tables
//!
//! Every generator returns a [`Table`] of raw fields whose label is a known function of one of
//! the feature columns, so tests and benchmarks can check that a model picks it up.

use rand::Rng;
use sylva::Table;

const COLORS: [&str; 3] = ["red", "green", "blue"];

/// Regression table with a step-shaped label
///
/// Columns:
/// * `0`: `x`, uniform in `[0, 10)` with two decimals, missing (`?`) in about 10% of the rows
/// * `1`: `noise`, one of `a`, `b` or `c`, unrelated to the label
/// * `2`: `y`, the label: `1.0` where the underlying `x` is below 5, `5.0` otherwise
pub fn step_regression(nrows: usize, rng: &mut impl Rng) -> Table {
    let rows = (0..nrows)
        .map(|_| {
            let x: f64 = rng.gen_range(0.0..10.0);
            let field = if rng.gen_bool(0.1) {
                "?".to_string()
            } else {
                format!("{:.2}", x)
            };
            let noise = ["a", "b", "c"][rng.gen_range(0..3)];
            let y = if x < 5.0 { "1.0" } else { "5.0" };

            vec![field, noise.to_string(), y.to_string()]
        })
        .collect::<Vec<_>>();

    from_generated_rows(rows, &["x", "noise", "y"])
}

/// Classification table where a categorical feature determines the class
///
/// Columns:
/// * `0`: `color`, one of `red`, `green` or `blue`
/// * `1`: `noise`, uniform in `[-1, 1)` with three decimals, unrelated to the label
/// * `2`: `signal`, the label: `stop` for red, `go` for green and `wait` for blue
pub fn color_classes(nrows: usize, rng: &mut impl Rng) -> Table {
    let rows = (0..nrows)
        .map(|_| {
            let color = rng.gen_range(0..COLORS.len());
            let noise: f64 = rng.gen_range(-1.0..1.0);
            let signal = ["stop", "go", "wait"][color];

            vec![
                COLORS[color].to_string(),
                format!("{:.3}", noise),
                signal.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    from_generated_rows(rows, &["color", "noise", "signal"])
}

fn from_generated_rows(rows: Vec<Vec<String>>, names: &[&str]) -> Table {
    Table::from_rows(rows)
        .expect("generated rows have the same length")
        .with_column_names(names.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};
    use sylva::value::{to_number, Value};

    #[test]
    fn step_regression_shape() {
        let mut rng = SmallRng::seed_from_u64(42);
        let table = step_regression(200, &mut rng);

        assert_eq!(table.nrows(), 200);
        assert_eq!(table.ncols(), 3);
        assert_eq!(table.column_names(), vec!["x", "noise", "y"]);

        for idx in 0..table.nrows() {
            let y = table.field(idx, 2);
            assert!(y == "1.0" || y == "5.0");

            if let Ok(Value::Number(x)) = to_number(table.field(idx, 0)) {
                // rounding to two decimals may push 4.999 up to 5.00
                if x < 4.99 {
                    assert_eq!(y, "1.0");
                } else if x > 5.01 {
                    assert_eq!(y, "5.0");
                }
            }
        }
    }

    #[test]
    fn color_classes_shape() {
        let mut rng = SmallRng::seed_from_u64(42);
        let table = color_classes(100, &mut rng);

        assert_eq!(table.nrows(), 100);
        for idx in 0..table.nrows() {
            let expected = match table.field(idx, 0) {
                "red" => "stop",
                "green" => "go",
                _ => "wait",
            };
            assert_eq!(table.field(idx, 2), expected);
        }
    }
}
