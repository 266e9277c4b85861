use ndarray::{s, ArrayView1, Axis};
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use super::Table;
use crate::summary::summarize_labels;

impl Table {
    /// Returns a view on row `idx`
    pub fn row(&self, idx: usize) -> ArrayView1<String> {
        self.records.row(idx)
    }

    /// Returns a view on column `col`
    pub fn column(&self, col: usize) -> ArrayView1<String> {
        self.records.column(col)
    }

    /// Returns the fields of row `idx` as string slices
    pub fn row_fields(&self, idx: usize) -> Vec<&str> {
        self.row(idx).into_iter().map(String::as_str).collect()
    }

    /// Summarizes column `col` over all rows
    ///
    /// See [`summarize_labels`] for the rules.
    pub fn summarize_column(&self, col: usize) -> String {
        let labels: Vec<&str> = self.column(col).into_iter().map(String::as_str).collect();
        summarize_labels(&labels)
    }

    /// Summarizes column `col` over a subset of rows
    pub fn summarize_rows(&self, rows: &[usize], col: usize) -> String {
        let labels: Vec<&str> = rows.iter().map(|&row| self.field(row, col)).collect();
        summarize_labels(&labels)
    }

    /// Returns a copy of the table with the rows in random order
    pub fn shuffle<R: Rng>(&self, rng: &mut R) -> Table {
        let mut indices = (0..self.nrows()).collect::<Vec<_>>();
        indices.shuffle(rng);

        Table {
            records: self.records.select(Axis(0), &indices),
            column_names: self.column_names.clone(),
        }
    }

    /// Splits the rows into two tables
    ///
    /// The first table holds the first `ceil(nrows * ratio)` rows, the second one the rest.
    pub fn split_with_ratio(self, ratio: f32) -> (Table, Table) {
        let n = ((self.nrows() as f32 * ratio).ceil() as usize).min(self.nrows());
        debug!(ratio, first = n, second = self.nrows() - n, "split table");

        let first = Table {
            records: self.records.slice(s![..n, ..]).to_owned(),
            column_names: self.column_names.clone(),
        };
        let second = Table {
            records: self.records.slice(s![n.., ..]).to_owned(),
            column_names: self.column_names,
        };

        (first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use rand::{rngs::SmallRng, SeedableRng};

    fn table() -> Result<Table> {
        Table::from_rows((0..10).map(|i| vec![i.to_string(), format!("label-{}", i % 3)]))
    }

    #[test]
    fn summarize_column_and_rows() -> Result<()> {
        let table = table()?;

        assert_eq!(table.summarize_column(0), "4.5");
        assert_eq!(table.summarize_column(1), "label-0");
        assert_eq!(table.summarize_rows(&[1, 4, 5], 1), "label-1");
        assert_eq!(table.summarize_rows(&[7], 0), "7");

        Ok(())
    }

    #[test]
    fn fields_outlive_their_views() -> Result<()> {
        let table = table()?;
        let first = table.row_fields(2);
        let last = table.row_fields(9);

        assert_eq!(first, vec!["2", "label-2"]);
        assert_eq!(last, vec!["9", "label-0"]);
        assert_eq!(table.summarize_column(0), "4.5");

        Ok(())
    }

    #[test]
    fn shuffle_keeps_rows_intact() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(42);
        let table = table()?;
        let shuffled = table.shuffle(&mut rng);

        assert_eq!(shuffled.nrows(), table.nrows());
        for row in 0..shuffled.nrows() {
            let idx: usize = shuffled.field(row, 0).parse().unwrap();
            assert_eq!(shuffled.row(row), table.row(idx));
        }

        Ok(())
    }

    #[test]
    fn split_with_ratio_rounds_up() -> Result<()> {
        let (train, valid) = table()?.split_with_ratio(0.25);

        assert_eq!(train.nrows(), 3);
        assert_eq!(valid.nrows(), 7);
        assert_eq!(valid.row_fields(0), vec!["3", "label-0"]);

        Ok(())
    }
}
