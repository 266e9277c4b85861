use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use sylva::Table;
use tracing::debug;

use crate::ReadError;

/// Reads a CSV source into a table
///
/// Fields are kept exactly as they appear in the source, without trimming or type inference.
/// With `has_headers` the first record names the columns. Records of unequal length are an
/// error.
///
/// ```rust
/// let csv = "x,label\n1.5,a\n?,b\n";
/// let table = sylva_datasets::read_csv(csv.as_bytes(), true, b',').unwrap();
///
/// assert_eq!(table.nrows(), 2);
/// assert_eq!(table.field(1, 0), "?");
/// assert_eq!(table.column_names(), vec!["x", "label"]);
/// ```
pub fn read_csv<R: Read>(csv: R, has_headers: bool, delimiter: u8) -> Result<Table, ReadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(delimiter)
        .from_reader(csv);

    let column_names = if has_headers {
        reader.headers()?.iter().map(str::to_string).collect()
    } else {
        Vec::new()
    };

    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()?;
    let table = Table::from_rows(records.iter().map(|record| record.iter().collect::<Vec<_>>()))?
        .with_column_names(column_names);

    debug!(nrows = table.nrows(), ncols = table.ncols(), "read csv table");

    Ok(table)
}

/// Read in the play-tennis weather dataset.
///
/// 14 rows with an `outlook` (categorical), `temperature` and `humidity` (numeric) and `windy`
/// (categorical) feature. The label, `play`, is in column 4.
pub fn play_tennis() -> Table {
    let data = include_str!("../data/play_tennis.csv");
    read_csv(data.as_bytes(), true, b',').expect("bundled dataset is well formed")
}
