//! Matrix utilities
//!
//! A [`Table`] is a plain row-major grid. Per-column operations are done by
//! transposing, working on rows, and transposing back.

use tracing::debug;

use crate::cell::Cell;

/// An ordered sequence of cells
pub type Row<T> = Vec<T>;

/// An ordered sequence of rows, one sheet's grid
pub type Table<T> = Vec<Row<T>>;

/// A value that may occupy a table position
pub trait Entry {
    /// True when the position holds nothing
    fn is_blank(&self) -> bool;
}

impl Entry for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Entry for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Entry for Cell {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Swap rows and columns.
///
/// The column count is taken from the first row; the input is expected to
/// be rectangular. An empty table is returned unchanged.
pub fn transpose<T>(table: Table<T>) -> Table<T> {
    let n_cols = match table.first() {
        Some(row) => row.len(),
        None => return table,
    };
    let n_rows = table.len();

    let mut columns: Table<T> = (0..n_cols).map(|_| Vec::with_capacity(n_rows)).collect();
    for row in table {
        for (column, cell) in columns.iter_mut().zip(row) {
            column.push(cell);
        }
    }
    columns
}

/// True if at least one cell in the row is non-empty
pub fn has_entry<T: Entry>(row: &[T]) -> bool {
    row.iter().any(|cell| !cell.is_blank())
}

/// Column count of a table, taken from its first row
pub fn width<T>(table: &[Row<T>]) -> usize {
    table.first().map_or(0, Vec::len)
}

/// Drop fully empty rows and columns.
///
/// Rows shorter than the widest row are padded with blank cells first, so
/// the result is rectangular.
pub fn trim_table<T: Entry + Default>(table: Table<T>) -> Table<T> {
    let mut rows: Table<T> = table.into_iter().filter(|row| has_entry(row)).collect();

    let max_width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize_with(max_width, T::default);
    }

    let columns: Table<T> = transpose(rows)
        .into_iter()
        .filter(|column| has_entry(column))
        .collect();
    let trimmed = transpose(columns);

    debug!(
        rows = trimmed.len(),
        columns = width(&trimmed),
        "trimmed table"
    );
    trimmed
}
