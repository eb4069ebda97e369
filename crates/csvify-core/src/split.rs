//! Header/data boundary detection
//!
//! Sheets commonly carry title rows above a dense block of data and
//! footnotes below it. A row is *complete* when every column is filled; the
//! data block runs from the first complete row to the last one, and the
//! rows above it form the header.

use tracing::debug;

use crate::table::{width, Entry, Table};

/// How a row qualifies as complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Every column holds a non-empty cell
    #[default]
    Complete,
    /// Every column holds a non-empty cell and at least one cell is a
    /// number once commas are stripped. Keeps fully populated title rows
    /// in the header.
    Numeric,
}

/// A table partitioned into header rows and data rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Split {
    /// Rows above the data block
    pub header: Table<String>,
    /// Rows from the first to the last complete row, inclusive
    pub data: Table<String>,
}

/// Split a trimmed table into header and data.
///
/// Rows after the last complete row are discarded. For a non-empty table,
/// an empty header or data section is replaced by a single blank row of
/// the table's width.
pub fn split_table(mut table: Table<String>, mode: SplitMode) -> Split {
    if table.is_empty() {
        return Split::default();
    }

    let n_cols = width(&table);
    let complete = |row: &Vec<String>| is_complete(row, n_cols, mode);

    let first = table.iter().position(complete).unwrap_or(0);
    let last = table.iter().rposition(complete).unwrap_or(table.len() - 1);
    debug!(first, last, rows = table.len(), ?mode, "split boundaries");

    table.truncate(last + 1);
    let data = table.split_off(first);
    let header = table;

    Split {
        header: or_blank_row(header, n_cols),
        data: or_blank_row(data, n_cols),
    }
}

fn is_complete(row: &[String], n_cols: usize, mode: SplitMode) -> bool {
    let filled = row.iter().filter(|cell| !cell.is_blank()).count();
    if filled != n_cols {
        return false;
    }
    match mode {
        SplitMode::Complete => true,
        SplitMode::Numeric => row.iter().any(|cell| is_number(cell)),
    }
}

fn is_number(text: &str) -> bool {
    text.replace(',', "")
        .trim()
        .parse::<f64>()
        .is_ok_and(f64::is_finite)
}

fn or_blank_row(rows: Table<String>, n_cols: usize) -> Table<String> {
    if rows.is_empty() {
        vec![vec![String::new(); n_cols]]
    } else {
        rows
    }
}
