//! CSV reader

use std::fs;
use std::path::Path;

use csvify_core::{Cell, Row, Table};
use tracing::debug;

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvReadOptions, QuoteHandling};

/// Split one line of CSV text into cells.
///
/// A `"` toggles the quoted state and is never emitted. A comma outside
/// quotes ends the current cell, so consecutive commas yield empty cells.
/// An unterminated quote is tolerated.
pub fn parse_row(line: &str) -> Vec<String> {
    scan(line).0
}

/// Like [`parse_row`], but an unterminated quote is an error
pub fn parse_row_strict(line: &str, line_number: usize) -> CsvResult<Vec<String>> {
    match scan(line) {
        (cells, false) => Ok(cells),
        (_, true) => Err(CsvError::UnterminatedQuote { line: line_number }),
    }
}

/// Returns the cells and whether a quote was left open.
fn scan(line: &str) -> (Vec<String>, bool) {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut within_quotes = false;

    for c in line.chars() {
        match c {
            '"' => within_quotes = !within_quotes,
            ',' if !within_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);

    (cells, within_quotes)
}

/// Reader that turns CSV text into a grid of cells
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table<Cell>> {
        let text = fs::read_to_string(path)?;
        Self::read_str(&text, options)
    }

    /// Read CSV text into a table, one row per line.
    ///
    /// `\r\n` line endings are accepted and a single trailing newline does
    /// not produce an extra row.
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Table<Cell>> {
        let body = text.strip_suffix('\n').unwrap_or(text);
        if body.is_empty() {
            return Ok(Vec::new());
        }

        let mut table = Vec::new();
        for (index, line) in body.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let fields = match options.quotes {
                QuoteHandling::Lenient => parse_row(line),
                QuoteHandling::Strict => parse_row_strict(line, index + 1)?,
            };
            table.push(Self::to_cells(fields, options));
        }

        debug!(rows = table.len(), "read CSV text");
        Ok(table)
    }

    fn to_cells(fields: Vec<String>, options: &CsvReadOptions) -> Row<Cell> {
        fields
            .into_iter()
            .map(|field| {
                if options.detect_numbers {
                    Cell::detect(field)
                } else if field.is_empty() {
                    Cell::empty()
                } else {
                    Cell::string(field)
                }
            })
            .collect()
    }
}
