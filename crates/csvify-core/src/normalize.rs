//! Per-cell cleanup
//!
//! Text cells lose their line breaks so that every row of the final CSV is a
//! single line. Numeric cells can optionally be converted from the German
//! convention (`1.234,56`) to the one where `.` is the decimal point
//! (`1,234.56`).

use crate::cell::{Cell, CellValue};
use crate::error::{Error, Result};

/// Normalize a single cell.
///
/// Empty cells are returned unchanged. Numeric cells whose display text
/// cannot be parsed after conversion keep the rewritten text and get a
/// `NaN` value; no error is raised.
pub fn normalize(cell: Cell, german_format: bool) -> Cell {
    if cell.is_empty() {
        return cell;
    }

    match cell.value {
        CellValue::Number(_) if german_format => {
            let text = swap_separators(&cell.text);
            let value = parse_locale_number(&text).unwrap_or(f64::NAN);
            Cell::number_with_text(value, text)
        }
        CellValue::Number(_) => cell,
        CellValue::String(s) => Cell {
            text: flatten_line_breaks(&cell.text),
            value: CellValue::String(flatten_line_breaks(&s)),
        },
        CellValue::Empty => Cell {
            text: flatten_line_breaks(&cell.text),
            value: CellValue::Empty,
        },
    }
}

/// Drop carriage returns and turn newlines into single spaces
pub fn flatten_line_breaks(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

/// Swap the roles of `,` and `.`
pub fn swap_separators(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ',' => '.',
            '.' => ',',
            other => other,
        })
        .collect()
}

/// Parse numeric text that uses `,` as thousands separator and `.` as the
/// decimal point.
pub fn parse_locale_number(text: &str) -> Result<f64> {
    text.trim()
        .replace(',', "")
        .parse()
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}
