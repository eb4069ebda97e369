//! Cell types

use std::fmt;

/// Typed value carried by a cell, as reported by the workbook reader
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value
    #[default]
    Empty,

    /// Textual value
    String(String),

    /// Numeric value; `NaN` when the display text could not be parsed
    Number(f64),
}

/// Kind tag of a cell (string vs numeric)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    String,
    Number,
}

/// A single spreadsheet cell: display text plus typed value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// Text as displayed in the sheet
    pub text: String,
    /// Typed value
    pub value: CellValue,
}

impl Cell {
    /// Create an empty cell
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a string cell; display text and value are the same
    pub fn string<S: Into<String>>(s: S) -> Self {
        let text = s.into();
        Cell {
            value: CellValue::String(text.clone()),
            text,
        }
    }

    /// Create a numeric cell with a canonical display text
    pub fn number(n: f64) -> Self {
        Cell {
            text: format_number(n),
            value: CellValue::Number(n),
        }
    }

    /// Create a numeric cell with an explicit display text
    pub fn number_with_text<S: Into<String>>(n: f64, text: S) -> Self {
        Cell {
            text: text.into(),
            value: CellValue::Number(n),
        }
    }

    /// Classify free text as either a number-looking cell or a string cell.
    ///
    /// Text made only of digits, an optional leading sign, and `,`/`.`
    /// separators is tagged numeric regardless of which convention it
    /// uses. The typed value is parsed with `,` treated as a thousands
    /// separator and may be `NaN` until locale conversion rewrites it.
    pub fn detect<S: Into<String>>(s: S) -> Self {
        let text = s.into();
        if text.trim().is_empty() {
            return Cell {
                text,
                value: CellValue::Empty,
            };
        }
        if looks_numeric(&text) {
            let n = text.trim().replace(',', "").parse().unwrap_or(f64::NAN);
            return Cell::number_with_text(n, text);
        }
        Cell::string(text)
    }

    /// Check if the cell has no display text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Kind tag derived from the typed value
    pub fn kind(&self) -> CellKind {
        match self.value {
            CellValue::Empty => CellKind::Empty,
            CellValue::String(_) => CellKind::String,
            CellValue::Number(_) => CellKind::Number,
        }
    }

    /// Try to get the typed value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            CellValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Consume the cell, keeping only its display text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::string(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::string(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::number(n)
    }
}

/// Render a number the way a sheet shows it by default: integers without a
/// fractional part.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn looks_numeric(text: &str) -> bool {
    let body = text.trim();
    let body = body.strip_prefix(['-', '+']).unwrap_or(body);
    body.chars().any(|c| c.is_ascii_digit())
        && body.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}
