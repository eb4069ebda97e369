//! Sheet sources: spreadsheet workbooks and plain CSV files

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader, Sheets};
use chrono::NaiveTime;
use csvify::{Cell, CsvReadOptions, CsvReader, Table};
use tracing::debug;

/// Where sheets are read from
pub enum Source {
    /// Workbook decoded by calamine (xlsx, xlsm, xlsb, xls, ods)
    Workbook(Sheets<BufReader<File>>),
    /// A CSV file, exposed as a single sheet named after the file
    Csv { name: String, grid: Table<Cell> },
}

impl Source {
    /// Open `path`, choosing the reader by extension
    pub fn open(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") | Some("txt") => {
                let grid = CsvReader::read_file(path, &CsvReadOptions::default())
                    .with_context(|| format!("Failed to read '{}'", path.display()))?;
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("sheet")
                    .to_string();
                Ok(Source::Csv { name, grid })
            }
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "xlam" | "ods") => {
                let workbook = open_workbook_auto(path)
                    .with_context(|| format!("Failed to open '{}'", path.display()))?;
                Ok(Source::Workbook(workbook))
            }
            _ => bail!(
                "Unsupported input '{}': expected a spreadsheet or CSV file",
                path.display()
            ),
        }
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            Source::Workbook(workbook) => workbook.sheet_names(),
            Source::Csv { name, .. } => vec![name.clone()],
        }
    }

    /// Raw grid of one sheet
    pub fn grid(&mut self, sheet: &str) -> Result<Table<Cell>> {
        match self {
            Source::Workbook(workbook) => {
                let range = workbook
                    .worksheet_range(sheet)
                    .with_context(|| format!("Failed to read sheet '{}'", sheet))?;
                let grid: Table<Cell> = range
                    .rows()
                    .map(|row| row.iter().map(to_cell).collect())
                    .collect();
                debug!(sheet, rows = grid.len(), "loaded sheet");
                Ok(grid)
            }
            Source::Csv { name, grid } if name.as_str() == sheet => Ok(grid.clone()),
            Source::Csv { .. } => bail!("Sheet '{}' not found", sheet),
        }
    }
}

/// Map a decoded workbook value onto a cell. Text that looks like a number
/// keeps its numeric tag so locale conversion can reach it.
fn to_cell(value: &Data) -> Cell {
    match value {
        Data::Empty => Cell::empty(),
        Data::String(s) => Cell::detect(s.as_str()),
        Data::Float(f) => Cell::number(*f),
        Data::Int(i) => Cell::number_with_text(*i as f64, i.to_string()),
        Data::Bool(true) => Cell::string("TRUE"),
        Data::Bool(false) => Cell::string("FALSE"),
        Data::DateTime(dt) => Cell::string(datetime_text(dt)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::string(s.as_str()),
        Data::Error(e) => Cell::string(e.to_string()),
    }
}

/// ISO text for a date serial (`2023-07-16`, or `2023-07-16T18:00:00` with
/// a time part); durations render as `h:mm:ss`. The workbook's 1900/1904
/// date system is carried by `dt`.
fn datetime_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        if let Some(duration) = dt.as_duration() {
            let secs = duration.num_seconds();
            let sign = if secs < 0 { "-" } else { "" };
            let secs = secs.abs();
            return format!(
                "{}{}:{:02}:{:02}",
                sign,
                secs / 3600,
                secs / 60 % 60,
                secs % 60
            );
        }
    } else if let Some(datetime) = dt.as_datetime() {
        let format = if datetime.time() == NaiveTime::MIN {
            "%Y-%m-%d"
        } else {
            "%Y-%m-%dT%H:%M:%S"
        };
        return datetime.format(format).to_string();
    }
    dt.as_f64().to_string()
}
