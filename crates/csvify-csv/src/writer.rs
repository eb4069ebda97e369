//! CSV writer

use std::io::Write;

use csvify_core::Table;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, QuoteMode};

/// Serialize a table with every cell wrapped in double quotes.
///
/// Embedded quotes are left as they are. Rows are joined with `\n` and the
/// last row has no trailing newline.
pub fn serialize(table: &Table<String>) -> String {
    table
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{}\"", cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV writer
pub struct CsvWriter;

impl CsvWriter {
    /// Render a table to CSV text
    pub fn render(table: &Table<String>, options: &CsvWriteOptions) -> CsvResult<String> {
        match options.quote_mode {
            QuoteMode::Raw => Ok(serialize(table)),
            QuoteMode::Escaped => Self::escaped(table),
        }
    }

    /// Write a table to a writer as one buffer
    pub fn write<W: Write>(
        table: &Table<String>,
        mut writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let text = Self::render(table, options)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn escaped(table: &Table<String>) -> CsvResult<String> {
        let mut csv_writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(Vec::new());

        for row in table {
            csv_writer.write_record(row)?;
        }

        let bytes = csv_writer
            .into_inner()
            .map_err(|e| e.into_error())?;
        let mut text = String::from_utf8(bytes)?;
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }
}
