//! Per-sheet pipeline

use csvify_core::{
    assemble, normalize, resolve_column_names, split_table, trim_table, Cell, ColumnName,
    NamePrompt, SplitMode, Table,
};
use csvify_csv::{CsvWriteOptions, CsvWriter, QuoteMode};
use tracing::{debug, info};

use crate::error::Result;

/// Options applied to every sheet of a run
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetOptions {
    /// Convert numeric display text from `1.234,56` to `1,234.56`
    pub german_format: bool,
    /// Header/data boundary rule
    pub split_mode: SplitMode,
    /// Output quoting
    pub quote_mode: QuoteMode,
}

/// A sheet after normalization, trimming and splitting, ready for naming
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSheet {
    pub name: String,
    pub header: Table<String>,
    pub data: Table<String>,
}

/// Finished sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetOutput {
    /// Sheet name
    pub name: String,
    /// Names resolved for every data column, ignored ones included
    pub columns: Vec<ColumnName>,
    /// Assembled table: names row followed by data, ignored columns removed
    pub table: Table<String>,
    /// Serialized CSV text
    pub csv: String,
}

/// Normalize, trim and split one sheet's raw grid.
pub fn prepare_sheet(name: &str, grid: Table<Cell>, options: &SheetOptions) -> PreparedSheet {
    let normalized: Table<Cell> = grid
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| normalize(cell, options.german_format))
                .collect()
        })
        .collect();

    let text: Table<String> = trim_table(normalized)
        .into_iter()
        .map(|row| row.into_iter().map(Cell::into_text).collect())
        .collect();

    let split = split_table(text, options.split_mode);
    debug!(
        sheet = name,
        header_rows = split.header.len(),
        data_rows = split.data.len(),
        "prepared sheet"
    );

    PreparedSheet {
        name: name.to_string(),
        header: split.header,
        data: split.data,
    }
}

/// Run the whole pipeline for one sheet.
///
/// `defaults` seed the naming prompt (typically from a saved
/// configuration). `previous` are the names returned for the preceding
/// sheet; thread [`SheetOutput::columns`] into the next call to offer
/// reuse.
pub fn process_sheet<P>(
    name: &str,
    grid: Table<Cell>,
    options: &SheetOptions,
    defaults: Option<&[ColumnName]>,
    previous: Option<&[ColumnName]>,
    prompt: &mut P,
) -> Result<SheetOutput>
where
    P: NamePrompt + ?Sized,
{
    let prepared = prepare_sheet(name, grid, options);
    let columns = resolve_column_names(name, &prepared.header, defaults, previous, prompt)?;
    let table = assemble(prepared.data, &columns)?;
    let csv = CsvWriter::render(
        &table,
        &CsvWriteOptions {
            quote_mode: options.quote_mode,
        },
    )?;

    info!(
        sheet = name,
        rows = table.len().saturating_sub(1),
        columns = table.first().map_or(0, Vec::len),
        "sheet converted"
    );

    Ok(SheetOutput {
        name: prepared.name,
        columns,
        table,
        csv,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvify_core::DefaultsPrompt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prepare_flattens_and_trims() {
        let grid = vec![
            vec![Cell::empty(), Cell::empty(), Cell::empty()],
            vec![Cell::empty(), Cell::string("Item\nname"), Cell::string("Qty")],
            vec![Cell::empty(), Cell::string("bolt"), Cell::number(3.0)],
        ];

        let prepared = prepare_sheet("S", grid, &SheetOptions::default());

        assert_eq!(prepared.header, vec![vec![String::new(), String::new()]]);
        assert_eq!(
            prepared.data,
            vec![
                vec!["Item name".to_string(), "Qty".to_string()],
                vec!["bolt".to_string(), "3".to_string()],
            ]
        );
    }

    #[test]
    fn test_prepare_empty_sheet() {
        let prepared = prepare_sheet("S", vec![vec![Cell::empty()]], &SheetOptions::default());
        assert!(prepared.header.is_empty());
        assert!(prepared.data.is_empty());
    }

    #[test]
    fn test_german_numbers() {
        let grid = vec![
            vec![Cell::string("Price"), Cell::empty()],
            vec![Cell::string("a"), Cell::detect("1.234,56")],
        ];
        let options = SheetOptions {
            german_format: true,
            ..Default::default()
        };

        let output = process_sheet("S", grid, &options, None, None, &mut DefaultsPrompt).unwrap();
        assert_eq!(output.csv, "\"Price\",\"col_2\"\n\"a\",\"1,234.56\"");
    }
}
