//! # csvify
//!
//! Convert spreadsheet sheets into clean, rectangular CSV tables.
//!
//! Each sheet's raw grid goes through the same steps:
//! 1. every cell is normalized (line breaks flattened, optional German
//!    number conversion)
//! 2. fully empty rows and columns are trimmed
//! 3. the table is split into a header block and a data block
//! 4. column names are resolved through a [`NamePrompt`]
//! 5. names are prepended, ignored columns dropped, and the result quoted
//!
//! Sheets are processed one at a time; the names chosen for one sheet can
//! be passed to the next as `previous`.
//!
//! ## Example
//!
//! ```rust
//! use csvify::prelude::*;
//!
//! let grid = vec![
//!     vec![Cell::string("Inventory"), Cell::empty()],
//!     vec![Cell::string("bolt"), Cell::number(12.0)],
//!     vec![Cell::string("nut"), Cell::number(40.0)],
//! ];
//!
//! let output = process_sheet(
//!     "Stock",
//!     grid,
//!     &SheetOptions::default(),
//!     None,
//!     None,
//!     &mut DefaultsPrompt,
//! )
//! .unwrap();
//!
//! assert_eq!(output.csv, "\"Inventory\",\"col_2\"\n\"bolt\",\"12\"\n\"nut\",\"40\"");
//! ```

pub mod error;
pub mod pipeline;
pub mod prelude;

pub use error::{Error, Result};
pub use pipeline::{prepare_sheet, process_sheet, PreparedSheet, SheetOptions, SheetOutput};

pub use csvify_core::{Error as CoreError, Result as CoreResult};

pub use csvify_core::{
    assemble, normalize, resolve_column_names, split_table, transpose, trim_table, Cell,
    CellKind, CellValue, ColumnName, DefaultsPrompt, NamePrompt, Split, SplitMode, Table,
    IGNORED_MARKER,
};
pub use csvify_csv::{
    parse_row, parse_row_strict, serialize, CsvError, CsvReadOptions, CsvReader,
    CsvWriteOptions, CsvWriter, QuoteHandling, QuoteMode,
};
