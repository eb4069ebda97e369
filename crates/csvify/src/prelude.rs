//! Prelude module - common imports for csvify users
//!
//! ```rust
//! use csvify::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    prepare_sheet,
    process_sheet,
    // Cell types
    Cell,
    CellValue,
    // Naming
    ColumnName,
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    DefaultsPrompt,
    // Error types
    Error,
    NamePrompt,
    PreparedSheet,
    QuoteMode,
    Result,
    SheetOptions,
    SheetOutput,
    SplitMode,
    Table,
};
