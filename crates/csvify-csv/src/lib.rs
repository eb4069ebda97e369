//! # csvify-csv
//!
//! CSV row parser and serializer for csvify.
//!
//! The parser is deliberately permissive: quotes toggle a quoted section and
//! are never emitted, and an unterminated quote is tolerated. The serializer
//! quotes every cell unconditionally.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, QuoteHandling, QuoteMode};
pub use reader::{parse_row, parse_row_strict, CsvReader};
pub use writer::{serialize, CsvWriter};
