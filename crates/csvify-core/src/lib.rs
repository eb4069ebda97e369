//! # csvify-core
//!
//! Core of the csvify tabular normalization engine.
//!
//! This crate turns a raw grid of spreadsheet cells into a trimmed,
//! header/data-separated table and reconciles column names for it:
//! - [`Cell`] and [`CellValue`] - A single spreadsheet cell and its typed value
//! - [`normalize`] - Line-break flattening and optional German number conversion
//! - [`transpose`], [`has_entry`], [`trim_table`] - Matrix utilities
//! - [`split_table`] - Header/data boundary detection
//! - [`resolve_column_names`] - Column naming protocol driven through a [`NamePrompt`]
//! - [`assemble`] - Prepends column names and drops ignored columns
//!
//! The engine performs no I/O; operator interaction happens through the
//! [`NamePrompt`] trait.
//!
//! ## Example
//!
//! ```rust
//! use csvify_core::{assemble, split_table, ColumnName, SplitMode};
//!
//! let table = vec![
//!     vec!["Report".to_string(), String::new()],
//!     vec!["1".to_string(), "2".to_string()],
//!     vec!["3".to_string(), "4".to_string()],
//! ];
//!
//! let split = split_table(table, SplitMode::Complete);
//! assert_eq!(split.header, vec![vec!["Report".to_string(), String::new()]]);
//!
//! let names = vec![ColumnName::kept("a"), ColumnName::Ignored];
//! let assembled = assemble(split.data, &names).unwrap();
//! assert_eq!(assembled, vec![vec!["a"], vec!["1"], vec!["3"]]);
//! ```

pub mod assemble;
pub mod cell;
pub mod error;
pub mod naming;
pub mod normalize;
pub mod split;
pub mod table;

pub use assemble::assemble;
pub use cell::{Cell, CellKind, CellValue};
pub use error::{Error, Result};
pub use naming::{
    derive_default, is_ignore_sentinel, placeholder_name, resolve_column_names, ColumnName,
    DefaultsPrompt, NamePrompt, IGNORED_MARKER, IGNORE_SENTINELS,
};
pub use normalize::{flatten_line_breaks, normalize, parse_locale_number, swap_separators};
pub use split::{split_table, Split, SplitMode};
pub use table::{has_entry, transpose, trim_table, width, Entry, Row, Table};
