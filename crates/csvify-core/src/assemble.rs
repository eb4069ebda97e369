//! Final table assembly: column names on top, ignored columns removed

use tracing::debug;

use crate::error::{Error, Result};
use crate::naming::ColumnName;
use crate::table::{transpose, width, Table};

/// Prepend `names` as the first row of `data` and drop ignored columns.
///
/// Surviving columns keep their relative order. A name count that differs
/// from the data width is reported as [`Error::ColumnCountMismatch`]
/// instead of being truncated or padded.
pub fn assemble(data: Table<String>, names: &[ColumnName]) -> Result<Table<String>> {
    let expected = if data.is_empty() {
        names.len()
    } else {
        width(&data)
    };
    if expected != names.len() {
        return Err(Error::ColumnCountMismatch {
            expected,
            actual: names.len(),
        });
    }

    let mut table = Vec::with_capacity(data.len() + 1);
    table.push(names.iter().map(|name| name.as_str().to_string()).collect());
    table.extend(data);

    let kept: Table<String> = transpose(table)
        .into_iter()
        .zip(names)
        .filter(|(_, name)| !name.is_ignored())
        .map(|(column, _)| column)
        .collect();

    debug!(
        kept = kept.len(),
        dropped = names.len() - kept.len(),
        "assembled columns"
    );
    Ok(transpose(kept))
}
