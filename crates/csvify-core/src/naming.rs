//! Column naming protocol
//!
//! For every sheet one name per column is chosen. Suggestions come from a
//! saved configuration, from the header block, or from the column position;
//! the operator confirms or overrides each through a [`NamePrompt`]. A
//! column answered with an ignore sentinel (`no` or `-`) becomes
//! [`ColumnName::Ignored`] and is dropped on assembly.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::table::{transpose, width, Table};

/// Rendered form of [`ColumnName::Ignored`]
pub const IGNORED_MARKER: &str = "<ignored>";

/// Answers that mark a column as ignored (case-insensitive)
pub const IGNORE_SENTINELS: [&str; 2] = ["no", "-"];

/// Name resolved for one column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ColumnName {
    /// Column is kept under this name
    Kept(String),
    /// Column is dropped from the output
    Ignored,
}

impl ColumnName {
    /// Create a kept column name
    pub fn kept<S: Into<String>>(name: S) -> Self {
        ColumnName::Kept(name.into())
    }

    /// Interpret an operator answer; ignore sentinels map to [`ColumnName::Ignored`]
    pub fn from_answer(answer: &str) -> Self {
        if is_ignore_sentinel(answer) {
            ColumnName::Ignored
        } else {
            ColumnName::Kept(answer.trim().to_string())
        }
    }

    /// Check if the column is dropped
    pub fn is_ignored(&self) -> bool {
        matches!(self, ColumnName::Ignored)
    }

    /// Rendered name; [`IGNORED_MARKER`] for ignored columns
    pub fn as_str(&self) -> &str {
        match self {
            ColumnName::Kept(name) => name,
            ColumnName::Ignored => IGNORED_MARKER,
        }
    }

    /// Text offered to the operator as the default answer
    fn as_answer(&self) -> &str {
        match self {
            ColumnName::Kept(name) => name,
            ColumnName::Ignored => IGNORE_SENTINELS[1],
        }
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ColumnName {
    fn from(s: String) -> Self {
        if s == IGNORED_MARKER {
            ColumnName::Ignored
        } else {
            ColumnName::Kept(s)
        }
    }
}

impl From<&str> for ColumnName {
    fn from(s: &str) -> Self {
        ColumnName::from(s.to_string())
    }
}

impl From<ColumnName> for String {
    fn from(name: ColumnName) -> Self {
        match name {
            ColumnName::Kept(name) => name,
            ColumnName::Ignored => IGNORED_MARKER.to_string(),
        }
    }
}

/// Check whether an answer is one of the [`IGNORE_SENTINELS`]
pub fn is_ignore_sentinel(answer: &str) -> bool {
    let answer = answer.trim();
    IGNORE_SENTINELS
        .iter()
        .any(|sentinel| answer.eq_ignore_ascii_case(sentinel))
}

/// Source of operator decisions during column naming
pub trait NamePrompt {
    /// Ask whether the previous sheet's names should be reused verbatim
    fn confirm_reuse(&mut self, sheet: &str, previous: &[ColumnName]) -> Result<bool>;

    /// Ask for the name of column `column` (0-based). An empty answer
    /// accepts `default`.
    fn ask_name(&mut self, sheet: &str, column: usize, default: &str) -> Result<String>;
}

/// Prompt that accepts every default and reuses previous names
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompt;

impl NamePrompt for DefaultsPrompt {
    fn confirm_reuse(&mut self, _sheet: &str, _previous: &[ColumnName]) -> Result<bool> {
        Ok(true)
    }

    fn ask_name(&mut self, _sheet: &str, _column: usize, default: &str) -> Result<String> {
        Ok(default.to_string())
    }
}

/// Suggested name for one column from its header cells: non-empty cells
/// joined with `" / "`. Duplicates are kept.
pub fn derive_default(column: &[String]) -> Option<String> {
    let parts: Vec<String> = column
        .iter()
        .map(|cell| cell.replace('\r', ""))
        .filter(|cell| !cell.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" / "))
    }
}

/// Positional fallback name, 1-based
pub fn placeholder_name(column: usize) -> String {
    format!("col_{}", column + 1)
}

/// Resolve the final column names for one sheet.
///
/// The column count is the header's width. `defaults` come from a saved
/// configuration and must name every column, otherwise
/// [`Error::ColumnCountMismatch`] is returned before anything is asked.
/// `previous` are the names chosen for the preceding sheet and are only
/// offered for reuse when no `defaults` exist and the widths agree. Names
/// are returned in column order.
pub fn resolve_column_names<P>(
    sheet: &str,
    header: &Table<String>,
    defaults: Option<&[ColumnName]>,
    previous: Option<&[ColumnName]>,
    prompt: &mut P,
) -> Result<Vec<ColumnName>>
where
    P: NamePrompt + ?Sized,
{
    let n_cols = width(header);

    if let Some(defaults) = defaults {
        if defaults.len() != n_cols {
            return Err(Error::ColumnCountMismatch {
                expected: n_cols,
                actual: defaults.len(),
            });
        }
    }

    if let (None, Some(previous)) = (defaults, previous) {
        if previous.len() != n_cols {
            warn!(
                sheet,
                previous = previous.len(),
                columns = n_cols,
                "previous column names do not fit this sheet, not offering reuse"
            );
        } else if prompt.confirm_reuse(sheet, previous)? {
            debug!(sheet, "reusing previous column names");
            return Ok(previous.to_vec());
        }
    }

    let columns = transpose(header.clone());
    let mut names = Vec::with_capacity(n_cols);
    for j in 0..n_cols {
        let default = match defaults.and_then(|d| d.get(j)) {
            Some(name) => name.as_answer().to_string(),
            None => columns
                .get(j)
                .and_then(|column| derive_default(column))
                .unwrap_or_else(|| placeholder_name(j)),
        };

        let answer = prompt.ask_name(sheet, j, &default)?;
        let answer = if answer.trim().is_empty() {
            default
        } else {
            answer
        };
        names.push(ColumnName::from_answer(&answer));
    }

    debug!(
        sheet,
        columns = names.len(),
        ignored = names.iter().filter(|n| n.is_ignored()).count(),
        "resolved column names"
    );
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    fn table(rows: &[&[&str]]) -> Table<String> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    /// Replays canned answers and records what was asked
    #[derive(Default)]
    struct ScriptedPrompt {
        reuse: bool,
        answers: VecDeque<String>,
        asked: Vec<(usize, String)>,
        reuse_offered: bool,
    }

    impl ScriptedPrompt {
        fn answering(answers: &[&str]) -> Self {
            ScriptedPrompt {
                answers: answers.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl NamePrompt for ScriptedPrompt {
        fn confirm_reuse(&mut self, _sheet: &str, _previous: &[ColumnName]) -> Result<bool> {
            self.reuse_offered = true;
            Ok(self.reuse)
        }

        fn ask_name(&mut self, _sheet: &str, column: usize, default: &str) -> Result<String> {
            self.asked.push((column, default.to_string()));
            self.answers
                .pop_front()
                .ok_or_else(|| Error::prompt("no more answers"))
        }
    }

    #[test]
    fn test_derive_default() {
        let header = table(&[&["Jan", "2020"], &["Feb", "2020"]]);
        let columns = transpose(header);
        assert_eq!(derive_default(&columns[0]).as_deref(), Some("Jan / Feb"));
        assert_eq!(derive_default(&columns[1]).as_deref(), Some("2020 / 2020"));
    }

    #[test]
    fn test_derive_default_skips_empty_and_carriage_returns() {
        let column = vec!["".to_string(), "Total\r".to_string(), "\r".to_string()];
        assert_eq!(derive_default(&column).as_deref(), Some("Total"));
        assert_eq!(derive_default(&["".to_string()]), None);
    }

    #[test]
    fn test_ignore_sentinels() {
        assert!(is_ignore_sentinel("no"));
        assert!(is_ignore_sentinel("No"));
        assert!(is_ignore_sentinel("NO"));
        assert!(is_ignore_sentinel("-"));
        assert!(is_ignore_sentinel(" - "));
        assert!(!is_ignore_sentinel("Norway"));
        assert!(!is_ignore_sentinel("--"));

        assert_eq!(ColumnName::from_answer("No"), ColumnName::Ignored);
        assert_eq!(
            ColumnName::from_answer("Norway"),
            ColumnName::kept("Norway")
        );
    }

    #[test]
    fn test_marker_round_trip() {
        assert_eq!(ColumnName::from(IGNORED_MARKER), ColumnName::Ignored);
        assert_eq!(String::from(ColumnName::Ignored), IGNORED_MARKER);
        assert_eq!(ColumnName::kept("x").to_string(), "x");
    }

    #[test]
    fn test_prompts_with_derived_and_placeholder_defaults() {
        let header = table(&[&["Region", ""], &["North", ""]]);
        let mut prompt = ScriptedPrompt::answering(&["", "amount"]);

        let names = resolve_column_names("S1", &header, None, None, &mut prompt).unwrap();

        assert_eq!(
            names,
            vec![ColumnName::kept("Region / North"), ColumnName::kept("amount")]
        );
        assert_eq!(
            prompt.asked,
            vec![
                (0, "Region / North".to_string()),
                (1, "col_2".to_string())
            ]
        );
    }

    #[test]
    fn test_ignored_answers() {
        let header = table(&[&["a", "b", "c"]]);
        let mut prompt = ScriptedPrompt::answering(&["No", "-", "Norway"]);

        let names = resolve_column_names("S1", &header, None, None, &mut prompt).unwrap();

        assert_eq!(
            names,
            vec![
                ColumnName::Ignored,
                ColumnName::Ignored,
                ColumnName::kept("Norway")
            ]
        );
    }

    #[test]
    fn test_saved_defaults_seed_prompt() {
        let header = table(&[&["a", "b"]]);
        let defaults = vec![ColumnName::kept("first"), ColumnName::Ignored];
        let previous = vec![ColumnName::kept("x"), ColumnName::kept("y")];
        let mut prompt = ScriptedPrompt::answering(&["", ""]);
        prompt.reuse = true;

        let names = resolve_column_names(
            "S1",
            &header,
            Some(defaults.as_slice()),
            Some(previous.as_slice()),
            &mut prompt,
        )
        .unwrap();

        assert!(!prompt.reuse_offered);
        assert_eq!(names, defaults);
        assert_eq!(
            prompt.asked,
            vec![(0, "first".to_string()), (1, "-".to_string())]
        );
    }

    #[test]
    fn test_saved_defaults_must_match_width() {
        let header = table(&[&["a", "b"]]);

        for saved in [
            vec![
                ColumnName::kept("x"),
                ColumnName::kept("y"),
                ColumnName::kept("z"),
            ],
            vec![ColumnName::kept("x")],
        ] {
            let mut prompt = ScriptedPrompt::answering(&["", "", ""]);
            let result =
                resolve_column_names("S1", &header, Some(saved.as_slice()), None, &mut prompt);

            assert!(matches!(
                result,
                Err(Error::ColumnCountMismatch { expected: 2, actual })
                    if actual == saved.len()
            ));
            assert!(prompt.asked.is_empty());
        }
    }

    #[test]
    fn test_reuse_previous_accepted() {
        let header = table(&[&["a", "b"]]);
        let previous = vec![ColumnName::kept("x"), ColumnName::Ignored];
        let mut prompt = ScriptedPrompt::default();
        prompt.reuse = true;

        let names =
            resolve_column_names("S2", &header, None, Some(previous.as_slice()), &mut prompt)
                .unwrap();

        assert!(prompt.reuse_offered);
        assert!(prompt.asked.is_empty());
        assert_eq!(names, previous);
    }

    #[test]
    fn test_reuse_previous_declined() {
        let header = table(&[&["a", "b"]]);
        let previous = vec![ColumnName::kept("x"), ColumnName::kept("y")];
        let mut prompt = ScriptedPrompt::answering(&["", "z"]);

        let names =
            resolve_column_names("S2", &header, None, Some(previous.as_slice()), &mut prompt)
                .unwrap();

        assert!(prompt.reuse_offered);
        assert_eq!(names, vec![ColumnName::kept("a"), ColumnName::kept("z")]);
    }

    #[test]
    fn test_reuse_not_offered_on_width_mismatch() {
        let header = table(&[&["a", "b"]]);
        let previous = vec![ColumnName::kept("x")];
        let mut prompt = ScriptedPrompt::answering(&["", ""]);
        prompt.reuse = true;

        let names =
            resolve_column_names("S2", &header, None, Some(previous.as_slice()), &mut prompt)
                .unwrap();

        assert!(!prompt.reuse_offered);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_prompt_error_propagates() {
        let header = table(&[&["a", "b"]]);
        let mut prompt = ScriptedPrompt::answering(&["only one"]);

        let result = resolve_column_names("S1", &header, None, None, &mut prompt);
        assert!(matches!(result, Err(Error::Prompt(_))));
    }

    #[test]
    fn test_defaults_prompt() {
        let header = table(&[&["", "Qty"]]);
        let names = resolve_column_names("S1", &header, None, None, &mut DefaultsPrompt).unwrap();
        assert_eq!(names, vec![ColumnName::kept("col_1"), ColumnName::kept("Qty")]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_one_name_per_column(
                header in (1usize..=50, 0usize..4).prop_flat_map(|(cols, rows)| {
                    prop::collection::vec(
                        prop::collection::vec("[a-zA-Z -]{0,6}", cols),
                        rows.max(1),
                    )
                })
            ) {
                let n_cols = width(&header);
                let names =
                    resolve_column_names("S", &header, None, None, &mut DefaultsPrompt).unwrap();
                prop_assert_eq!(names.len(), n_cols);
            }
        }
    }
}
