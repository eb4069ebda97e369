//! Output files

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Default output file name for a sheet: `<sheet>.csv` with characters that
/// are unsafe in file names replaced by `_`.
pub fn output_file_name(sheet: &str) -> String {
    let stem: String = sheet
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        "sheet.csv".to_string()
    } else {
        format!("{}.csv", stem)
    }
}

/// Output file names already handed out during one run. Names are compared
/// case-insensitively so `A.csv` and `a.csv` do not share a file on
/// case-insensitive file systems.
#[derive(Debug, Default)]
pub struct OutputNames {
    taken: HashSet<String>,
}

impl OutputNames {
    /// Reserve `name`, or `<stem>_2.csv`, `<stem>_3.csv`, ... when it is taken
    pub fn claim(&mut self, name: String) -> String {
        let (stem, ext) = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), format!(".{}", ext)),
            _ => (name.clone(), String::new()),
        };

        let mut candidate = name;
        let mut n = 2;
        while !self.taken.insert(candidate.to_lowercase()) {
            candidate = format!("{}_{}{}", stem, n, ext);
            n += 1;
        }
        candidate
    }
}

/// Write `contents` to `path` in one step: the text goes to a temporary file
/// in the same directory, which then replaces `path`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in '{}'", dir.display()))?;
    file.write_all(contents.as_bytes())
        .and_then(|_| file.flush())
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    file.persist(path)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}
