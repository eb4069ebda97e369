//! Persisted run configuration
//!
//! Captures the choices of one run so the next run over the same workbook
//! can start from them: selected sheets, column names per sheet, the German
//! number flag, and output file names.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csvify::ColumnName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sheets to convert, in order
    pub sheets: Vec<String>,
    /// Column names per sheet; ignored columns are stored as the marker
    pub columns: BTreeMap<String, Vec<ColumnName>>,
    /// Convert numeric text from `1.234,56` to `1,234.56`
    pub german_format: bool,
    /// Output file name per sheet
    pub outputs: BTreeMap<String, String>,
}

impl Config {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config '{}'", path.display()))
    }

    /// Load a configuration file, or start empty when it does not exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("Failed to encode config")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write config '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csvify.json");

        let mut config = Config {
            sheets: vec!["Jan".into(), "Feb".into()],
            german_format: true,
            ..Default::default()
        };
        config.columns.insert(
            "Jan".into(),
            vec![ColumnName::kept("region"), ColumnName::Ignored],
        );
        config.outputs.insert("Jan".into(), "january.csv".into());

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_ignored_marker_on_disk() {
        let json = r#"{ "columns": { "S": ["a", "<ignored>"] } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.columns["S"],
            vec![ColumnName::kept("a"), ColumnName::Ignored]
        );
        assert!(!config.german_format);
        assert!(config.sheets.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }
}
