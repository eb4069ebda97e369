//! Line-based terminal prompt

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use csvify::{ColumnName, CoreError, CoreResult, NamePrompt};

/// Asks questions on `output` and reads one answer per line from `input`
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, answers from stdin
    pub fn stdio() -> Self {
        TerminalPrompt::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Let the operator pick sheets by 1-based number. A blank answer
    /// selects all of them.
    pub fn select_sheets(&mut self, names: &[String]) -> Result<Vec<String>> {
        for (i, name) in names.iter().enumerate() {
            writeln!(self.output, "  {:>3}  {}", i + 1, name)?;
        }
        let answer = self.ask("Sheets to convert (e.g. 1,3; blank for all): ")?;
        if answer.is_empty() {
            return Ok(names.to_vec());
        }

        let mut selected = Vec::new();
        for part in answer.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let index: usize = match part.parse() {
                Ok(index) if (1..=names.len()).contains(&index) => index,
                _ => bail!("Invalid sheet number '{}'", part),
            };
            let name = &names[index - 1];
            if !selected.contains(name) {
                selected.push(name.clone());
            }
        }
        Ok(selected)
    }
}

impl<R: BufRead, W: Write> NamePrompt for TerminalPrompt<R, W> {
    fn confirm_reuse(&mut self, sheet: &str, previous: &[ColumnName]) -> CoreResult<bool> {
        let names: Vec<&str> = previous.iter().map(ColumnName::as_str).collect();
        let question = format!(
            "[{}] Reuse previous column names ({})? [Y/n]: ",
            sheet,
            names.join(", ")
        );
        let answer = self
            .ask(&question)
            .map_err(|e| CoreError::prompt(e.to_string()))?;
        Ok(matches!(
            answer.to_ascii_lowercase().as_str(),
            "" | "y" | "yes"
        ))
    }

    fn ask_name(&mut self, sheet: &str, column: usize, default: &str) -> CoreResult<String> {
        let question = format!(
            "[{}] Name for column {} (\"no\" or \"-\" to drop) [{}]: ",
            sheet,
            column + 1,
            default
        );
        self.ask(&question)
            .map_err(|e| CoreError::prompt(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn prompt(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_name() {
        let mut p = prompt("  Revenue  \n\n");
        assert_eq!(p.ask_name("S", 0, "col_1").unwrap(), "Revenue");
        assert_eq!(p.ask_name("S", 1, "col_2").unwrap(), "");

        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.contains("[S] Name for column 1"));
        assert!(shown.contains("[col_2]"));
    }

    #[test]
    fn test_confirm_reuse() {
        let previous = vec![ColumnName::kept("a"), ColumnName::Ignored];
        let mut p = prompt("\nn\nYES\n");
        assert!(p.confirm_reuse("S", &previous).unwrap());
        assert!(!p.confirm_reuse("S", &previous).unwrap());
        assert!(p.confirm_reuse("S", &previous).unwrap());
    }

    #[test]
    fn test_closed_input_is_prompt_error() {
        let mut p = prompt("");
        assert!(matches!(
            p.ask_name("S", 0, "x"),
            Err(CoreError::Prompt(_))
        ));
    }

    #[test]
    fn test_select_sheets() {
        let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(prompt("\n").select_sheets(&names).unwrap(), names);
        assert_eq!(
            prompt("3, 1,3\n").select_sheets(&names).unwrap(),
            vec!["C".to_string(), "A".to_string()]
        );
        assert!(prompt("4\n").select_sheets(&names).is_err());
        assert!(prompt("x\n").select_sheets(&names).is_err());
    }
}
