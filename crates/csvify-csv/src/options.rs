//! CSV options

/// How the reader treats a quoted field that is still open at end of line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteHandling {
    /// Keep the accumulated text, no error
    #[default]
    Lenient,
    /// Report [`CsvError::UnterminatedQuote`](crate::CsvError::UnterminatedQuote)
    Strict,
}

/// Options for reading CSV text
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Unterminated quote handling (default: lenient)
    pub quotes: QuoteHandling,
    /// Classify number-looking fields as numeric cells (default: true)
    pub detect_numbers: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            quotes: QuoteHandling::Lenient,
            detect_numbers: true,
        }
    }
}

/// How cells are quoted on output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// Wrap every cell in quotes, leave embedded quotes as they are
    #[default]
    Raw,
    /// Wrap every cell in quotes and double embedded quotes (RFC 4180)
    Escaped,
}

/// Options for writing CSV text
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriteOptions {
    /// Quoting (default: raw)
    pub quote_mode: QuoteMode,
}
