//! csvify CLI - turn spreadsheet sheets into clean CSV files

mod config;
mod output;
mod prompt;
mod source;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use csvify::{
    process_sheet, ColumnName, DefaultsPrompt, NamePrompt, QuoteMode, SheetOptions, SplitMode,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::{output_file_name, write_atomic, OutputNames};
use crate::prompt::TerminalPrompt;
use crate::source::Source;

#[derive(Parser)]
#[command(name = "csvify")]
#[command(
    author,
    version,
    about = "Convert spreadsheet sheets into clean CSV tables with named columns"
)]
struct Cli {
    /// Input file (xlsx, xlsm, xlsb, xls, ods, csv)
    input: PathBuf,

    /// Directory for the CSV files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Sheet to convert; repeat for several (default: ask, or all with --yes)
    #[arg(short, long = "sheet")]
    sheets: Vec<String>,

    /// Configuration file with saved choices
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write this run's choices back to the configuration file
    #[arg(long, requires = "config")]
    save_config: bool,

    /// Numbers are shown as 1.234,56; convert them to 1,234.56
    #[arg(short, long, overrides_with = "no_german_format")]
    german_format: bool,

    /// Leave numbers as they are, even when the configuration says otherwise
    #[arg(long, overrides_with = "german_format")]
    no_german_format: bool,

    /// Only treat rows containing a number as data rows
    #[arg(long)]
    strict_split: bool,

    /// Double quotes inside cells (RFC 4180)
    #[arg(long)]
    escape_quotes: bool,

    /// Accept every default without prompting
    #[arg(short, long)]
    yes: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line flags win over the saved setting
fn german_format(cli: &Cli, config: &Config) -> bool {
    if cli.no_german_format {
        false
    } else {
        cli.german_format || config.german_format
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_or_default(path)?,
        None => Config::default(),
    };

    let mut source = Source::open(&cli.input)?;
    let available = source.sheet_names();

    let sheets = if !cli.sheets.is_empty() {
        cli.sheets.clone()
    } else if !config.sheets.is_empty() {
        config.sheets.clone()
    } else if cli.yes || available.len() == 1 {
        available.clone()
    } else {
        TerminalPrompt::stdio().select_sheets(&available)?
    };
    if let Some(missing) = sheets.iter().find(|s| !available.contains(*s)) {
        bail!(
            "Sheet '{}' not found in '{}' (available: {})",
            missing,
            cli.input.display(),
            available.join(", ")
        );
    }

    let options = SheetOptions {
        german_format: german_format(&cli, &config),
        split_mode: if cli.strict_split {
            SplitMode::Numeric
        } else {
            SplitMode::Complete
        },
        quote_mode: if cli.escape_quotes {
            QuoteMode::Escaped
        } else {
            QuoteMode::Raw
        },
    };

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create '{}'", cli.output_dir.display()))?;

    let mut prompt: Box<dyn NamePrompt> = if cli.yes {
        Box::new(DefaultsPrompt)
    } else {
        Box::new(TerminalPrompt::stdio())
    };

    let mut previous: Option<Vec<ColumnName>> = None;
    let mut output_names = OutputNames::default();
    for sheet in &sheets {
        let grid = source.grid(sheet)?;
        let defaults = config.columns.get(sheet).map(Vec::as_slice);

        let converted = process_sheet(
            sheet,
            grid,
            &options,
            defaults,
            previous.as_deref(),
            prompt.as_mut(),
        )
        .with_context(|| format!("Failed to convert sheet '{}'", sheet))?;

        let file_name = output_names.claim(
            config
                .outputs
                .get(sheet)
                .cloned()
                .unwrap_or_else(|| output_file_name(sheet)),
        );
        let path = cli.output_dir.join(&file_name);
        write_atomic(&path, &converted.csv)?;
        info!(sheet = sheet.as_str(), path = %path.display(), "wrote CSV");

        config.columns.insert(sheet.clone(), converted.columns.clone());
        config.outputs.insert(sheet.clone(), file_name);
        previous = Some(converted.columns);
    }

    if cli.save_config {
        if let Some(path) = &cli.config {
            config.sheets = sheets;
            config.german_format = options.german_format;
            config.save(path)?;
            info!(path = %path.display(), "saved configuration");
        }
    }

    Ok(())
}
