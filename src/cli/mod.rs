use crate::constants::{APP_DESCRIPTION, APP_NAME, DEFAULT_LOG_LEVEL, LOG_FORMAT_TEXT};
use crate::forms::{DiaryForm, ExerciseForm, PracticeForm};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// A journal for exercises, practices and diary notes
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Log output format (text or json)
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT)]
    pub log_format: String,

    /// Log level used when RUST_LOG is not set
    #[clap(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Print verbose output (same as --log-level debug)
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log an exercise
    Exercise(ExerciseForm),

    /// Log a practice session
    Practice(PracticeForm),

    /// Write a diary note
    Diary(DiaryForm),

    /// Show all logged entries
    List,

    /// Export all entries as a document
    Export {
        /// Document format
        #[clap(short = 'f', long, value_enum, default_value_t = ExportFormat::Pdf)]
        format: ExportFormat,

        /// Directory to write the document to (overrides DIARIUM_EXPORT_DIR)
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PDF with embedded DejaVu Sans fonts
    Pdf,
    /// pdfmake document definition (JSON)
    Pdfmake,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// Effective log level, taking `--verbose` into account
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }

    /// Name of the subcommand, for log context
    pub fn command_name(&self) -> &'static str {
        match self.command {
            Command::Exercise(_) => "exercise",
            Command::Practice(_) => "practice",
            Command::Diary(_) => "diary",
            Command::List => "list",
            Command::Export { .. } => "export",
        }
    }
}
