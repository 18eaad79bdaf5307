/*!
# Diarium - A Practice Journal

Diarium is a command-line journal for three kinds of entries: exercises,
practices and free-form diary notes. Entries are stored locally as a single
JSON document, listed grouped by kind, and can be exported as a PDF.

## Usage

```
diarium [OPTIONS] <COMMAND>

Commands:
  exercise  Log an exercise
  practice  Log a practice session
  diary     Write a diary note
  list      Show all logged entries
  export    Export all entries as a document

Options:
      --log-format <LOG_FORMAT>  Log output format (text or json) [default: text]
      --log-level <LOG_LEVEL>    Log level used when RUST_LOG is not set [default: info]
  -v, --verbose                  Print verbose output (same as --log-level debug)
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `DIARIUM_DIR`: The directory holding the journal state (defaults to "~/.local/share/diarium")
- `DIARIUM_EXPORT_DIR`: The directory exports are written to (defaults to the current directory)
*/

use diarium::cli::{CliArgs, Command, ExportFormat};
use diarium::config::Config;
use diarium::document::{PdfBackend, PdfMakeBackend};
use diarium::errors::AppResult;
use diarium::journal_core::dates;
use diarium::journal_io::{FileStorage, PersistenceGateway};
use diarium::logging::{init_tracing, root_span, LogFormat};
use diarium::ops::{export_document, update_display, Intake, TerminalTarget};
use std::io;
use tracing::{debug, error, info};

/// The main entry point for the diarium application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments and initializes logging
/// 2. Loads and validates configuration
/// 3. Restores the journal from the storage slot
/// 4. Runs the requested command against it
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let log_format: LogFormat = args.log_format.parse()?;
    init_tracing(log_format, args.effective_log_level())?;

    let span = root_span(args.command_name());
    let _guard = span.enter();

    let result = run(args);
    if let Err(e) = &result {
        error!("{:?}", e);
    }
    result
}

fn run(args: CliArgs) -> AppResult<()> {
    info!("Starting diarium");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;

    let gateway = PersistenceGateway::new(FileStorage::new(&config.data_dir));
    let mut journal = gateway.load();
    let today = dates::today();

    let stdout = io::stdout();
    let mut target = TerminalTarget::new(stdout.lock());

    let added = match args.command {
        Command::Exercise(mut form) => {
            Intake::new(&mut journal, &gateway, &mut target, today).add_exercise(&mut form)?
        }
        Command::Practice(mut form) => {
            Intake::new(&mut journal, &gateway, &mut target, today).add_practice(&mut form)?
        }
        Command::Diary(mut form) => {
            Intake::new(&mut journal, &gateway, &mut target, today).add_diary(&mut form)?
        }
        Command::List => {
            update_display(&journal, &mut target)?;
            return Ok(());
        }
        Command::Export { format, output } => {
            let export_dir = output.unwrap_or(config.export_dir);
            let path = match format {
                ExportFormat::Pdf => export_document(&journal, &PdfBackend, &export_dir)?,
                ExportFormat::Pdfmake => export_document(&journal, &PdfMakeBackend, &export_dir)?,
            };
            println!("{}", path.display());
            return Ok(());
        }
    };

    if !added {
        debug!("Submission ignored; nothing was recorded");
    }
    Ok(())
}
