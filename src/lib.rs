/*!
# Diarium

Diarium is a small journal for three kinds of entries: exercises (a name and a
repetition count), practices (one of a fixed set of practice types plus a note)
and free-form diary notes. Entries are appended to in-memory collections,
persisted after every addition, listed grouped by kind, and exported as a
formatted document.

## Architecture

- `journal_core`: Record types, the append-only `Journal` store and date formatting
- `journal_io`: Storage port and the persistence gateway (load at startup, save after every append)
- `forms`: Raw input forms, one per record kind
- `ops`: Intake (validate and record), display rendering and document export
- `document`: Backend-agnostic document description plus PDF and pdfmake backends
- `cli`, `config`, `errors`, `logging`: The command-line surface and ambient concerns

## Usage Example

```rust
use diarium::forms::ExerciseForm;
use diarium::journal_core::Journal;
use diarium::journal_io::{MemoryStorage, PersistenceGateway};
use diarium::ops::render::BufferTarget;
use diarium::ops::Intake;

fn main() -> diarium::AppResult<()> {
    let gateway = PersistenceGateway::new(MemoryStorage::new());
    let mut journal = gateway.load();
    let mut target = BufferTarget::default();

    let mut form = ExerciseForm {
        name: "Squats".to_string(),
        date: "2024-01-02".to_string(),
        count: "10".to_string(),
    };
    Intake::new(&mut journal, &gateway, &mut target, "2024-01-02").add_exercise(&mut form)?;

    assert_eq!(target.sections[0].lines[0], "02.01.2024 • Squats • 10 times");
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Document description and export backends
pub mod document;
/// Error types and utilities for error handling
pub mod errors;
/// Raw input forms
pub mod forms;
/// Records, the record store and date formatting
pub mod journal_core;
/// Persistence of the record store
pub mod journal_io;
/// Tracing subscriber setup
pub mod logging;
/// Intake, rendering and export operations
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{DiaryNote, Exercise, Journal, Practice};
