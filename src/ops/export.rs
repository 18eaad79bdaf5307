//! Export of the journal as a formatted document.
//!
//! Composition is pure: the journal is flattened into a [`DocumentDescription`]
//! with a title block, then a heading, one line per record and a spacer for
//! each non-empty collection. Rendering and writing the artifact is left to a
//! [`DocumentBackend`].

use crate::constants::{
    EXPORT_HEADING_FONT_SIZE, EXPORT_TITLE, EXPORT_TITLE_FONT_SIZE, HEADING_DIARY,
    HEADING_EXERCISES, HEADING_PRACTICES,
};
use crate::document::{Block, BlockKind, DocumentBackend, DocumentDescription};
use crate::errors::{AppResult, ExportError};
use crate::journal_core::Journal;
use crate::ops::render::{diary_line, exercise_line, practice_line};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

fn title() -> Block {
    Block {
        kind: BlockKind::Title,
        text: EXPORT_TITLE.to_string(),
        font_size: Some(EXPORT_TITLE_FONT_SIZE),
        bold: true,
        margin: [0.0, 0.0, 0.0, 10.0],
    }
}

fn heading(text: &str) -> Block {
    Block {
        kind: BlockKind::Heading,
        text: text.to_string(),
        font_size: Some(EXPORT_HEADING_FONT_SIZE),
        bold: true,
        margin: [0.0, 0.0, 0.0, 5.0],
    }
}

fn line(text: String) -> Block {
    Block {
        kind: BlockKind::Line,
        text,
        font_size: None,
        bold: false,
        margin: [10.0, 0.0, 0.0, 2.0],
    }
}

fn spacer() -> Block {
    Block {
        kind: BlockKind::Spacer,
        text: " ".to_string(),
        font_size: None,
        bold: false,
        margin: [0.0, 0.0, 0.0, 5.0],
    }
}

/// Flattens the journal into a document description.
///
/// Sections appear in the fixed order exercises, practices, diary. A spacer
/// follows the exercises and practices sections; the diary section closes the
/// document without one.
pub fn compose_document(journal: &Journal) -> DocumentDescription {
    let mut document = DocumentDescription::default();
    document.push(title());

    if !journal.exercises().is_empty() {
        document.push(heading(HEADING_EXERCISES));
        for exercise in journal.exercises() {
            document.push(line(exercise_line(exercise)));
        }
        document.push(spacer());
    }

    if !journal.practices().is_empty() {
        document.push(heading(HEADING_PRACTICES));
        for practice in journal.practices() {
            document.push(line(practice_line(practice)));
        }
        document.push(spacer());
    }

    if !journal.diaries().is_empty() {
        document.push(heading(HEADING_DIARY));
        for note in journal.diaries() {
            document.push(line(diary_line(note)));
        }
    }

    document
}

/// Composes the journal, renders it with `backend` and writes the artifact
/// into `export_dir`, replacing any previous export.
///
/// Returns the path of the written file.
pub fn export_document<B: DocumentBackend>(
    journal: &Journal,
    backend: &B,
    export_dir: &Path,
) -> AppResult<PathBuf> {
    let document = compose_document(journal);
    let bytes = backend.render(&document)?;
    let path = export_dir.join(backend.file_name());

    let write_err = |source: std::io::Error| ExportError::Write {
        path: path.clone(),
        source,
    };
    std::fs::create_dir_all(export_dir).map_err(write_err)?;
    let mut temp = tempfile::NamedTempFile::new_in(export_dir).map_err(write_err)?;
    temp.write_all(&bytes).map_err(write_err)?;
    temp.persist(&path).map_err(|e| write_err(e.error))?;

    info!(
        "Exported {} records ({} bytes) to {:?}",
        journal.len(),
        bytes.len(),
        path
    );
    Ok(path)
}
