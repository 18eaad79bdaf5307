//! Projection of the journal into grouped, human-readable sections.
//!
//! Each non-empty collection becomes one section with a heading and one line
//! per record, in insertion order. Empty collections produce no section at all.
//! The line templates here are shared with the export composer.

use crate::constants::{HEADING_DIARY, HEADING_EXERCISES, HEADING_PRACTICES, LINE_SEPARATOR};
use crate::journal_core::dates::to_display;
use crate::journal_core::{DiaryNote, Exercise, Journal, Practice};
use std::io::{self, Write};

/// One rendered group of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

/// `{displayDate} • {name} • {count} times`
pub fn exercise_line(exercise: &Exercise) -> String {
    [
        to_display(&exercise.date),
        exercise.name.clone(),
        format!("{} times", exercise.count),
    ]
    .join(LINE_SEPARATOR)
}

/// `{displayDate} • Type: {type} • {note}`
pub fn practice_line(practice: &Practice) -> String {
    [
        to_display(&practice.date),
        format!("Type: {}", practice.practice_type),
        practice.note.clone(),
    ]
    .join(LINE_SEPARATOR)
}

/// `{displayDate} • {note}`
pub fn diary_line(note: &DiaryNote) -> String {
    [to_display(&note.date), note.note.clone()].join(LINE_SEPARATOR)
}

/// Builds the sections for every non-empty collection, in the fixed order
/// exercises, practices, diary.
pub fn render_sections(journal: &Journal) -> Vec<Section> {
    let mut sections = Vec::new();

    if !journal.exercises().is_empty() {
        sections.push(Section {
            heading: HEADING_EXERCISES,
            lines: journal.exercises().iter().map(exercise_line).collect(),
        });
    }
    if !journal.practices().is_empty() {
        sections.push(Section {
            heading: HEADING_PRACTICES,
            lines: journal.practices().iter().map(practice_line).collect(),
        });
    }
    if !journal.diaries().is_empty() {
        sections.push(Section {
            heading: HEADING_DIARY,
            lines: journal.diaries().iter().map(diary_line).collect(),
        });
    }

    sections
}

/// Mount point receiving the rendered structure.
///
/// Every call replaces whatever was shown before; there are no incremental
/// updates.
pub trait RenderTarget {
    fn mount(&mut self, sections: &[Section]) -> io::Result<()>;
}

/// Keeps the most recently mounted sections in memory.
#[derive(Debug, Default)]
pub struct BufferTarget {
    pub sections: Vec<Section>,
    pub mounts: usize,
}

impl RenderTarget for BufferTarget {
    fn mount(&mut self, sections: &[Section]) -> io::Result<()> {
        self.sections = sections.to_vec();
        self.mounts += 1;
        Ok(())
    }
}

/// Writes sections as plain text, one heading followed by its bulleted lines.
pub struct TerminalTarget<W: Write> {
    out: W,
}

impl<W: Write> TerminalTarget<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderTarget for TerminalTarget<W> {
    fn mount(&mut self, sections: &[Section]) -> io::Result<()> {
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            writeln!(self.out, "{}", section.heading)?;
            for line in &section.lines {
                writeln!(self.out, "  - {}", line)?;
            }
        }
        self.out.flush()
    }
}

/// Renders the journal and mounts the result on `target`.
pub fn update_display<R: RenderTarget>(journal: &Journal, target: &mut R) -> io::Result<()> {
    target.mount(&render_sections(journal))
}
