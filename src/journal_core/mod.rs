//! Core journal state without I/O operations.
//!
//! This module holds the three record kinds and the `Journal`, the in-memory
//! record store. The store only appends: validation happens at intake, and
//! persistence and rendering are triggered by the caller afterwards.

pub mod dates;

use serde::{Deserialize, Serialize};

/// A repeated physical exercise, e.g. ten squats on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Name of the exercise.
    #[serde(default)]
    pub name: String,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: String,
    /// How many times it was performed.
    #[serde(default)]
    pub count: u32,
}

/// A practice session of one of the fixed practice types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    /// Practice label, serialized as `type`.
    #[serde(rename = "type", default)]
    pub practice_type: String,
    /// Free-form description of the session.
    #[serde(default)]
    pub note: String,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: String,
}

/// A free-form diary note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryNote {
    /// Text of the note.
    #[serde(default)]
    pub note: String,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: String,
}

/// The record store: three ordered, append-only collections.
///
/// The serialized form of this struct is the persisted state layout,
/// `{ "exercises": [...], "practices": [...], "diaries": [...] }`. A
/// collection missing from stored data loads as empty.
///
/// # Examples
///
/// ```
/// use diarium::journal_core::{DiaryNote, Journal};
///
/// let mut journal = Journal::default();
/// journal.add_diary(DiaryNote {
///     note: "quiet evening".to_string(),
///     date: "2024-01-02".to_string(),
/// });
/// assert_eq!(journal.diaries().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    exercises: Vec<Exercise>,
    #[serde(default)]
    practices: Vec<Practice>,
    #[serde(default)]
    diaries: Vec<DiaryNote>,
}

impl Journal {
    /// Appends an exercise at the end of the exercise collection.
    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    /// Appends a practice at the end of the practice collection.
    pub fn add_practice(&mut self, practice: Practice) {
        self.practices.push(practice);
    }

    /// Appends a diary note at the end of the diary collection.
    pub fn add_diary(&mut self, note: DiaryNote) {
        self.diaries.push(note);
    }

    /// Exercises in insertion order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Practices in insertion order.
    pub fn practices(&self) -> &[Practice] {
        &self.practices
    }

    /// Diary notes in insertion order.
    pub fn diaries(&self) -> &[DiaryNote] {
        &self.diaries
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.exercises.len() + self.practices.len() + self.diaries.len()
    }

    /// Returns true if no collection holds a record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
