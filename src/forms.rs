//! Input forms, one per record kind.
//!
//! A form holds the raw, unvalidated field values exactly as the user entered
//! them. Intake reads them through [`FormAdapter::values`] and, after a
//! successful submission, puts the form back into its default state with
//! [`FormAdapter::reset_values`]. The command line surface parses straight into
//! these structs.

use crate::constants::{DEFAULT_EXERCISE_COUNT, DEFAULT_PRACTICE_TYPE};
use crate::journal_core::dates;
use clap::Args;

/// Read/reset access to the fields of an input form.
pub trait FormAdapter {
    /// Snapshot of the raw field values.
    type Values;

    fn values(&self) -> Self::Values;

    /// Restores every field to its default, using `today` for date fields.
    fn reset_values(&mut self, today: &str);
}

/// Raw fields for a new exercise.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseForm {
    /// Name of the exercise
    #[clap(short = 'n', long, default_value = "")]
    pub name: String,

    /// Date of the exercise (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long, default_value_t = dates::today())]
    pub date: String,

    /// How many times it was performed
    #[clap(short = 'c', long, default_value = DEFAULT_EXERCISE_COUNT, allow_hyphen_values = true)]
    pub count: String,
}

/// Raw fields for a new practice.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PracticeForm {
    /// Practice type (Stalking, Recapitulation, Dreaming, Tensegrity, Not-doing)
    #[clap(short = 't', long = "type", default_value = DEFAULT_PRACTICE_TYPE)]
    pub practice_type: String,

    /// What happened during the practice
    #[clap(short = 'n', long, default_value = "")]
    pub note: String,

    /// Date of the practice (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long, default_value_t = dates::today())]
    pub date: String,
}

/// Raw fields for a new diary note.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DiaryForm {
    /// Text of the note
    #[clap(short = 'n', long, default_value = "")]
    pub note: String,

    /// Date of the note (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long, default_value_t = dates::today())]
    pub date: String,
}

impl ExerciseForm {
    /// A form in its default state.
    pub fn blank(today: &str) -> Self {
        Self {
            name: String::new(),
            date: today.to_string(),
            count: DEFAULT_EXERCISE_COUNT.to_string(),
        }
    }
}

impl PracticeForm {
    pub fn blank(today: &str) -> Self {
        Self {
            practice_type: DEFAULT_PRACTICE_TYPE.to_string(),
            note: String::new(),
            date: today.to_string(),
        }
    }
}

impl DiaryForm {
    pub fn blank(today: &str) -> Self {
        Self {
            note: String::new(),
            date: today.to_string(),
        }
    }
}

impl FormAdapter for ExerciseForm {
    type Values = ExerciseForm;

    fn values(&self) -> Self::Values {
        self.clone()
    }

    fn reset_values(&mut self, today: &str) {
        *self = Self::blank(today);
    }
}

impl FormAdapter for PracticeForm {
    type Values = PracticeForm;

    fn values(&self) -> Self::Values {
        self.clone()
    }

    fn reset_values(&mut self, today: &str) {
        *self = Self::blank(today);
    }
}

impl FormAdapter for DiaryForm {
    type Values = DiaryForm;

    fn values(&self) -> Self::Values {
        self.clone()
    }

    fn reset_values(&mut self, today: &str) {
        *self = Self::blank(today);
    }
}
