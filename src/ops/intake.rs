//! Entry intake: validation and normalization of raw form values.
//!
//! A submission either goes through completely (append, save, re-render, form
//! reset) or not at all. Invalid input is a silent no-op: nothing is appended,
//! nothing is written, nothing is rendered, and the caller gets `Ok(false)`.
//! The only error that can surface is a failure to save or render.

use crate::constants::{DEFAULT_PRACTICE_TYPE, PRACTICE_TYPES};
use crate::errors::AppResult;
use crate::forms::{DiaryForm, ExerciseForm, FormAdapter, PracticeForm};
use crate::journal_core::{dates, DiaryNote, Exercise, Journal, Practice};
use crate::journal_io::{PersistenceGateway, StoragePort};
use crate::ops::render::{update_display, RenderTarget};
use tracing::debug;

/// Turns raw exercise fields into a record, or `None` if any field is invalid.
pub fn validate_exercise(form: &ExerciseForm) -> Option<Exercise> {
    let name = required(&form.name)?;
    let date = dates::normalize(required(&form.date)?)?;
    let count = form.count.trim().parse::<u32>().ok().filter(|c| *c > 0)?;

    Some(Exercise {
        name: name.to_string(),
        date,
        count,
    })
}

/// Turns raw practice fields into a record, or `None` if any field is invalid.
///
/// An empty type falls back to the default label; any other value must be one
/// of the known practice types.
pub fn validate_practice(form: &PracticeForm) -> Option<Practice> {
    let practice_type = match form.practice_type.trim() {
        "" => DEFAULT_PRACTICE_TYPE,
        label => *PRACTICE_TYPES.iter().find(|known| **known == label)?,
    };
    let note = required(&form.note)?;
    let date = dates::normalize(required(&form.date)?)?;

    Some(Practice {
        practice_type: practice_type.to_string(),
        note: note.to_string(),
        date,
    })
}

/// Turns raw diary fields into a record, or `None` if any field is invalid.
pub fn validate_diary(form: &DiaryForm) -> Option<DiaryNote> {
    let note = required(&form.note)?;
    let date = dates::normalize(required(&form.date)?)?;

    Some(DiaryNote {
        note: note.to_string(),
        date,
    })
}

fn required(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|value| !value.is_empty())
}

/// Wires a form submission through the store, the gateway and the renderer.
pub struct Intake<'a, S: StoragePort, R: RenderTarget> {
    journal: &'a mut Journal,
    gateway: &'a PersistenceGateway<S>,
    target: &'a mut R,
    today: String,
}

impl<'a, S: StoragePort, R: RenderTarget> Intake<'a, S, R> {
    /// `today` is the `YYYY-MM-DD` date used when resetting date fields.
    pub fn new(
        journal: &'a mut Journal,
        gateway: &'a PersistenceGateway<S>,
        target: &'a mut R,
        today: impl Into<String>,
    ) -> Self {
        Self {
            journal,
            gateway,
            target,
            today: today.into(),
        }
    }

    /// Submits an exercise form. Returns whether a record was added.
    pub fn add_exercise<F>(&mut self, form: &mut F) -> AppResult<bool>
    where
        F: FormAdapter<Values = ExerciseForm>,
    {
        let Some(exercise) = validate_exercise(&form.values()) else {
            debug!("Exercise submission rejected");
            return Ok(false);
        };
        let mut updated = self.journal.clone();
        updated.add_exercise(exercise);
        self.commit(updated, form)
    }

    /// Submits a practice form. Returns whether a record was added.
    pub fn add_practice<F>(&mut self, form: &mut F) -> AppResult<bool>
    where
        F: FormAdapter<Values = PracticeForm>,
    {
        let Some(practice) = validate_practice(&form.values()) else {
            debug!("Practice submission rejected");
            return Ok(false);
        };
        let mut updated = self.journal.clone();
        updated.add_practice(practice);
        self.commit(updated, form)
    }

    /// Submits a diary form. Returns whether a record was added.
    pub fn add_diary<F>(&mut self, form: &mut F) -> AppResult<bool>
    where
        F: FormAdapter<Values = DiaryForm>,
    {
        let Some(note) = validate_diary(&form.values()) else {
            debug!("Diary submission rejected");
            return Ok(false);
        };
        let mut updated = self.journal.clone();
        updated.add_diary(note);
        self.commit(updated, form)
    }

    /// Saves `updated` and only then swaps it in, so a failed save leaves the
    /// journal and the form as they were.
    fn commit<F: FormAdapter>(&mut self, updated: Journal, form: &mut F) -> AppResult<bool> {
        self.gateway.save(&updated)?;
        *self.journal = updated;
        update_display(self.journal, self.target)?;
        form.reset_values(&self.today);
        debug!("Record added; journal holds {} records", self.journal.len());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STORAGE_KEY;
    use crate::errors::{AppError, StorageError};
    use crate::journal_io::MemoryStorage;
    use crate::ops::render::BufferTarget;
    use std::path::PathBuf;

    const TODAY: &str = "2024-06-01";

    fn exercise_form(name: &str, date: &str, count: &str) -> ExerciseForm {
        ExerciseForm {
            name: name.to_string(),
            date: date.to_string(),
            count: count.to_string(),
        }
    }

    #[test]
    fn test_valid_exercise_is_appended_saved_and_rendered() {
        let mut journal = Journal::default();
        let gateway = PersistenceGateway::new(MemoryStorage::new());
        let mut target = BufferTarget::default();
        let mut form = exercise_form("  Squats ", "2024-01-02", "10");

        let added = Intake::new(&mut journal, &gateway, &mut target, TODAY)
            .add_exercise(&mut form)
            .unwrap();

        assert!(added);
        assert_eq!(
            journal.exercises(),
            &[Exercise {
                name: "Squats".to_string(),
                date: "2024-01-02".to_string(),
                count: 10,
            }]
        );
        assert_eq!(gateway.load(), journal);
        assert_eq!(target.mounts, 1);
        assert_eq!(form, ExerciseForm::blank(TODAY));
    }

    #[test]
    fn test_invalid_exercises_are_no_ops() {
        let cases = [
            exercise_form("", "2024-01-02", "10"),
            exercise_form("   ", "2024-01-02", "10"),
            exercise_form("Squats", "", "10"),
            exercise_form("Squats", "2024-01-02", "0"),
            exercise_form("Squats", "2024-01-02", "-4"),
            exercise_form("Squats", "2024-01-02", "ten"),
            exercise_form("Squats", "2024-01-02", "10abc"),
            exercise_form("Squats", "2024-01-02", "10.5"),
            exercise_form("Squats", "2024-13-40", "10"),
        ];

        for case in cases {
            let mut journal = Journal::default();
            let gateway = PersistenceGateway::new(MemoryStorage::new());
            let mut target = BufferTarget::default();
            let mut form = case.clone();

            let added = Intake::new(&mut journal, &gateway, &mut target, TODAY)
                .add_exercise(&mut form)
                .unwrap();

            assert!(!added, "expected rejection for {:?}", case);
            assert!(journal.is_empty());
            assert!(gateway.storage().raw(STORAGE_KEY).is_none());
            assert_eq!(target.mounts, 0);
            assert_eq!(form, case, "rejected form must keep its values");
        }
    }

    #[test]
    fn test_compact_dates_are_normalized() {
        let exercise = validate_exercise(&exercise_form("Plank", "20240102", "3")).unwrap();
        assert_eq!(exercise.date, "2024-01-02");
    }

    #[test]
    fn test_practice_validation() {
        let form = |practice_type: &str, note: &str| PracticeForm {
            practice_type: practice_type.to_string(),
            note: note.to_string(),
            date: "2024-01-03".to_string(),
        };

        let practice = validate_practice(&form("Stalking", " morning walk ")).unwrap();
        assert_eq!(practice.practice_type, "Stalking");
        assert_eq!(practice.note, "morning walk");

        assert_eq!(
            validate_practice(&form("", "walk")).unwrap().practice_type,
            "Stalking"
        );
        assert_eq!(
            validate_practice(&form(" Dreaming ", "walk")).unwrap().practice_type,
            "Dreaming"
        );
        assert!(validate_practice(&form("Juggling", "walk")).is_none());
        assert!(validate_practice(&form("Stalking", "  ")).is_none());
    }

    #[test]
    fn test_diary_submission_resets_form() {
        let mut journal = Journal::default();
        let gateway = PersistenceGateway::new(MemoryStorage::new());
        let mut target = BufferTarget::default();
        let mut form = DiaryForm {
            note: "rain all day".to_string(),
            date: "2024-01-04".to_string(),
        };

        let mut intake = Intake::new(&mut journal, &gateway, &mut target, TODAY);
        assert!(intake.add_diary(&mut form).unwrap());
        // The reset form is blank, so submitting it again is rejected
        assert!(!intake.add_diary(&mut form).unwrap());

        assert_eq!(journal.diaries().len(), 1);
        assert_eq!(form.date, TODAY);
        assert!(form.note.is_empty());
    }

    struct FailingStorage;

    impl StoragePort for FailingStorage {
        fn read(&self, _key: &str) -> std::io::Result<Option<String>> {
            Ok(None)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Busy {
                path: PathBuf::from(key),
            })
        }
    }

    #[test]
    fn test_failed_save_leaves_journal_and_form_unchanged() {
        let mut journal = Journal::default();
        journal.add_exercise(Exercise {
            name: "Squats".to_string(),
            date: "2024-01-02".to_string(),
            count: 10,
        });
        let before = journal.clone();
        let gateway = PersistenceGateway::new(FailingStorage);
        let mut target = BufferTarget::default();
        let mut form = DiaryForm {
            note: "rain all day".to_string(),
            date: "2024-01-04".to_string(),
        };
        let submitted = form.clone();

        let result = Intake::new(&mut journal, &gateway, &mut target, TODAY).add_diary(&mut form);

        assert!(matches!(
            result,
            Err(AppError::Storage(StorageError::Busy { .. }))
        ));
        assert_eq!(journal, before);
        assert!(journal.diaries().is_empty());
        assert_eq!(target.mounts, 0);
        assert_eq!(form, submitted);
    }

    #[test]
    fn test_rejection_leaves_other_collections_untouched() {
        let mut journal = Journal::default();
        journal.add_diary(DiaryNote {
            note: "kept".to_string(),
            date: "2024-01-01".to_string(),
        });
        let before = journal.clone();
        let gateway = PersistenceGateway::new(MemoryStorage::new());
        let mut target = BufferTarget::default();
        let mut form = PracticeForm::blank(TODAY);

        let added = Intake::new(&mut journal, &gateway, &mut target, TODAY)
            .add_practice(&mut form)
            .unwrap();

        assert!(!added);
        assert_eq!(journal, before);
    }
}
