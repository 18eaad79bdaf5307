//! Constants used throughout the application.
//!
//! This module contains all constants used in the Diarium application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "diarium";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A journal for exercises, practices and diary notes";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "diarium";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable for the data directory holding the storage slot.
pub const ENV_VAR_DIARIUM_DIR: &str = "DIARIUM_DIR";
/// Environment variable for the directory exported documents are written to.
pub const ENV_VAR_DIARIUM_EXPORT_DIR: &str = "DIARIUM_EXPORT_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default data sub-directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/diarium";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// Key of the single durable slot holding all collections.
pub const STORAGE_KEY: &str = "diaryPracticeData";
/// File extension of a stored slot.
pub const STORAGE_FILE_EXTENSION: &str = "json";
/// File extension of the advisory lock guarding a slot.
pub const STORAGE_LOCK_EXTENSION: &str = "lock";
/// POSIX permissions for the data directory (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Dates
/// Storage date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Compact date format accepted at intake (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Separator between segments of a displayed date (DD.MM.YYYY).
pub const DISPLAY_DATE_SEPARATOR: &str = ".";

// Records
/// Fixed set of practice labels accepted at intake.
pub const PRACTICE_TYPES: &[&str] = &[
    "Stalking",
    "Recapitulation",
    "Dreaming",
    "Tensegrity",
    "Not-doing",
];
/// Practice label pre-selected in a fresh form.
pub const DEFAULT_PRACTICE_TYPE: &str = "Stalking";
/// Count pre-filled in a fresh exercise form.
pub const DEFAULT_EXERCISE_COUNT: &str = "1";

// Rendering
/// Separator between fields of a rendered record line.
pub const LINE_SEPARATOR: &str = " • ";
/// Heading of the exercises section.
pub const HEADING_EXERCISES: &str = "Exercises";
/// Heading of the practices section.
pub const HEADING_PRACTICES: &str = "Practices";
/// Heading of the diary section.
pub const HEADING_DIARY: &str = "Diary";

// Export
/// Title block at the top of every exported document.
pub const EXPORT_TITLE: &str = "Diarium Magi";
/// Base name of exported artifacts.
pub const EXPORT_FILE_STEM: &str = "DiaryPractice";
/// Font size of the title block.
pub const EXPORT_TITLE_FONT_SIZE: f32 = 18.0;
/// Font size of section headings.
pub const EXPORT_HEADING_FONT_SIZE: f32 = 14.0;
/// Font size used when a block does not set one.
pub const EXPORT_DEFAULT_FONT_SIZE: f32 = 12.0;
