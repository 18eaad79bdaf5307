//! User-facing operations on the journal.
//!
//! `intake` validates form submissions and drives the store, persistence and
//! display; `render` projects the journal into sections for display; `export`
//! flattens it into a document for a backend.

pub mod export;
pub mod intake;
pub mod render;

pub use export::{compose_document, export_document};
pub use intake::Intake;
pub use render::{render_sections, update_display, RenderTarget, Section, TerminalTarget};
