//! Document serialization and the export facade.
//!
//! ## Key Types
//!
//! - `render_document` / `escape_text`: the bit-exact wire document
//! - `LackeyExporter`: orchestration over injected collaborators
//! - `DeckSource`, `FileDelivery`, `FailureReport`: collaborator seams

pub mod document;
pub mod facade;

pub use document::{escape_text, render_document, DEFAULT_DECK_NAME, DOCUMENT_VERSION, GAME_LABEL};
pub use facade::{
    deck_display_name, export_document, sanitize_filename, DeckSource, FailureReport,
    FileDelivery, LackeyExporter, Severity, EXPORT_MIME, FILE_EXTENSION,
};
