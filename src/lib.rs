//! # lackey-export
//!
//! Deck normalization, zone classification, and serialization into the
//! LackeyCCG deck document format.
//!
//! ## Design Principles
//!
//! 1. **Total by default**: loosely-typed deck data is absorbed through
//!    per-attribute candidate-key lists with documented defaults; only
//!    the two fatal preconditions (no deck, unresolvable card name)
//!    produce errors.
//!
//! 2. **Explicit collaborators**: deck lookup, file delivery, and
//!    failure reporting are injected capabilities, not ambient globals.
//!
//! 3. **One-way data flow**: raw deck → entries → aggregated entries →
//!    classified zones → document. No stage feeds back, no state
//!    survives an invocation.
//!
//! ## Modules
//!
//! - `cards`: loosely-typed records and the field adapter
//! - `deck`: entries, normalization, aggregation
//! - `zones`: the four named zones and the classifier
//! - `export`: document serialization and the export facade
//! - `error`: the two fatal export failures

pub mod cards;
pub mod deck;
pub mod error;
pub mod export;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{CardRecord, DEFAULT_SET, UNKNOWN_IMAGE, UNKNOWN_NAME};

pub use crate::deck::{aggregate, clamp_quantity, normalize_zone, Entry};

pub use crate::error::ExportError;

pub use crate::export::{
    escape_text, export_document, render_document, sanitize_filename, DeckSource,
    FailureReport, FileDelivery, LackeyExporter, Severity, DEFAULT_DECK_NAME,
    DOCUMENT_VERSION, EXPORT_MIME, FILE_EXTENSION, GAME_LABEL,
};

pub use crate::zones::{classify_deck, Zone, ZoneSet};
