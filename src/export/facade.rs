//! Export orchestration.
//!
//! The facade owns no classification logic. It obtains the deck from an
//! injected source, runs the pipeline, and hands the document to an
//! injected delivery collaborator. Failures are surfaced through an
//! injected reporter; the two fatal conditions never produce a partial
//! file.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::cards::record::{coerce_text, first_of};
use crate::error::ExportError;
use crate::export::document::{render_document, DEFAULT_DECK_NAME};
use crate::zones::classify_deck;

/// MIME type handed to the delivery collaborator.
pub const EXPORT_MIME: &str = "text/xml";

/// File extension for exported decks.
pub const FILE_EXTENSION: &str = ".dek";

/// Candidate keys for the deck's display name.
pub const DECK_NAME_KEYS: &[&str] =
    &["name", "Name", "deckName", "DeckName", "title", "Title"];

const UNSAFE_FILENAME_CHARS: &[char] =
    &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Failure severity passed to the reporter.
///
/// The reporting channel is shared with the host application, which
/// also surfaces non-fatal notices through it. The export core itself
/// only ever reports `Error`: its two failure modes both abort the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Degraded but continuing.
    Warning,
    /// The export did not produce a file.
    Error,
}

/// Provides the current deck value, or nothing when no deck is loaded.
pub trait DeckSource {
    /// The deck as last seen by the host application.
    fn current_deck(&self) -> Option<Value>;
}

/// Accepts a finished document for delivery to the user.
pub trait FileDelivery {
    /// Deliver `contents` under `filename` with the given MIME type.
    fn deliver(&self, filename: &str, contents: &str, mime: &str);
}

/// Surfaces failures to the user.
pub trait FailureReport {
    /// Report a failure with optional structured detail.
    fn report(&self, title: &str, message: &str, severity: Severity, detail: Option<&Value>);
}

/// The export facade: locate → classify → serialize → deliver.
pub struct LackeyExporter {
    source: Box<dyn DeckSource>,
    delivery: Box<dyn FileDelivery>,
    reporter: Box<dyn FailureReport>,
}

impl LackeyExporter {
    /// Create a facade around the three collaborator capabilities.
    #[must_use]
    pub fn new(
        source: Box<dyn DeckSource>,
        delivery: Box<dyn FileDelivery>,
        reporter: Box<dyn FailureReport>,
    ) -> Self {
        Self {
            source,
            delivery,
            reporter,
        }
    }

    /// Run one export.
    ///
    /// Each invocation reads a fresh deck snapshot, produces an
    /// independent document, and delivers it. On failure the reporter is
    /// invoked and nothing is delivered.
    ///
    /// # Errors
    ///
    /// `ExportError::DeckNotFound` when the source has no deck;
    /// `ExportError::MalformedCard` when a card cannot yield a name.
    pub fn export(&self) -> Result<(), ExportError> {
        let Some(deck) = self.source.current_deck() else {
            let err = ExportError::DeckNotFound;
            self.reporter
                .report("Export failed", &err.to_string(), Severity::Error, None);
            return Err(err);
        };

        match export_document(&deck) {
            Ok(document) => {
                let name = deck_display_name(&deck);
                let filename = format!("{}{}", sanitize_filename(&name), FILE_EXTENSION);
                debug!(%filename, bytes = document.len(), "delivering deck export");
                self.delivery.deliver(&filename, &document, EXPORT_MIME);
                Ok(())
            }
            Err(err) => {
                let detail = error_detail(&err);
                self.reporter.report(
                    "Export failed",
                    &err.to_string(),
                    Severity::Error,
                    detail.as_ref(),
                );
                Err(err)
            }
        }
    }
}

/// Run the pipeline on a deck value without any collaborators.
///
/// # Errors
///
/// `ExportError::MalformedCard` when a card cannot yield a display name.
pub fn export_document(deck: &Value) -> Result<String, ExportError> {
    let zones = classify_deck(deck)?;
    Ok(render_document(&zones, &deck_display_name(deck)))
}

/// The deck's own display name, empty when it carries none.
#[must_use]
pub fn deck_display_name(deck: &Value) -> String {
    first_of(deck, DECK_NAME_KEYS)
        .and_then(coerce_text)
        .unwrap_or_default()
        .to_string()
}

/// Replace path-unsafe characters with underscores.
///
/// A name that is blank after replacement falls back to the default
/// deck name.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if UNSAFE_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect();
    if cleaned.trim().is_empty() {
        DEFAULT_DECK_NAME.to_string()
    } else {
        cleaned
    }
}

fn error_detail(err: &ExportError) -> Option<Value> {
    match err {
        ExportError::MalformedCard { context } => {
            serde_json::from_str(context).ok()
        }
        ExportError::DeckNotFound => None,
    }
}
