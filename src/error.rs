//! Export failure types.
//!
//! The pipeline has exactly two fatal conditions; everything else is
//! absorbed by the defaulting rules in `cards::fields` and
//! `deck::normalize`.

use thiserror::Error;

/// The two ways an export can fail.
///
/// - `DeckNotFound`: the deck source yielded nothing; the export aborts
///   before any classification runs.
/// - `MalformedCard`: a card entry entered the pipeline but no candidate
///   key produced a non-blank display name. This is a data problem in the
///   deck, not a defect, and aborts the whole export so no partial
///   document is delivered.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No deck value was available from the deck source.
    #[error("no deck found to export")]
    DeckNotFound,

    /// A card record could not yield a display name.
    #[error("card has no resolvable name (deck data problem): {context}")]
    MalformedCard {
        /// JSON rendering of the offending record.
        context: String,
    },
}
