//! Deck entries: a card record plus a clamped quantity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cards::record::{coerce_number, first_of};
use crate::cards::CardRecord;

/// Candidate keys for an entry's quantity.
pub const QUANTITY_KEYS: &[&str] = &["quantity", "qty", "count", "Count"];

/// One line of a deck: a card and how many copies of it.
///
/// The quantity is always a positive integer; raw quantities are clamped
/// on construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The card, first occurrence wins after aggregation.
    pub record: CardRecord,
    /// Copy count, always >= 1.
    pub quantity: u32,
}

impl Entry {
    /// Create an entry from an already-clamped quantity.
    #[must_use]
    pub fn new(record: CardRecord, quantity: u32) -> Self {
        Self {
            record,
            quantity: quantity.max(1),
        }
    }

    /// Create an entry, reading the quantity from a raw element's
    /// quantity candidates.
    #[must_use]
    pub fn from_element(record: CardRecord, element: &Value) -> Self {
        Self::new(record, quantity_of(element))
    }
}

/// Read and clamp the quantity carried by a raw element.
///
/// Missing, non-numeric, non-finite, zero, or negative values become 1.
/// Fractional values truncate toward zero, floored at 1.
#[must_use]
pub fn quantity_of(element: &Value) -> u32 {
    clamp_quantity(first_of(element, QUANTITY_KEYS).and_then(coerce_number))
}

/// Clamp a raw numeric quantity to a positive integer.
#[must_use]
pub fn clamp_quantity(raw: Option<f64>) -> u32 {
    match raw {
        Some(n) if n.is_finite() && n > 0.0 => (n.trunc() as u32).max(1),
        _ => 1,
    }
}
