//! Entry normalization: raw zone values into flat entry lists.
//!
//! A raw zone is expected to be list-like, but its elements come in any
//! mix of shapes: bare card objects, `{card, quantity}` wrappers, or
//! junk. Normalization flattens whatever it recognizes and drops the
//! rest; it never fails.

use serde_json::Value;
use tracing::trace;

use crate::cards::record::first_of;
use crate::cards::{CardRecord, NAME_KEYS};
use crate::deck::entry::Entry;

/// Candidate keys for a nested card object inside a wrapper element.
pub const NESTED_CARD_KEYS: &[&str] = &["card", "Card"];

/// Flatten a raw zone value into ordered entries.
///
/// Per element:
/// 1. a nested card under `card`/`Card` is extracted, with the wrapper's
///    quantity;
/// 2. otherwise, an element bearing a display-name candidate is itself
///    the card, with its own quantity;
/// 3. otherwise the element is an unrecognized shape and is dropped.
///
/// Non-array input normalizes to an empty list. Input order is
/// preserved; duplicates are kept (aggregation merges them later).
#[must_use]
pub fn normalize_zone(raw: &Value) -> Vec<Entry> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        if let Some(card) = first_of(item, NESTED_CARD_KEYS) {
            entries.push(Entry::from_element(CardRecord::new(card.clone()), item));
        } else if first_of(item, NAME_KEYS).is_some() {
            entries.push(Entry::from_element(CardRecord::new(item.clone()), item));
        } else {
            trace!(element = %item, "dropping unrecognized deck element");
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_list_is_empty() {
        assert!(normalize_zone(&json!(null)).is_empty());
        assert!(normalize_zone(&json!({"name": "X"})).is_empty());
        assert!(normalize_zone(&json!(42)).is_empty());
    }

    #[test]
    fn test_nested_card_shape() {
        let entries = normalize_zone(&json!([
            {"card": {"name": "Suplex"}, "quantity": 2}
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record.display_name(), Some("Suplex"));
        assert_eq!(entries[0].quantity, 2);
    }

    #[test]
    fn test_bare_card_shape() {
        let entries = normalize_zone(&json!([
            {"name": "Chair", "qty": 3}
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record.display_name(), Some("Chair"));
        assert_eq!(entries[0].quantity, 3);
    }

    #[test]
    fn test_mixed_shapes_preserve_order() {
        let entries = normalize_zone(&json!([
            {"name": "First"},
            {"Card": {"title": "Second"}, "count": 2},
            {"name": "Third"}
        ]));
        let names: Vec<_> = entries
            .iter()
            .map(|e| e.record.display_name().unwrap().to_string())
            .collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_unrecognized_shapes_dropped() {
        let entries = normalize_zone(&json!([
            "bare string",
            42,
            {"cost": 3},
            {"name": "Kept"}
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record.display_name(), Some("Kept"));
    }

    #[test]
    fn test_duplicates_retained() {
        let entries = normalize_zone(&json!([
            {"name": "Suplex"},
            {"name": "Suplex"}
        ]));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_nested_card_without_name_enters_pipeline() {
        // Shape is recognized (it has a card key); the missing name is a
        // data problem for the aggregator, not a discard.
        let entries = normalize_zone(&json!([{"card": {"cost": 3}}]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record.display_name(), None);
    }
}
