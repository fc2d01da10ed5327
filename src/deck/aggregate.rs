//! Duplicate-entry aggregation.
//!
//! Two entries denote the same physical card when their (display name,
//! set label, image id) triples match. Aggregation merges such entries
//! by summing quantities, keeps the first occurrence's record, and
//! preserves first-seen order. It is idempotent.
//!
//! This is also where the malformed-card precondition is enforced: every
//! pipeline path funnels through here, and a record that cannot yield a
//! display name aborts the export.

use rustc_hash::FxHashMap;

use crate::deck::entry::Entry;
use crate::error::ExportError;

/// Separator for identity-key components. A control character cannot
/// occur in legitimate card fields, so keys never collide.
const KEY_SEP: char = '\u{1F}';

/// Merge entries that share an identity key.
///
/// Quantities sum (saturating); the merged entry keeps the record of the
/// first occurrence; output order is the first-occurrence order of each
/// distinct key.
///
/// # Errors
///
/// `ExportError::MalformedCard` if any record has no resolvable display
/// name.
pub fn aggregate(entries: Vec<Entry>) -> Result<Vec<Entry>, ExportError> {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut merged: Vec<Entry> = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = identity_key(&entry)?;
        match index.get(&key) {
            Some(&slot) => {
                let existing = &mut merged[slot];
                existing.quantity = existing.quantity.saturating_add(entry.quantity);
            }
            None => {
                index.insert(key, merged.len());
                merged.push(entry);
            }
        }
    }
    Ok(merged)
}

fn identity_key(entry: &Entry) -> Result<String, ExportError> {
    let record = &entry.record;
    let name = record.display_name().ok_or_else(|| ExportError::MalformedCard {
        context: record.raw().to_string(),
    })?;
    Ok(format!(
        "{name}{KEY_SEP}{set}{KEY_SEP}{image}",
        set = record.set_label(),
        image = record.image_id()
    ))
}
