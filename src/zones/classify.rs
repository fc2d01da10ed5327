//! Zone classification.
//!
//! Two paths, checked in order:
//!
//! 1. **Explicit zones.** The deck object names its zones under
//!    recognized synonyms. Each named zone is normalized and aggregated
//!    independently, and the set is returned as-is when any zone is
//!    non-empty. Explicit zones always win over the heuristic.
//! 2. **Flat pool.** The deck is one unzoned pool (under a list
//!    attribute, or the deck value is itself an array). Each aggregated
//!    entry is routed by a fixed precedence: token status first, then
//!    persona/kit status, then cost. Token and persona/kit checks come
//!    before cost so a free persona never lands in the core deck.

use serde_json::Value;

use crate::cards::record::first_of;
use crate::cards::CardRecord;
use crate::deck::{aggregate, normalize_zone};
use crate::error::ExportError;
use crate::zones::{Zone, ZoneSet};

/// Zone-name synonyms for explicit deck shapes.
pub const DECK_ZONE_KEYS: &[&str] =
    &["deck", "Deck", "main", "Main", "mainDeck", "MainDeck"];
/// Synonyms for the purchase deck.
pub const PURCHASE_ZONE_KEYS: &[&str] =
    &["purchase", "Purchase", "purchaseDeck", "PurchaseDeck", "purchase_deck"];
/// Synonyms for the starting zone.
pub const STARTING_ZONE_KEYS: &[&str] =
    &["starting", "Starting", "start", "Start", "setup", "Setup"];
/// Synonyms for the tokens zone.
pub const TOKENS_ZONE_KEYS: &[&str] = &["tokens", "Tokens", "token", "Token"];

/// Attributes that may hold a flat card pool.
pub const POOL_KEYS: &[&str] =
    &["cards", "Cards", "cardList", "list", "List", "pool", "Pool", "entries"];

/// Partition a deck value into the four named zones.
///
/// # Errors
///
/// `ExportError::MalformedCard` if any entry in play lacks a resolvable
/// display name.
pub fn classify_deck(deck: &Value) -> Result<ZoneSet, ExportError> {
    if let Some(zones) = explicit_zones(deck)? {
        return Ok(zones);
    }
    classify_pool(deck)
}

/// Build the zones named explicitly by the deck, if any hold cards.
///
/// A deck that names zones but fills none of them falls through to pool
/// classification.
fn explicit_zones(deck: &Value) -> Result<Option<ZoneSet>, ExportError> {
    let zone_keys = [
        (Zone::Deck, DECK_ZONE_KEYS),
        (Zone::PurchaseDeck, PURCHASE_ZONE_KEYS),
        (Zone::Starting, STARTING_ZONE_KEYS),
        (Zone::Tokens, TOKENS_ZONE_KEYS),
    ];

    if !zone_keys.iter().any(|(_, keys)| first_of(deck, keys).is_some()) {
        return Ok(None);
    }

    let mut zones = ZoneSet::default();
    for (zone, keys) in zone_keys {
        if let Some(raw) = first_of(deck, keys) {
            *zones.zone_mut(zone) = aggregate(normalize_zone(raw))?;
        }
    }

    if zones.is_empty() {
        Ok(None)
    } else {
        Ok(Some(zones))
    }
}

/// Classify a flat pool entry by entry.
fn classify_pool(deck: &Value) -> Result<ZoneSet, ExportError> {
    let pool = if deck.is_array() {
        Some(deck)
    } else {
        first_of(deck, POOL_KEYS)
    };

    let entries = match pool {
        Some(raw) => aggregate(normalize_zone(raw))?,
        None => Vec::new(),
    };

    let mut zones = ZoneSet::default();
    for entry in entries {
        let zone = route(&entry.record);
        zones.zone_mut(zone).push(entry);
    }
    Ok(zones)
}

/// The zone a single card belongs to, by fixed precedence.
#[must_use]
pub fn route(record: &CardRecord) -> Zone {
    if record.is_token() {
        Zone::Tokens
    } else if record.is_persona() || record.is_kit() {
        Zone::Starting
    } else if record.cost() <= 0.0 {
        Zone::Deck
    } else {
        Zone::PurchaseDeck
    }
}
