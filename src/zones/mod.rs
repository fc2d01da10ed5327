//! The four output zones and their entry lists.
//!
//! Zone names are fixed by the wire format: `Deck`, `Purchase Deck`,
//! `Starting`, `Tokens`. A card belongs to exactly one zone in the
//! output document.

pub mod classify;

pub use classify::classify_deck;

use serde::{Deserialize, Serialize};

use crate::deck::Entry;

/// One of the four named deck partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The drawable core deck.
    Deck,
    /// Cards acquirable with in-game cost.
    PurchaseDeck,
    /// Personas and kits present at game start.
    Starting,
    /// Non-deck marker cards.
    Tokens,
}

impl Zone {
    /// All zones, in document order.
    pub const ALL: [Zone; 4] =
        [Zone::Deck, Zone::PurchaseDeck, Zone::Starting, Zone::Tokens];

    /// The zone's name on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Zone::Deck => "Deck",
            Zone::PurchaseDeck => "Purchase Deck",
            Zone::Starting => "Starting",
            Zone::Tokens => "Tokens",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// The classified deck: one aggregated entry list per zone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneSet {
    /// Drawable core deck entries.
    pub deck: Vec<Entry>,
    /// Purchasable entries.
    pub purchase: Vec<Entry>,
    /// Starting (persona/kit) entries.
    pub starting: Vec<Entry>,
    /// Token entries.
    pub tokens: Vec<Entry>,
}

impl ZoneSet {
    /// Entries of one zone.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &[Entry] {
        match zone {
            Zone::Deck => &self.deck,
            Zone::PurchaseDeck => &self.purchase,
            Zone::Starting => &self.starting,
            Zone::Tokens => &self.tokens,
        }
    }

    /// Mutable entries of one zone.
    pub fn zone_mut(&mut self, zone: Zone) -> &mut Vec<Entry> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::PurchaseDeck => &mut self.purchase,
            Zone::Starting => &mut self.starting,
            Zone::Tokens => &mut self.tokens,
        }
    }

    /// True iff no zone holds any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Zone::ALL.iter().all(|z| self.zone(*z).is_empty())
    }
}
