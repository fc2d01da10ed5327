//! Deck entries, normalization, and aggregation.
//!
//! ## Key Types
//!
//! - `Entry`: a card record with a clamped positive quantity
//! - `normalize_zone`: raw zone value → flat entry list
//! - `aggregate`: merge duplicate identities, first-seen order

pub mod aggregate;
pub mod entry;
pub mod normalize;

pub use aggregate::aggregate;
pub use entry::{clamp_quantity, Entry, QUANTITY_KEYS};
pub use normalize::{normalize_zone, NESTED_CARD_KEYS};
