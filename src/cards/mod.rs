//! Card records and the field adapter.
//!
//! ## Key Types
//!
//! - `CardRecord`: a loosely-typed card value with candidate-key access
//! - `fields`: canonical attribute resolution and category predicates

pub mod fields;
pub mod record;

pub use fields::{derive_image_id, DEFAULT_SET, NAME_KEYS, UNKNOWN_IMAGE, UNKNOWN_NAME};
pub use record::{coerce_number, coerce_text, first_of, CardRecord};
