//! Loosely-typed card records.
//!
//! Deck data arrives as untyped JSON-shaped values with no fixed schema:
//! the same semantic attribute may live under several alternative keys
//! (`name` vs `title`, `qty` vs `count`, ...). `CardRecord` wraps one such
//! value; everything reads it through ordered candidate-key scans with an
//! explicit coercion, never by probing fields ad hoc.
//!
//! The scan primitives here are total: absent, null, or wrongly-typed
//! values fall through to the next candidate, then to the caller's
//! default.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single card as supplied by the deck builder.
///
/// No schema is assumed. Canonical attributes (name, set, image, cost,
/// category markers) are resolved by the adapter methods in
/// [`crate::cards::fields`]; raw access is deliberately limited to the
/// candidate-scan helpers below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRecord(Value);

impl CardRecord {
    /// Wrap a raw value as a card record.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The underlying raw value.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// First present, non-null value among `keys`, in order.
    #[must_use]
    pub fn first_of(&self, keys: &[&str]) -> Option<&Value> {
        first_of(&self.0, keys)
    }

    /// First candidate that coerces to a string.
    #[must_use]
    pub fn text_of(&self, keys: &[&str]) -> Option<&str> {
        self.first_of(keys).and_then(coerce_text)
    }

    /// First candidate that coerces to a finite number.
    ///
    /// Accepts JSON numbers and numeric strings; anything else falls
    /// through.
    #[must_use]
    pub fn number_of(&self, keys: &[&str]) -> Option<f64> {
        self.first_of(keys).and_then(coerce_number)
    }

    /// True iff some candidate key holds a literal JSON `true`.
    #[must_use]
    pub fn flag_of(&self, keys: &[&str]) -> bool {
        self.first_of(keys).and_then(Value::as_bool).unwrap_or(false)
    }

    /// First candidate rendered as free text: a string passes through,
    /// an array of strings is joined with spaces. Used for tag lists.
    #[must_use]
    pub fn text_or_list_of(&self, keys: &[&str]) -> Option<String> {
        let value = self.first_of(keys)?;
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<&str> =
                    items.iter().filter_map(Value::as_str).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(" "))
                }
            }
            _ => None,
        }
    }
}

/// First present, non-null value among `keys` in an object value.
///
/// Non-object values have no keys, so this yields `None` for them.
#[must_use]
pub fn first_of<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let obj = value.as_object()?;
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| !v.is_null())
}

/// Coerce a value to a string slice. Only actual strings qualify.
#[must_use]
pub fn coerce_text(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Coerce a value to a finite number.
///
/// JSON numbers pass through; strings are parsed (matching the loose
/// numeric coercion deck builders apply). Non-finite results are
/// rejected so they hit the caller's default instead.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
