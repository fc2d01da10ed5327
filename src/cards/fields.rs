//! Field adapter: canonical attributes out of loosely-typed records.
//!
//! Each attribute has a fixed, ordered candidate-key list (case variants
//! and synonyms), a coercion, and a default. Resolution takes the first
//! present, non-null candidate; absent or invalid input always yields the
//! documented default, never an error.
//!
//! Category predicates (`is_persona`, `is_kit`, `is_token`) are evaluated
//! independently here and are not mutually exclusive; the classifier's
//! precedence order makes the final call.

use super::record::CardRecord;

/// Candidate keys for the display name, highest priority first.
pub const NAME_KEYS: &[&str] =
    &["name", "Name", "title", "Title", "cardName", "CardName"];

/// Candidate keys for the set label.
pub const SET_KEYS: &[&str] =
    &["set", "Set", "setName", "SetName", "expansion", "Expansion"];

/// Candidate keys for an explicit image identifier.
pub const IMAGE_KEYS: &[&str] =
    &["image", "Image", "img", "imageFile", "image_file", "art"];

/// Candidate keys for the purchase cost.
pub const COST_KEYS: &[&str] =
    &["cost", "Cost", "price", "Price", "purchaseCost", "PurchaseCost"];

const TYPE_KEYS: &[&str] = &["type", "Type", "cardType", "CardType"];
const SUBTYPE_KEYS: &[&str] = &["subtype", "Subtype", "subType", "SubType"];
const TAG_KEYS: &[&str] =
    &["tags", "Tags", "traits", "Traits", "keywords", "Keywords"];
const SIGNATURE_KEYS: &[&str] = &["signature", "Signature"];

const PERSONA_FLAG_KEYS: &[&str] = &["isPersona", "is_persona"];
const KIT_FLAG_KEYS: &[&str] = &["isKit", "is_kit"];
const TOKEN_FLAG_KEYS: &[&str] = &["isToken", "is_token"];

const PERSONA_KEYWORDS: &[&str] = &["wrestler", "manager", "persona"];

/// Set label used when a record carries none.
pub const DEFAULT_SET: &str = "AEW";

/// Image identifier used when neither an explicit id nor a usable name
/// is available.
pub const UNKNOWN_IMAGE: &str = "Unknown.jpg";

/// Display-name placeholder for the total accessor.
///
/// The export pipeline itself treats an unresolvable name as fatal; this
/// placeholder only backs the never-fails accessor contract.
pub const UNKNOWN_NAME: &str = "Unknown Card";

impl CardRecord {
    /// The display name, if any candidate resolves to a non-blank string.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.text_of(NAME_KEYS).filter(|s| !s.trim().is_empty())
    }

    /// The display name, falling back to [`UNKNOWN_NAME`].
    #[must_use]
    pub fn display_name_or_unknown(&self) -> &str {
        self.display_name().unwrap_or(UNKNOWN_NAME)
    }

    /// The set label, defaulting to [`DEFAULT_SET`].
    #[must_use]
    pub fn set_label(&self) -> &str {
        self.text_of(SET_KEYS).unwrap_or(DEFAULT_SET)
    }

    /// The image identifier: explicit if present, otherwise derived from
    /// the display name.
    #[must_use]
    pub fn image_id(&self) -> String {
        match self.text_of(IMAGE_KEYS) {
            Some(explicit) => explicit.to_string(),
            None => derive_image_id(self.display_name().unwrap_or("")),
        }
    }

    /// The purchase cost, defaulting to 0 for absent or non-numeric
    /// values.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.number_of(COST_KEYS).unwrap_or(0.0)
    }

    /// Playable character (wrestler or manager)?
    #[must_use]
    pub fn is_persona(&self) -> bool {
        self.flag_of(PERSONA_FLAG_KEYS) || self.category_has(PERSONA_KEYWORDS)
    }

    /// Character loadout card?
    ///
    /// A non-empty `signature` attribute counts as a kit marker. Legacy
    /// rule carried over from the deck builder; kept as-is.
    #[must_use]
    pub fn is_kit(&self) -> bool {
        self.flag_of(KIT_FLAG_KEYS)
            || self.category_has(&["kit"])
            || self
                .text_of(SIGNATURE_KEYS)
                .is_some_and(|s| !s.trim().is_empty())
    }

    /// Non-deck marker card?
    #[must_use]
    pub fn is_token(&self) -> bool {
        self.flag_of(TOKEN_FLAG_KEYS)
            || self.category_has(&["token"])
            || self
                .display_name()
                .is_some_and(|n| n.to_lowercase().starts_with("token:"))
    }

    /// Whole-word keyword match over the category text.
    ///
    /// Words are delimited by any non-alphanumeric character, so
    /// `Kitchenware` does not match `kit` and `Tokenizer` does not
    /// match `token`.
    fn category_has(&self, keywords: &[&str]) -> bool {
        let text = self.category_text();
        text.split(|c: char| !c.is_ascii_alphanumeric())
            .any(|word| keywords.contains(&word))
    }

    /// Lowercased concatenation of type, subtype, and tag text for
    /// keyword matching.
    fn category_text(&self) -> String {
        let mut text = String::new();
        for keys in [TYPE_KEYS, SUBTYPE_KEYS] {
            if let Some(part) = self.text_of(keys) {
                text.push_str(part);
                text.push(' ');
            }
        }
        if let Some(tags) = self.text_or_list_of(TAG_KEYS) {
            text.push_str(&tags);
        }
        text.to_lowercase()
    }
}

/// Derive an image identifier from a display name.
///
/// Whitespace is stripped, every non-ASCII-alphanumeric character is
/// dropped, and `.jpg` is appended. An empty result yields
/// [`UNKNOWN_IMAGE`].
#[must_use]
pub fn derive_image_id(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if stripped.is_empty() {
        UNKNOWN_IMAGE.to_string()
    } else {
        format!("{stripped}.jpg")
    }
}
