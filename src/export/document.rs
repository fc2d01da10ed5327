//! The canonical wire document.
//!
//! Layout (tab-indented, trailing newline, UTF-8):
//!
//! ```text
//! <deck version="0.8">
//!     <meta>
//!         <game>aew</game>
//!         <name>My Deck</name>
//!     </meta>
//!     <superzone name="Deck">
//!         <card><name id="Suplex.jpg">Suplex</name><set>AEW</set></card>
//!     </superzone>
//!     ...
//! </deck>
//! ```
//!
//! An entry of quantity N emits N identical card lines; an empty
//! superzone emits a placeholder comment. This is the only bit-exact
//! contract in the crate.

use crate::zones::{Zone, ZoneSet};

/// Root element version attribute.
pub const DOCUMENT_VERSION: &str = "0.8";

/// Fixed game label in the metadata block.
pub const GAME_LABEL: &str = "aew";

/// Deck name used when the supplied name is blank.
pub const DEFAULT_DECK_NAME: &str = "Untitled Deck";

const EMPTY_ZONE_PLACEHOLDER: &str = "<!-- no cards -->";

/// Render the classified zones as a complete document.
///
/// A blank `deck_name` falls back to [`DEFAULT_DECK_NAME`]. Text content
/// is escaped; nothing else is transformed.
#[must_use]
pub fn render_document(zones: &ZoneSet, deck_name: &str) -> String {
    let name = if deck_name.trim().is_empty() {
        DEFAULT_DECK_NAME
    } else {
        deck_name
    };

    let mut out = String::new();
    out.push_str("<deck version=\"");
    out.push_str(DOCUMENT_VERSION);
    out.push_str("\">\n");

    out.push_str("\t<meta>\n");
    out.push_str("\t\t<game>");
    out.push_str(GAME_LABEL);
    out.push_str("</game>\n");
    out.push_str("\t\t<name>");
    out.push_str(&escape_text(name));
    out.push_str("</name>\n");
    out.push_str("\t</meta>\n");

    for zone in Zone::ALL {
        out.push_str("\t<superzone name=\"");
        out.push_str(zone.wire_name());
        out.push_str("\">\n");

        let entries = zones.zone(zone);
        if entries.is_empty() {
            out.push_str("\t\t");
            out.push_str(EMPTY_ZONE_PLACEHOLDER);
            out.push('\n');
        } else {
            for entry in entries {
                let line = card_line(
                    entry.record.display_name_or_unknown(),
                    &entry.record.image_id(),
                    entry.record.set_label(),
                );
                for _ in 0..entry.quantity {
                    out.push_str(&line);
                }
            }
        }

        out.push_str("\t</superzone>\n");
    }

    out.push_str("</deck>\n");
    out
}

fn card_line(name: &str, image: &str, set: &str) -> String {
    format!(
        "\t\t<card><name id=\"{}\">{}</name><set>{}</set></card>\n",
        escape_text(image),
        escape_text(name),
        escape_text(set),
    )
}

/// Escape text content for the wire document.
///
/// One left-to-right scan; per character the first matching rule wins:
/// `&`→`&amp;`, `<`→`&lt;`, `>`→`&gt;`, `"`→`&quot;`, `'`→`&apos;`.
/// No whitespace normalization or other transformation.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
