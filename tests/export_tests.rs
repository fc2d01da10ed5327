//! End-to-end export scenarios.
//!
//! These drive the full pipeline through the facade with stub
//! collaborators: explicit zones, heuristic classification, duplicate
//! merging, and both fatal failure paths.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};

use lackey_export::{
    export_document, DeckSource, ExportError, FailureReport, FileDelivery, LackeyExporter,
    Severity,
};

struct StubSource(Option<Value>);

impl DeckSource for StubSource {
    fn current_deck(&self) -> Option<Value> {
        self.0.clone()
    }
}

#[derive(Clone, Default)]
struct Delivered(Rc<RefCell<Vec<(String, String, String)>>>);

impl FileDelivery for Delivered {
    fn deliver(&self, filename: &str, contents: &str, mime: &str) {
        self.0.borrow_mut().push((
            filename.to_string(),
            contents.to_string(),
            mime.to_string(),
        ));
    }
}

#[derive(Clone, Default)]
struct Reported(Rc<RefCell<Vec<(String, Severity)>>>);

impl FailureReport for Reported {
    fn report(&self, _title: &str, message: &str, severity: Severity, _detail: Option<&Value>) {
        self.0.borrow_mut().push((message.to_string(), severity));
    }
}

fn exporter(deck: Option<Value>) -> (LackeyExporter, Delivered, Reported) {
    let delivered = Delivered::default();
    let reported = Reported::default();
    let facade = LackeyExporter::new(
        Box::new(StubSource(deck)),
        Box::new(delivered.clone()),
        Box::new(reported.clone()),
    );
    (facade, delivered, reported)
}

/// Explicit zones pass through; empty zones render the placeholder.
#[test]
fn test_explicit_zones_scenario() {
    let deck = json!({
        "Starting": [{"name": "Moxley", "type": "Wrestler"}],
        "Deck": []
    });
    let doc = export_document(&deck).unwrap();

    let starting = section(&doc, "Starting");
    assert!(starting.contains("<card><name id=\"Moxley.jpg\">Moxley</name><set>AEW</set></card>"));
    assert_eq!(starting.matches("<card>").count(), 1);

    let core = section(&doc, "Deck");
    assert!(core.contains("<!-- no cards -->"));
    assert!(!core.contains("<card>"));
}

/// The flat-pool heuristic routes by token, persona/kit, then cost.
#[test]
fn test_heuristic_split_scenario() {
    let deck = json!([
        {"name": "Chair", "cost": 0},
        {"name": "Ladder", "cost": 3},
        {"name": "Moxley", "type": "Wrestler"},
        {"name": "Token: Pin", "isToken": true}
    ]);
    let doc = export_document(&deck).unwrap();

    assert!(section(&doc, "Deck").contains(">Chair<"));
    assert!(section(&doc, "Purchase Deck").contains(">Ladder<"));
    assert!(section(&doc, "Starting").contains(">Moxley<"));
    assert!(section(&doc, "Tokens").contains(">Token: Pin<"));
}

/// Three identical quantity-less objects merge into one entry of
/// quantity 3, which renders three identical card lines.
#[test]
fn test_duplicates_without_quantity() {
    let deck = json!([
        {"name": "Suplex", "set": "AEW"},
        {"name": "Suplex", "set": "AEW"},
        {"name": "Suplex", "set": "AEW"}
    ]);
    let doc = export_document(&deck).unwrap();
    let line = "\t\t<card><name id=\"Suplex.jpg\">Suplex</name><set>AEW</set></card>\n";
    assert_eq!(doc.matches(line).count(), 3);
}

/// Special characters escape exactly as specified.
#[test]
fn test_escaping_scenario() {
    let deck = json!({
        "name": "Quotes & Angles",
        "cards": [{"name": "A & B \"Test\" <x>"}]
    });
    let doc = export_document(&deck).unwrap();
    assert!(doc.contains("A &amp; B &quot;Test&quot; &lt;x&gt;"));
    assert!(doc.contains("<name>Quotes &amp; Angles</name>"));
}

/// Mixed entry shapes aggregate across their differences.
#[test]
fn test_mixed_shapes_aggregate() {
    let deck = json!([
        {"name": "Suplex"},
        {"card": {"title": "Suplex"}, "qty": 2}
    ]);
    let doc = export_document(&deck).unwrap();
    let line = "\t\t<card><name id=\"Suplex.jpg\">Suplex</name><set>AEW</set></card>\n";
    assert_eq!(doc.matches(line).count(), 3);
}

/// Successful export delivers one file with the sanitized name.
#[test]
fn test_facade_delivers_file() {
    let deck = json!({
        "name": "Mox: The / Deck",
        "cards": [{"name": "Chair"}]
    });
    let (facade, delivered, reported) = exporter(Some(deck));
    facade.export().unwrap();

    let files = delivered.0.borrow();
    assert_eq!(files.len(), 1);
    let (filename, contents, mime) = &files[0];
    assert_eq!(filename, "Mox_ The _ Deck.dek");
    assert_eq!(mime, "text/xml");
    assert!(contents.ends_with("</deck>\n"));
    assert!(reported.0.borrow().is_empty());
}

/// No deck: the export aborts before classification, is reported, and
/// nothing is delivered.
#[test]
fn test_no_deck_reported() {
    let (facade, delivered, reported) = exporter(None);
    let err = facade.export().unwrap_err();
    assert!(matches!(err, ExportError::DeckNotFound));
    assert!(delivered.0.borrow().is_empty());

    let reports = reported.0.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].1, Severity::Error);
}

/// A card with no resolvable name anywhere aborts the export; no
/// partial document is delivered.
#[test]
fn test_malformed_card_reported() {
    let deck = json!([
        {"name": "Chair"},
        {"card": {"cost": 3}}
    ]);
    let (facade, delivered, reported) = exporter(Some(deck));
    let err = facade.export().unwrap_err();
    assert!(matches!(err, ExportError::MalformedCard { .. }));
    assert!(delivered.0.borrow().is_empty());

    let reports = reported.0.borrow();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].0.contains("data problem"));
    assert_eq!(reports[0].1, Severity::Error);
}

/// Rapid repeated exports are independent and produce identical
/// documents from the same snapshot.
#[test]
fn test_repeated_exports_independent() {
    let deck = json!({"cards": [{"name": "Chair"}, {"name": "Ladder", "cost": 2}]});
    let (facade, delivered, _) = exporter(Some(deck));
    facade.export().unwrap();
    facade.export().unwrap();

    let files = delivered.0.borrow();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0], files[1]);
}

/// Slice one superzone section out of a rendered document.
fn section<'a>(doc: &'a str, zone: &str) -> &'a str {
    let open = format!("<superzone name=\"{zone}\">");
    let start = doc.find(&open).expect("superzone present");
    let rest = &doc[start..];
    let end = rest.find("</superzone>").expect("superzone closed");
    &rest[..end]
}
