//! Functional tests for the compiled document and its artifacts.
//!
//! These pin the behaviour the reference page relies on:
//! - compiling is deterministic, byte for byte
//! - every map keeps its transcription order through a JSON round trip
//! - suit symbols are written verbatim, never as `\u` escapes
//! - `run` writes the JSON, the preview page and the optional stylesheet

use bridge_compiler::{compile, run, save, CompilerConfig, SourceNotes};
use bridge_model::{Document, SectionContent};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn compiled_json() -> String {
    compile(SourceNotes::embedded()).to_pretty_json().unwrap()
}

#[test]
fn compiling_twice_is_byte_identical() {
    assert_eq!(compiled_json(), compiled_json());
}

#[test]
fn save_writes_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    save(&compile(SourceNotes::embedded()), &first).unwrap();
    save(&compile(SourceNotes::embedded()), &second).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn roundtrip_preserves_every_ordering() {
    let original = compile(SourceNotes::embedded());
    let back = Document::from_json(&original.to_pretty_json().unwrap()).unwrap();

    assert_eq!(back, original);

    let section_ids: Vec<_> = back.sections.keys().map(String::as_str).collect();
    assert_eq!(section_ids, ["1m-opening", "1m-intervention", "1M-op"]);

    let SectionContent::Narrative { subsections, .. } = &back.sections["1m-opening"].content else {
        panic!("club opening should be narrative");
    };
    let subsection_ids: Vec<_> = subsections.keys().map(String::as_str).collect();
    assert_eq!(subsection_ids, ["non-support-responses", "support-responses"]);

    let category_ids: Vec<_> = back.sequences["opener-rebids-1c1d"]
        .categories
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        category_ids,
        ["balanced", "single-suiter-clubs", "two-suiter", "diamond-support"]
    );
}

#[test]
fn suit_symbols_are_not_escaped() {
    let json = compiled_json();
    assert!(json.contains("♠ A432 ♥ 2 ♦ KJ987 ♣ 432"));
    assert!(json.contains("2♥ response to 1♣ opening"));
    assert!(!json.contains("\\u2660"));
    assert!(!json.contains("\\u"));
}

#[test]
fn top_level_keys_follow_document_layout() {
    let value: Value = serde_json::from_str(&compiled_json()).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    // serde_json::Map is sorted without preserve_order; compare as a set.
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(
        sorted,
        [
            "bid_colors",
            "cross_references",
            "definitions",
            "link_types",
            "metadata",
            "sections",
            "sequences"
        ]
    );

    let json = compiled_json();
    let metadata = json.find("\"metadata\"").unwrap();
    let sections = json.find("\"sections\"").unwrap();
    let colors = json.find("\"bid_colors\"").unwrap();
    assert!(metadata < sections && sections < colors);
}

#[test]
fn terminal_references_are_written_as_null() {
    let value: Value = serde_json::from_str(&compiled_json()).unwrap();
    let responses = &value["sections"]["1m-opening"]["content"]["subsections"]
        ["non-support-responses"]["responses"];
    assert_eq!(responses[4]["bid"], "1c-3n");
    assert_eq!(responses[4]["reference"], Value::Null);
    assert_eq!(responses[4]["type"], "terminal");
    assert_eq!(responses[0]["definitions"], serde_json::json!(["walsh"]));
}

#[test]
fn run_writes_all_configured_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = CompilerConfig::new()
        .with_output(dir.path().join("structured_bridge_data.json"))
        .with_preview(dir.path().join("content_preview.html"))
        .with_stylesheet(dir.path().join("styles.css"));

    let artifacts = run(&config).unwrap();

    let data = std::fs::read_to_string(&artifacts.data).unwrap();
    assert!(data.starts_with("{\n  \"metadata\": {\n    \"title\": \"Uma + PS System\""));

    let preview = std::fs::read_to_string(&artifacts.preview).unwrap();
    assert!(preview.contains("<h1>Uma + PS System Content Preview</h1>"));
    assert!(preview.contains(r#"<span class="green-text">Walsh</span>"#));
    assert!(preview.contains("<h3>1M opening</h3>"));

    let stylesheet = std::fs::read_to_string(artifacts.stylesheet.unwrap()).unwrap();
    assert!(stylesheet.contains("#d1fae5") && stylesheet.contains("opener-cell"));
    assert!(stylesheet.contains("#dbeafe") && stylesheet.contains("responder-cell"));
    assert!(stylesheet.contains("indent-"));
}

#[test]
fn run_without_stylesheet_skips_it() {
    let dir = tempfile::tempdir().unwrap();
    let config = CompilerConfig::new()
        .with_output(dir.path().join("data.json"))
        .with_preview(dir.path().join("preview.html"));

    let artifacts = run(&config).unwrap();
    assert!(artifacts.stylesheet.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}
