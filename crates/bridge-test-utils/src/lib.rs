//! Testing utilities for the bridge system workspace
//!
//! Fixture documents in both shapes, and throwaway served roots.

#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use bridge_compiler::{compile, render_stylesheet, SourceNotes};
use bridge_model::{
    BidRow, ContentBlock, Document, Link, LinkKind, Metadata, Role, Section, SectionContent,
};
use tempfile::TempDir;

pub const TARGET_SECTION: &str = "1c1d1n";

pub const INDEX_HTML: &str = "<!DOCTYPE html>\n<html><body><h1>Uma + PS</h1></body></html>\n";

pub const APP_JS: &str = "document.addEventListener('DOMContentLoaded', () => {});\n";

pub fn checkback_rows() -> Vec<BidRow> {
    vec![
        BidRow::new("2c", "Checkback", Role::Responder)
            .with_link(Link::new("Checkback", LinkKind::Green, "checkback"))
            .with_child(BidRow::new("2d", "no 4 card major", Role::Opener).at_level(2))
            .with_child(BidRow::new("2h", "4 hearts", Role::Opener).at_level(2)),
        BidRow::new("2d", "Game forcing relay", Role::Responder),
        BidRow::new("2n", "Invitational", Role::Responder),
    ]
}

pub fn hierarchical_section(id: &str, order: u32) -> Section {
    Section {
        id: id.to_string(),
        title: format!("Responder rebids after {id}"),
        subtitle: String::new(),
        order,
        content: SectionContent::Blocks {
            overview: None,
            sections: vec![ContentBlock::HierarchicalTable {
                title: format!("{id} continuations"),
                data: checkback_rows(),
            }],
        },
    }
}

/// Document with `tables` hierarchical sections; the first is the target section.
pub fn hierarchical_document(tables: u32) -> Document {
    let mut document = Document::new(Metadata::new("Uma + PS System"));
    for order in 1..=tables {
        let id = if order == 1 {
            TARGET_SECTION.to_string()
        } else {
            format!("sequence-{order}")
        };
        document
            .sections
            .insert(id.clone(), hierarchical_section(&id, order));
    }
    document
}

/// The compiler's own output: narrative sections only, no hierarchical tables.
pub fn compiled_document() -> Document {
    compile(SourceNotes::embedded())
}

pub fn document_json(document: &Document) -> String {
    document.to_pretty_json().unwrap()
}

pub fn stylesheet_for(document: &Document) -> String {
    render_stylesheet(document)
}

/// Stylesheet missing the responder role rule.
pub fn partial_stylesheet() -> &'static str {
    ".opener-cell {\n  background: #d1fae5;\n}\n.indent-1 {\n  padding-left: 1.5rem;\n}\n"
}

/// Temporary directory laid out like a deployed reference page.
pub struct ServedRoot {
    dir: TempDir,
}

impl ServedRoot {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// `index.html`, `data.json`, `styles.css` and `app.js` for `document`.
    pub fn with_document(document: &Document) -> Self {
        Self::empty()
            .file("index.html", INDEX_HTML)
            .file("data.json", &document_json(document))
            .file("styles.css", &stylesheet_for(document))
            .file("app.js", APP_JS)
    }

    pub fn file(self, relative: &str, contents: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn without(self, relative: &str) -> Self {
        fs::remove_file(self.dir.path().join(relative)).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchical_document_counts_tables() {
        let document = hierarchical_document(3);
        assert_eq!(document.hierarchical_tables().count(), 3);
        assert!(document.sections.contains_key(TARGET_SECTION));
    }

    #[test]
    fn compiled_document_has_no_tables() {
        assert_eq!(compiled_document().hierarchical_tables().count(), 0);
    }

    #[test]
    fn served_root_writes_files() {
        let root = ServedRoot::with_document(&hierarchical_document(1)).file("notes/a.txt", "a");
        assert!(root.path().join("data.json").is_file());
        assert!(root.path().join("notes/a.txt").is_file());
        let root = root.without("styles.css");
        assert!(!root.path().join("styles.css").exists());
    }
}
