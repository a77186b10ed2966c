//! The top-level document

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::definition::Definition;
use crate::section::{ContentBlock, Section};
use crate::sequence::Sequence;
use crate::style::{default_bid_colors, default_link_types, BidColor, LinkStyle};

/// Opaque descriptive metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: String,
    /// Version string
    pub version: String,
    /// Last update, as written in the notes
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
    /// Author name
    pub author: String,
}

impl Metadata {
    /// Metadata with a title and empty remaining fields
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: String::new(),
            last_update: String::new(),
            author: String::new(),
        }
    }

    /// With version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// With last update
    #[must_use]
    pub fn with_last_update(mut self, last_update: impl Into<String>) -> Self {
        self.last_update = last_update.into();
        self
    }

    /// With author
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}

/// Structured bridge system document
///
/// Built once, serialized, discarded. References between entries
/// (`reference`, `definitions`, `cross_references`) are not checked and may
/// point at ids that do not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Descriptive metadata
    pub metadata: Metadata,
    /// Section id → section
    pub sections: IndexMap<String, Section>,
    /// Sequence id → sequence
    pub sequences: IndexMap<String, Sequence>,
    /// Definition id → definition
    pub definitions: IndexMap<String, Definition>,
    /// Topic id → related definition / sequence ids
    pub cross_references: IndexMap<String, Vec<String>>,
    /// Role → cell colours
    pub bid_colors: IndexMap<String, BidColor>,
    /// Link class → style
    pub link_types: IndexMap<String, LinkStyle>,
}

impl Document {
    /// Empty document carrying the fixed style tables
    #[must_use]
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            sections: IndexMap::new(),
            sequences: IndexMap::new(),
            definitions: IndexMap::new(),
            cross_references: IndexMap::new(),
            bid_colors: default_bid_colors(),
            link_types: default_link_types(),
        }
    }

    /// Two-space indented JSON with non-ASCII text left as is
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a document back from JSON
    ///
    /// # Errors
    /// Returns error if the JSON does not match the document shape
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// `(section id, block)` for every hierarchical table, in display order
    pub fn hierarchical_tables(&self) -> impl Iterator<Item = (&str, &ContentBlock)> {
        self.sections.iter().flat_map(|(id, section)| {
            section
                .hierarchical_tables()
                .map(move |block| (id.as_str(), block))
        })
    }
}
