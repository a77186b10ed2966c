//! Sections and the two shapes their content comes in
//!
//! - [`SectionContent::Narrative`]: an overview plus named subsections of flat
//!   [`Response`] lists. This is what the notes compiler emits.
//! - [`SectionContent::Blocks`]: typed content blocks, including the
//!   `hierarchical_table` of nested [`BidRow`]s read by the reference page.
//!
//! The two shapes come from different generation paths and are kept apart.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level section of the notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable section id (map key)
    pub id: String,
    /// Display title
    pub title: String,
    /// One-line subtitle
    pub subtitle: String,
    /// Display order
    pub order: u32,
    /// Section body
    pub content: SectionContent,
}

impl Section {
    /// Hierarchical table blocks in this section, in display order
    pub fn hierarchical_tables(&self) -> impl Iterator<Item = &ContentBlock> {
        let blocks: &[ContentBlock] = match &self.content {
            SectionContent::Blocks { sections, .. } => sections,
            SectionContent::Narrative { .. } => &[],
        };
        blocks.iter().filter(|block| block.is_hierarchical())
    }
}

/// Section body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    /// Typed content blocks
    Blocks {
        /// Optional lead paragraph
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overview: Option<String>,
        /// Content blocks in display order
        sections: Vec<ContentBlock>,
    },
    /// Overview text plus subsections of responses
    Narrative {
        /// Lead paragraph
        overview: String,
        /// Subsection id → subsection, in display order
        subsections: IndexMap<String, Subsection>,
    },
}

impl SectionContent {
    /// Narrative content with no subsections yet
    #[must_use]
    pub fn overview(text: impl Into<String>) -> Self {
        Self::Narrative {
            overview: text.into(),
            subsections: IndexMap::new(),
        }
    }
}

/// Titled group of responses inside a narrative section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    /// Display title
    pub title: String,
    /// Responses in transcription order
    pub responses: Vec<Response>,
}

/// How a response links onward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseType {
    /// Drills into a sequence (rendered red)
    RedLink,
    /// Opens a definition (rendered green)
    GreenLink,
    /// Leaf with nothing further
    Terminal,
}

/// One response bid in a narrative subsection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Call sequence label, e.g. `1c-1d`
    pub bid: String,
    /// Free text meaning
    pub description: String,
    /// Sequence id this bid drills into; `null` when terminal
    pub reference: Option<String>,
    /// Link classification
    #[serde(rename = "type")]
    pub kind: ResponseType,
    /// Definition ids mentioned by the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<String>>,
}

impl Response {
    /// Response that drills into another sequence
    #[must_use]
    pub fn link(bid: &str, description: &str, reference: &str) -> Self {
        Self {
            bid: bid.to_string(),
            description: description.to_string(),
            reference: Some(reference.to_string()),
            kind: ResponseType::RedLink,
            definitions: None,
        }
    }

    /// Response with no continuation
    #[must_use]
    pub fn terminal(bid: &str, description: &str) -> Self {
        Self {
            bid: bid.to_string(),
            description: description.to_string(),
            reference: None,
            kind: ResponseType::Terminal,
            definitions: None,
        }
    }

    /// Attach definition ids
    #[must_use]
    pub fn with_definitions(mut self, ids: &[&str]) -> Self {
        self.definitions = Some(ids.iter().map(|id| (*id).to_string()).collect());
        self
    }

    /// Definition ids, empty when none are listed
    #[must_use]
    pub fn definition_ids(&self) -> &[String] {
        self.definitions.as_deref().unwrap_or_default()
    }
}

/// Partnership role a bid belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Player who opened the auction
    Opener,
    /// Opener's partner
    Responder,
}

impl Role {
    /// CSS class used for cells of this role
    #[must_use]
    pub fn cell_class(self) -> &'static str {
        match self {
            Self::Opener => "opener-cell",
            Self::Responder => "responder-cell",
        }
    }
}

/// Typed content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Nested rows with indentation levels
    HierarchicalTable {
        /// Block heading
        #[serde(default)]
        title: String,
        /// Top-level rows
        data: Vec<BidRow>,
    },
    /// Flat rows
    Table {
        /// Block heading
        #[serde(default)]
        title: String,
        /// Rows
        data: Vec<BidRow>,
    },
}

impl ContentBlock {
    /// Block heading
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::HierarchicalTable { title, .. } | Self::Table { title, .. } => title,
        }
    }

    /// Top-level rows
    #[must_use]
    pub fn rows(&self) -> &[BidRow] {
        match self {
            Self::HierarchicalTable { data, .. } | Self::Table { data, .. } => data,
        }
    }

    /// Whether this is a `hierarchical_table`
    #[inline]
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::HierarchicalTable { .. })
    }
}

fn default_level() -> u32 {
    1
}

/// Row of a hierarchical table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidRow {
    /// Call label
    pub bid: String,
    /// Free text meaning
    pub description: String,
    /// Sequence id this row drills into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Whose turn the bid represents
    #[serde(rename = "cellType")]
    pub cell_type: Role,
    /// Nesting depth, 1 for top-level rows; always written
    #[serde(default = "default_level")]
    pub level: u32,
    /// Nested continuation rows
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BidRow>,
    /// Definition ids mentioned by the description
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<String>,
    /// Inline links to highlight in the description
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl BidRow {
    /// Top-level row
    #[must_use]
    pub fn new(bid: &str, description: &str, cell_type: Role) -> Self {
        Self {
            bid: bid.to_string(),
            description: description.to_string(),
            reference: None,
            cell_type,
            level: 1,
            children: Vec::new(),
            definitions: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Set nesting depth
    #[must_use]
    pub fn at_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Append a nested row
    #[must_use]
    pub fn with_child(mut self, child: BidRow) -> Self {
        self.children.push(child);
        self
    }

    /// Append an inline link
    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

/// Colour class of an inline link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Sequence link
    Red,
    /// Definition link
    Green,
    /// Specific bid link
    Blue,
}

impl LinkKind {
    /// CSS class for this link colour
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Red => "red-text",
            Self::Green => "green-text",
            Self::Blue => "blue-text",
        }
    }
}

/// Inline link inside a row description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Substring of the description to highlight
    pub text: String,
    /// Colour class
    #[serde(rename = "type")]
    pub kind: LinkKind,
    /// Definition or sequence id
    pub target: String,
}

impl Link {
    /// Create link
    #[must_use]
    pub fn new(text: &str, kind: LinkKind, target: &str) -> Self {
        Self {
            text: text.to_string(),
            kind,
            target: target.to_string(),
        }
    }
}
