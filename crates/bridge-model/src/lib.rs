//! Bridge System Document Model
//!
//! Typed shape of the structured document consumed by the reference page.
//!
//! # Layout
//!
//! ```text
//! Document
//!  ├─ metadata
//!  ├─ sections          (id → Section, insertion order = display order)
//!  │    └─ content      Narrative { overview, subsections → responses }
//!  │                    | Blocks { sections: [hierarchical_table { data: [BidRow] }] }
//!  ├─ sequences         (id → Sequence → categories → bids)
//!  ├─ definitions       (id → Definition)
//!  ├─ cross_references  (topic → [ids])
//!  └─ bid_colors / link_types (fixed style tables)
//! ```
//!
//! Every map is an [`indexmap::IndexMap`] so serialization keeps the order
//! in which entries were transcribed.
//!
//! # Example
//!
//! ```rust
//! use bridge_model::{Document, Metadata};
//!
//! let document = Document::new(Metadata::new("Uma + PS System"));
//! let json = document.to_pretty_json().unwrap();
//! assert!(json.contains("\"bid_colors\""));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod definition;
pub mod document;
pub mod section;
pub mod sequence;
pub mod style;

pub use definition::{AlgorithmStep, Definition, DefinitionKind, Elaboration};
pub use document::{Document, Metadata};
pub use section::{
    BidRow, ContentBlock, Link, LinkKind, Response, ResponseType, Role, Section, SectionContent,
    Subsection,
};
pub use sequence::{BidKind, Category, Sequence, SequenceBid};
pub use style::{BidColor, LinkStyle};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
