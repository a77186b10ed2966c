//! Bidding sequences: the continuations a red link drills into

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::section::Role;

/// Continuation table reached from a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    /// Sequence id (map key)
    pub id: String,
    /// Display title
    pub title: String,
    /// Calls that led here
    pub auction: Vec<String>,
    /// Whose turn the listed bids belong to
    pub player: Role,
    /// Category id → category, in display order
    pub categories: IndexMap<String, Category>,
}

/// Titled group of bids within a sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display title
    pub title: String,
    /// Bids in transcription order
    pub bids: Vec<SequenceBid>,
}

/// Who makes a sequence bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BidKind {
    /// Opener's rebid
    OpenerBid,
}

/// One bid inside a sequence category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceBid {
    /// Call sequence label
    pub bid: String,
    /// `vul` / `non-vul` when the meaning depends on vulnerability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerability: Option<String>,
    /// Free text meaning
    pub description: String,
    /// Follow-up sequence id; `null` when none
    pub reference: Option<String>,
    /// Point range text
    pub hcp: String,
    /// Shape text
    pub shape: String,
    /// Who makes the bid
    #[serde(rename = "type")]
    pub kind: BidKind,
    /// Definition ids mentioned by the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<String>>,
}

impl SequenceBid {
    /// Opener rebid with its point range and shape
    #[must_use]
    pub fn opener(bid: &str, description: &str, hcp: &str, shape: &str) -> Self {
        Self {
            bid: bid.to_string(),
            vulnerability: None,
            description: description.to_string(),
            reference: None,
            hcp: hcp.to_string(),
            shape: shape.to_string(),
            kind: BidKind::OpenerBid,
            definitions: None,
        }
    }

    /// Set follow-up sequence
    #[must_use]
    pub fn referencing(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    /// Restrict to a vulnerability
    #[must_use]
    pub fn when(mut self, vulnerability: &str) -> Self {
        self.vulnerability = Some(vulnerability.to_string());
        self
    }

    /// Attach definition ids
    #[must_use]
    pub fn with_definitions(mut self, ids: &[&str]) -> Self {
        self.definitions = Some(ids.iter().map(|id| (*id).to_string()).collect());
        self
    }
}
