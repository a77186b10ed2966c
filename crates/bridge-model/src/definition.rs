//! Convention definitions
//!
//! Definitions do not share one schema: some carry elaboration lines and
//! worked examples, some a condition → response algorithm, some a meaning
//! plus a note pointing at another convention. All of them are the same
//! struct with optional fields; [`Definition::kind`] classifies them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category tag shared by every transcribed convention
pub const BIDDING_CONVENTION: &str = "bidding-convention";

/// Classification derived from which optional fields are present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// Primary text, optionally with details and examples
    Plain,
    /// Carries a structured response algorithm
    Algorithmic,
    /// Carries a meaning and a note deferring to another convention
    CrossReferencing,
}

/// Either a list of elaboration lines or a single remark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Elaboration {
    /// Ordered elaboration lines
    Lines(Vec<String>),
    /// Single remark
    Text(String),
}

/// Value side of an algorithm entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlgorithmStep {
    /// One condition → response
    Rule(String),
    /// Ordered list of `call = meaning` lines
    Cases(Vec<String>),
}

impl AlgorithmStep {
    /// Build a case list from string slices
    #[must_use]
    pub fn cases(lines: &[&str]) -> Self {
        Self::Cases(lines.iter().map(|line| (*line).to_string()).collect())
    }
}

/// Named bidding convention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Definition id (map key)
    pub id: String,
    /// Display title
    pub title: String,
    /// Category tag
    pub category: String,
    /// Vulnerability restriction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerability: Option<String>,
    /// Primary definition text
    pub definition: String,
    /// What the bid shows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    /// Remark, usually pointing at another convention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Elaboration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Elaboration>,
    /// Worked example hands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    /// Condition → response table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<IndexMap<String, AlgorithmStep>>,
}

impl Definition {
    /// Bidding convention with only its primary text
    #[must_use]
    pub fn convention(id: &str, title: &str, definition: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: BIDDING_CONVENTION.to_string(),
            vulnerability: None,
            definition: definition.to_string(),
            meaning: None,
            notes: None,
            details: None,
            examples: None,
            algorithm: None,
        }
    }

    /// Restrict to a vulnerability
    #[must_use]
    pub fn with_vulnerability(mut self, vulnerability: &str) -> Self {
        self.vulnerability = Some(vulnerability.to_string());
        self
    }

    /// Set elaboration lines
    #[must_use]
    pub fn with_details(mut self, lines: &[&str]) -> Self {
        self.details = Some(Elaboration::Lines(
            lines.iter().map(|line| (*line).to_string()).collect(),
        ));
        self
    }

    /// Set a single remark as elaboration
    #[must_use]
    pub fn with_remark(mut self, text: &str) -> Self {
        self.details = Some(Elaboration::Text(text.to_string()));
        self
    }

    /// Set worked examples
    #[must_use]
    pub fn with_examples(mut self, examples: &[&str]) -> Self {
        self.examples = Some(examples.iter().map(|line| (*line).to_string()).collect());
        self
    }

    /// Set meaning and cross-referencing note
    #[must_use]
    pub fn with_meaning(mut self, meaning: &str, notes: &str) -> Self {
        self.meaning = Some(meaning.to_string());
        self.notes = Some(notes.to_string());
        self
    }

    /// Append an algorithm entry
    #[must_use]
    pub fn with_step(mut self, condition: &str, step: AlgorithmStep) -> Self {
        self.algorithm
            .get_or_insert_with(IndexMap::new)
            .insert(condition.to_string(), step);
        self
    }

    /// Classify by the optional fields present
    #[must_use]
    pub fn kind(&self) -> DefinitionKind {
        if self.algorithm.is_some() {
            DefinitionKind::Algorithmic
        } else if self.notes.is_some() || self.meaning.is_some() {
            DefinitionKind::CrossReferencing
        } else {
            DefinitionKind::Plain
        }
    }
}
