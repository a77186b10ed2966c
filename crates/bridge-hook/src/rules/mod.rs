//! Content policy rules
//!
//! Each rule inspects a proposed write independently and reports zero or
//! more issues. [`RuleSet`] runs them in registration order.

use std::fmt;

use crate::input::ProposedWrite;

mod color;
mod fidelity;
mod layout;

pub use color::ColorRules;
pub use fidelity::FidelityRules;
pub use layout::LayoutRules;

/// Which rule family raised an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Required colours missing
    Color,
    /// Wording that drifts from the source notes
    Fidelity,
    /// Page layout constraints
    Layout,
}

/// One policy violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Rule family
    pub category: Category,
    /// Message shown to the writer
    pub message: String,
}

impl Issue {
    /// Create issue
    #[must_use]
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A content policy check
pub trait Rule: Send + Sync {
    /// Short rule name for logs
    fn name(&self) -> &'static str;

    /// Issues raised by `write`, empty when it complies
    fn check(&self, write: &ProposedWrite) -> Vec<Issue>;
}

/// Ordered collection of rules
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleSet {
    fn default() -> Self {
        default_rules()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.names())
            .finish()
    }
}

impl RuleSet {
    /// Create empty rule set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule after those already present
    pub fn register<R: Rule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Registered rule names, in order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule and collect issues in rule order
    #[must_use]
    pub fn check(&self, write: &ProposedWrite) -> Vec<Issue> {
        self.rules
            .iter()
            .flat_map(|rule| {
                let issues = rule.check(write);
                if !issues.is_empty() {
                    tracing::debug!(rule = rule.name(), count = issues.len(), "rule fired");
                }
                issues
            })
            .collect()
    }
}

/// Colour, fidelity and layout rules, in that order
#[must_use]
pub fn default_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.register(ColorRules);
    rules.register(FidelityRules);
    rules.register(LayoutRules);
    rules
}
