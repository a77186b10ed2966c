//! Fixture constants the smoke test checks against
//!
//! These are tied to one particular content document. They are not derived
//! from the served data.

use std::time::Duration;

/// Default server address under test
pub const DEFAULT_BASE_URL: &str = "http://localhost:8004";

/// A colour and class name that must both appear in the stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleToken {
    /// Hex colour, e.g. `#d1fae5`
    pub color: String,
    /// Class name, e.g. `opener-cell`
    pub class: String,
}

impl StyleToken {
    /// Create token
    #[must_use]
    pub fn new(color: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            class: class.into(),
        }
    }

    /// Whether `css` mentions both the colour and the class
    #[must_use]
    pub fn found_in(&self, css: &str) -> bool {
        css.contains(&self.color) && css.contains(&self.class)
    }
}

/// Expected values for one smoke-test run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectations {
    /// Server base URL
    pub base_url: String,
    /// Hierarchical tables the full document should have
    pub expected_tables: usize,
    /// Minimum table count for a pass
    pub pass_threshold: usize,
    /// Section id fragment inspected row by row
    pub target_sequence: String,
    /// Rows printed for the target section
    pub preview_rows: usize,
    /// Opener role styling
    pub opener: StyleToken,
    /// Responder role styling
    pub responder: StyleToken,
    /// Prefix of the indentation classes
    pub indent_prefix: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Expectations {
    /// Default expectations
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With per-request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for `path` below the base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            expected_tables: 22,
            pass_threshold: 18,
            target_sequence: "1c1d1n".to_string(),
            preview_rows: 5,
            opener: StyleToken::new("#d1fae5", "opener-cell"),
            responder: StyleToken::new("#dbeafe", "responder-cell"),
            indent_prefix: "indent-".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_document() {
        let expected = Expectations::new();
        assert_eq!(expected.base_url, "http://localhost:8004");
        assert_eq!(expected.expected_tables, 22);
        assert_eq!(expected.pass_threshold, 18);
        assert_eq!(expected.target_sequence, "1c1d1n");
        assert_eq!(expected.timeout, Duration::from_secs(5));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let expected = Expectations::new().with_base_url("http://127.0.0.1:9999/");
        assert_eq!(expected.url("/data.json"), "http://127.0.0.1:9999/data.json");
        assert_eq!(expected.url(""), "http://127.0.0.1:9999");
    }

    #[test]
    fn style_token_needs_both_parts() {
        let token = StyleToken::new("#d1fae5", "opener-cell");
        assert!(token.found_in(".opener-cell { background: #d1fae5; }"));
        assert!(!token.found_in(".opener-cell { background: #dbeafe; }"));
        assert!(!token.found_in(".cell { background: #d1fae5; }"));
    }
}
