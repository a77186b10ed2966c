//! Outcome of evaluating a proposed write

use std::io::Write;

use crate::rules::Issue;

/// Exit code: write allowed
pub const EXIT_ALLOWED: u8 = 0;
/// Exit code: the hook itself failed
pub const EXIT_INTERNAL_ERROR: u8 = 1;
/// Exit code: write blocked by policy
pub const EXIT_BLOCKED: u8 = 2;

const HEADER: &str = "Bridge System Validation Failed:";
const REQUIREMENTS: &str =
    "Requirements: Exact PDF replication, no made-up content, correct colors";

/// Allow or block, with the reasons for blocking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No rule fired
    Allowed,
    /// At least one rule fired
    Blocked(Vec<Issue>),
}

impl Verdict {
    /// Verdict for the collected issues
    #[must_use]
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        if issues.is_empty() {
            Self::Allowed
        } else {
            Self::Blocked(issues)
        }
    }

    /// Process exit code for this verdict
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Allowed => EXIT_ALLOWED,
            Self::Blocked(_) => EXIT_BLOCKED,
        }
    }

    /// Write the blocking report; allowed writes print nothing
    ///
    /// # Errors
    /// Returns error if writing fails
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let Self::Blocked(issues) = self else {
            return Ok(());
        };
        writeln!(out, "{HEADER}")?;
        for issue in issues {
            writeln!(out, "  - {issue}")?;
        }
        writeln!(out, "{REQUIREMENTS}")
    }
}
