//! Pre-write content policy hook
//!
//! Reads a proposed file write as JSON on stdin and decides whether it may
//! proceed. The decision is carried by the exit code alone:
//!
//! | code | meaning |
//! |------|---------|
//! | 0 | allowed |
//! | 2 | blocked, reasons on stderr |
//! | 1 | the hook failed |
//!
//! # Example
//!
//! ```rust
//! use bridge_hook::{evaluate, ProposedWrite, Verdict};
//!
//! let verdict = evaluate(&ProposedWrite::new("Walsh system notes #059669", "notes.md"));
//! assert_eq!(verdict, Verdict::Allowed);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod input;
pub mod rules;
pub mod verdict;

use std::io::{Read, Write};

use tracing::debug;

pub use error::{HookError, HookResult};
pub use input::ProposedWrite;
pub use rules::{default_rules, Category, ColorRules, FidelityRules, Issue, LayoutRules, Rule, RuleSet};
pub use verdict::{Verdict, EXIT_ALLOWED, EXIT_BLOCKED, EXIT_INTERNAL_ERROR};

/// Evaluate `write` against the default rules
#[must_use]
pub fn evaluate(write: &ProposedWrite) -> Verdict {
    evaluate_with(&default_rules(), write)
}

/// Evaluate `write` against `rules`; empty content is always allowed
#[must_use]
pub fn evaluate_with(rules: &RuleSet, write: &ProposedWrite) -> Verdict {
    if write.is_empty() {
        return Verdict::Allowed;
    }
    Verdict::from_issues(rules.check(write))
}

/// Read the payload from `input`, report to `errors`, return the exit code
///
/// Never fails: internal errors are reported and mapped to
/// [`EXIT_INTERNAL_ERROR`].
pub fn run<R: Read, W: Write>(input: R, errors: &mut W) -> u8 {
    match decide(input, errors) {
        Ok(code) => code,
        Err(e) => {
            // Nothing left to report to if this write fails too.
            let _ = writeln!(errors, "Hook error: {e}");
            EXIT_INTERNAL_ERROR
        }
    }
}

fn decide<R: Read, W: Write>(input: R, errors: &mut W) -> HookResult<u8> {
    let write = ProposedWrite::from_reader(input)?;
    debug!(path = %write.file_path, bytes = write.content.len(), "evaluating write");
    let verdict = evaluate(&write);
    verdict.report(errors)?;
    Ok(verdict.exit_code())
}
