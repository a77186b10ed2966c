//! Smoke test for a running Uma + PS preview server
//!
//! Fetches `/`, `/data.json` and `/styles.css` in turn and checks the served
//! document for hierarchical tables against fixed expectations.
//!
//! # Example
//!
//! ```rust
//! use bridge_validator::{inspect_hierarchy, Expectations, Summary};
//!
//! let data = serde_json::json!({ "sections": {} });
//! let summary = Summary::new(&inspect_hierarchy(&data), &Expectations::new());
//! assert!(!summary.passed());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod checks;
pub mod error;
pub mod expectations;
pub mod smoke;

pub use checks::{
    inspect_hierarchy, inspect_stylesheet, inspect_target_sequence, HierarchyReport, RowSummary,
    StyleReport, Summary, TableFinding, TargetSequenceReport, TargetTable,
};
pub use error::{ValidatorError, ValidatorResult};
pub use expectations::{Expectations, StyleToken, DEFAULT_BASE_URL};
pub use smoke::{Outcome, SmokeTest};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
