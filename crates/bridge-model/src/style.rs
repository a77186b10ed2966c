//! Fixed style tables carried inside the document
//!
//! The colours are configuration data copied from the printed notes; nothing
//! here is computed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Cell colours for one bidding role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidColor {
    /// Cell background
    pub background: String,
    /// Foreground (text) colour
    #[serde(rename = "color")]
    pub foreground: String,
    /// Cell border
    pub border: String,
}

impl BidColor {
    fn new(background: &str, foreground: &str, border: &str) -> Self {
        Self {
            background: background.to_string(),
            foreground: foreground.to_string(),
            border: border.to_string(),
        }
    }
}

/// Styling and navigation target for one kind of inline link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStyle {
    /// Text colour
    pub color: String,
    /// Panel the link opens in
    pub target: String,
    /// Human description of what the link leads to
    pub description: String,
}

impl LinkStyle {
    fn new(color: &str, target: &str, description: &str) -> Self {
        Self {
            color: color.to_string(),
            target: target.to_string(),
            description: description.to_string(),
        }
    }
}

/// `bid_colors` table: role → cell colours
#[must_use]
pub fn default_bid_colors() -> IndexMap<String, BidColor> {
    IndexMap::from([
        (
            "opener".to_string(),
            BidColor::new("#d1fae5", "#065f46", "#a7f3d0"),
        ),
        (
            "responder".to_string(),
            BidColor::new("#dbeafe", "#1e40af", "#93c5fd"),
        ),
    ])
}

/// `link_types` table: css class → link style
#[must_use]
pub fn default_link_types() -> IndexMap<String, LinkStyle> {
    IndexMap::from([
        (
            "red-text".to_string(),
            LinkStyle::new(
                "#dc2626",
                "level2-content",
                "Links to detailed sequences and rebids",
            ),
        ),
        (
            "green-text".to_string(),
            LinkStyle::new(
                "#059669",
                "definitions-panel",
                "Links to definitions and concepts",
            ),
        ),
        (
            "blue-text".to_string(),
            LinkStyle::new(
                "#2563eb",
                "level2-content",
                "Links to specific bid sequences",
            ),
        ),
    ])
}
