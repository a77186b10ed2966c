//! Hook payload read from stdin

use std::io::Read;

use serde::Deserialize;

use crate::error::HookResult;

#[derive(Debug, Default, Deserialize)]
struct Payload {
    #[serde(default)]
    tool_input: ToolInput,
}

#[derive(Debug, Default, Deserialize)]
struct ToolInput {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    new_string: Option<String>,
    #[serde(default)]
    file_path: Option<String>,
}

/// A file write awaiting approval
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposedWrite {
    /// Text about to be written
    pub content: String,
    /// Target path, possibly empty
    pub file_path: String,
}

impl ProposedWrite {
    /// Create proposed write
    #[must_use]
    pub fn new(content: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file_path: file_path.into(),
        }
    }

    /// Parse the JSON payload
    ///
    /// `content` falls back to `new_string` when absent or empty.
    ///
    /// # Errors
    /// Returns error if `json` is not a payload object
    pub fn from_json(json: &str) -> HookResult<Self> {
        let payload: Payload = serde_json::from_str(json)?;
        Ok(payload.into_write())
    }

    /// Read and parse the payload from `reader`
    ///
    /// # Errors
    /// Returns error if reading fails or the payload is malformed
    pub fn from_reader(mut reader: impl Read) -> HookResult<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Nothing to check
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Payload {
    fn into_write(self) -> ProposedWrite {
        let ToolInput {
            content,
            new_string,
            file_path,
        } = self.tool_input;
        ProposedWrite {
            content: content
                .filter(|c| !c.is_empty())
                .or(new_string)
                .unwrap_or_default(),
            file_path: file_path.unwrap_or_default(),
        }
    }
}
