//! Bridge System Notes Compiler
//!
//! Turns the embedded system notes into the structured JSON document read by
//! the reference page, plus an HTML preview of the same content.
//!
//! # Pipeline
//!
//! ```text
//! SourceNotes ─┬─ parse_sections ────┐
//!              ├─ parse_sequences ───┼─→ Document ─→ save (JSON)
//!              └─ parse_definitions ─┘            └→ generate_html_preview (HTML)
//! ```
//!
//! Each step is a pure function of its notes; [`compile`] threads the results
//! into one [`Document`]. Running it twice yields byte-identical output.
//!
//! # Example
//!
//! ```rust
//! use bridge_compiler::{compile, SourceNotes};
//!
//! let document = compile(SourceNotes::embedded());
//! assert!(document.sections.contains_key("1m-opening"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod definitions;
pub mod error;
pub mod notes;
pub mod preview;
pub mod sections;
pub mod sequences;
pub mod stylesheet;
pub mod suits;

use std::fs;
use std::path::{Path, PathBuf};

use bridge_model::{Document, Metadata};
use tracing::info;

pub use definitions::{parse_definitions, DefinitionTables};
pub use error::{CompileError, CompileResult};
pub use notes::SourceNotes;
pub use preview::{
    generate_html_preview, generate_html_preview_with, render_preview_page, PreviewOptions,
};
pub use sections::parse_sections;
pub use sequences::parse_sequences;
pub use stylesheet::render_stylesheet;
pub use suits::convert_suits;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default JSON artifact name
pub const DEFAULT_OUTPUT: &str = "structured_bridge_data.json";

/// Default preview artifact name
pub const DEFAULT_PREVIEW: &str = "content_preview.html";

/// Metadata stamped on every compiled document
#[must_use]
pub fn system_metadata() -> Metadata {
    Metadata::new("Uma + PS System")
        .with_version("1.0")
        .with_last_update("Sep 2025")
        .with_author("Rajesh Panchanathan")
}

/// Build the document from the three note blocks
#[must_use]
pub fn compile(notes: SourceNotes<'_>) -> Document {
    let mut document = Document::new(system_metadata());

    document.sections = parse_sections(notes.club_opening);
    document.sequences = parse_sequences(notes.opener_rebids);

    let tables = parse_definitions(notes.definitions);
    document.definitions = tables.definitions;
    document.cross_references = tables.cross_references;

    info!(
        sections = document.sections.len(),
        sequences = document.sequences.len(),
        definitions = document.definitions.len(),
        "compiled bridge document"
    );
    document
}

/// Write `document` as indented JSON to `path`
///
/// # Errors
/// Returns error if serialization or the write fails
pub fn save(document: &Document, path: impl AsRef<Path>) -> CompileResult<()> {
    let path = path.as_ref();
    let json = document.to_pretty_json()?;
    fs::write(path, json).map_err(|e| CompileError::io_error(path, e))?;
    info!(path = %path.display(), "data saved");
    Ok(())
}

/// Where and how to write the compiled artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// JSON document path
    pub output: PathBuf,
    /// HTML preview path
    pub preview: PathBuf,
    /// Optional stylesheet path
    pub stylesheet: Option<PathBuf>,
    /// Preview rendering switches
    pub preview_options: PreviewOptions,
}

impl CompilerConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With JSON output path
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// With preview path
    #[must_use]
    pub fn with_preview(mut self, path: impl Into<PathBuf>) -> Self {
        self.preview = path.into();
        self
    }

    /// Also write a stylesheet
    #[must_use]
    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet = Some(path.into());
        self
    }

    /// With preview options
    #[must_use]
    pub fn with_preview_options(mut self, options: PreviewOptions) -> Self {
        self.preview_options = options;
        self
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview: PathBuf::from(DEFAULT_PREVIEW),
            stylesheet: None,
            preview_options: PreviewOptions::default(),
        }
    }
}

/// Paths written by [`run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// JSON document
    pub data: PathBuf,
    /// HTML preview
    pub preview: PathBuf,
    /// Stylesheet, when requested
    pub stylesheet: Option<PathBuf>,
}

/// Compile the embedded notes and write every configured artifact
///
/// # Errors
/// Returns error if any artifact cannot be written
pub fn run(config: &CompilerConfig) -> CompileResult<Artifacts> {
    let document = compile(SourceNotes::embedded());

    save(&document, &config.output)?;

    let fragment = generate_html_preview_with(&document, config.preview_options);
    write_artifact(&config.preview, &render_preview_page(&fragment))?;

    if let Some(path) = &config.stylesheet {
        write_artifact(path, &render_stylesheet(&document))?;
    }

    Ok(Artifacts {
        data: config.output.clone(),
        preview: config.preview.clone(),
        stylesheet: config.stylesheet.clone(),
    })
}

fn write_artifact(path: &Path, contents: &str) -> CompileResult<()> {
    fs::write(path, contents).map_err(|e| CompileError::io_error(path, e))?;
    info!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}
