//! HTML preview of a compiled document
//!
//! Narrative sections render as headed lists; hierarchical content renders
//! as nested bridge tables the way the reference page draws them.

use bridge_model::{
    BidRow, ContentBlock, Document, LinkKind, Response, ResponseType, Section, SectionContent,
};

use crate::suits::convert_suits;

/// Preview rendering switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Replace standalone suit letters with symbols before rendering
    pub suit_symbols: bool,
}

impl PreviewOptions {
    /// Default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With suit symbol substitution
    #[inline]
    #[must_use]
    pub fn with_suit_symbols(mut self, enabled: bool) -> Self {
        self.suit_symbols = enabled;
        self
    }
}

/// Render every section as an HTML fragment
#[must_use]
pub fn generate_html_preview(document: &Document) -> String {
    generate_html_preview_with(document, PreviewOptions::default())
}

/// Render every section as an HTML fragment with the given options
#[must_use]
pub fn generate_html_preview_with(document: &Document, options: PreviewOptions) -> String {
    let renderer = Renderer { options };
    let mut parts = Vec::new();
    for section in document.sections.values() {
        renderer.section(section, &mut parts);
    }
    parts.join("\n")
}

/// Wrap a preview fragment into a standalone HTML page
#[must_use]
pub fn render_preview_page(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Bridge Content Preview</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 2rem; }}
        .subtitle {{ color: #666; font-style: italic; }}
        .red-text {{ color: #dc2626; }}
        .green-text {{ color: #059669; }}
        .blue-text {{ color: #2563eb; }}
        .opener-cell {{ background: #d1fae5; }}
        .responder-cell {{ background: #dbeafe; }}
        .indent-1 {{ padding-left: 1.5rem; }}
        .indent-2 {{ padding-left: 3rem; }}
        .indent-3 {{ padding-left: 4.5rem; }}
    </style>
</head>
<body>
    <h1>Uma + PS System Content Preview</h1>
{fragment}
</body>
</html>
"#
    )
}

/// Display name derived from a definition id: `reverse-flannery` → `Reverse Flannery`
#[must_use]
pub fn definition_display_name(id: &str) -> String {
    let mut name = String::with_capacity(id.len());
    let mut after_letter = false;
    for c in id.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if after_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            name.push(c);
            after_letter = false;
        }
    }
    name
}

/// Escape text for inclusion in HTML element content or attributes
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

struct Renderer {
    options: PreviewOptions,
}

impl Renderer {
    fn text(&self, raw: &str) -> String {
        if self.options.suit_symbols {
            escape_html(&convert_suits(raw))
        } else {
            escape_html(raw)
        }
    }

    fn section(&self, section: &Section, parts: &mut Vec<String>) {
        parts.push(format!("<h3>{}</h3>", escape_html(&section.title)));
        if !section.subtitle.is_empty() {
            parts.push(format!(
                r#"<p class="subtitle">{}</p>"#,
                self.text(&section.subtitle)
            ));
        }

        match &section.content {
            SectionContent::Narrative {
                overview,
                subsections,
            } => {
                if !overview.is_empty() {
                    parts.push(format!("<p>{}</p>", self.text(overview)));
                }
                for subsection in subsections.values() {
                    parts.push(format!("<h4>{}</h4>", escape_html(&subsection.title)));
                    parts.push("<ul>".to_string());
                    for response in &subsection.responses {
                        parts.push(self.response(response));
                    }
                    parts.push("</ul>".to_string());
                }
            }
            SectionContent::Blocks { overview, sections } => {
                if let Some(overview) = overview.as_deref().filter(|o| !o.is_empty()) {
                    parts.push(format!("<p>{}</p>", self.text(overview)));
                }
                for block in sections {
                    self.block(block, parts);
                }
            }
        }
    }

    fn response(&self, response: &Response) -> String {
        let mut description = self.text(&response.description);

        if response.kind == ResponseType::RedLink {
            description = format!(r#"<span class="red-text">{description}</span>"#);
        }

        // Each listed definition is matched on its own; overlaps are not merged.
        for id in response.definition_ids() {
            let name = definition_display_name(id);
            description =
                description.replace(&name, &format!(r#"<span class="green-text">{name}</span>"#));
        }

        format!(
            "<li><strong>{}</strong>: {description}</li>",
            self.text(&response.bid)
        )
    }

    fn block(&self, block: &ContentBlock, parts: &mut Vec<String>) {
        parts.push(format!("<h4>{}</h4>", escape_html(block.title())));
        parts.push(r#"<table class="bridge-table">"#.to_string());
        for row in block.rows() {
            if block.is_hierarchical() {
                self.nested_row(row, parts);
            } else {
                parts.push(self.row(row, None));
            }
        }
        parts.push("</table>".to_string());
    }

    fn nested_row(&self, row: &BidRow, parts: &mut Vec<String>) {
        let indent = (row.level > 1).then(|| format!("indent-{}", row.level - 1));
        parts.push(self.row(row, indent.as_deref()));
        for child in &row.children {
            self.nested_row(child, parts);
        }
    }

    fn row(&self, row: &BidRow, indent: Option<&str>) -> String {
        let classes = match indent {
            Some(indent) => format!("{} {indent}", row.cell_type.cell_class()),
            None => row.cell_type.cell_class().to_string(),
        };

        let mut description = self.text(&row.description);
        for link in &row.links {
            let text = escape_html(&link.text);
            let target_attr = match link.kind {
                LinkKind::Green => "data-definition",
                LinkKind::Red | LinkKind::Blue => "data-reference",
            };
            let span = format!(
                r#"<span class="{}" {target_attr}="{}">{text}</span>"#,
                link.kind.css_class(),
                escape_html(&link.target)
            );
            description = description.replace(&text, &span);
        }

        format!(
            r#"<tr><td class="bid-cell {classes}">{}</td><td class="description-cell {classes}">{description}</td></tr>"#,
            self.text(&row.bid)
        )
    }
}
