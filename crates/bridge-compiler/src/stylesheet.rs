//! Stylesheet derived from the document's style tables
//!
//! Emits one rule per bid role (`.opener-cell`, `.responder-cell`), one per
//! link class, and the indentation classes used by hierarchical tables.

use bridge_model::Document;

/// Deepest indentation class emitted (`indent-1` .. `indent-N`)
pub const MAX_INDENT: u32 = 3;

const INDENT_STEP_REM: f32 = 1.5;

/// Render the stylesheet for `document`
#[must_use]
pub fn render_stylesheet(document: &Document) -> String {
    let mut rules = Vec::new();

    for (role, colors) in &document.bid_colors {
        rules.push(format!(
            ".{role}-cell {{\n  background: {};\n  color: {};\n  border: 1px solid {};\n}}",
            colors.background, colors.foreground, colors.border
        ));
    }

    for (class, style) in &document.link_types {
        rules.push(format!(
            "/* {} */\n.{class} {{\n  color: {};\n  cursor: pointer;\n}}",
            style.description, style.color
        ));
    }

    for level in 1..=MAX_INDENT {
        #[allow(clippy::cast_precision_loss)]
        let padding = INDENT_STEP_REM * level as f32;
        rules.push(format!(".indent-{level} {{\n  padding-left: {padding}rem;\n}}"));
    }

    let mut stylesheet = rules.join("\n\n");
    stylesheet.push('\n');
    stylesheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_model::Metadata;

    #[test]
    fn role_cells_carry_bid_colors() {
        let css = render_stylesheet(&Document::new(Metadata::new("t")));
        assert!(css.contains(".opener-cell {\n  background: #d1fae5;"));
        assert!(css.contains(".responder-cell {\n  background: #dbeafe;"));
    }

    #[test]
    fn link_classes_and_indents_are_emitted() {
        let css = render_stylesheet(&Document::new(Metadata::new("t")));
        assert!(css.contains(".red-text {\n  color: #dc2626;"));
        assert!(css.contains(".green-text {\n  color: #059669;"));
        assert!(css.contains(".indent-1 {\n  padding-left: 1.5rem;"));
        assert!(css.contains(".indent-3 {\n  padding-left: 4.5rem;"));
        assert!(!css.contains(".indent-4"));
    }
}
