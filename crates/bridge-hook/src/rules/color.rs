use super::{Category, Issue, Rule};
use crate::input::ProposedWrite;

const GREEN: &str = "#059669";
const RED: &str = "#dc2626";
const OPENER_BACKGROUND: &str = "#dbeafe";
const RESPONDER_BACKGROUND: &str = "#d1fae5";

/// Conventions that must be rendered as green definition links
const GREEN_TERMS: [&str; 4] = [
    "Walsh",
    "Reverse Flannery",
    "Artificial reverse",
    "Natural reverse",
];

/// Link colours for convention names and role cell backgrounds
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorRules;

impl Rule for ColorRules {
    fn name(&self) -> &'static str {
        "color"
    }

    fn check(&self, write: &ProposedWrite) -> Vec<Issue> {
        let content = write.content.as_str();
        let mut issues = Vec::new();

        for term in GREEN_TERMS {
            if content.contains(term) && !content.contains(GREEN) {
                issues.push(Issue::new(
                    Category::Color,
                    format!("'{term}' requires GREEN color ({GREEN})"),
                ));
            }
        }

        if content.contains("Opener Rebids") && !content.contains(RED) {
            issues.push(Issue::new(
                Category::Color,
                format!("'Opener Rebids' requires RED color ({RED})"),
            ));
        }

        let lower = content.to_lowercase();
        let styles_background = content.contains("background");

        if styles_background && lower.contains("opener") && !content.contains(OPENER_BACKGROUND) {
            issues.push(Issue::new(
                Category::Color,
                format!("Opener cells require BLUE background ({OPENER_BACKGROUND})"),
            ));
        }

        if styles_background
            && lower.contains("responder")
            && !content.contains(RESPONDER_BACKGROUND)
        {
            issues.push(Issue::new(
                Category::Color,
                format!("Responder cells require GREEN background ({RESPONDER_BACKGROUND})"),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn messages(content: &str) -> Vec<String> {
        ColorRules
            .check(&ProposedWrite::new(content, "notes.md"))
            .into_iter()
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn each_green_term_is_reported() {
        assert_eq!(
            messages("Walsh, Reverse Flannery"),
            [
                "'Walsh' requires GREEN color (#059669)",
                "'Reverse Flannery' requires GREEN color (#059669)",
            ]
        );
        assert!(messages("Walsh, Reverse Flannery #059669").is_empty());
    }

    #[test]
    fn reverse_terms_are_reported() {
        assert_eq!(
            messages("Artificial reverse"),
            ["'Artificial reverse' requires GREEN color (#059669)"]
        );
        assert_eq!(
            messages("Natural reverse"),
            ["'Natural reverse' requires GREEN color (#059669)"]
        );
        assert_eq!(
            messages("Walsh, Reverse Flannery, Artificial reverse, Natural reverse").len(),
            4
        );
        assert!(messages("Artificial reverse #059669").is_empty());
    }

    #[test]
    fn green_terms_are_case_sensitive() {
        assert!(messages("walsh and natural Reverse").is_empty());
    }

    #[test]
    fn opener_rebids_need_red() {
        assert_eq!(
            messages("Opener Rebids"),
            ["'Opener Rebids' requires RED color (#dc2626)"]
        );
        assert!(messages("Opener Rebids #dc2626").is_empty());
    }

    #[test]
    fn cell_backgrounds_follow_roles() {
        assert_eq!(
            messages(".OPENER-cell { background: #d1fae5 }"),
            ["Opener cells require BLUE background (#dbeafe)"]
        );
        assert_eq!(
            messages(".responder-cell { background: #dbeafe }"),
            ["Responder cells require GREEN background (#d1fae5)"]
        );
        assert!(messages(".opener-cell { Background: red }").is_empty());
    }
}
