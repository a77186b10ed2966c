use super::{Category, Issue, Rule};
use crate::input::ProposedWrite;

/// Table-of-contents and bridge-table layout constraints
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRules;

impl LayoutRules {
    fn is_markup_or_style(path: &str) -> bool {
        path.contains(".css") || path.contains(".html")
    }
}

impl Rule for LayoutRules {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn check(&self, write: &ProposedWrite) -> Vec<Issue> {
        let content = write.content.as_str();
        let lower = content.to_lowercase();
        let mut issues = Vec::new();

        let mentions_toc = lower.contains("toc") || lower.contains("table-of-contents");
        if mentions_toc && Self::is_markup_or_style(&write.file_path) && !content.contains("200px")
        {
            issues.push(Issue::new(
                Category::Layout,
                "TOC column must be 200px wide, not 2x2 grid",
            ));
        }

        if content.contains("<table")
            && write.file_path.to_lowercase().contains("bridge")
            && !content.contains("colgroup")
            && !lower.contains("thin")
        {
            issues.push(Issue::new(
                Category::Layout,
                "Maintain thin table layout as per PDF design",
            ));
        }

        issues
    }
}
