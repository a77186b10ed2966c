//! Pure checks over the fetched document and stylesheet
//!
//! Each check returns a report whose `Display` is the text printed for it.

use std::fmt;

use serde_json::Value;

use crate::expectations::Expectations;

const HIERARCHICAL_TABLE: &str = "hierarchical_table";
const NO_TITLE: &str = "No title";

/// Render a JSON value the way it reads in prose: strings without quotes
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Content blocks of a section, when it uses the block layout
fn content_blocks(section: &Value) -> impl Iterator<Item = &Value> {
    section
        .get("content")
        .and_then(|content| content.get("sections"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn is_hierarchical(block: &Value) -> bool {
    block.get("type").and_then(Value::as_str) == Some(HIERARCHICAL_TABLE)
}

fn rows(block: &Value) -> &[Value] {
    block
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn sections(data: &Value) -> impl Iterator<Item = (&String, &Value)> {
    data.get("sections")
        .and_then(Value::as_object)
        .into_iter()
        .flatten()
}

/// One hierarchical table and the structure found in its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFinding {
    /// Owning section id
    pub section_id: String,
    /// Table title, `No title` when absent
    pub title: String,
    /// Some row has a `level` key
    pub has_levels: bool,
    /// Some row has a `children` key
    pub has_children: bool,
    /// Some row's `cellType` is `opener` or `responder`
    pub has_cell_types: bool,
}

/// Every hierarchical table in the document, in section order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyReport {
    /// Tables found
    pub tables: Vec<TableFinding>,
}

impl HierarchyReport {
    /// Number of hierarchical tables found
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.tables.len()
    }
}

impl fmt::Display for HierarchyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.tables {
            writeln!(f, "  - {}: {}", table.section_id, table.title)?;
            writeln!(
                f,
                "    Levels: {}, Children: {}, Cell types: {}",
                table.has_levels, table.has_children, table.has_cell_types
            )?;
        }
        write!(f, "✓ Found {} hierarchical table sections", self.count())
    }
}

/// Find every hierarchical table and note which row features it uses
#[must_use]
pub fn inspect_hierarchy(data: &Value) -> HierarchyReport {
    let mut tables = Vec::new();
    for (section_id, section) in sections(data) {
        for block in content_blocks(section).filter(|block| is_hierarchical(block)) {
            let rows = rows(block);
            tables.push(TableFinding {
                section_id: section_id.clone(),
                title: block
                    .get("title")
                    .map_or_else(|| NO_TITLE.to_string(), plain),
                has_levels: rows.iter().any(|row| row.get("level").is_some()),
                has_children: rows.iter().any(|row| row.get("children").is_some()),
                has_cell_types: rows.iter().any(|row| {
                    matches!(
                        row.get("cellType").and_then(Value::as_str),
                        Some("opener" | "responder")
                    )
                }),
            });
        }
    }
    HierarchyReport { tables }
}

/// Summary of one row of the target table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSummary {
    /// Bid label, `no bid` when absent
    pub bid: String,
    /// Cell type, `unknown` when absent
    pub cell_type: String,
    /// Level, `1` when absent
    pub level: String,
    /// Row has a `children` key
    pub has_children: bool,
}

impl RowSummary {
    fn from_row(row: &Value) -> Self {
        let field = |key: &str, default: &str| {
            row.get(key).map_or_else(|| default.to_string(), plain)
        };
        Self {
            bid: field("bid", "no bid"),
            cell_type: field("cellType", "unknown"),
            level: field("level", "1"),
            has_children: row.get("children").is_some(),
        }
    }
}

/// First hierarchical table of the target section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTable {
    /// Total rows in the table
    pub total_rows: usize,
    /// Leading rows summarised
    pub rows: Vec<RowSummary>,
}

/// Result of looking up the target bid sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSequenceReport {
    /// Sequence fragment searched for
    pub target: String,
    /// Matching section ids visited, in order
    pub matches: Vec<String>,
    /// Table found in the last visited match
    pub table: Option<TargetTable>,
}

impl TargetSequenceReport {
    /// Whether any section id matched
    #[inline]
    #[must_use]
    pub fn found(&self) -> bool {
        !self.matches.is_empty()
    }
}

impl fmt::Display for TargetSequenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.found() {
            return write!(f, "✗ Could not find specific {} section", self.target);
        }
        let mut lines = Vec::new();
        for section_id in &self.matches {
            lines.push(format!("✓ Found section with {}: {section_id}", self.target));
        }
        if let Some(table) = &self.table {
            lines.push(format!("  - Hierarchical data items: {}", table.total_rows));
            for (i, row) in table.rows.iter().enumerate() {
                lines.push(format!(
                    "    [{i}] {}: {}, level {}, children: {}",
                    row.bid, row.cell_type, row.level, row.has_children
                ));
            }
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// Walk sections whose id contains the target until one has a hierarchical table
#[must_use]
pub fn inspect_target_sequence(data: &Value, expectations: &Expectations) -> TargetSequenceReport {
    let target = expectations.target_sequence.to_lowercase();
    let mut report = TargetSequenceReport {
        target: expectations.target_sequence.clone(),
        matches: Vec::new(),
        table: None,
    };

    for (section_id, section) in sections(data) {
        if !section_id.to_lowercase().contains(&target) {
            continue;
        }
        report.matches.push(section_id.clone());

        if let Some(block) = content_blocks(section).find(|block| is_hierarchical(block)) {
            let rows = rows(block);
            report.table = Some(TargetTable {
                total_rows: rows.len(),
                rows: rows
                    .iter()
                    .take(expectations.preview_rows)
                    .map(RowSummary::from_row)
                    .collect(),
            });
            break;
        }
    }
    report
}

/// Role colours and indentation found in the stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleReport {
    /// Opener colour and class present
    pub opener: bool,
    /// Responder colour and class present
    pub responder: bool,
    /// Indentation classes present
    pub indentation: bool,
}

impl StyleReport {
    /// All three requirements met
    #[inline]
    #[must_use]
    pub fn passed(self) -> bool {
        self.opener && self.responder && self.indentation
    }
}

impl fmt::Display for StyleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✓ CSS loaded. Opener green: {}, Responder blue: {}, Indentation: {}",
            self.opener, self.responder, self.indentation
        )
    }
}

/// Check the stylesheet for the role colours and indentation classes
#[must_use]
pub fn inspect_stylesheet(css: &str, expectations: &Expectations) -> StyleReport {
    StyleReport {
        opener: expectations.opener.found_in(css),
        responder: expectations.responder.found_in(css),
        indentation: css.contains(&expectations.indent_prefix),
    }
}

/// Table count against the fixture threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Tables found
    pub found: usize,
    /// Tables the reference document has
    pub expected: usize,
    /// Minimum for a pass
    pub threshold: usize,
}

impl Summary {
    /// Summarise `report` against `expectations`
    #[must_use]
    pub fn new(report: &HierarchyReport, expectations: &Expectations) -> Self {
        Self {
            found: report.count(),
            expected: expectations.expected_tables,
            threshold: expectations.pass_threshold,
        }
    }

    /// Enough tables were found
    #[inline]
    #[must_use]
    pub fn passed(self) -> bool {
        self.found >= self.threshold
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hierarchical tables found: {}", self.found)?;
        writeln!(f, "Expected: {} (as mentioned in requirements)", self.expected)?;
        let status = if self.passed() { "✓ PASS" } else { "✗ INCOMPLETE" };
        write!(f, "Status: {status}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn table(rows: Value) -> Value {
        json!({ "type": "hierarchical_table", "title": "Checkback", "data": rows })
    }

    fn document(sections: Value) -> Value {
        json!({ "metadata": { "title": "t" }, "sections": sections })
    }

    #[test]
    fn zero_tables_is_incomplete() {
        let data = document(json!({
            "1m-opening": { "content": { "overview": "x", "subsections": {} } }
        }));
        let report = inspect_hierarchy(&data);
        assert_eq!(report.count(), 0);

        let summary = Summary::new(&report, &Expectations::new());
        assert!(!summary.passed());
        assert!(summary.to_string().ends_with("Status: ✗ INCOMPLETE"));
        assert!(summary.to_string().starts_with("Hierarchical tables found: 0\n"));
    }

    #[test]
    fn hierarchy_flags_row_features() {
        let data = document(json!({
            "1c1d1n": { "content": { "sections": [
                table(json!([{ "bid": "2c", "cellType": "responder", "level": 1,
                               "children": [] }])),
                { "type": "table", "data": [] },
                { "type": "hierarchical_table", "data": [{ "bid": "2d", "cellType": "other" }] }
            ]}}
        }));

        let report = inspect_hierarchy(&data);
        assert_eq!(
            report.tables,
            vec![
                TableFinding {
                    section_id: "1c1d1n".to_string(),
                    title: "Checkback".to_string(),
                    has_levels: true,
                    has_children: true,
                    has_cell_types: true,
                },
                TableFinding {
                    section_id: "1c1d1n".to_string(),
                    title: "No title".to_string(),
                    has_levels: false,
                    has_children: false,
                    has_cell_types: false,
                },
            ]
        );
        assert!(report
            .to_string()
            .contains("  - 1c1d1n: Checkback\n    Levels: true, Children: true, Cell types: true"));
    }

    #[test]
    fn missing_sections_key_finds_nothing() {
        assert_eq!(inspect_hierarchy(&json!({})).count(), 0);
        assert_eq!(inspect_hierarchy(&json!({ "sections": [] })).count(), 0);
    }

    #[test]
    fn target_rows_use_defaults_and_cap_at_five() {
        let mut rows: Vec<Value> = (0..7).map(|i| json!({ "bid": format!("{i}c") })).collect();
        rows[0] = json!({ "level": 2, "children": [], "cellType": "opener" });

        let data = document(json!({
            "Responder-1C1D1N-rebids": { "content": { "sections": [table(Value::Array(rows))] } }
        }));
        let report = inspect_target_sequence(&data, &Expectations::new());

        assert_eq!(report.matches, vec!["Responder-1C1D1N-rebids".to_string()]);
        let table = report.table.clone().unwrap();
        assert_eq!(table.total_rows, 7);
        assert_eq!(table.rows.len(), 5);
        assert_eq!(
            table.rows[0],
            RowSummary {
                bid: "no bid".to_string(),
                cell_type: "opener".to_string(),
                level: "2".to_string(),
                has_children: true,
            }
        );
        assert_eq!(table.rows[1].cell_type, "unknown");
        assert_eq!(table.rows[1].level, "1");

        let text = report.to_string();
        assert!(text.contains("  - Hierarchical data items: 7"));
        assert!(text.contains("    [1] 1c: unknown, level 1, children: false"));
    }

    #[test]
    fn target_search_continues_past_sections_without_tables() {
        let data = document(json!({
            "1c1d1n-notes": { "content": { "overview": "x" } },
            "1c1d1n": { "content": { "sections": [table(json!([]))] } }
        }));
        let report = inspect_target_sequence(&data, &Expectations::new());
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.table.unwrap().total_rows, 0);
    }

    #[test]
    fn missing_target_is_reported() {
        let report = inspect_target_sequence(&document(json!({})), &Expectations::new());
        assert!(!report.found());
        assert_eq!(report.to_string(), "✗ Could not find specific 1c1d1n section");
    }

    #[test]
    fn stylesheet_needs_all_three_parts() {
        let expectations = Expectations::new();
        let full = ".opener-cell{background:#d1fae5}.responder-cell{background:#dbeafe}.indent-1{}";
        assert!(inspect_stylesheet(full, &expectations).passed());

        let partial = inspect_stylesheet(".opener-cell{background:#d1fae5}", &expectations);
        assert_eq!(
            partial,
            StyleReport {
                opener: true,
                responder: false,
                indentation: false
            }
        );
        assert!(!partial.passed());
    }

    #[test]
    fn summary_passes_at_threshold() {
        let summary = Summary {
            found: 18,
            expected: 22,
            threshold: 18,
        };
        assert!(summary.passed());
        assert!(summary.to_string().ends_with("Status: ✓ PASS"));
    }
}
