//! Markdown tables.
//!
//! With the `pretty-tables` feature, tables are laid out by `tabled`;
//! otherwise a plain pipe-table formatter is used. Both produce valid
//! GitHub-flavoured markdown.

use crate::issues::Category;
use crate::stats::CategoryCounts;

/// Text emitted in place of an empty table or a missing value.
pub const NO_DATA: &str = "No data";

/// A markdown table built row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    /// Creates an empty table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a two-column `name | Count` table from category counts.
    #[must_use]
    pub fn from_counts<K: Category>(name: &str, counts: &CategoryCounts<K>) -> Self {
        let mut table = Self::new([name, "Count"]);
        for (label, count) in counts.labelled() {
            table.push_row([label, count.to_string()]);
        }
        table
    }

    /// Appends a row. Missing cells render empty; extra cells are dropped.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = row
            .into_iter()
            .take(self.headers.len())
            .map(|cell| escape_cell(&cell.into()))
            .collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Renders the table, or [`NO_DATA`] if it has no rows.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_DATA.to_string();
        }
        self.layout()
    }

    /// Renders with the plain pipe-table formatter regardless of features.
    #[must_use]
    pub fn render_plain(&self) -> String {
        if self.is_empty() {
            return NO_DATA.to_string();
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        let headers: Vec<String> = self.headers.iter().map(|h| escape_cell(h)).collect();
        lines.push(format!("| {} |", headers.join(" | ")));
        lines.push(format!("| {} |", vec!["---"; self.headers.len()].join(" | ")));
        for row in &self.rows {
            lines.push(format!("| {} |", row.join(" | ")));
        }
        lines.join("\n")
    }

    #[cfg(feature = "pretty-tables")]
    fn layout(&self) -> String {
        use tabled::{builder::Builder, settings::Style};

        let mut builder = Builder::default();
        builder.push_record(self.headers.iter().map(|h| escape_cell(h)));
        for row in &self.rows {
            builder.push_record(row.iter().cloned());
        }

        let mut table = builder.build();
        table.with(Style::markdown());
        table.to_string()
    }

    #[cfg(not(feature = "pretty-tables"))]
    fn layout(&self) -> String {
        self.render_plain()
    }
}

/// Escapes pipes and flattens line breaks so a cell stays on one row.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\r', '\n'], " ")
}
