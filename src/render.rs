//! Text renderings of extracted records.

use serde::Serialize;

use crate::error::Result;
use crate::table::Record;

/// Output format for rendered tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// GitHub-flavored markdown table per record
    #[default]
    Markdown,
    /// JSON array of `{column: [values]}` objects
    Json,
}

/// Render a record as a GitHub-flavored markdown table.
pub fn to_markdown<V: AsRef<str>>(record: &Record<V>) -> String {
    if record.is_empty() {
        return String::new();
    }

    let mut md = String::new();

    // Header row
    md.push('|');
    for name in record.column_names() {
        md.push_str(&format!(" {} |", escape_cell(name)));
    }
    md.push('\n');

    // Separator row
    md.push('|');
    for _ in record.columns() {
        md.push_str(" --- |");
    }
    md.push('\n');

    // Data rows
    for row in record.rows() {
        md.push('|');
        for cell in row {
            md.push_str(&format!(" {} |", escape_cell(cell.as_ref())));
        }
        md.push('\n');
    }

    md
}

/// Collapse whitespace and escape pipes so a cell stays on one table line.
fn escape_cell(cell: &str) -> String {
    cell.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

/// Render records as a pretty-printed JSON array.
pub fn to_json<V: Serialize>(records: &[Record<V>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
