//! HTML table extraction.
//!
//! Walks every `<table>` of a document and builds one [`Record`] per table.
//! The algorithm, per table:
//!
//! 1. Column names come from the `<th>` cells of the first row that has any.
//!    They never change afterwards.
//! 2. Rows without `<td>` cells (header or spacer rows) contribute nothing.
//! 3. A row whose `<td>` count differs from the column count is skipped and
//!    reported as a [`RowMismatch`]. A table without a header therefore
//!    yields an empty record.
//! 4. Otherwise each cell is appended to its column, by position.
//!
//! # Example
//!
//! ```rust
//! use tablescrape::document::HtmlDocument;
//! use tablescrape::table::{TableExtractor, TextCells};
//!
//! let doc = HtmlDocument::parse(
//!     "<table><tr><th>Name</th><th>Age</th></tr><tr><td>Ann</td><td>30</td></tr></table>",
//! );
//! let out = TableExtractor::new().extract(&doc.root(), &TextCells).unwrap();
//! assert_eq!(out.tables[0].get("Name").unwrap(), ["Ann"]);
//! ```

pub mod cell;
pub mod record;

pub use cell::{Cell, CellMode, CellSelector, RawCells, TextCells};
pub use record::{Column, Extraction, Record, RowMismatch};

use tracing::{debug, warn};

use crate::document::Node;
use crate::error::Result;

/// Extracts every table of a document.
///
/// Stateless: each call processes one document and tables never influence
/// one another.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableExtractor;

impl TableExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all tables below `root`, converting cells with `selector`.
    ///
    /// Fails only when the document cannot be searched; data problems in
    /// individual rows are collected in [`Extraction::mismatches`].
    pub fn extract<N, S>(&self, root: &N, selector: &S) -> Result<Extraction<S::Value>>
    where
        N: Node,
        S: CellSelector<N>,
    {
        let mut tables = Vec::new();
        let mut mismatches = Vec::new();

        for (index, table) in root.find_all("table")?.iter().enumerate() {
            tables.push(self.extract_table(index, table, selector, &mut mismatches)?);
        }

        debug!(
            tables = tables.len(),
            skipped_rows = mismatches.len(),
            "extraction finished"
        );
        Ok(Extraction { tables, mismatches })
    }

    /// Extract with the cell representation chosen by a flag.
    pub fn extract_cells<N: Node>(
        &self,
        root: &N,
        keep_raw_cells: bool,
    ) -> Result<Extraction<Cell<N>>> {
        self.extract(root, &CellMode { keep_raw_cells })
    }

    fn extract_table<N, S>(
        &self,
        index: usize,
        table: &N,
        selector: &S,
        mismatches: &mut Vec<RowMismatch>,
    ) -> Result<Record<S::Value>>
    where
        N: Node,
        S: CellSelector<N>,
    {
        let mut record: Option<Record<S::Value>> = None;

        for (row_index, row) in table.find_all("tr")?.iter().enumerate() {
            if record.is_none() {
                let header = row.find_all("th")?;
                if !header.is_empty() {
                    record = Some(Record::with_columns(
                        header.iter().map(Node::text_content),
                    ));
                }
            }

            let cells = row.find_all("td")?;
            if cells.is_empty() {
                continue;
            }

            let expected = record.as_ref().map_or(0, |r| r.columns().len());
            match record.as_mut() {
                Some(record) if cells.len() == expected => {
                    record.push_row(cells.into_iter().map(|c| selector.select(c)).collect());
                }
                _ => {
                    let mismatch = RowMismatch {
                        table: index,
                        row: row_index,
                        observed: cells.len(),
                        expected,
                    };
                    warn!(
                        table = mismatch.table,
                        row = mismatch.row,
                        observed = mismatch.observed,
                        expected = mismatch.expected,
                        "column count mismatch, skipping row"
                    );
                    mismatches.push(mismatch);
                }
            }
        }

        Ok(record.unwrap_or_else(|| {
            debug!(table = index, "no header row found");
            Record::headerless()
        }))
    }
}

/// Parse `markup` and extract its tables as text.
pub fn extract_text_tables(markup: &str) -> Result<Extraction<String>> {
    let doc = crate::document::HtmlDocument::parse(markup);
    TableExtractor::new().extract(&doc.root(), &TextCells)
}
