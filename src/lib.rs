//! `tablescrape` - HTML tables as named-column records
//!
//! # Features
//!
//! - **Extraction**: every `<table>` becomes a [`Record`], column name to values
//! - **Header inference**: column names from the first row with `<th>` cells
//! - **Tolerant rows**: malformed rows are skipped and reported, never fatal
//! - **Raw cells**: optionally keep cell nodes to read links and attributes
//! - **Coercion**: currency, percent, integer and date columns to typed values
//!
//! # Example
//!
//! ```rust
//! use tablescrape::{HtmlDocument, TableExtractor, TextCells};
//!
//! let doc = HtmlDocument::parse(
//!     "<table>\
//!        <tr><th>Name</th><th>Age</th></tr>\
//!        <tr><td>Ann</td><td>30</td></tr>\
//!        <tr><td>Bob</td><td>25</td><td>extra</td></tr>\
//!      </table>",
//! );
//! let out = TableExtractor::new().extract(&doc.root(), &TextCells)?;
//! assert_eq!(out.tables[0].get("Name").unwrap(), ["Ann"]);
//! assert_eq!(out.mismatches[0].observed, 3);
//! # Ok::<(), tablescrape::ScrapeError>(())
//! ```

pub mod coerce;
pub mod config;
pub mod document;
pub mod error;
pub mod http_client;
pub mod render;
pub mod source;
pub mod table;

pub use coerce::{coerce_record, ColumnKind, ColumnRules, Value};
pub use config::Config;
pub use document::{HtmlDocument, Node};
pub use error::{Result, ScrapeError};
pub use http_client::PageClient;
pub use render::OutputFormat;
pub use source::Source;
pub use table::{
    extract_text_tables, Cell, CellSelector, Extraction, RawCells, Record, RowMismatch,
    TableExtractor, TextCells,
};

/// Version of tablescrape
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
