//! Typed post-processing of text cells.
//!
//! Statistics pages format numbers for people: thousands separators,
//! currency signs, percentages, US-style dates. These helpers turn such
//! cells into typed [`Value`]s, column by column, according to
//! [`ColumnRules`]. Columns without a rule stay text.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::document::Node;
use crate::error::{Result, ScrapeError};
use crate::table::Record;

/// Date format used when a rule says `date` without a format.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// How the cells of one column should be read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnKind {
    #[default]
    Text,
    /// `1,234` -> 1234
    Integer,
    /// `$1,234` -> 1234
    Currency,
    /// `95.5%` -> 0.955
    Percent,
    /// Parsed with the given chrono format string.
    Date(String),
}

impl FromStr for ColumnKind {
    type Err = ScrapeError;

    /// Accepts `text`, `integer`/`int`, `currency`, `percent`, `date` and
    /// `date:<format>`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        // The format string keeps its case: `%m` and `%M` differ.
        if let Some((prefix, format)) = trimmed.split_once(':') {
            if prefix.trim().eq_ignore_ascii_case("date") {
                return Ok(Self::Date(format.to_string()));
            }
        }
        match lower.as_str() {
            "text" => Ok(Self::Text),
            "integer" | "int" => Ok(Self::Integer),
            "currency" => Ok(Self::Currency),
            "percent" => Ok(Self::Percent),
            "date" => Ok(Self::Date(DEFAULT_DATE_FORMAT.to_string())),
            _ => Err(ScrapeError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Integer => f.write_str("integer"),
            Self::Currency => f.write_str("currency"),
            Self::Percent => f.write_str("percent"),
            Self::Date(format) if format == DEFAULT_DATE_FORMAT => f.write_str("date"),
            Self::Date(format) => write!(f, "date:{format}"),
        }
    }
}

impl Serialize for ColumnKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColumnKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Column name -> kind.
pub type ColumnRules = BTreeMap<String, ColumnKind>;

/// A typed cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

pub fn parse_integer(cell: &str) -> Option<i64> {
    cell.trim().replace(',', "").parse().ok()
}

/// Whole currency units; cents are not expected on the pages this targets.
pub fn parse_currency(cell: &str) -> Option<i64> {
    let cleaned: String = cell.trim().chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.parse().ok()
}

/// Percentage as a fraction.
pub fn parse_percent(cell: &str) -> Option<f64> {
    let value: f64 = cell.trim().trim_end_matches('%').trim().parse().ok()?;
    Some(value / 100.0)
}

pub fn parse_date(cell: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(cell.trim(), format).ok()
}

/// Read one cell as `kind`, or `None` if it does not parse.
pub fn coerce_cell(cell: &str, kind: &ColumnKind) -> Option<Value> {
    match kind {
        ColumnKind::Text => Some(Value::Text(cell.to_string())),
        ColumnKind::Integer => parse_integer(cell).map(Value::Integer),
        ColumnKind::Currency => parse_currency(cell).map(Value::Integer),
        ColumnKind::Percent => parse_percent(cell).map(Value::Float),
        ColumnKind::Date(format) => parse_date(cell, format).map(Value::Date),
    }
}

/// Apply `rules` to every column of `record`.
///
/// Fails on the first cell that does not match its column's kind.
pub fn coerce_record(record: &Record<String>, rules: &ColumnRules) -> Result<Record<Value>> {
    record.try_map_values(|column, row, cell| {
        let kind = rules.get(column).cloned().unwrap_or_default();
        coerce_cell(cell, &kind).ok_or_else(|| ScrapeError::Coerce {
            column: column.to_string(),
            row,
            value: cell.clone(),
            kind: kind.to_string(),
        })
    })
}

/// Target of the first link inside a raw cell.
///
/// Relative links are resolved against `base` when one is given; without a
/// base they are returned as written.
pub fn cell_link(cell: &ElementRef<'_>, base: Option<&Url>) -> Option<String> {
    let href = cell
        .find_all("a")
        .ok()?
        .into_iter()
        .find_map(|a| a.value().attr("href").map(str::to_string))?;

    match base {
        Some(base) => base.join(&href).ok().map(String::from),
        None => Some(href),
    }
}
