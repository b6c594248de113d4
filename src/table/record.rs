//! Extracted table content.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One named column and its values, one per accepted data row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<V> {
    pub name: String,
    pub values: Vec<V>,
}

/// A table as an ordered mapping from column name to cell values.
///
/// Columns keep header order. All columns always hold the same number of
/// values. A header repeated within one row yields two columns with the same
/// name; [`Record::get`] returns the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<V> {
    columns: Vec<Column<V>>,
    header_found: bool,
}

impl<V> Record<V> {
    /// Record for a table that never produced a header row.
    pub fn headerless() -> Self {
        Self {
            columns: Vec::new(),
            header_found: false,
        }
    }

    /// Record with the given columns and no rows yet.
    pub fn with_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: names
                .into_iter()
                .map(|name| Column {
                    name: name.into(),
                    values: Vec::new(),
                })
                .collect(),
            header_found: true,
        }
    }

    /// Append one row. `values` must hold exactly one value per column.
    pub(crate) fn push_row(&mut self, values: Vec<V>) {
        debug_assert_eq!(values.len(), self.columns.len());
        for (column, value) in self.columns.iter_mut().zip(values) {
            column.values.push(value);
        }
    }

    /// Whether a header row was found for this table.
    ///
    /// Distinguishes a headerless table (whose rows were all discarded) from
    /// a table that is genuinely empty.
    pub fn header_found(&self) -> bool {
        self.header_found
    }

    pub fn columns(&self) -> &[Column<V>] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&[V]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Row-wise view: `rows()[i][j]` is row `i` of column `j`.
    pub fn rows(&self) -> Vec<Vec<&V>> {
        (0..self.row_count())
            .map(|i| self.columns.iter().map(|c| &c.values[i]).collect())
            .collect()
    }

    /// Convert every value, keeping names and shape.
    pub fn map_values<W>(self, mut f: impl FnMut(V) -> W) -> Record<W> {
        Record {
            columns: self
                .columns
                .into_iter()
                .map(|c| Column {
                    name: c.name,
                    values: c.values.into_iter().map(&mut f).collect(),
                })
                .collect(),
            header_found: self.header_found,
        }
    }

    /// Fallible conversion; `f` receives the column name and row index too.
    pub fn try_map_values<W, E>(
        &self,
        mut f: impl FnMut(&str, usize, &V) -> Result<W, E>,
    ) -> Result<Record<W>, E> {
        let mut columns = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let values = column
                .values
                .iter()
                .enumerate()
                .map(|(row, value)| f(&column.name, row, value))
                .collect::<Result<Vec<W>, E>>()?;
            columns.push(Column {
                name: column.name.clone(),
                values,
            });
        }
        Ok(Record {
            columns,
            header_found: self.header_found,
        })
    }
}

impl<V: Serialize> Serialize for Record<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.name, &column.values)?;
        }
        map.end()
    }
}

/// A data row skipped because its cell count differed from the header's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowMismatch {
    /// Index of the table in the document.
    pub table: usize,
    /// Index of the row among the table's `<tr>` elements.
    pub row: usize,
    /// Data cells found in the row.
    pub observed: usize,
    /// Column names resolved for the table.
    pub expected: usize,
}

impl std::fmt::Display for RowMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "table {} row {}: {} cells, expected {}",
            self.table, self.row, self.observed, self.expected
        )
    }
}

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct Extraction<V> {
    /// One record per `<table>`, in document order.
    pub tables: Vec<Record<V>>,
    /// Every row skipped for a column-count mismatch.
    pub mismatches: Vec<RowMismatch>,
}

impl<V> Extraction<V> {
    pub fn skipped_in(&self, table: usize) -> usize {
        self.mismatches.iter().filter(|m| m.table == table).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record<String> {
        let mut record = Record::with_columns(["Name", "Age"]);
        record.push_row(vec!["Ann".into(), "30".into()]);
        record.push_row(vec!["Bob".into(), "25".into()]);
        record
    }

    #[test]
    fn get_and_rows() {
        let record = sample();
        assert_eq!(record.get("Age").unwrap(), ["30", "25"]);
        assert!(record.get("Missing").is_none());
        assert_eq!(record.row_count(), 2);
        assert_eq!(record.rows()[1], [&"Bob".to_string(), &"25".to_string()]);
    }

    #[test]
    fn duplicate_names_resolve_to_first_column() {
        let mut record = Record::with_columns(["Gross", "Gross"]);
        record.push_row(vec![1, 2]);
        assert_eq!(record.get("Gross").unwrap(), [1]);
        assert_eq!(record.columns()[1].values, [2]);
    }

    #[test]
    fn headerless_record_is_empty_and_flagged() {
        let record: Record<String> = Record::headerless();
        assert!(record.is_empty());
        assert!(!record.header_found());
        assert_eq!(record.row_count(), 0);
        assert!(Record::<String>::with_columns(Vec::<String>::new()).header_found());
    }

    #[test]
    fn map_values_keeps_shape() {
        let lengths = sample().map_values(|v| v.len());
        assert_eq!(lengths.column_names(), ["Name", "Age"]);
        assert_eq!(lengths.get("Name").unwrap(), [3, 3]);
    }

    #[test]
    fn try_map_values_reports_position() {
        let err = sample()
            .try_map_values(|col, row, v| {
                if v == "25" {
                    Err(format!("{col}:{row}"))
                } else {
                    Ok(())
                }
            })
            .unwrap_err();
        assert_eq!(err, "Age:1");
    }

    #[test]
    fn serializes_as_ordered_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"Name":["Ann","Bob"],"Age":["30","25"]}"#);
    }
}
