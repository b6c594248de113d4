//! Cell representation policy.
//!
//! A run either stores each data cell's text or the cell node itself (useful
//! when the markup carries information the text loses, e.g. links). The
//! choice is a type parameter of the extraction rather than a runtime branch
//! inside it.

use crate::document::Node;

/// Turns a data cell node into the value stored in a [`Record`](super::Record).
pub trait CellSelector<N: Node> {
    type Value;

    fn select(&self, cell: N) -> Self::Value;
}

/// Stores the cell's text content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCells;

impl<N: Node> CellSelector<N> for TextCells {
    type Value = String;

    fn select(&self, cell: N) -> String {
        cell.text_content()
    }
}

/// Stores the raw cell node.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCells;

impl<N: Node> CellSelector<N> for RawCells {
    type Value = N;

    fn select(&self, cell: N) -> N {
        cell
    }
}

/// A cell whose representation was picked at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<N> {
    Text(String),
    Raw(N),
}

impl<N: Node> Cell<N> {
    /// Text of the cell regardless of representation.
    pub fn text(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Raw(node) => node.text_content(),
        }
    }

    pub fn as_raw(&self) -> Option<&N> {
        match self {
            Cell::Raw(node) => Some(node),
            Cell::Text(_) => None,
        }
    }
}

/// Selects [`Cell::Raw`] or [`Cell::Text`] from a flag.
#[derive(Debug, Clone, Copy)]
pub struct CellMode {
    pub keep_raw_cells: bool,
}

impl<N: Node> CellSelector<N> for CellMode {
    type Value = Cell<N>;

    fn select(&self, cell: N) -> Cell<N> {
        if self.keep_raw_cells {
            Cell::Raw(cell)
        } else {
            Cell::Text(cell.text_content())
        }
    }
}
