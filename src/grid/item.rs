//! Loosely typed grid input
//!
//! `Item` mirrors data that arrives without a fixed shape, such as a
//! table read from a TOML document. `Grid::from_items` checks the shape
//! and turns it into cells.

use serde::Deserialize;

use crate::cell::{Align, Cell};
use crate::error::{GridError, Result};

/// One node of loosely typed grid input
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// A sequence of items. Tried first so that sequences are never
    /// read as cell descriptions.
    List(Vec<Item>),
    /// A cell description: `{ text = "...", align = "..." }`
    Cell(CellSpec),
    /// Anything else
    Other(toml::Value),
}

/// Untyped fields of a cell description
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellSpec {
    #[serde(default)]
    pub text: Option<toml::Value>,
    #[serde(default)]
    pub align: Option<toml::Value>,
}

impl CellSpec {
    pub fn new(text: &str, align: Align) -> Self {
        Self {
            text: Some(toml::Value::String(text.to_string())),
            align: Some(toml::Value::String(align.as_str().to_string())),
        }
    }

    /// Validate the fields into a cell; a missing align falls back to `default_align`
    pub fn to_cell(&self, default_align: Align) -> Result<Cell> {
        let align = match &self.align {
            None => default_align,
            Some(toml::Value::String(name)) => name.parse()?,
            Some(other) => return Err(GridError::InvalidAlignment(other.to_string())),
        };

        match &self.text {
            None => Ok(Cell::from_optional(None, align)),
            Some(toml::Value::String(text)) => Ok(Cell::new(text.as_str(), align)),
            Some(other) => Err(GridError::InvalidTextType(format!(
                "expected a string, found {}",
                other.type_str()
            ))),
        }
    }
}

impl From<Cell> for Item {
    fn from(cell: Cell) -> Self {
        Item::Cell(CellSpec::new(cell.text(), cell.align()))
    }
}

impl<T: Into<Item>> From<Vec<T>> for Item {
    fn from(items: Vec<T>) -> Self {
        Item::List(items.into_iter().map(Into::into).collect())
    }
}

/// Check the shape of `items` and convert it into rows of cells
pub(crate) fn items_to_rows(items: &[Item], default_align: Align) -> Result<Vec<Vec<Cell>>> {
    let mut rows = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let entries = match item {
            Item::List(entries) => entries,
            _ => return Err(GridError::InvalidRowType { row: i }),
        };

        let mut row = Vec::with_capacity(entries.len());
        for (j, entry) in entries.iter().enumerate() {
            match entry {
                Item::Cell(spec) => row.push(spec.to_cell(default_align)?),
                _ => return Err(GridError::InvalidCellType { row: i, column: j }),
            }
        }
        rows.push(row);
    }

    Ok(rows)
}
