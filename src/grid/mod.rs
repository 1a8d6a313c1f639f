//! Grid - the 2-D table of cells and its renderer
//!
//! - **layout**: per-column display widths over jagged rows
//! - **render**: splitter, row and cell rendering
//! - **item**: loosely typed input checked into cells
//!
//! # Example
//!
//! ```
//! use strgrid::{Cell, Grid, OutputMode};
//!
//! let grid = Grid::new(vec![
//!     vec![Cell::left("id"), Cell::left("name")],
//!     vec![Cell::right("1"), Cell::left("Alice")],
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     grid.render(OutputMode::Lines).into_lines(),
//!     vec![
//!         "+----+-------+",
//!         "| id | name  |",
//!         "+----+-------+",
//!         "|  1 | Alice |",
//!         "+----+-------+",
//!     ]
//! );
//! ```

pub mod item;
pub mod layout;
pub mod render;

use std::fmt;

use tracing::{debug, trace};

use crate::cell::{Align, Cell};
use crate::error::{GridError, Result};

pub use item::{CellSpec, Item};
pub use render::{OutputMode, Rendered};

/// An immutable table of cells with precomputed column widths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    column_widths: Vec<usize>,
}

impl Grid {
    /// Build a grid from rows of cells. Rows may differ in length.
    ///
    /// Fails with `EmptyGrid` when there are no rows or every row is empty.
    pub fn new<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Cell>,
    {
        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();

        if rows.is_empty() {
            debug!("Rejecting grid with no rows");
            return Err(GridError::EmptyGrid);
        }

        let column_widths = layout::column_widths(&rows);
        if column_widths.is_empty() {
            debug!("Rejecting grid with {} empty rows", rows.len());
            return Err(GridError::EmptyGrid);
        }

        debug!(
            "Grid created: {} rows, {} columns, widths {:?}",
            rows.len(),
            column_widths.len(),
            column_widths
        );

        Ok(Self { rows, column_widths })
    }

    /// Build a grid of left-aligned cells from plain strings
    pub fn from_strings<I, R, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(|s| Cell::left(s)).collect::<Vec<_>>()),
        )
    }

    /// Build a grid from loosely typed input, checking its shape first.
    ///
    /// Every top-level item must be a list (`InvalidRowType`), and every
    /// entry of a row must be a cell description (`InvalidCellType`).
    /// Cells without an alignment get `default_align`.
    pub fn from_items(items: &[Item], default_align: Align) -> Result<Self> {
        let rows = item::items_to_rows(items, default_align).map_err(|e| {
            debug!("Rejecting grid input: {}", e);
            e
        })?;
        Self::new(rows)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at (row, column), if that row reaches the column
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Display width of every rendered line
    pub fn line_width(&self) -> usize {
        layout::line_width(&self.column_widths)
    }

    /// Render the table.
    ///
    /// Row 0 is the header and is always followed by a splitter. Body
    /// rows, when present, are closed by one more splitter.
    pub fn render(&self, mode: OutputMode) -> Rendered {
        let splitter = render::render_splitter(&self.column_widths);
        let mut lines = Vec::with_capacity(self.rows.len() + 3);

        lines.push(splitter.clone());
        lines.push(render::render_row(&self.rows[0], &self.column_widths));
        lines.push(splitter.clone());

        if self.rows.len() > 1 {
            for row in &self.rows[1..] {
                lines.push(render::render_row(row, &self.column_widths));
            }
            lines.push(splitter);
        }

        trace!("Rendered {} lines as {}", lines.len(), mode);
        Rendered::from_lines(lines, mode)
    }

    /// Render with an output mode given by name (`str`/`joined` or `list`/`lines`)
    pub fn render_as(&self, mode: &str) -> Result<Rendered> {
        let mode = mode.parse::<OutputMode>()?;
        Ok(self.render(mode))
    }

    pub fn lines(&self) -> Vec<String> {
        self.render(OutputMode::Lines).into_lines()
    }

    /// Raw text of every cell, keeping the jagged row structure
    pub fn extract_text(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.text().to_string()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(OutputMode::Joined))
    }
}
