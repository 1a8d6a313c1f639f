//! strgrid - MySQL-style ASCII string grid formatter
//!
//! The MySQL client formats query results into a table like this:
//!
//! ```text
//! +---+------+------+---+
//! | a | b    | c    | h |
//! +---+------+------+---+
//! | 3 | NULL | NULL | 0 |
//! | 4 | NULL |    2 | 0 |
//! +---+------+------+---+
//! ```
//!
//! strgrid renders a possibly jagged 2-D array of cells the same way.
//! Column widths are measured in terminal columns, so wide (CJK) and
//! zero-width characters line up.
//!
//! # Module Hierarchy
//!
//! ```text
//! src/
//! ├── cell.rs       - Cell and Align (display width measured once)
//! ├── grid/
//! │   ├── mod.rs    - Grid (validation, render, extract_text)
//! │   ├── layout.rs - Column width aggregation
//! │   ├── render.rs - Splitters, rows, padded cells, OutputMode
//! │   └── item.rs   - Loosely typed input
//! ├── config.rs     - TOML table documents
//! └── error.rs      - GridError
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;

pub use cell::{display_width, Align, Cell};
pub use config::Document;
pub use error::{GridError, Result};
pub use grid::{CellSpec, Grid, Item, OutputMode, Rendered};

/// The sample table shown by the demo binary.
///
/// ```text
/// +--------+------------------+-----------------+
/// | hello  |                  |      world      |
/// +--------+------------------+-----------------+
/// | 女神様 | 綾波 レイ        |                 |
/// |     -3 | 3141592653589793 | Fate/Round Face |
/// +--------+------------------+-----------------+
/// ```
pub fn sample() -> Result<Grid> {
    Grid::new(vec![
        vec![Cell::left("hello"), Cell::left(""), Cell::center("world")],
        vec![Cell::left("女神様"), Cell::left("綾波 レイ")],
        vec![
            Cell::right("-3"),
            Cell::right("3141592653589793"),
            Cell::left("Fate/Round Face"),
        ],
    ])
}
