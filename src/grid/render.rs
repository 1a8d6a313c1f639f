//! Grid rendering - splitters, rows and padded cells
//!
//! Output follows the MySQL client's result layout:
//!
//! ```text
//! +---+------+
//! | a | b    |   <- row 0 is always the header
//! +---+------+
//! | 3 | NULL |
//! +---+------+   <- only emitted when body rows exist
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{GridError, Result};

/// How `Grid::render` hands back its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// A single string with lines joined by `\n`
    #[default]
    #[serde(alias = "str", alias = "string")]
    Joined,
    /// One string per line
    #[serde(alias = "list")]
    Lines,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Joined => "joined",
            OutputMode::Lines => "lines",
        }
    }
}

impl FromStr for OutputMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "joined" | "str" | "string" => Ok(OutputMode::Joined),
            "lines" | "list" => Ok(OutputMode::Lines),
            other => Err(GridError::InvalidOutputMode(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Joined(String),
    Lines(Vec<String>),
}

impl Rendered {
    pub(crate) fn from_lines(lines: Vec<String>, mode: OutputMode) -> Self {
        match mode {
            OutputMode::Joined => Rendered::Joined(lines.join("\n")),
            OutputMode::Lines => Rendered::Lines(lines),
        }
    }

    pub fn mode(&self) -> OutputMode {
        match self {
            Rendered::Joined(_) => OutputMode::Joined,
            Rendered::Lines(_) => OutputMode::Lines,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Rendered::Joined(s) => s,
            Rendered::Lines(lines) => lines.join("\n"),
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            Rendered::Joined(s) => s.lines().map(str::to_string).collect(),
            Rendered::Lines(lines) => lines,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Joined(s) => f.write_str(s),
            Rendered::Lines(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    f.write_str(line)?;
                }
                Ok(())
            }
        }
    }
}

/// Horizontal splitter, e.g. `+---+------+`
pub fn render_splitter(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// One table row. Columns the row doesn't reach are rendered blank.
pub fn render_row(row: &[Cell], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (j, &width) in widths.iter().enumerate() {
        match row.get(j) {
            Some(cell) => push_cell(&mut line, cell, width),
            None => push_blank(&mut line, width),
        }
        line.push('|');
    }
    line
}

/// A cell padded to `column_width`, with one space of margin each side
pub fn render_cell(cell: &Cell, column_width: usize) -> String {
    let mut out = String::new();
    push_cell(&mut out, cell, column_width);
    out
}

fn push_cell(out: &mut String, cell: &Cell, column_width: usize) {
    let spaces = column_width.saturating_sub(cell.width());
    let (before, after) = cell.align().split_padding(spaces);

    out.push(' ');
    push_spaces(out, before);
    out.push_str(cell.text());
    push_spaces(out, after);
    out.push(' ');
}

fn push_blank(out: &mut String, column_width: usize) {
    push_spaces(out, column_width + 2);
}

fn push_spaces(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::display_width;

    #[test]
    fn test_splitter() {
        assert_eq!(render_splitter(&[1]), "+---+");
        assert_eq!(render_splitter(&[0, 3]), "+--+-----+");
        assert_eq!(render_splitter(&[]), "+");
    }

    #[test]
    fn test_cell_alignment() {
        assert_eq!(render_cell(&Cell::left("ab"), 5), " ab    ");
        assert_eq!(render_cell(&Cell::right("ab"), 5), "    ab ");
        assert_eq!(render_cell(&Cell::center("ab"), 6), "   ab   ");
        assert_eq!(render_cell(&Cell::center("world"), 15), "      world      ");
    }

    #[test]
    fn test_center_odd_padding() {
        // Width 3 in a column of 4: nothing before, one after
        assert_eq!(render_cell(&Cell::center("abc"), 4), " abc  ");
        // Width 1 in a column of 4: one before, two after
        assert_eq!(render_cell(&Cell::center("x"), 4), "  x   ");
    }

    #[test]
    fn test_cell_exact_width() {
        for align in [crate::Align::Left, crate::Align::Right, crate::Align::Center] {
            assert_eq!(render_cell(&Cell::new("abc", align), 3), " abc ");
        }
    }

    #[test]
    fn test_wide_cell() {
        let rendered = render_cell(&Cell::left("女神様"), 6);
        assert_eq!(rendered, " 女神様 ");
        assert_eq!(display_width(&rendered), 8);

        let rendered = render_cell(&Cell::right("-3"), 6);
        assert_eq!(rendered, "     -3 ");
    }

    #[test]
    fn test_row_with_missing_cells() {
        let row = vec![Cell::left("a"), Cell::left("bb")];
        assert_eq!(render_row(&row, &[5, 2, 5]), "| a     | bb |       |");
        assert_eq!(render_row(&[], &[1, 0]), "|   |  |");
    }

    #[test]
    fn test_output_mode_names() {
        assert_eq!("str".parse::<OutputMode>().unwrap(), OutputMode::Joined);
        assert_eq!("joined".parse::<OutputMode>().unwrap(), OutputMode::Joined);
        assert_eq!("list".parse::<OutputMode>().unwrap(), OutputMode::Lines);
        assert_eq!("lines".parse::<OutputMode>().unwrap(), OutputMode::Lines);

        let err = "table".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, GridError::InvalidOutputMode(ref m) if m == "table"));
    }

    #[test]
    fn test_rendered_conversions() {
        let lines = vec!["+---+".to_string(), "| x |".to_string(), "+---+".to_string()];

        let joined = Rendered::from_lines(lines.clone(), OutputMode::Joined);
        assert_eq!(joined.mode(), OutputMode::Joined);
        assert_eq!(joined.to_string(), "+---+\n| x |\n+---+");
        assert_eq!(joined.into_lines(), lines);

        let split = Rendered::from_lines(lines.clone(), OutputMode::Lines);
        assert_eq!(split.to_string(), "+---+\n| x |\n+---+");
        assert_eq!(split.into_string(), "+---+\n| x |\n+---+");
    }
}
