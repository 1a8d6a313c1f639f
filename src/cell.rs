//! Cell - a single displayable entry in the grid
//!
//! A cell owns its text, an alignment, and the display width of the text.
//! The width is measured once when the cell is built and never changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::error::{GridError, Result};

/// Horizontal alignment of a cell within its column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }

    /// Split `spaces` padding columns into (before, after) the text.
    ///
    /// Centered text with an odd amount of padding gets the extra column
    /// on the right.
    pub fn split_padding(&self, spaces: usize) -> (usize, usize) {
        match self {
            Align::Left => (0, spaces),
            Align::Right => (spaces, 0),
            Align::Center => {
                let before = spaces / 2;
                (before, spaces - before)
            }
        }
    }
}

impl FromStr for Align {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Align::Left),
            "right" => Ok(Align::Right),
            "center" => Ok(Align::Center),
            other => Err(GridError::InvalidAlignment(other.to_string())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry that can be rendered as a cell in the grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    text: String,
    align: Align,
    width: usize,
}

impl Cell {
    /// Create a cell, measuring the display width of `text`
    pub fn new(text: impl Into<String>, align: Align) -> Self {
        let text = text.into();
        let width = display_width(&text);
        Self { text, align, width }
    }

    pub fn left(text: impl Into<String>) -> Self {
        Self::new(text, Align::Left)
    }

    pub fn right(text: impl Into<String>) -> Self {
        Self::new(text, Align::Right)
    }

    pub fn center(text: impl Into<String>) -> Self {
        Self::new(text, Align::Center)
    }

    /// Create a cell from optional text; absent text becomes an empty cell
    pub fn from_optional(text: Option<&str>, align: Align) -> Self {
        Self::new(text.unwrap_or_default(), align)
    }

    /// Create a cell from loosely typed parts, validating the alignment name
    pub fn parse(text: Option<&str>, align: &str) -> Result<Self> {
        let align = align.parse::<Align>()?;
        Ok(Self::from_optional(text, align))
    }

    /// Create a cell from raw bytes.
    ///
    /// Bytes are only accepted when they are well-formed UTF-8; encoded
    /// byte strings in any other encoding would be measured wrongly.
    pub fn from_bytes(bytes: &[u8], align: Align) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            GridError::InvalidTextType(format!("raw bytes are not valid UTF-8 ({})", e))
        })?;
        Ok(Self::new(text, align))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// Number of terminal columns the text occupies
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::left(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::left(text)
    }
}

/// Display width of `text` in terminal columns.
///
/// Wide characters count 2, combining marks 0. Control characters have
/// no defined width and count 0.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}
