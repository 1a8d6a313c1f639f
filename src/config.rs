//! Table documents - a grid and its render options described in TOML
//!
//! ```toml
//! # Output mode: joined (alias str) or lines (alias list)
//! output = "lines"
//!
//! # Alignment for cells that don't set one: left, right or center
//! align = "left"
//!
//! rows = [
//!   [{ text = "hello" }, { text = "" }, { text = "world", align = "center" }],
//!   [{ text = "a" }, { text = "bb" }],
//! ]
//! ```
//!
//! Option values are kept as plain strings while parsing so that an
//! unknown name surfaces as `InvalidOutputMode` / `InvalidAlignment`
//! rather than a generic parse error.

use serde::Deserialize;
use tracing::debug;

use crate::cell::Align;
use crate::error::Result;
use crate::grid::{Grid, Item, OutputMode, Rendered};

/// A table document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Output mode name
    pub output: Option<String>,
    /// Default alignment name
    pub align: Option<String>,
    /// Loosely typed rows
    pub rows: Vec<Item>,
}

impl Document {
    /// Parse a document from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let doc: Document = toml::from_str(content)?;
        debug!("Loaded document with {} rows", doc.rows.len());
        Ok(doc)
    }

    pub fn output_mode(&self) -> Result<OutputMode> {
        match &self.output {
            Some(name) => name.parse(),
            None => Ok(OutputMode::default()),
        }
    }

    pub fn default_align(&self) -> Result<Align> {
        match &self.align {
            Some(name) => name.parse(),
            None => Ok(Align::default()),
        }
    }

    /// Validate the rows into a grid
    pub fn grid(&self) -> Result<Grid> {
        Grid::from_items(&self.rows, self.default_align()?)
    }

    /// Build the grid and render it with the document's output mode
    pub fn render(&self) -> Result<Rendered> {
        let mode = self.output_mode()?;
        Ok(self.grid()?.render(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_full_document() {
        let doc = Document::from_toml_str(
            r#"
            output = "list"
            align = "right"
            rows = [
                [{ text = "hello" }, { text = "" }, { text = "world", align = "center" }],
                [{ text = "a" }, { text = "bb", align = "left" }],
            ]
            "#,
        )
        .unwrap();

        assert_eq!(doc.output_mode().unwrap(), OutputMode::Lines);
        assert_eq!(doc.default_align().unwrap(), Align::Right);

        let rendered = doc.render().unwrap();
        assert_eq!(
            rendered,
            Rendered::Lines(vec![
                "+-------+----+-------+".to_string(),
                "| hello |    | world |".to_string(),
                "+-------+----+-------+".to_string(),
                "|     a | bb |       |".to_string(),
                "+-------+----+-------+".to_string(),
            ])
        );
    }

    #[test]
    fn test_defaults() {
        let doc = Document::from_toml_str(r#"rows = [[{ text = "x" }]]"#).unwrap();
        assert_eq!(doc.output_mode().unwrap(), OutputMode::Joined);
        assert_eq!(doc.default_align().unwrap(), Align::Left);
        assert_eq!(
            doc.render().unwrap(),
            Rendered::Joined("+---+\n| x |\n+---+".to_string())
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::from_toml_str("").unwrap();
        assert!(matches!(doc.grid(), Err(GridError::EmptyGrid)));

        let doc = Document::from_toml_str("rows = [[], []]").unwrap();
        assert!(matches!(doc.grid(), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn test_invalid_options() {
        let doc = Document::from_toml_str(
            r#"
            output = "html"
            rows = [[{ text = "x" }]]
            "#,
        )
        .unwrap();
        assert!(matches!(doc.render(), Err(GridError::InvalidOutputMode(_))));

        let doc = Document::from_toml_str(
            r#"
            align = "middle"
            rows = [[{ text = "x" }]]
            "#,
        )
        .unwrap();
        assert!(matches!(doc.grid(), Err(GridError::InvalidAlignment(_))));
    }

    #[test]
    fn test_invalid_shapes() {
        let doc = Document::from_toml_str(r#"rows = [{ text = "bare" }]"#).unwrap();
        assert!(matches!(doc.grid(), Err(GridError::InvalidRowType { row: 0 })));

        let doc = Document::from_toml_str(r#"rows = [[{ text = "a" }], [{ text = "b" }, "c"]]"#)
            .unwrap();
        assert!(matches!(
            doc.grid(),
            Err(GridError::InvalidCellType { row: 1, column: 1 })
        ));

        let doc = Document::from_toml_str(r#"rows = [[{ text = 42 }]]"#).unwrap();
        assert!(matches!(doc.grid(), Err(GridError::InvalidTextType(_))));
    }

    #[test]
    fn test_parse_error() {
        let err = Document::from_toml_str("rows = [[").unwrap_err();
        assert!(matches!(err, GridError::Parse(_)));
    }
}
