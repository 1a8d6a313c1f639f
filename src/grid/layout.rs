//! Column layout - per-column display widths over jagged rows

use crate::cell::Cell;

/// Compute the display width of every column in a single pass.
///
/// The result has one entry per column of the longest row. Short rows
/// contribute nothing to the columns they lack.
pub fn column_widths(rows: &[Vec<Cell>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();

    for row in rows {
        for (j, cell) in row.iter().enumerate() {
            match widths.get_mut(j) {
                Some(width) => *width = (*width).max(cell.width()),
                None => widths.push(cell.width()),
            }
        }
    }

    widths
}

/// Total display width of a rendered line for the given column widths
pub fn line_width(widths: &[usize]) -> usize {
    // One border per column plus the closing one, one margin each side
    widths.iter().map(|w| w + 3).sum::<usize>() + 1
}
