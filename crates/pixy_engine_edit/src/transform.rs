//! Grid transforms
//!
//! Pure functions computing a new grid from an old one. None of them
//! mutate their input; the editor commits the result to the history.

use crate::{Color, PixelBuffer, Result};

/// Whole-grid transforms offered by the editor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Reverse the row order
    FlipVertical,
    /// Reverse every row
    FlipHorizontal,
    /// Rotate clockwise by 90 degrees, swapping rows and columns
    Rotate90,
    /// Move the drawn content to the middle of the grid
    CenterContent,
}

impl Transform {
    pub const ALL: &'static [Transform] = &[
        Transform::FlipVertical,
        Transform::FlipHorizontal,
        Transform::Rotate90,
        Transform::CenterContent,
    ];

    /// Get a description of this transform for display
    pub fn description(&self) -> &'static str {
        match self {
            Transform::FlipVertical => "Flip vertical",
            Transform::FlipHorizontal => "Flip horizontal",
            Transform::Rotate90 => "Rotate 90 degrees",
            Transform::CenterContent => "Center colored pixels",
        }
    }

    /// Compute the transformed grid. `background` tells drawn cells apart
    /// for [`Transform::CenterContent`].
    pub fn apply(&self, buffer: &PixelBuffer, background: Color) -> Result<PixelBuffer> {
        match self {
            Transform::FlipVertical => flip_vertical(buffer),
            Transform::FlipHorizontal => flip_horizontal(buffer),
            Transform::Rotate90 => rotate90(buffer),
            Transform::CenterContent => center_content(buffer, background),
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Reverse the row order.
pub fn flip_vertical(buffer: &PixelBuffer) -> Result<PixelBuffer> {
    let rows: Vec<Vec<Color>> = buffer.cells().iter().rev().cloned().collect();
    PixelBuffer::from_rows(rows)
}

/// Reverse the column order within every row.
pub fn flip_horizontal(buffer: &PixelBuffer) -> Result<PixelBuffer> {
    let rows: Vec<Vec<Color>> = buffer.cells().iter().map(|row| row.iter().rev().copied().collect()).collect();
    PixelBuffer::from_rows(rows)
}

/// Rotate clockwise: old `(i, j)` lands on `(j, rows - 1 - i)`.
pub fn rotate90(buffer: &PixelBuffer) -> Result<PixelBuffer> {
    let (rows, columns) = (buffer.rows() as usize, buffer.columns() as usize);
    let cells = buffer.cells();
    let rotated: Vec<Vec<Color>> = (0..columns).map(|j| (0..rows).map(|k| cells[rows - 1 - k][j]).collect()).collect();
    PixelBuffer::from_rows(rotated)
}

/// Smallest rectangle `(min_row, min_column, max_row, max_column)` holding
/// every cell that differs from `background`.
pub fn content_bounds(buffer: &PixelBuffer, background: Color) -> Option<(i32, i32, i32, i32)> {
    buffer.iter().filter(|(_, color)| *color != background).fold(None, |bounds, (pos, _)| {
        Some(match bounds {
            None => (pos.row, pos.column, pos.row, pos.column),
            Some((min_row, min_col, max_row, max_col)) => (
                min_row.min(pos.row),
                min_col.min(pos.column),
                max_row.max(pos.row),
                max_col.max(pos.column),
            ),
        })
    })
}

/// Center the bounding box of all non-background cells.
///
/// The result has the same dimensions and is filled with `background`
/// outside the moved box. Shifted cells falling outside the grid are dropped.
pub fn center_content(buffer: &PixelBuffer, background: Color) -> Result<PixelBuffer> {
    let (rows, columns) = buffer.dimensions();
    let mut result = PixelBuffer::new(rows, columns, background)?;
    let Some((min_row, min_col, max_row, max_col)) = content_bounds(buffer, background) else {
        return Ok(result);
    };

    let box_height = max_row - min_row + 1;
    let box_width = max_col - min_col + 1;
    let row_shift = (rows - box_height) / 2 - min_row;
    let col_shift = (columns - box_width) / 2 - min_col;

    for row in min_row..=max_row {
        for column in min_col..=max_col {
            let (target_row, target_col) = (row + row_shift, column + col_shift);
            if !result.contains(target_row, target_col) {
                log::warn!("center_content: dropping cell ({row}, {column}) shifted outside the grid");
                continue;
            }
            result.set(target_row, target_col, buffer.get(row, column)?)?;
        }
    }
    Ok(result)
}

/// Produce a background-filled grid of the new size. Content is not kept.
pub fn resize_reflow(_buffer: &PixelBuffer, new_rows: i32, new_columns: i32, background: Color) -> Result<PixelBuffer> {
    PixelBuffer::new(new_rows, new_columns, background)
}
