//! The pixel grid.
//!
//! `PixelBuffer` is a plain value container: it validates addresses and
//! dimensions and nothing else. Painting policy lives in the editor and in
//! the transform functions.

use crate::{is_within_limits, CellPosition, Color, EngineError, Result, DEFAULT_GRID_SIZE};

/// A `rows × columns` grid of colors stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    rows: i32,
    columns: i32,
    cells: Vec<Vec<Color>>,
}

impl Default for PixelBuffer {
    /// A 16×16 grid filled with the default background color.
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            columns: DEFAULT_GRID_SIZE,
            cells: vec![vec![Color::default(); DEFAULT_GRID_SIZE as usize]; DEFAULT_GRID_SIZE as usize],
        }
    }
}

impl PixelBuffer {
    /// Create a buffer with every cell set to `fill`.
    pub fn new(rows: i32, columns: i32, fill: Color) -> Result<Self> {
        if !is_within_limits(rows, columns) {
            return Err(EngineError::InvalidDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![vec![fill; columns as usize]; rows as usize],
        })
    }

    /// Build a buffer from row data. All rows must have the same, valid length.
    pub fn from_rows(cells: Vec<Vec<Color>>) -> Result<Self> {
        let rows = cells.len() as i32;
        let columns = cells.first().map_or(0, Vec::len) as i32;
        if !is_within_limits(rows, columns) || cells.iter().any(|row| row.len() as i32 != columns) {
            return Err(EngineError::InvalidDimension { rows, columns });
        }
        Ok(Self { rows, columns, cells })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (i32, i32) {
        (self.rows, self.columns)
    }

    pub fn contains(&self, row: i32, column: i32) -> bool {
        row >= 0 && row < self.rows && column >= 0 && column < self.columns
    }

    fn check_bounds(&self, row: i32, column: i32) -> Result<()> {
        if self.contains(row, column) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    pub fn get(&self, row: i32, column: i32) -> Result<Color> {
        self.check_bounds(row, column)?;
        Ok(self.cells[row as usize][column as usize])
    }

    pub fn set(&mut self, row: i32, column: i32, color: Color) -> Result<()> {
        self.check_bounds(row, column)?;
        self.cells[row as usize][column as usize] = color;
        Ok(())
    }

    /// Get a whole row, `None` if out of range.
    pub fn row(&self, row: i32) -> Option<&[Color]> {
        usize::try_from(row).ok().and_then(|r| self.cells.get(r)).map(Vec::as_slice)
    }

    /// Get all rows (read-only)
    pub fn cells(&self) -> &[Vec<Color>] {
        &self.cells
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPosition, Color)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &color)| (CellPosition::new(r as i32, c as i32), color))
        })
    }

    /// Number of cells equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == color).count()
    }

    /// Take a deep copy for the history log.
    pub fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            buffer: self.clone(),
            background: None,
            spacing: None,
        }
    }
}

/// An immutable copy of a [`PixelBuffer`] stored in the history.
///
/// Optionally carries the background color and the grid spacing that were
/// current when the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    buffer: PixelBuffer,
    background: Option<Color>,
    spacing: Option<i32>,
}

impl HistoryEntry {
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn spacing(&self) -> Option<i32> {
        self.spacing
    }

    pub fn dimensions(&self) -> (i32, i32) {
        self.buffer.dimensions()
    }

    /// Get an owned copy of the stored buffer to restore as live state.
    pub fn restore(&self) -> PixelBuffer {
        self.buffer.clone()
    }
}
