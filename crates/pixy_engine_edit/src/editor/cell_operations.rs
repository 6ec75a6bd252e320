use crate::{CellPosition, EditorChange, GridEditor, Result};

impl GridEditor {
    /// Toggle the block anchored at `(row, column)` between the drawing and
    /// the background color.
    ///
    /// The anchor cell decides the new color: if it already has the drawing
    /// color the whole `spacing × spacing` block goes back to the background,
    /// otherwise the whole block takes the drawing color. The block is
    /// clipped to the grid.
    pub fn paint_cell(&mut self, row: i32, column: i32) -> Result<()> {
        let anchor = match self.buffer.get(row, column) {
            Ok(color) => color,
            Err(err) => {
                log::warn!("paint_cell rejected: {err}");
                return Err(err);
            }
        };
        let next = if anchor == self.drawing_color {
            self.background_color
        } else {
            self.drawing_color
        };

        let mut buffer = self.buffer.clone();
        let row_end = row.saturating_add(self.grid_spacing).min(buffer.rows());
        let column_end = column.saturating_add(self.grid_spacing).min(buffer.columns());
        for r in row..row_end {
            for c in column..column_end {
                buffer.set(r, c, next)?;
            }
        }

        self.buffer = buffer;
        self.current_coordinates = Some(CellPosition::new(row, column));
        self.commit("Paint cell", EditorChange::Cells);
        Ok(())
    }

    /// Paint the block at block coordinates, see [`GridEditor::block_anchor`].
    pub fn paint_block(&mut self, block_row: i32, block_column: i32) -> Result<()> {
        let anchor = self.block_anchor(block_row, block_column)?;
        self.paint_cell(anchor.row, anchor.column)
    }
}
