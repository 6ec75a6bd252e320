use pixy_engine::clamp_dimension;

use crate::{transform::resize_reflow, Color, EditorChange, EngineError, GridEditor, PixelBuffer, Result, GRID_SPACING_OPTIONS};

impl GridEditor {
    /// Resize the grid. The content is discarded and the grid is rebuilt
    /// filled with the background color.
    ///
    /// Both values are clamped to the allowed grid size first. With the
    /// aspect ratio lock on, the dimension that changed wins; if both
    /// changed, rows win. Nothing is committed if the size stays the same.
    pub fn set_dimensions(&mut self, rows: i32, columns: i32) -> Result<()> {
        let (mut rows, mut columns) = (clamp_dimension(rows), clamp_dimension(columns));
        if self.maintain_aspect_ratio {
            if rows != self.rows() {
                columns = rows;
            } else if columns != self.columns() {
                rows = columns;
            }
        }
        if (rows, columns) == self.dimensions() {
            return Ok(());
        }

        self.buffer = resize_reflow(&self.buffer, rows, columns, self.background_color)?;
        self.current_coordinates = None;
        self.commit("Resize grid", EditorChange::Dimensions);
        Ok(())
    }

    pub fn set_rows(&mut self, rows: i32) -> Result<()> {
        self.set_dimensions(rows, self.columns())
    }

    pub fn set_columns(&mut self, columns: i32) -> Result<()> {
        self.set_dimensions(self.rows(), columns)
    }

    /// Change the grid spacing. The grid is rebuilt filled with the background
    /// color. Undo restores the previous spacing together with the grid.
    pub fn set_spacing(&mut self, spacing: i32) -> Result<()> {
        if !GRID_SPACING_OPTIONS.contains(&spacing) {
            log::warn!("set_spacing rejected: {spacing} is not one of {GRID_SPACING_OPTIONS:?}");
            return Err(EngineError::InvalidSpacing { spacing });
        }
        if spacing == self.grid_spacing {
            return Ok(());
        }

        self.buffer = PixelBuffer::new(self.rows(), self.columns(), self.background_color)?;
        self.grid_spacing = spacing;
        self.current_coordinates = None;
        self.commit("Change grid spacing", EditorChange::Spacing);
        Ok(())
    }

    /// Change the background color. Cells that had the old background color
    /// are repainted with the new one.
    pub fn set_background_color(&mut self, color: Color) -> Result<()> {
        if color == self.background_color {
            return Ok(());
        }

        let old = self.background_color;
        let cells = self
            .buffer
            .cells()
            .iter()
            .map(|row| row.iter().map(|&c| if c == old { color } else { c }).collect())
            .collect();
        self.buffer = PixelBuffer::from_rows(cells)?;
        self.background_color = color;
        self.commit("Change background", EditorChange::Background);
        Ok(())
    }

    /// Clear the grid to the background color and start a fresh history.
    pub fn reset(&mut self) -> Result<()> {
        self.buffer = PixelBuffer::new(self.rows(), self.columns(), self.background_color)?;
        self.current_coordinates = None;
        self.seed_history();
        log::debug!("Reset {}x{} grid", self.rows(), self.columns());
        self.listeners.notify(EditorChange::Reset);
        Ok(())
    }
}
