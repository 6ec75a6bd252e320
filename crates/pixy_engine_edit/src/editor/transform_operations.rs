use crate::{EditorChange, GridEditor, Result, Transform};

impl GridEditor {
    /// Apply a whole-grid transform as one history step
    pub fn apply_transform(&mut self, transform: Transform) -> Result<()> {
        let buffer = transform.apply(&self.buffer, self.background_color)?;
        let dimensions_changed = buffer.dimensions() != self.dimensions();
        self.buffer = buffer;
        self.current_coordinates = None;
        let change = if dimensions_changed { EditorChange::Dimensions } else { EditorChange::Cells };
        self.commit(transform.description(), change);
        Ok(())
    }

    pub fn flip_vertical(&mut self) -> Result<()> {
        self.apply_transform(Transform::FlipVertical)
    }

    pub fn flip_horizontal(&mut self) -> Result<()> {
        self.apply_transform(Transform::FlipHorizontal)
    }

    pub fn rotate90(&mut self) -> Result<()> {
        self.apply_transform(Transform::Rotate90)
    }

    pub fn center_content(&mut self) -> Result<()> {
        self.apply_transform(Transform::CenterContent)
    }
}
