use std::path::PathBuf;

use crate::{BitmapDescriptor, GridEditor, ImageFormat, ImageSaver, RenderOptions, Result};

impl GridEditor {
    /// Describe the live grid for a renderer.
    ///
    /// Without `opaque_background`, cells in the background color are
    /// marked transparent.
    pub fn export_bitmap(&self, opaque_background: bool) -> BitmapDescriptor {
        BitmapDescriptor::from_buffer(&self.buffer, self.background_color, !opaque_background)
    }

    /// Encode the live grid. PNG keeps a transparent background, JPEG is opaque.
    pub fn render(&self, format: ImageFormat, options: &RenderOptions) -> Result<Vec<u8>> {
        let bitmap = self.export_bitmap(!format.supports_transparency());
        format.render(&bitmap, options)
    }

    /// Encode the live grid and hand it to `saver`, named after the grid.
    /// Editor state is never touched, even on failure.
    pub fn export(&self, format: ImageFormat, options: &RenderOptions, saver: &dyn ImageSaver) -> Result<PathBuf> {
        let bytes = self.render(format, options)?;
        match saver.save(&self.appearance.grid_name, format, &bytes) {
            Ok(path) => {
                log::debug!("Exported {} as {format} to {}", self.appearance.grid_name, path.display());
                Ok(path)
            }
            Err(err) => {
                log::error!("Export of {} failed: {err}", self.appearance.grid_name);
                Err(err)
            }
        }
    }
}
