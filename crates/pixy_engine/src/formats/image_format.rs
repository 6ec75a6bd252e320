//! Image formats for exporting pixel art.
//!
//! Renders a [`BitmapDescriptor`] into encoded image bytes. Each grid cell
//! becomes a `cell_size × cell_size` square.
//!
//! # Example
//!
//! ```no_run
//! use pixy_engine::{BitmapDescriptor, Color, ImageFormat, PixelBuffer, RenderOptions};
//!
//! let buffer = PixelBuffer::new(16, 16, Color::GRAY).unwrap();
//! let bitmap = BitmapDescriptor::from_buffer(&buffer, Color::GRAY, true);
//! let png = ImageFormat::Png.render(&bitmap, &RenderOptions::default()).unwrap();
//! ```

use std::path::Path;

use image::codecs::{jpeg::JpegEncoder, png::PngEncoder};
use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::{BitmapDescriptor, BitmapPixel, Color, EngineError, Result};

/// Width in pixels of an exported image (a 300 point view rendered at 3x).
pub const DEFAULT_EXPORT_WIDTH: u32 = 900;

/// JPEG quality used for export, 0-100.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Largest exported image edge in pixels.
pub const MAX_EXPORT_DIMENSION: u32 = 16_384;

/// JPEG has no alpha channel; transparent pixels are flattened onto this.
pub const JPEG_MATTE: Color = Color::WHITE;

/// Image export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG image format - keeps per-pixel transparency
    Png,
    /// JPEG image format - always opaque
    Jpeg,
}

impl ImageFormat {
    /// All available image formats
    pub const ALL: &'static [ImageFormat] = &[ImageFormat::Png, ImageFormat::Jpeg];

    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// Get a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG Image",
            ImageFormat::Jpeg => "JPEG Image",
        }
    }

    /// Whether exported pixels may be transparent.
    pub fn supports_transparency(&self) -> bool {
        matches!(self, ImageFormat::Png)
    }

    /// Detect image format from file extension.
    pub fn from_extension(ext: &str) -> Option<ImageFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Detect image format from file path.
    pub fn from_path(path: &Path) -> Option<ImageFormat> {
        path.extension().and_then(|ext| ext.to_str()).and_then(ImageFormat::from_extension)
    }

    /// Encode `bitmap` into image bytes of this format.
    pub fn render(&self, bitmap: &BitmapDescriptor, options: &RenderOptions) -> Result<Vec<u8>> {
        let cell_size = options.cell_size.max(1);
        let width = (bitmap.columns() as u32).checked_mul(cell_size);
        let height = (bitmap.rows() as u32).checked_mul(cell_size);
        let (Some(width), Some(height)) = (width, height) else {
            log::warn!("{}x{} grid at cell size {cell_size} overflows the image size", bitmap.rows(), bitmap.columns());
            return Err(EngineError::ImageBufferCreationFailed);
        };
        if width > MAX_EXPORT_DIMENSION || height > MAX_EXPORT_DIMENSION {
            log::warn!("{width}x{height} px exceeds the export limit of {MAX_EXPORT_DIMENSION} px");
            return Err(EngineError::ImageBufferCreationFailed);
        }
        log::debug!(
            "rendering {}x{} grid as {} ({}x{} px)",
            bitmap.rows(),
            bitmap.columns(),
            self.name(),
            width,
            height
        );

        let pixel_at = |x: u32, y: u32| -> BitmapPixel {
            let row = (y / cell_size) as i32;
            let column = (x / cell_size) as i32;
            bitmap.pixel(row, column).unwrap_or(BitmapPixel::Transparent)
        };

        let mut bytes = Vec::new();
        match self {
            ImageFormat::Png => {
                let img = RgbaImage::from_fn(width, height, |x, y| Rgba(pixel_at(x, y).to_rgba()));
                img.write_with_encoder(PngEncoder::new(&mut bytes))?;
            }
            ImageFormat::Jpeg => {
                let img = RgbImage::from_fn(width, height, |x, y| {
                    let color = match pixel_at(x, y) {
                        BitmapPixel::Color(color) => color.over(JPEG_MATTE),
                        BitmapPixel::Transparent => JPEG_MATTE,
                    };
                    let (r, g, b) = color.get_rgb();
                    Rgb([r, g, b])
                });
                let quality = options.jpeg_quality.clamp(1, 100);
                img.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))?;
            }
        }
        if bytes.is_empty() {
            return Err(EngineError::ImageBufferCreationFailed);
        }
        Ok(bytes)
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options for rendering a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Edge length in pixels of one grid cell
    pub cell_size: u32,
    /// JPEG quality 1-100, ignored for PNG
    pub jpeg_quality: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_EXPORT_WIDTH / crate::DEFAULT_GRID_SIZE as u32,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl RenderOptions {
    /// Pick a cell size so `columns` cells span about `width` pixels.
    pub fn for_width(width: u32, columns: i32) -> Self {
        let columns = columns.max(1) as u32;
        Self {
            cell_size: (width / columns).max(1),
            ..Default::default()
        }
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }
}
