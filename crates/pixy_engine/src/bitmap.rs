//! Export-ready description of a grid.

use crate::{Color, PixelBuffer};

/// One exported pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapPixel {
    Color(Color),
    Transparent,
}

impl BitmapPixel {
    /// RGBA bytes; transparent pixels are fully transparent black.
    pub fn to_rgba(self) -> [u8; 4] {
        match self {
            BitmapPixel::Color(color) => color.get_rgba(),
            BitmapPixel::Transparent => [0, 0, 0, 0],
        }
    }

    pub fn is_transparent(self) -> bool {
        matches!(self, BitmapPixel::Transparent)
    }
}

/// Row-major pixel description of a grid, handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapDescriptor {
    rows: i32,
    columns: i32,
    pixels: Vec<BitmapPixel>,
}

impl BitmapDescriptor {
    /// Describe `buffer`. When `transparent_background` is set, cells equal
    /// to `background` become [`BitmapPixel::Transparent`].
    pub fn from_buffer(buffer: &PixelBuffer, background: Color, transparent_background: bool) -> Self {
        let pixels = buffer
            .iter()
            .map(|(_, color)| {
                if transparent_background && color == background {
                    BitmapPixel::Transparent
                } else {
                    BitmapPixel::Color(color)
                }
            })
            .collect();
        Self {
            rows: buffer.rows(),
            columns: buffer.columns(),
            pixels,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn pixels(&self) -> &[BitmapPixel] {
        &self.pixels
    }

    pub fn pixel(&self, row: i32, column: i32) -> Option<BitmapPixel> {
        if row < 0 || row >= self.rows || column < 0 || column >= self.columns {
            return None;
        }
        self.pixels.get((row * self.columns + column) as usize).copied()
    }

    pub fn has_transparency(&self) -> bool {
        self.pixels.iter().any(|p| p.is_transparent())
    }
}
