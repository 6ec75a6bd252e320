use std::path::PathBuf;

use thiserror::Error;

/// Error type for pixy_engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    // === Grid Errors ===
    #[error("Invalid grid dimension {rows}x{columns} (allowed: {min}..={max})", min = crate::MIN_GRID_SIZE, max = crate::MAX_GRID_SIZE)]
    InvalidDimension { rows: i32, columns: i32 },

    #[error("Cell ({row}, {column}) out of bounds for {rows}x{columns} grid")]
    OutOfBounds { row: i32, column: i32, rows: i32, columns: i32 },

    #[error("Invalid grid spacing {spacing} (allowed: {allowed:?})", allowed = crate::GRID_SPACING_OPTIONS)]
    InvalidSpacing { spacing: i32 },

    // === Color Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    // === Export Errors ===
    #[error("Failed to create image buffer")]
    ImageBufferCreationFailed,

    #[error("Failed to save image '{path}': {message}")]
    ImageSaveFailed { path: PathBuf, message: String },

    // === External Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for pixy_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create an image save error
    pub fn image_save_failed(path: impl Into<PathBuf>, msg: impl std::fmt::Display) -> Self {
        Self::ImageSaveFailed {
            path: path.into(),
            message: msg.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display() {
        let err = EngineError::InvalidDimension { rows: 0, columns: 33 };
        assert_eq!(err.to_string(), "Invalid grid dimension 0x33 (allowed: 1..=32)");

        let err = EngineError::OutOfBounds {
            row: 16,
            column: 2,
            rows: 16,
            columns: 16,
        };
        assert_eq!(err.to_string(), "Cell (16, 2) out of bounds for 16x16 grid");

        let err = EngineError::InvalidSpacing { spacing: 3 };
        assert_eq!(err.to_string(), "Invalid grid spacing 3 (allowed: [1, 2, 4, 8, 16, 32, 64])");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
