#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]
mod editor;
pub use editor::*;

pub mod history;
pub use history::{HistoryLog, DEFAULT_HISTORY_DEPTH};

pub mod settings;
pub use settings::{EditorSettings, GridAppearance};

pub mod transform;
pub use transform::Transform;

// Re-export all necessary types from pixy_engine
pub use pixy_engine::{
    BitmapDescriptor, BitmapPixel, CellPosition, Color, DirectorySaver, EngineError, HistoryEntry, ImageFormat, ImageSaver, PixelBuffer, RenderOptions,
    Result, DEFAULT_EXPORT_WIDTH, DEFAULT_GRID_SIZE, GRID_SPACING_OPTIONS, MAX_EXPORT_DIMENSION, MAX_GRID_SIZE, MIN_GRID_SIZE,
};
