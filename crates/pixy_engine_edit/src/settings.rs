//! Editor configuration
//!
//! `EditorSettings` holds the defaults a new grid starts from,
//! `GridAppearance` the purely visual grid options. Both are stored as TOML.

use serde::{Deserialize, Serialize};

use crate::{Color, EngineError, Result, DEFAULT_GRID_SIZE, DEFAULT_HISTORY_DEPTH};

/// Maximum separator line width in points
pub const MAX_SEPARATOR_WIDTH: f32 = 5.0;

/// Separator widths snap to this step
pub const SEPARATOR_WIDTH_STEP: f32 = 0.5;

/// Visual grid options. These never touch the pixel data or the history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridAppearance {
    /// Name shown above the grid and used for exported files
    pub grid_name: String,
    /// Draw separator lines between cells
    pub grid_enabled: bool,
    /// Separator line width, 0.0 - 5.0 in 0.5 steps
    pub separator_width: f32,
    pub separator_color: Color,
    pub show_row_coordinates: bool,
    pub show_column_coordinates: bool,
}

impl Default for GridAppearance {
    fn default() -> Self {
        Self {
            grid_name: "My Pixel Art".to_string(),
            grid_enabled: true,
            separator_width: 1.0,
            separator_color: Color::BLACK,
            show_row_coordinates: false,
            show_column_coordinates: false,
        }
    }
}

impl GridAppearance {
    /// Set the separator width, clamped to the allowed range and snapped to 0.5 steps
    pub fn set_separator_width(&mut self, width: f32) {
        let width = if width.is_finite() { width } else { 0.0 };
        self.separator_width = ((width.clamp(0.0, MAX_SEPARATOR_WIDTH) / SEPARATOR_WIDTH_STEP).round()) * SEPARATOR_WIDTH_STEP;
    }

    /// Separator width actually drawn (0 when the grid is disabled)
    pub fn effective_separator_width(&self) -> f32 {
        if self.grid_enabled {
            self.separator_width
        } else {
            0.0
        }
    }

    /// Whether the coordinate readout is visible at all
    pub fn shows_coordinates(&self) -> bool {
        self.show_row_coordinates || self.show_column_coordinates
    }
}

/// Defaults for a new editor
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    pub rows: i32,
    pub columns: i32,
    pub drawing_color: Color,
    pub background_color: Color,
    pub grid_spacing: i32,
    pub maintain_aspect_ratio: bool,
    /// Maximum number of history snapshots, 0 = unbounded
    pub history_depth: usize,
    pub appearance: GridAppearance,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            columns: DEFAULT_GRID_SIZE,
            drawing_color: Color::BLACK,
            background_color: Color::GRAY,
            grid_spacing: 1,
            maintain_aspect_ratio: true,
            history_depth: DEFAULT_HISTORY_DEPTH,
            appearance: GridAppearance::default(),
        }
    }
}

impl EditorSettings {
    /// Parse settings from TOML; missing keys fall back to defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| EngineError::generic(format!("Invalid settings: {e}")))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EngineError::generic(format!("Can't serialize settings: {e}")))
    }
}
