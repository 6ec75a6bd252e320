use crate::{
    history::HistoryLog, CellPosition, Color, EditorSettings, EngineError, GridAppearance, PixelBuffer, Result, GRID_SPACING_OPTIONS,
};

use super::listeners::{ChangeListener, ChangeListeners, EditorChange, ListenerId};

/// Main state container for pixel-art editing
///
/// Holds the live grid, the history, the drawing and background colors,
/// the grid spacing, the aspect ratio lock and the visual grid options.
/// All grid modifications go through the history.
pub struct GridEditor {
    // ═══════════════════════════════════════════════════════════════════════
    // Grid Data
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) buffer: PixelBuffer,

    pub(crate) history: HistoryLog,

    // ═══════════════════════════════════════════════════════════════════════
    // Editing State
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) drawing_color: Color,

    pub(crate) background_color: Color,

    /// One of `GRID_SPACING_OPTIONS`
    pub(crate) grid_spacing: i32,

    pub(crate) maintain_aspect_ratio: bool,

    /// Anchor cell of the last paint operation
    pub(crate) current_coordinates: Option<CellPosition>,

    // ═══════════════════════════════════════════════════════════════════════
    // Display Options
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) appearance: GridAppearance,

    pub(crate) listeners: ChangeListeners,
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl GridEditor {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create an editor with a 16x16 gray grid and a black pen
    pub fn new() -> Self {
        let settings = EditorSettings::default();
        let mut editor = Self {
            buffer: PixelBuffer::default(),
            history: HistoryLog::with_depth(settings.history_depth),
            drawing_color: settings.drawing_color,
            background_color: settings.background_color,
            grid_spacing: settings.grid_spacing,
            maintain_aspect_ratio: settings.maintain_aspect_ratio,
            current_coordinates: None,
            appearance: settings.appearance,
            listeners: ChangeListeners::default(),
        };
        editor.seed_history();
        editor
    }

    /// Create an editor from stored settings
    pub fn from_settings(settings: &EditorSettings) -> Result<Self> {
        if !GRID_SPACING_OPTIONS.contains(&settings.grid_spacing) {
            return Err(EngineError::InvalidSpacing {
                spacing: settings.grid_spacing,
            });
        }
        let buffer = PixelBuffer::new(settings.rows, settings.columns, settings.background_color)?;
        let mut editor = Self {
            buffer,
            history: HistoryLog::with_depth(settings.history_depth),
            drawing_color: settings.drawing_color,
            background_color: settings.background_color,
            grid_spacing: settings.grid_spacing,
            maintain_aspect_ratio: settings.maintain_aspect_ratio,
            current_coordinates: None,
            appearance: settings.appearance.clone(),
            listeners: ChangeListeners::default(),
        };
        editor.seed_history();
        Ok(editor)
    }

    /// Current state as settings, e.g. to store them for the next session
    pub fn settings(&self) -> EditorSettings {
        EditorSettings {
            rows: self.buffer.rows(),
            columns: self.buffer.columns(),
            drawing_color: self.drawing_color,
            background_color: self.background_color,
            grid_spacing: self.grid_spacing,
            maintain_aspect_ratio: self.maintain_aspect_ratio,
            history_depth: self.history.max_depth(),
            appearance: self.appearance.clone(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    /// Get the live grid (read-only)
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Get grid dimensions (rows, columns)
    pub fn dimensions(&self) -> (i32, i32) {
        self.buffer.dimensions()
    }

    pub fn rows(&self) -> i32 {
        self.buffer.rows()
    }

    pub fn columns(&self) -> i32 {
        self.buffer.columns()
    }

    /// Get a single cell color
    pub fn cell(&self, row: i32, column: i32) -> Result<Color> {
        self.buffer.get(row, column)
    }

    pub fn drawing_color(&self) -> Color {
        self.drawing_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn grid_spacing(&self) -> i32 {
        self.grid_spacing
    }

    pub fn maintain_aspect_ratio(&self) -> bool {
        self.maintain_aspect_ratio
    }

    /// Anchor cell of the last paint operation
    pub fn current_coordinates(&self) -> Option<CellPosition> {
        self.current_coordinates
    }

    pub fn appearance(&self) -> &GridAppearance {
        &self.appearance
    }

    /// Mutable access to the visual grid options. No change is reported;
    /// use [`GridEditor::set_appearance`] when listeners need to know.
    pub fn appearance_mut(&mut self) -> &mut GridAppearance {
        &mut self.appearance
    }

    /// Get the history log (read-only)
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Number of editable blocks per axis (rows, columns) at the current spacing
    pub fn effective_dimensions(&self) -> (i32, i32) {
        ((self.rows() / self.grid_spacing).max(1), (self.columns() / self.grid_spacing).max(1))
    }

    /// Top-left cell of the block at block coordinates `(block_row, block_column)`.
    ///
    /// Fails with `OutOfBounds` if the anchor does not fit the grid.
    pub fn block_anchor(&self, block_row: i32, block_column: i32) -> Result<CellPosition> {
        let out_of_bounds = || EngineError::OutOfBounds {
            row: block_row,
            column: block_column,
            rows: self.rows(),
            columns: self.columns(),
        };
        let row = block_row.checked_mul(self.grid_spacing).ok_or_else(out_of_bounds)?;
        let column = block_column.checked_mul(self.grid_spacing).ok_or_else(out_of_bounds)?;
        if !self.buffer.contains(row, column) {
            return Err(out_of_bounds());
        }
        Ok(CellPosition::new(row, column))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Basic Setters (non-history)
    // ═══════════════════════════════════════════════════════════════════════

    /// Set the color used for painting
    pub fn set_drawing_color(&mut self, color: Color) {
        if self.drawing_color != color {
            self.drawing_color = color;
            self.listeners.notify(EditorChange::Settings);
        }
    }

    /// Lock rows and columns to the same value on resize
    pub fn set_maintain_aspect_ratio(&mut self, enabled: bool) {
        if self.maintain_aspect_ratio != enabled {
            self.maintain_aspect_ratio = enabled;
            self.listeners.notify(EditorChange::Settings);
        }
    }

    /// Replace the visual grid options
    pub fn set_appearance(&mut self, appearance: GridAppearance) {
        if self.appearance != appearance {
            self.appearance = appearance;
            self.listeners.notify(EditorChange::Settings);
        }
    }

    /// Rename the grid
    pub fn set_grid_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.appearance.grid_name != name {
            self.appearance.grid_name = name;
            self.listeners.notify(EditorChange::Settings);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Listeners
    // ═══════════════════════════════════════════════════════════════════════

    /// Register a callback invoked after every state change
    pub fn subscribe(&mut self, listener: ChangeListener) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
