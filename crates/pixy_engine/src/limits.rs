//! Grid size limits
//!
//! Rows and columns are bounded independently; spacing groups cells into
//! square blocks for editing.

/// Minimum number of rows or columns
pub const MIN_GRID_SIZE: i32 = 1;

/// Maximum number of rows or columns
pub const MAX_GRID_SIZE: i32 = 32;

/// Default number of rows and columns of a new grid
pub const DEFAULT_GRID_SIZE: i32 = 16;

/// Allowed grid spacing factors
pub const GRID_SPACING_OPTIONS: [i32; 7] = [1, 2, 4, 8, 16, 32, 64];

/// Check if a single dimension is within limits
#[inline]
pub fn is_valid_dimension(value: i32) -> bool {
    (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&value)
}

/// Check if both dimensions are within limits
#[inline]
pub fn is_within_limits(rows: i32, columns: i32) -> bool {
    is_valid_dimension(rows) && is_valid_dimension(columns)
}

/// Clamp a single dimension to the grid limits
#[inline]
pub fn clamp_dimension(value: i32) -> i32 {
    value.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// Check if a spacing factor is one of the allowed options
#[inline]
pub fn is_valid_spacing(spacing: i32) -> bool {
    GRID_SPACING_OPTIONS.contains(&spacing)
}
