//! Grid Editor
//!
//! The orchestrator for pixel-art editing. `GridEditor` owns the live grid,
//! the history log and the editing settings; the UI layer only reads from it
//! and calls its operations.
//!
//! ## Commit Model
//!
//! Every mutating operation is one atomic step:
//! 1. validate the request (errors leave all state untouched)
//! 2. compute the new grid from a copy of the old one
//! 3. replace the live grid
//! 4. push exactly one snapshot into the history
//! 5. notify the change listeners
//!
//! Undo and redo only move the history cursor and never push snapshots.
//!
//! ## Spacing
//!
//! With a grid spacing `s > 1` the grid is edited in `s × s` blocks. A block
//! is addressed by its top-left cell; `block_anchor()` maps block coordinates
//! to that cell and painting toggles the whole block, clipped to the grid.
//!
//! # Module Organization
//!
//! - `state.rs` - Struct definition, constructors, getters, non-history setters
//! - `cell_operations.rs` - Painting cells
//! - `grid_operations.rs` - Dimensions, spacing, background, reset
//! - `transform_operations.rs` - Flip, rotate, center
//! - `undo.rs` - Commit, undo, redo
//! - `export.rs` - Bitmap description and image export
//! - `listeners.rs` - Change notification

mod cell_operations;
mod export;
mod grid_operations;
mod listeners;
mod state;
mod transform_operations;
mod undo;

pub use listeners::{ChangeListener, EditorChange, ListenerId};
pub use state::GridEditor;
