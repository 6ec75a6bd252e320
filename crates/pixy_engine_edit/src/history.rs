//! History log for grid editing
//!
//! A linear list of full grid snapshots with a cursor pointing at the
//! snapshot that matches the live grid:
//! - `push` drops everything after the cursor, then appends
//! - `undo`/`redo` only move the cursor, they never add entries
//! - an optional depth bound drops the oldest snapshots

use crate::HistoryEntry;

/// Default number of snapshots kept
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

#[derive(Debug, Clone)]
struct HistoryStep {
    description: String,
    entry: HistoryEntry,
}

/// Linear undo/redo log of grid snapshots
#[derive(Debug, Clone)]
pub struct HistoryLog {
    steps: Vec<HistoryStep>,
    /// Index of the active snapshot, `None` while empty
    cursor: Option<usize>,
    /// Maximum number of snapshots, 0 = unbounded
    max_depth: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty log with the default depth
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// Create an empty log keeping at most `max_depth` snapshots (0 = unbounded)
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            steps: Vec::new(),
            cursor: None,
            max_depth,
        }
    }

    /// Append a snapshot, discarding any redo candidates first
    pub fn push(&mut self, entry: HistoryEntry) {
        self.push_with_description("Edit", entry);
    }

    /// Append a snapshot with a label for undo/redo menus
    pub fn push_with_description(&mut self, description: impl Into<String>, entry: HistoryEntry) {
        if let Some(cursor) = self.cursor {
            self.steps.truncate(cursor + 1);
        }
        self.steps.push(HistoryStep {
            description: description.into(),
            entry,
        });
        if self.max_depth > 0 && self.steps.len() > self.max_depth {
            let overflow = self.steps.len() - self.max_depth;
            self.steps.drain(..overflow);
        }
        self.cursor = Some(self.steps.len() - 1);
    }

    /// Step back; returns the snapshot that is now active
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        let cursor = self.cursor.filter(|&c| c > 0)?;
        self.cursor = Some(cursor - 1);
        Some(&self.steps[cursor - 1].entry)
    }

    /// Step forward; returns the snapshot that is now active
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if self.cursor.is_none() || next >= self.steps.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(&self.steps[next].entry)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.steps.len())
    }

    /// Drop all snapshots
    pub fn clear(&mut self) {
        self.steps.clear();
        self.cursor = None;
    }

    /// The active snapshot
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.map(|c| &self.steps[c].entry)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of undo steps available
    pub fn undo_len(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Number of redo steps available
    pub fn redo_len(&self) -> usize {
        self.cursor.map_or(0, |c| self.steps.len() - c - 1)
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<String> {
        self.cursor.filter(|&c| c > 0).map(|c| self.steps[c].description.clone())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<String> {
        let next = self.cursor? + 1;
        self.steps.get(next).map(|step| step.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PixelBuffer};

    fn entry(color: Color) -> HistoryEntry {
        PixelBuffer::new(2, 2, color).unwrap().snapshot()
    }

    #[test]
    fn test_empty_log() {
        let mut log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.cursor(), None);
        assert!(!log.can_undo());
        assert!(!log.can_redo());
        assert!(log.undo().is_none());
        assert!(log.redo().is_none());
        assert!(log.current().is_none());
    }

    #[test]
    fn test_descriptions() {
        let mut log = HistoryLog::new();
        log.push_with_description("Initial", entry(Color::GRAY));
        assert_eq!(log.undo_description(), None);
        log.push_with_description("Paint cell", entry(Color::BLACK));
        assert_eq!(log.undo_description().as_deref(), Some("Paint cell"));
        assert_eq!(log.redo_description(), None);
        log.undo();
        assert_eq!(log.redo_description().as_deref(), Some("Paint cell"));
    }
}
