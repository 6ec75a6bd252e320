use crate::{EditorChange, GridEditor, HistoryEntry};

impl GridEditor {
    fn snapshot(&self) -> HistoryEntry {
        self.buffer.snapshot().with_background(self.background_color).with_spacing(self.grid_spacing)
    }

    /// Push the live grid, background and spacing as one history step, then notify.
    pub(crate) fn commit(&mut self, description: &str, change: EditorChange) {
        let entry = self.snapshot();
        self.history.push_with_description(description, entry);
        log::debug!("{description}: {}x{} grid, {} history steps", self.rows(), self.columns(), self.history.len());
        self.listeners.notify(change);
    }

    /// Start a fresh history holding only the live grid.
    pub(crate) fn seed_history(&mut self) {
        self.history.clear();
        let entry = self.snapshot();
        self.history.push_with_description("Initial", entry);
    }

    /// Restore the previous snapshot. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.undo() else {
            return false;
        };
        self.buffer = entry.restore();
        if let Some(background) = entry.background() {
            self.background_color = background;
        }
        if let Some(spacing) = entry.spacing() {
            self.grid_spacing = spacing;
        }
        log::debug!("Undo: cursor at {:?}", self.history.cursor());
        self.listeners.notify(EditorChange::History);
        true
    }

    /// Re-apply the next snapshot. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.redo() else {
            return false;
        };
        self.buffer = entry.restore();
        if let Some(background) = entry.background() {
            self.background_color = background;
        }
        if let Some(spacing) = entry.spacing() {
            self.grid_spacing = spacing;
        }
        log::debug!("Redo: cursor at {:?}", self.history.cursor());
        self.listeners.notify(EditorChange::History);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Label of the step `undo()` would revert
    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    /// Label of the step `redo()` would re-apply
    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }
}
