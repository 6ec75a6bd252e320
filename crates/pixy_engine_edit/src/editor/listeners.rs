//! Change notification
//!
//! The UI layer registers callbacks and re-renders when the editor reports a
//! change. Callbacks run synchronously after the editor state is final.

/// What kind of state a notification is about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorChange {
    /// Cell colors changed (paint, transform)
    Cells,
    /// Grid dimensions changed; the grid was rebuilt
    Dimensions,
    /// Grid spacing changed; the grid was rebuilt
    Spacing,
    /// Background color changed and matching cells were repainted
    Background,
    /// Undo or redo restored a snapshot
    History,
    /// The grid was cleared and the history reset
    Reset,
    /// Non-history settings changed (drawing color, aspect lock, appearance)
    Settings,
}

/// Handle returned by [`crate::GridEditor::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

pub type ChangeListener = Box<dyn FnMut(&EditorChange)>;

#[derive(Default)]
pub(crate) struct ChangeListeners {
    next_id: usize,
    listeners: Vec<(ListenerId, ChangeListener)>,
}

impl ChangeListeners {
    pub fn add(&mut self, listener: ChangeListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let len = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        len != self.listeners.len()
    }

    pub fn notify(&mut self, change: EditorChange) {
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}
