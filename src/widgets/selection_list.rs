//! Cursor-over-a-list state for menu screens.

use ratatui::widgets::ListState;

/// Items plus a cursor that never leaves the list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionList<T> {
    items: Vec<T>,
    selected: usize,
}

impl<T> Default for SelectionList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }
}

impl<T> SelectionList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// Replace the items and move the cursor back to the top.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = 0;
    }

    pub fn clear(&mut self) {
        self.set_items(Vec::new());
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    /// Ratatui list state for rendering.
    pub fn list_state(&self) -> ListState {
        let selected = if self.items.is_empty() {
            None
        } else {
            Some(self.selected)
        };
        ListState::default().with_selected(selected)
    }
}
