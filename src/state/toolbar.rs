//! In-game toolbar.

use crate::app::ScreenId;

/// What activating a toolbar entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Save the current game
    Save,
    /// Switch to another screen
    Open(ScreenId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarItem {
    pub label: &'static str,
    pub action: ToolbarAction,
}

impl ToolbarItem {
    pub const fn new(label: &'static str, action: ToolbarAction) -> Self {
        Self { label, action }
    }
}

/// Toolbar entries plus the highlighted index.
///
/// The active index always lies in `[0, len - 1]`; moving past either end is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    items: Vec<ToolbarItem>,
    active: usize,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new(vec![
            ToolbarItem::new("File", ToolbarAction::Save),
            ToolbarItem::new("Stats", ToolbarAction::Open(ScreenId::Stats)),
            ToolbarItem::new("Inventory", ToolbarAction::Open(ScreenId::Inventory)),
            ToolbarItem::new("Help", ToolbarAction::Open(ScreenId::Help)),
        ])
    }
}

impl Toolbar {
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn new(items: Vec<ToolbarItem>) -> Self {
        assert!(!items.is_empty(), "toolbar needs at least one item");
        Self { items, active: 0 }
    }

    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn selected(&self) -> &ToolbarItem {
        &self.items[self.active]
    }

    pub fn move_left(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.active + 1 < self.items.len() {
            self.active += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entries() {
        let toolbar = Toolbar::default();
        let labels: Vec<_> = toolbar.items().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["File", "Stats", "Inventory", "Help"]);
        assert_eq!(toolbar.selected().action, ToolbarAction::Save);
    }

    #[test]
    fn test_left_at_zero_is_noop() {
        let mut toolbar = Toolbar::default();
        toolbar.move_left();
        assert_eq!(toolbar.active_index(), 0);
    }

    #[test]
    fn test_right_at_end_is_noop() {
        let mut toolbar = Toolbar::default();
        for _ in 0..10 {
            toolbar.move_right();
        }
        assert_eq!(toolbar.active_index(), toolbar.len() - 1);
        assert_eq!(
            toolbar.selected().action,
            ToolbarAction::Open(ScreenId::Help)
        );
    }

    #[test]
    #[should_panic(expected = "toolbar needs at least one item")]
    fn test_empty_toolbar_panics() {
        let _ = Toolbar::new(Vec::new());
    }
}
