//! Main menu: start, load or quit.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding};
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ScreenId};
use crate::input::{intent_of, Intent};
use crate::state::GameState;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{hint_style, title_style, COLOR_PRIMARY, COLOR_SELECTED};
use crate::widgets::SelectionList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    StartNewGame,
    LoadGame,
    Quit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::StartNewGame, MenuEntry::LoadGame, MenuEntry::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::StartNewGame => "Start New Game",
            MenuEntry::LoadGame => "Load Game",
            MenuEntry::Quit => "Quit",
        }
    }
}

#[derive(Debug)]
pub struct MainMenuScreen {
    entries: SelectionList<MenuEntry>,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self {
            entries: SelectionList::new(MenuEntry::ALL.to_vec()),
        }
    }
}

impl MainMenuScreen {
    pub fn selected(&self) -> Option<MenuEntry> {
        self.entries.selected().copied()
    }

    fn activate(&self, state: &mut GameState) -> Update {
        match self.selected() {
            Some(MenuEntry::StartNewGame) => {
                state.reset_for_new_game();
                Update::switch(ScreenId::Game)
            }
            Some(MenuEntry::LoadGame) => Update::switch(ScreenId::LoadGame),
            Some(MenuEntry::Quit) => Update::switch(ScreenId::QuitPrompt),
            None => Update::none(),
        }
    }
}

impl Screen for MainMenuScreen {
    fn handle(&mut self, event: &AppEvent, state: &mut GameState) -> Update {
        match intent_of(event) {
            Some(Intent::Up) => {
                self.entries.move_up();
                Update::none()
            }
            Some(Intent::Down) => {
                self.entries.move_down();
                Update::none()
            }
            Some(Intent::Confirm) => self.activate(state),
            Some(Intent::Cancel) => Update::switch(ScreenId::QuitPrompt),
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _state: &GameState) {
        let menu_area = centered_rect(30, MenuEntry::ALL.len() as u16 + 4, area);
        let items: Vec<ListItem> = self
            .entries
            .items()
            .iter()
            .map(|entry| ListItem::new(Span::styled(entry.label(), hint_style())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(Span::styled(" Main Menu ", title_style()))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(COLOR_PRIMARY))
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(
                Style::default()
                    .bg(COLOR_SELECTED)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.entries.list_state();
        frame.render_stateful_widget(list, menu_area, &mut list_state);
    }
}
