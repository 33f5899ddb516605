//! Saved game picker.
//!
//! Entering the screen asks the gateway for the save list; choosing an entry
//! asks it for the snapshot. The snapshot is applied here, before the switch
//! to the game screen, so the game never renders a half-loaded state.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding, Paragraph};
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ClockToken, Command, PersistOutcome, PersistRequest, ScreenId};
use crate::error::PersistenceError;
use crate::input::{intent_of, Intent};
use crate::models::{GameSnapshot, SaveId, SaveRecord};
use crate::state::GameState;
use crate::ui::layout::{centered_rect, LayoutContext};
use crate::ui::theme::{hint_style, title_style, COLOR_DIM, COLOR_PRIMARY, COLOR_SELECTED};
use crate::widgets::SelectionList;

pub const LOAD_TITLE: &str = "Select Saved Game";
pub const LOADING_TITLE: &str = "Loading game...";
pub const NO_SAVES: &str = "No saved games found.";
pub const LISTING_SAVES: &str = "Looking for saves...";

#[derive(Debug, Default)]
pub struct LoadGameScreen {
    saves: SelectionList<SaveRecord>,
    listing: bool,
    /// Save whose load is in flight
    pending: Option<SaveId>,
}

impl LoadGameScreen {
    pub fn saves(&self) -> &[SaveRecord] {
        self.saves.items()
    }

    pub fn selected(&self) -> Option<&SaveRecord> {
        self.saves.selected()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn fail(&mut self, state: &mut GameState, err: &PersistenceError) -> Update {
        tracing::warn!("[{}] {}", err.error_code(), err);
        self.listing = false;
        self.pending = None;
        state.last_error = Some(err.user_message());
        Update::switch(ScreenId::Error)
    }

    fn on_listed(
        &mut self,
        state: &mut GameState,
        result: &Result<Vec<SaveRecord>, PersistenceError>,
    ) -> Update {
        match result {
            Ok(records) => {
                let mut records = records.clone();
                records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                tracing::info!("Found {} saved games", records.len());
                self.saves.set_items(records);
                self.listing = false;
                Update::none()
            }
            Err(e) => self.fail(state, e),
        }
    }

    fn on_loaded(
        &mut self,
        state: &mut GameState,
        id: SaveId,
        result: &Result<GameSnapshot, PersistenceError>,
    ) -> Update {
        // Results for a load the player has since abandoned are dropped.
        if self.pending != Some(id) {
            tracing::debug!("Ignoring stale load result for save {}", id);
            return Update::none();
        }
        match result {
            Ok(snapshot) => {
                tracing::info!("Loaded save with health {:.0}", snapshot.health);
                self.pending = None;
                state.apply_snapshot(snapshot.clone());
                Update::switch(ScreenId::Game)
            }
            Err(e) => self.fail(state, e),
        }
    }

    fn save_item(record: &SaveRecord) -> ListItem<'static> {
        ListItem::new(vec![
            Line::raw(record.label()),
            Line::styled(record.description(), Style::default().fg(COLOR_DIM)),
        ])
    }
}

impl Screen for LoadGameScreen {
    fn on_enter(&mut self, _state: &mut GameState, _clock: ClockToken) -> Option<Command> {
        self.saves.clear();
        self.listing = true;
        self.pending = None;
        Some(Command::Persist(PersistRequest::List))
    }

    fn handle(&mut self, event: &AppEvent, state: &mut GameState) -> Update {
        match event {
            AppEvent::Persistence(PersistOutcome::Listed(result)) => {
                return self.on_listed(state, result)
            }
            AppEvent::Persistence(PersistOutcome::Loaded(id, result)) => {
                return self.on_loaded(state, *id, result)
            }
            _ => {}
        }

        match intent_of(event) {
            Some(Intent::Up) => {
                self.saves.move_up();
                Update::none()
            }
            Some(Intent::Down) => {
                self.saves.move_down();
                Update::none()
            }
            Some(Intent::Confirm) if self.pending.is_none() => match self.saves.selected() {
                Some(record) => {
                    let id = record.id();
                    self.pending = Some(id);
                    Update::command(Command::Persist(PersistRequest::Load(id)))
                }
                None => Update::none(),
            },
            Some(Intent::Cancel) => {
                self.pending = None;
                Update::switch(ScreenId::MainMenu)
            }
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _state: &GameState) {
        let ctx = LayoutContext::from_rect(area);
        let width = ctx.bounded_width(60, 36, 70);
        let height = area.height.saturating_sub(2).max(6);
        let list_area = centered_rect(width, height, area);

        let title = if self.is_loading() { LOADING_TITLE } else { LOAD_TITLE };
        let block = Block::default()
            .title(Span::styled(format!(" {} ", title), title_style()))
            .title_bottom(Line::styled(" ESC to go back ", hint_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_PRIMARY))
            .padding(Padding::horizontal(1));

        if self.saves.is_empty() {
            let message = if self.listing { LISTING_SAVES } else { NO_SAVES };
            frame.render_widget(
                Paragraph::new(Span::styled(message, Style::default().fg(COLOR_DIM))).block(block),
                list_area,
            );
            return;
        }

        let items: Vec<ListItem> = self.saves.items().iter().map(Self::save_item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(COLOR_SELECTED)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.saves.list_state();
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }
}
