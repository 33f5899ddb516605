//! The gameplay screen.
//!
//! Drives passive regeneration off the clock, owns the toolbar and the
//! debug damage/heal keys, and kicks off saves.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ClockToken, Command, PersistOutcome, PersistRequest, ScreenId};
use crate::input::{intent_of, Intent};
use crate::state::{GameState, ToolbarAction};
use crate::ui::components::{render_health_bar, render_toolbar};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{hint_style, COLOR_DIM, COLOR_ERROR, COLOR_HEALTH_LOW};

pub const STATUS_SAVING: &str = "Saving...";
pub const STATUS_SAVED: &str = "Game saved";
pub const STATUS_SAVE_FAILED: &str = "Save failed";

#[derive(Debug, Default)]
pub struct GameScreen;

impl GameScreen {
    fn save(state: &mut GameState) -> Update {
        state.status = Some(STATUS_SAVING.to_string());
        Update::command(Command::Persist(PersistRequest::Save(state.snapshot())))
    }

    fn activate_toolbar(state: &mut GameState) -> Update {
        match state.toolbar.selected().action {
            ToolbarAction::Save => Self::save(state),
            ToolbarAction::Open(screen) => Update::switch(screen),
        }
    }

    fn damage(state: &mut GameState) -> Update {
        if !state.take_damage() {
            return Update::none();
        }
        if state.damage_flash_active {
            // Already flashing; the pending timer clears it.
            return Update::none();
        }
        state.damage_flash_active = true;
        Update::command(Command::flash_timer(state.rules.flash_duration))
    }

    fn tick(state: &mut GameState, token: ClockToken) -> Update {
        state.regenerate();
        if state.health().is_depleted() {
            tracing::info!("Player died");
            return Update::switch(ScreenId::GameOver);
        }
        Update::command(Command::tick(state.rules.tick_interval, token))
    }
}

impl Screen for GameScreen {
    fn on_enter(&mut self, state: &mut GameState, clock: ClockToken) -> Option<Command> {
        Some(Command::tick(state.rules.tick_interval, clock))
    }

    fn handle(&mut self, event: &AppEvent, state: &mut GameState) -> Update {
        match event {
            AppEvent::Tick(token) => return Self::tick(state, *token),
            AppEvent::Persistence(PersistOutcome::Saved(result)) => {
                state.status = Some(match result {
                    Ok(id) => {
                        tracing::info!("Saved game {}", id);
                        STATUS_SAVED.to_string()
                    }
                    Err(e) => {
                        tracing::warn!("Save failed: {}", e);
                        format!("{}: {}", STATUS_SAVE_FAILED, e.user_message())
                    }
                });
                return Update::none();
            }
            _ => {}
        }

        match intent_of(event) {
            Some(Intent::Save) => Self::save(state),
            Some(Intent::Cancel) => Update::switch(ScreenId::QuitPrompt),
            Some(Intent::Left) => {
                state.toolbar.move_left();
                Update::none()
            }
            Some(Intent::Right) => {
                state.toolbar.move_right();
                Update::none()
            }
            Some(Intent::Confirm) => Self::activate_toolbar(state),
            Some(Intent::DebugDamage) => Self::damage(state),
            Some(Intent::DebugHeal) => {
                state.heal();
                Update::none()
            }
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        if state.damage_flash_active {
            frame.render_widget(
                Block::default().style(Style::default().bg(COLOR_HEALTH_LOW)),
                area,
            );
            return;
        }

        // Short terminals lose the spacer and the key hint first.
        let compact = LayoutContext::from_rect(area).is_short();
        let spare = if compact { 0 } else { 1 };
        let [toolbar_area, _, health_area, status_area, _, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(spare),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(spare),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(render_toolbar(&state.toolbar)), toolbar_area);
        render_health_bar(frame, health_area, state.health());

        if let Some(status) = &state.status {
            let color = if status.starts_with(STATUS_SAVE_FAILED) {
                COLOR_ERROR
            } else {
                COLOR_DIM
            };
            frame.render_widget(
                Paragraph::new(Span::styled(status.clone(), Style::default().fg(color))),
                status_area,
            );
        }

        frame.render_widget(
            Paragraph::new(Line::styled(
                "←/→ toolbar  Enter open  Ctrl+S save  Esc quit",
                hint_style(),
            )),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistenceError;
    use crate::models::SaveId;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_tick_regenerates_and_rearms() {
        let mut state = GameState::default();
        state.take_damage();
        let clock = ClockToken::default();
        let update = GameScreen.handle(&AppEvent::Tick(clock), &mut state);
        assert!((state.health().current() - 90.05).abs() < 1e-9);
        assert_eq!(
            update.command,
            Some(Command::tick(state.rules.tick_interval, clock))
        );
        assert_eq!(update.switch_to, None);
    }

    #[test]
    fn test_tick_at_zero_goes_to_game_over() {
        let mut state = GameState::default();
        while state.take_damage() {}
        let update = GameScreen.handle(&AppEvent::Tick(ClockToken::default()), &mut state);
        assert_eq!(update.switch_to, Some(ScreenId::GameOver));
        assert_eq!(update.command, None);
    }

    #[test]
    fn test_damage_arms_single_flash() {
        let mut state = GameState::default();
        let first = GameScreen.handle(&press(KeyCode::Char('h')), &mut state);
        assert!(state.damage_flash_active);
        assert_eq!(
            first.command,
            Some(Command::flash_timer(state.rules.flash_duration))
        );

        let second = GameScreen.handle(&press(KeyCode::Char('h')), &mut state);
        assert_eq!(second.command, None);
        assert_eq!(state.health().current(), 80.0);
    }

    #[test]
    fn test_damage_at_zero_is_noop() {
        let mut state = GameState::default();
        while state.take_damage() {}
        let update = GameScreen.handle(&press(KeyCode::Char('h')), &mut state);
        assert!(update.is_none());
        assert!(!state.damage_flash_active);
    }

    #[test]
    fn test_heal_key() {
        let mut state = GameState::default();
        state.take_damage();
        state.take_damage();
        GameScreen.handle(&press(KeyCode::Char('r')), &mut state);
        assert_eq!(state.health().current(), 90.0);
    }

    #[test]
    fn test_toolbar_navigation_and_activation() {
        let mut state = GameState::default();
        GameScreen.handle(&press(KeyCode::Left), &mut state);
        assert_eq!(state.toolbar.active_index(), 0);

        GameScreen.handle(&press(KeyCode::Right), &mut state);
        let update = GameScreen.handle(&press(KeyCode::Enter), &mut state);
        assert_eq!(update.switch_to, Some(ScreenId::Stats));
    }

    #[test]
    fn test_file_entry_saves() {
        let mut state = GameState::default();
        let update = GameScreen.handle(&press(KeyCode::Enter), &mut state);
        assert_eq!(
            update.command,
            Some(Command::Persist(PersistRequest::Save(state.snapshot())))
        );
        assert_eq!(state.status.as_deref(), Some(STATUS_SAVING));
    }

    #[test]
    fn test_ctrl_s_saves() {
        let mut state = GameState::default();
        let event = AppEvent::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let update = GameScreen.handle(&event, &mut state);
        assert!(matches!(
            update.command,
            Some(Command::Persist(PersistRequest::Save(_)))
        ));
    }

    #[test]
    fn test_save_outcome_sets_status_without_switching() {
        let mut state = GameState::default();
        let ok = AppEvent::Persistence(PersistOutcome::Saved(Ok(SaveId::from_millis(1))));
        assert!(GameScreen.handle(&ok, &mut state).is_none());
        assert_eq!(state.status.as_deref(), Some(STATUS_SAVED));

        let err = AppEvent::Persistence(PersistOutcome::Saved(Err(PersistenceError::Io {
            operation: "write".to_string(),
            message: "disk full".to_string(),
        })));
        assert!(GameScreen.handle(&err, &mut state).is_none());
        assert!(state.status.as_deref().unwrap().starts_with(STATUS_SAVE_FAILED));
    }

    #[test]
    fn test_escape_opens_quit_prompt() {
        let mut state = GameState::default();
        let update = GameScreen.handle(&press(KeyCode::Esc), &mut state);
        assert_eq!(update.switch_to, Some(ScreenId::QuitPrompt));
    }
}
