//! Player stats, read-only.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ScreenId};
use crate::input::{intent_of, Intent};
use crate::state::GameState;
use crate::ui::components::{render_message_dialog, DialogFrameConfig};
use crate::ui::theme::{hint_style, COLOR_WELCOME};

#[derive(Debug, Default)]
pub struct StatsScreen;

/// One line per stat, in name order.
pub fn stat_lines(state: &GameState) -> Vec<Line<'static>> {
    let name_style = Style::default()
        .fg(COLOR_WELCOME)
        .add_modifier(Modifier::BOLD);
    state
        .stats
        .iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", format!("{}:", name)), name_style),
                Span::raw(value.to_string()),
            ])
        })
        .collect()
}

impl Screen for StatsScreen {
    fn handle(&mut self, event: &AppEvent, _state: &mut GameState) -> Update {
        match intent_of(event) {
            Some(Intent::Cancel) => Update::switch(ScreenId::Game),
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let mut lines = stat_lines(state);
        lines.push(Line::raw(""));
        lines.push(Line::styled("ESC to go back", hint_style()));
        let config = DialogFrameConfig::new(lines.len() as u16).title("Player Stats");
        render_message_dialog(frame, area, &config, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_escape_returns_to_game() {
        let mut state = GameState::default();
        let esc = AppEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(StatsScreen.handle(&esc, &mut state).switch_to, Some(ScreenId::Game));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = GameState::default();
        let enter = AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(StatsScreen.handle(&enter, &mut state).is_none());
    }

    #[test]
    fn test_stat_lines_sorted_by_name() {
        let state = GameState::default();
        let names: Vec<String> = stat_lines(&state)
            .iter()
            .map(|line| line.spans[0].content.trim().to_string())
            .collect();
        assert_eq!(names, vec!["Agility:", "Intellect:", "Strength:"]);
    }
}
