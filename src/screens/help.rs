//! Key reference.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ScreenId};
use crate::input::{intent_of, Intent, KEY_HINTS};
use crate::state::GameState;
use crate::ui::components::{render_message_dialog, DialogFrameConfig};
use crate::ui::theme::{hint_style, COLOR_SECONDARY};

#[derive(Debug, Default)]
pub struct HelpScreen;

impl Screen for HelpScreen {
    fn handle(&mut self, event: &AppEvent, _state: &mut GameState) -> Update {
        match intent_of(event) {
            Some(Intent::Cancel) => Update::switch(ScreenId::Game),
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _state: &GameState) {
        let key_style = Style::default()
            .fg(COLOR_SECONDARY)
            .add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line<'static>> = KEY_HINTS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!("{:>14}  ", key), key_style),
                    Span::raw(format!("{:<30}", action)),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled("ESC to go back", hint_style()));

        let config = DialogFrameConfig::new(lines.len() as u16)
            .title("Help")
            .max_width(70);
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
        assert_eq!(HelpScreen.handle(&esc, &mut state).switch_to, Some(ScreenId::Game));
    }
}
