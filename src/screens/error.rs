//! Shown when listing or loading saves fails.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ScreenId};
use crate::input::{intent_of, Intent};
use crate::state::GameState;
use crate::ui::components::{render_message_dialog, DialogFrameConfig};
use crate::ui::theme::COLOR_ERROR;

pub const ERROR_HEADLINE: &str = "An error occurred.";

#[derive(Debug, Default)]
pub struct ErrorScreen;

impl Screen for ErrorScreen {
    fn handle(&mut self, event: &AppEvent, _state: &mut GameState) -> Update {
        match intent_of(event) {
            Some(Intent::Confirm) => Update::switch(ScreenId::MainMenu),
            Some(Intent::Cancel) => Update::switch(ScreenId::QuitPrompt),
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let style = Style::default().fg(COLOR_ERROR);
        let mut lines = vec![Line::styled(ERROR_HEADLINE, style)];
        if let Some(message) = &state.last_error {
            lines.push(Line::styled(message.clone(), style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled("ESC to Quit", style));
        lines.push(Line::styled("Press ENTER for Main Menu", style));

        let config = DialogFrameConfig::new(lines.len() as u16 + 1).border_color(COLOR_ERROR);
        render_message_dialog(frame, area, &config, lines);
    }
}
