//! Shown when health runs out.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ScreenId};
use crate::input::{intent_of, Intent};
use crate::state::GameState;
use crate::ui::components::{render_message_dialog, DialogFrameConfig};
use crate::ui::theme::{hint_style, COLOR_HEALTH_LOW};

pub const GAME_OVER_MESSAGE: &str = "YOU DIED";

#[derive(Debug, Default)]
pub struct GameOverScreen;

impl Screen for GameOverScreen {
    fn handle(&mut self, event: &AppEvent, _state: &mut GameState) -> Update {
        match intent_of(event) {
            Some(Intent::Confirm) => Update::switch(ScreenId::MainMenu),
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _state: &GameState) {
        let lines = vec![
            Line::styled(
                GAME_OVER_MESSAGE,
                Style::default()
                    .fg(COLOR_HEALTH_LOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled("Press ENTER to return to the Main Menu", hint_style()),
        ];
        render_message_dialog(frame, area, &DialogFrameConfig::new(3), lines);
    }
}
