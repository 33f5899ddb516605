//! Quit confirmation.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, Command, ScreenId};
use crate::input::{intent_of, Intent};
use crate::state::GameState;
use crate::ui::components::{render_message_dialog, DialogFrameConfig};
use crate::ui::theme::{hint_style, title_style};

pub const QUIT_QUESTION: &str = "Are you sure you want to quit?";

#[derive(Debug, Default)]
pub struct QuitPromptScreen;

impl Screen for QuitPromptScreen {
    fn handle(&mut self, event: &AppEvent, _state: &mut GameState) -> Update {
        match intent_of(event) {
            Some(Intent::Confirm) => Update::command(Command::Quit),
            Some(Intent::Cancel) => Update::switch(ScreenId::MainMenu),
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _state: &GameState) {
        let lines = vec![
            Line::styled(QUIT_QUESTION, title_style()),
            Line::raw(""),
            Line::styled("ESC to Cancel", hint_style()),
            Line::styled("ENTER to Confirm", hint_style()),
        ];
        render_message_dialog(frame, area, &DialogFrameConfig::new(4), lines);
    }
}
