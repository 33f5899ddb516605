//! Title screen with a typewriter reveal.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ClockToken, Command, ScreenId};
use crate::input::{intent_of, Intent};
use crate::state::GameState;
use crate::ui::components::{render_message_dialog, DialogFrameConfig};
use crate::ui::theme::{hint_style, COLOR_WELCOME};

pub const WELCOME_MESSAGE: &str = "Welcome to the Dungeon!";
pub const WELCOME_HINT: &str = "Press ENTER to Continue";

#[derive(Debug, Default)]
pub struct WelcomeScreen {
    revealed: usize,
}

impl WelcomeScreen {
    /// Number of characters of the title currently shown.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed >= WELCOME_MESSAGE.chars().count()
    }

    /// The visible prefix of the title.
    pub fn visible_title(&self) -> String {
        WELCOME_MESSAGE.chars().take(self.revealed).collect()
    }
}

impl Screen for WelcomeScreen {
    fn on_enter(&mut self, state: &mut GameState, clock: ClockToken) -> Option<Command> {
        self.revealed = 0;
        Some(Command::tick(state.rules.tick_interval, clock))
    }

    fn handle(&mut self, event: &AppEvent, state: &mut GameState) -> Update {
        if let AppEvent::Tick(token) = event {
            if self.is_fully_revealed() {
                return Update::none();
            }
            self.revealed += 1;
            if self.is_fully_revealed() {
                return Update::none();
            }
            return Update::command(Command::tick(state.rules.tick_interval, *token));
        }

        match intent_of(event) {
            Some(Intent::Confirm) => Update::switch(ScreenId::MainMenu),
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _state: &GameState) {
        let title_style = Style::default()
            .fg(COLOR_WELCOME)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::styled(self.visible_title(), title_style),
            Line::raw(""),
            Line::styled(WELCOME_HINT, hint_style()),
        ];
        render_message_dialog(frame, area, &DialogFrameConfig::new(3), lines);
    }
}
