//! Screens of the game state machine.
//!
//! Each screen is one struct implementing [`Screen`]. Screens own only their
//! local widget state; the shared [`GameState`] is lent to them per event.
//! Handlers never switch screens themselves: they return an [`Update`] and
//! [`crate::app::App`] applies it.

pub mod error;
pub mod game;
pub mod game_over;
pub mod help;
pub mod inventory;
pub mod load_game;
pub mod main_menu;
pub mod quit_prompt;
pub mod stats;
pub mod welcome;

pub use error::ErrorScreen;
pub use game::GameScreen;
pub use game_over::GameOverScreen;
pub use help::HelpScreen;
pub use inventory::InventoryScreen;
pub use load_game::LoadGameScreen;
pub use main_menu::{MainMenuScreen, MenuEntry};
pub use quit_prompt::QuitPromptScreen;
pub use stats::StatsScreen;
pub use welcome::WelcomeScreen;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{AppEvent, ClockToken, Command, ScreenId};
use crate::state::GameState;

/// One node of the screen state machine.
pub trait Screen {
    /// Called by the app every time this screen becomes active.
    ///
    /// `clock` is the fresh clock generation; screens that animate return a
    /// tick stamped with it.
    fn on_enter(&mut self, _state: &mut GameState, _clock: ClockToken) -> Option<Command> {
        None
    }

    /// React to one event. Unrecognized events return [`Update::none`].
    fn handle(&mut self, event: &AppEvent, state: &mut GameState) -> Update;

    /// Draw into `area`. `state` is always fully clamped.
    fn render(&self, frame: &mut Frame, area: Rect, state: &GameState);
}

/// What a handler wants the app to do next.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Update {
    /// Work for the runtime
    pub command: Option<Command>,
    /// Screen to activate after this event
    pub switch_to: Option<ScreenId>,
}

impl Update {
    /// Nothing to do.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command(command: Command) -> Self {
        Self {
            command: Some(command),
            switch_to: None,
        }
    }

    pub fn switch(screen: ScreenId) -> Self {
        Self {
            command: None,
            switch_to: Some(screen),
        }
    }

    pub fn is_none(&self) -> bool {
        self.command.is_none() && self.switch_to.is_none()
    }
}

/// Every screen instance, created once at startup.
#[derive(Debug, Default)]
pub struct ScreenRegistry {
    pub welcome: WelcomeScreen,
    pub main_menu: MainMenuScreen,
    pub game: GameScreen,
    pub stats: StatsScreen,
    pub inventory: InventoryScreen,
    pub help: HelpScreen,
    pub quit_prompt: QuitPromptScreen,
    pub game_over: GameOverScreen,
    pub load_game: LoadGameScreen,
    pub error: ErrorScreen,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ScreenId) -> &dyn Screen {
        match id {
            ScreenId::Welcome => &self.welcome,
            ScreenId::MainMenu => &self.main_menu,
            ScreenId::Game => &self.game,
            ScreenId::Stats => &self.stats,
            ScreenId::Inventory => &self.inventory,
            ScreenId::Help => &self.help,
            ScreenId::QuitPrompt => &self.quit_prompt,
            ScreenId::GameOver => &self.game_over,
            ScreenId::LoadGame => &self.load_game,
            ScreenId::Error => &self.error,
        }
    }

    pub fn get_mut(&mut self, id: ScreenId) -> &mut dyn Screen {
        match id {
            ScreenId::Welcome => &mut self.welcome,
            ScreenId::MainMenu => &mut self.main_menu,
            ScreenId::Game => &mut self.game,
            ScreenId::Stats => &mut self.stats,
            ScreenId::Inventory => &mut self.inventory,
            ScreenId::Help => &mut self.help,
            ScreenId::QuitPrompt => &mut self.quit_prompt,
            ScreenId::GameOver => &mut self.game_over,
            ScreenId::LoadGame => &mut self.load_game,
            ScreenId::Error => &mut self.error,
        }
    }
}
