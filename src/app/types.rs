//! Type definitions for the application state machine.
//!
//! - [`ScreenId`] - Which screen is currently displayed
//! - [`ClockToken`] - Generation stamp carried by tick events

/// Every screen the game can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Welcome,
    MainMenu,
    Game,
    Stats,
    Inventory,
    Help,
    QuitPrompt,
    GameOver,
    LoadGame,
    Error,
}

impl ScreenId {
    pub const ALL: [ScreenId; 10] = [
        ScreenId::Welcome,
        ScreenId::MainMenu,
        ScreenId::Game,
        ScreenId::Stats,
        ScreenId::Inventory,
        ScreenId::Help,
        ScreenId::QuitPrompt,
        ScreenId::GameOver,
        ScreenId::LoadGame,
        ScreenId::Error,
    ];
}

/// Generation of the tick clock.
///
/// Entering a screen starts a new generation; ticks stamped with an older
/// one are dropped so at most one tick chain is ever live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClockToken(u64);

impl ClockToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
