//! Application model and event dispatch.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`ScreenId`] - Which screen is currently displayed
//! - [`AppEvent`] - Everything the event loop can deliver
//! - [`Command`] - Deferred work handed back to the runtime
//!
//! `App::dispatch` processes exactly one event to completion. It never
//! blocks and never performs I/O; anything slow is returned as a
//! [`Command`] for the runtime to execute.

mod command;
mod events;
mod types;

pub use command::{Command, PersistRequest};
pub use events::{AppEvent, PersistOutcome};
pub use types::{ClockToken, ScreenId};

use ratatui::Frame;

use crate::config::Rules;
use crate::screens::{ScreenRegistry, Update};
use crate::state::GameState;

/// Owns the game state, every screen, and which one is active.
#[derive(Debug)]
pub struct App {
    state: GameState,
    screens: ScreenRegistry,
    active: ScreenId,
    clock: ClockToken,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl App {
    /// Create the app. Call [`App::init`] before dispatching events.
    pub fn new(rules: Rules) -> Self {
        Self {
            state: GameState::new(rules),
            screens: ScreenRegistry::new(),
            active: ScreenId::Welcome,
            clock: ClockToken::default(),
        }
    }

    /// Enter the initial screen and return its startup command.
    pub fn init(&mut self) -> Option<Command> {
        self.switch_screen(ScreenId::Welcome)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn screens(&self) -> &ScreenRegistry {
        &self.screens
    }

    pub fn active_screen(&self) -> ScreenId {
        self.active
    }

    /// Current clock generation; only ticks carrying it are dispatched.
    pub fn clock(&self) -> ClockToken {
        self.clock
    }

    /// Process one event and return the command it produced, if any.
    pub fn dispatch(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::Resize(width, height) => {
                self.state.update_terminal_dimensions(width, height);
                return None;
            }
            AppEvent::FlashExpired => {
                self.state.damage_flash_active = false;
                return None;
            }
            AppEvent::Tick(token) if token != self.clock => {
                tracing::trace!("Dropping stale tick {:?} (current {:?})", token, self.clock);
                return None;
            }
            _ => {}
        }

        let update = self
            .screens
            .get_mut(self.active)
            .handle(&event, &mut self.state);
        self.apply(update)
    }

    /// Make `id` the active screen and run its enter hook.
    ///
    /// This is the only place the active screen changes. Every switch starts
    /// a new clock generation, so ticks armed by the previous screen die.
    pub fn switch_screen(&mut self, id: ScreenId) -> Option<Command> {
        tracing::debug!("Switching screen {:?} -> {:?}", self.active, id);
        self.active = id;
        self.clock = self.clock.next();
        self.state.status = None;
        self.screens
            .get_mut(id)
            .on_enter(&mut self.state, self.clock)
    }

    fn apply(&mut self, update: Update) -> Option<Command> {
        let entered = update.switch_to.and_then(|id| self.switch_screen(id));
        Command::batch([update.command, entered])
    }

    /// Draw the active screen.
    pub fn render(&self, frame: &mut Frame) {
        crate::ui::render(frame, self);
    }
}
