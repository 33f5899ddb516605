//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::{TestAppBuilder, press};
//!
//! let mut app = TestAppBuilder::new().on_screen(ScreenId::Game).with_health(10.0).build();
//! app.dispatch(press(KeyCode::Char('h')));
//! ```

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use dungeon_crawler::app::{App, AppEvent, Command, ScreenId};
use dungeon_crawler::config::Rules;
use dungeon_crawler::models::GameSnapshot;
use dungeon_crawler::ui;

/// A key press with no modifiers.
pub fn press(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn enter() -> AppEvent {
    press(KeyCode::Enter)
}

pub fn esc() -> AppEvent {
    press(KeyCode::Esc)
}

pub fn char_key(c: char) -> AppEvent {
    press(KeyCode::Char(c))
}

/// Ctrl + a character key.
pub fn ctrl(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Dispatch a tick for the app's current clock generation.
pub fn tick(app: &mut App) -> Option<Command> {
    let clock = app.clock();
    app.dispatch(AppEvent::Tick(clock))
}

/// Rules with short timers so async tests finish quickly.
pub fn fast_rules() -> Rules {
    Rules {
        tick_interval: Duration::from_millis(1),
        flash_duration: Duration::from_millis(1),
        ..Rules::default()
    }
}

/// Rules whose timers never fire during a test.
pub fn frozen_rules() -> Rules {
    Rules {
        tick_interval: Duration::from_secs(3600),
        flash_duration: Duration::from_secs(3600),
        ..Rules::default()
    }
}

/// Snapshot used by save/load round-trip tests.
pub fn sample_snapshot() -> GameSnapshot {
    GameSnapshot {
        health: 42.0,
        inventory: vec!["Potion".to_string()],
        stats: [("Strength".to_string(), 10)].into_iter().collect(),
    }
}

/// Builder for App instances in a given situation.
#[derive(Default)]
pub struct TestAppBuilder {
    rules: Option<Rules>,
    screen: Option<ScreenId>,
    health: Option<f64>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn on_screen(mut self, screen: ScreenId) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = Some(health);
        self
    }

    /// Build and initialize the app, then switch to the requested screen.
    pub fn build(self) -> App {
        let mut app = App::new(self.rules.unwrap_or_default());
        app.init();
        if let Some(health) = self.health {
            let mut snapshot = app.state().snapshot();
            snapshot.health = health;
            app.state_mut().apply_snapshot(snapshot);
        }
        if let Some(screen) = self.screen {
            app.switch_screen(screen);
        }
        app
    }
}

/// Render the app into a `width` x `height` test terminal.
pub fn render_app(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal
}

/// Rendered rows joined with newlines.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let terminal = render_app(app, width, height);
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
