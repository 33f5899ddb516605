//! Dungeon Crawler - a terminal game shell
//!
//! A screen state machine driven by one event loop: clock ticks, key presses,
//! resizes and asynchronous save results are dispatched to whichever screen is
//! active. This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod runtime;
pub mod screens;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
