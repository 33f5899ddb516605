//! Async runtime: the event loop and the command executor.

pub mod event_loop;
pub mod executor;

pub use event_loop::{run_app, step, translate};
pub use executor::{run_persist, CommandExecutor};
