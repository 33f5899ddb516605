//! Deferred actions returned by screen handlers.
//!
//! A [`Command`] describes work for the runtime; it never runs inside
//! dispatch. Follow-up results come back as [`AppEvent`]s.

use std::time::Duration;

use super::events::AppEvent;
use super::types::ClockToken;
use crate::models::{GameSnapshot, SaveId};

/// A save gateway call to run off the dispatch path.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistRequest {
    Save(GameSnapshot),
    List,
    Load(SaveId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Enqueue `event` once `after` has elapsed
    Delay { after: Duration, event: AppEvent },
    /// Run a gateway call and enqueue its outcome
    Persist(PersistRequest),
    /// Run every command; immediate ones complete before control returns
    Batch(Vec<Command>),
    /// Stop the event loop
    Quit,
}

impl Command {
    /// Arm the clock: a tick for `token` after `interval`.
    pub fn tick(interval: Duration, token: ClockToken) -> Self {
        Command::Delay {
            after: interval,
            event: AppEvent::Tick(token),
        }
    }

    /// Arm the damage flash timer.
    pub fn flash_timer(duration: Duration) -> Self {
        Command::Delay {
            after: duration,
            event: AppEvent::FlashExpired,
        }
    }

    /// Combine optional commands, flattening nested batches.
    ///
    /// Returns `None` when nothing remains and the bare command when only one does.
    pub fn batch<I>(commands: I) -> Option<Command>
    where
        I: IntoIterator<Item = Option<Command>>,
    {
        let mut flat = Vec::new();
        for command in commands.into_iter().flatten() {
            match command {
                Command::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Command::Batch(flat)),
        }
    }

    /// Leaf commands in execution order.
    pub fn leaves(&self) -> Vec<&Command> {
        match self {
            Command::Batch(commands) => commands.iter().flat_map(|c| c.leaves()).collect(),
            other => vec![other],
        }
    }

    /// True if this command (or any batched part) stops the loop.
    pub fn contains_quit(&self) -> bool {
        self.leaves().iter().any(|c| matches!(c, Command::Quit))
    }
}
