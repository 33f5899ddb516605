//! The cooperative event loop.
//!
//! One event at a time: terminal input and channel events are merged with
//! `tokio::select!`, dispatched to the app, and the resulting command handed
//! to the executor. The screen is redrawn before waiting for the next event.

use std::ops::ControlFlow;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::executor::CommandExecutor;
use crate::app::{App, AppEvent};
use crate::ui;

/// Map a terminal event to an app event. Key releases and repeats are dropped.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
        _ => None,
    }
}

/// Dispatch one event and start whatever command it produced.
pub fn step(app: &mut App, executor: &CommandExecutor, event: AppEvent) -> ControlFlow<()> {
    match app.dispatch(event) {
        Some(command) => executor.execute(command),
        None => ControlFlow::Continue(()),
    }
}

/// Run until a quit command is executed or terminal input closes.
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    executor: &CommandExecutor,
    mut events: mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let size = terminal.size()?;
    app.dispatch(AppEvent::Resize(size.width, size.height));

    if let Some(command) = app.init() {
        if executor.execute(command).is_break() {
            return Ok(());
        }
    }

    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let event = tokio::select! {
            maybe_event = event_stream.next() => match maybe_event {
                Some(Ok(raw)) => match translate(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::info!("Terminal input closed");
                    return Ok(());
                }
            },
            Some(event) = events.recv() => event,
        };

        if step(app, executor, event).is_break() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_translate_keeps_presses_and_resizes() {
        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(translate(Event::Key(press)), Some(AppEvent::Key(press)));
        assert_eq!(translate(Event::Resize(80, 24)), Some(AppEvent::Resize(80, 24)));
    }

    #[test]
    fn test_translate_drops_releases() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
        assert_eq!(translate(Event::FocusGained), None);
    }
}
