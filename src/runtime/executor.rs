//! Command interpreter.
//!
//! The executor is the only code that acts on [`Command`]s. Delays and
//! gateway calls run as spawned tasks that post their result back on the
//! event channel; nothing here ever touches [`crate::app::App`].

use std::ops::ControlFlow;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::{AppEvent, Command, PersistOutcome, PersistRequest};
use crate::traits::SaveGateway;

/// Runs commands against a save gateway and an event channel.
#[derive(Clone)]
pub struct CommandExecutor {
    gateway: Arc<dyn SaveGateway>,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl std::fmt::Debug for CommandExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandExecutor").finish_non_exhaustive()
    }
}

impl CommandExecutor {
    pub fn new(gateway: Arc<dyn SaveGateway>, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { gateway, events }
    }

    /// Start `command`. Must be called inside a tokio runtime.
    ///
    /// Returns `Break` if the command asked the loop to stop. Every other
    /// part of a batch still starts first.
    pub fn execute(&self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Delay { after, event } => {
                let tx = self.events.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    // Receiver gone means the loop already exited.
                    let _ = tx.send(event);
                });
                ControlFlow::Continue(())
            }
            Command::Persist(request) => {
                let tx = self.events.clone();
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    let outcome = run_persist(gateway.as_ref(), request).await;
                    let _ = tx.send(AppEvent::Persistence(outcome));
                });
                ControlFlow::Continue(())
            }
            Command::Batch(commands) => {
                let mut flow = ControlFlow::Continue(());
                for command in commands {
                    if self.execute(command).is_break() {
                        flow = ControlFlow::Break(());
                    }
                }
                flow
            }
            Command::Quit => {
                tracing::info!("Quit requested");
                ControlFlow::Break(())
            }
        }
    }
}

/// Perform one gateway call and tag the result.
pub async fn run_persist(gateway: &dyn SaveGateway, request: PersistRequest) -> PersistOutcome {
    match request {
        PersistRequest::Save(snapshot) => {
            let result = gateway.save(snapshot).await;
            if let Err(e) = &result {
                tracing::warn!("[{}] save failed: {}", e.error_code(), e);
            }
            PersistOutcome::Saved(result)
        }
        PersistRequest::List => PersistOutcome::Listed(gateway.list().await),
        PersistRequest::Load(id) => {
            tracing::debug!("Loading save {}", id);
            PersistOutcome::Loaded(id, gateway.load(id).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySaves;
    use crate::app::ClockToken;
    use crate::models::GameSnapshot;
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn executor() -> (CommandExecutor, InMemorySaves, mpsc::UnboundedReceiver<AppEvent>) {
        let saves = InMemorySaves::new();
        let (tx, rx) = mpsc::unbounded_channel();
        (CommandExecutor::new(Arc::new(saves.clone()), tx), saves, rx)
    }

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            health: 42.0,
            inventory: vec!["Potion".to_string()],
            stats: BTreeMap::from([("Strength".to_string(), 10)]),
        }
    }

    #[tokio::test]
    async fn test_delay_posts_event() {
        let (executor, _, mut rx) = executor();
        let token = ClockToken::default().next();
        let flow = executor.execute(Command::tick(Duration::from_millis(1), token));
        assert!(flow.is_continue());
        assert_eq!(rx.recv().await, Some(AppEvent::Tick(token)));
    }

    #[tokio::test]
    async fn test_persist_posts_outcome() {
        let (executor, saves, mut rx) = executor();
        executor.execute(Command::Persist(PersistRequest::Save(snapshot())));
        match rx.recv().await {
            Some(AppEvent::Persistence(PersistOutcome::Saved(Ok(_)))) => {}
            other => panic!("expected save outcome, got {:?}", other),
        }
        assert_eq!(saves.records().len(), 1);
    }

    #[tokio::test]
    async fn test_quit_breaks_after_starting_batch() {
        let (executor, _, mut rx) = executor();
        let flow = executor.execute(Command::Batch(vec![
            Command::Quit,
            Command::flash_timer(Duration::from_millis(1)),
        ]));
        assert!(flow.is_break());
        assert_eq!(rx.recv().await, Some(AppEvent::FlashExpired));
    }

    #[tokio::test]
    async fn test_run_persist_reports_failures() {
        let saves = InMemorySaves::new();
        saves.set_list_should_fail(true);
        let outcome = run_persist(&saves, PersistRequest::List).await;
        assert!(matches!(outcome, PersistOutcome::Listed(Err(_))));
    }
}
