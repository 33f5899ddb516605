use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc;

use dungeon_crawler::adapters::JsonSaveStore;
use dungeon_crawler::app::App;
use dungeon_crawler::cli::{parse_args, run_cli_command, CliCommand, VERSION};
use dungeon_crawler::config::GameConfig;
use dungeon_crawler::logging::init_logging;
use dungeon_crawler::runtime::{run_app, CommandExecutor};
use dungeon_crawler::terminal::{setup_panic_hook, TerminalManager};

fn main() -> Result<()> {
    // Flags that only print are handled before the terminal is touched
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }

    color_eyre::install()?;

    let mut config = GameConfig::from_env();
    if let CliCommand::Play {
        save_dir: Some(dir),
    } = command
    {
        config = config.with_save_dir(dir);
    }

    let store = JsonSaveStore::from_config(&config)?;
    if let Err(e) = init_logging(store.dir(), config.log_filter()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::info!("dungeon-crawler {} starting, saves in {}", VERSION, store.dir().display());
    for warning in config.env_warnings.drain(..) {
        tracing::warn!("{}", warning);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let executor = CommandExecutor::new(Arc::new(store), event_tx);
    let mut app = App::new(config.rules.clone());

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app, &executor, event_rx));
    manager.restore()?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {:?}", e);
    } else {
        tracing::info!("Goodbye");
    }
    result
}
