//! Rendering tests using ratatui's TestBackend.

mod common;

use chrono::{TimeZone, Utc};
use crossterm::event::KeyCode;

use common::{char_key, press, render_app, render_to_string, sample_snapshot, tick, TestAppBuilder};
use dungeon_crawler::app::{AppEvent, PersistOutcome, ScreenId};
use dungeon_crawler::models::SaveRecord;
use dungeon_crawler::screens::error::ERROR_HEADLINE;
use dungeon_crawler::screens::game_over::GAME_OVER_MESSAGE;
use dungeon_crawler::screens::inventory::EMPTY_INVENTORY;
use dungeon_crawler::screens::load_game::{LISTING_SAVES, LOAD_TITLE, NO_SAVES};
use dungeon_crawler::screens::quit_prompt::QUIT_QUESTION;
use dungeon_crawler::screens::welcome::{WELCOME_HINT, WELCOME_MESSAGE};
use dungeon_crawler::screens::MenuEntry;
use dungeon_crawler::ui::COLOR_HEALTH_LOW;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 30;

#[test]
fn test_welcome_reveals_title_gradually() {
    let mut app = TestAppBuilder::new().build();
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(!output.contains(WELCOME_MESSAGE));
    assert!(output.contains(WELCOME_HINT));

    for _ in 0..7 {
        tick(&mut app);
    }
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains("Welcome"));
    assert!(!output.contains(WELCOME_MESSAGE));

    while tick(&mut app).is_some() {}
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains(WELCOME_MESSAGE));
}

#[test]
fn test_main_menu_lists_entries() {
    let app = TestAppBuilder::new().on_screen(ScreenId::MainMenu).build();
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains("Main Menu"));
    for entry in MenuEntry::ALL {
        assert!(output.contains(entry.label()), "missing {}", entry.label());
    }
    assert!(output.contains("> Start New Game"));
}

#[test]
fn test_game_shows_toolbar_and_health() {
    let app = TestAppBuilder::new()
        .on_screen(ScreenId::Game)
        .with_health(42.0)
        .build();
    let output = render_to_string(&app, WIDTH, HEIGHT);
    for label in ["File", "Stats", "Inventory", "Help"] {
        assert!(output.contains(label), "missing toolbar entry {}", label);
    }
    assert!(output.contains("Health"));
    assert!(output.contains("42 / 100"));
}

#[test]
fn test_damage_flash_fills_screen() {
    let mut app = TestAppBuilder::new().on_screen(ScreenId::Game).build();
    app.dispatch(char_key('h'));

    let terminal = render_app(&app, WIDTH, HEIGHT);
    assert!(terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .all(|cell| cell.bg == COLOR_HEALTH_LOW));

    app.dispatch(AppEvent::FlashExpired);
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains("90 / 100"));
}

#[test]
fn test_stats_inventory_and_help_content() {
    let mut app = TestAppBuilder::new().on_screen(ScreenId::Stats).build();
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains("Player Stats"));
    assert!(output.contains("Strength"));
    assert!(output.contains("Agility"));

    app.switch_screen(ScreenId::Inventory);
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains("Potion"));
    assert!(output.contains("Shield"));

    app.state_mut().inventory.clear();
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains(EMPTY_INVENTORY));

    app.switch_screen(ScreenId::Help);
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains("Ctrl+S"));
    assert!(output.contains("Save game"));
}

#[test]
fn test_quit_prompt_text() {
    let app = TestAppBuilder::new().on_screen(ScreenId::QuitPrompt).build();
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains(QUIT_QUESTION));
    assert!(output.contains("ESC to Cancel"));
    assert!(output.contains("ENTER to Confirm"));
}

#[test]
fn test_game_over_text() {
    let app = TestAppBuilder::new().on_screen(ScreenId::GameOver).build();
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains(GAME_OVER_MESSAGE));
    assert!(output.contains("Press ENTER to return to the Main Menu"));
}

#[test]
fn test_error_screen_shows_message() {
    let mut app = TestAppBuilder::new().build();
    app.state_mut().last_error = Some("Disk on fire".to_string());
    app.switch_screen(ScreenId::Error);
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains(ERROR_HEADLINE));
    assert!(output.contains("Disk on fire"));
    assert!(output.contains("Press ENTER for Main Menu"));
}

#[test]
fn test_load_game_states() {
    let mut app = TestAppBuilder::new().on_screen(ScreenId::LoadGame).build();
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains(LOAD_TITLE));
    assert!(output.contains(LISTING_SAVES));

    app.dispatch(AppEvent::Persistence(PersistOutcome::Listed(Ok(vec![]))));
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains(NO_SAVES));

    let record = SaveRecord::new(sample_snapshot(), Utc.timestamp_millis_opt(1_000).unwrap());
    let label = record.label();
    app.dispatch(AppEvent::Persistence(PersistOutcome::Listed(Ok(vec![record]))));
    let output = render_to_string(&app, WIDTH, HEIGHT);
    assert!(output.contains(&label));
    assert!(output.contains("Health: 42"));
}

#[test]
fn test_every_screen_renders_in_tiny_terminal() {
    let screens = [
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
    for screen in screens {
        let app = TestAppBuilder::new().on_screen(screen).build();
        for (width, height) in [(1, 1), (20, 5), (79, 23)] {
            render_to_string(&app, width, height);
        }
    }
}

#[test]
fn test_toolbar_highlight_follows_cursor() {
    let mut app = TestAppBuilder::new().on_screen(ScreenId::Game).build();
    app.dispatch(press(KeyCode::Right));

    let terminal = render_app(&app, WIDTH, HEIGHT);
    let buffer = terminal.backend().buffer();
    let row: String = buffer.content()[..WIDTH as usize]
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    let x = row.find("Stats").unwrap();
    let selected_bg = buffer.content()[x].bg;
    let file_bg = buffer.content()[row.find("File").unwrap()].bg;
    assert_ne!(selected_bg, file_bg);
}
