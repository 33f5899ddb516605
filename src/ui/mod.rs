//! UI rendering for the dungeon.
//!
//! Screens draw themselves through [`crate::screens::Screen::render`]; this
//! module holds what they share: the color theme, layout helpers and a few
//! components (dialog frame, health bar, toolbar).

pub mod components;
pub mod layout;
pub mod theme;

pub use layout::{centered_rect, LayoutContext};
pub use theme::{
    COLOR_DIM, COLOR_ERROR, COLOR_HEALTH_HIGH, COLOR_HEALTH_LOW, COLOR_PRIMARY, COLOR_SECONDARY,
    COLOR_SELECTED, COLOR_WELCOME,
};

use ratatui::Frame;

use crate::app::App;

/// Render the active screen over the whole frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    app.screens()
        .get(app.active_screen())
        .render(frame, area, app.state());
}
