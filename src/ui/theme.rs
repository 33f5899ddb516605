//! Color theme constants for the dungeon UI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Primary accent - titles and borders
pub const COLOR_PRIMARY: Color = Color::Rgb(174, 129, 252); // #AE81FC

/// Secondary accent - hints and menu entries
pub const COLOR_SECONDARY: Color = Color::Rgb(255, 151, 0); // #FF9700

/// Error text and borders
pub const COLOR_ERROR: Color = Color::Rgb(255, 92, 92); // #FF5C5C

/// Selected toolbar entry / list row background
pub const COLOR_SELECTED: Color = Color::Rgb(27, 153, 139); // #1B998B

/// Welcome banner text
pub const COLOR_WELCOME: Color = Color::Rgb(62, 197, 248); // #3EC5F8

/// Health bar at zero health, and the damage flash
pub const COLOR_HEALTH_LOW: Color = Color::Rgb(255, 62, 65); // #FF3E41

/// Health bar at full health
pub const COLOR_HEALTH_HIGH: Color = Color::Rgb(0, 255, 0); // #00FF00

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Styles
// ============================================================================

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(COLOR_SECONDARY)
}

pub fn toolbar_style() -> Style {
    Style::default().bg(COLOR_PRIMARY).fg(Color::White)
}

pub fn toolbar_selected_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTED)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Interpolate between the low and high health colors.
pub fn health_color(ratio: f64) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    match (COLOR_HEALTH_LOW, COLOR_HEALTH_HIGH) {
        (Color::Rgb(lr, lg, lb), Color::Rgb(hr, hg, hb)) => {
            let mix = |low: u8, high: u8| (low as f64 + (high as f64 - low as f64) * ratio).round() as u8;
            Color::Rgb(mix(lr, hr), mix(lg, hg), mix(lb, hb))
        }
        _ => COLOR_HEALTH_HIGH,
    }
}
