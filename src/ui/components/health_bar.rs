//! Health gauge shown on the game screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::state::Health;
use crate::ui::theme::{health_color, title_style, COLOR_DIM};

/// Label drawn over the gauge, e.g. `"87 / 100"`.
pub fn health_label(health: Health) -> String {
    format!("{:.0} / {:.0}", health.current(), health.max())
}

pub fn render_health_bar(frame: &mut Frame, area: Rect, health: Health) {
    let ratio = health.ratio().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title("Health")
                .title_style(title_style())
                .border_style(Style::default().fg(COLOR_DIM)),
        )
        .gauge_style(Style::default().fg(health_color(ratio)).bg(Color::Reset))
        .ratio(ratio)
        .label(health_label(health));
    frame.render_widget(gauge, area);
}
