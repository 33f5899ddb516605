//! Dialog Frame Component
//!
//! A centered dialog with rounded borders. Every prompt-style screen
//! (welcome, quit, game over, error) draws through this.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::{centered_rect, LayoutContext};
use crate::ui::theme::{title_style, COLOR_PRIMARY};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: Option<&'a str>,
    /// Content height (not including borders and padding)
    pub content_height: u16,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
    /// Border color
    pub border_color: Color,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(content_height: u16) -> Self {
        Self {
            title: None,
            content_height,
            min_width: 30,
            max_width: 60,
            border_color: COLOR_PRIMARY,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Dialog width: half the area on wide terminals, 80% on narrow ones.
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig) -> u16 {
    let percentage = if ctx.is_narrow() { 80 } else { 50 };
    ctx.bounded_width(percentage, config.min_width, config.max_width)
}

/// Total height for `content_height` rows: borders plus one row of padding each side.
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height + 4
}

/// Render a dialog frame and return the inner content area.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let ctx = LayoutContext::from_rect(area);
    let dialog_area = centered_rect(
        calculate_dialog_width(&ctx, config),
        calculate_total_dialog_height(config.content_height),
        area,
    );

    frame.render_widget(Clear, dialog_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.border_color))
        .padding(Padding::new(2, 2, 1, 1));
    if let Some(title) = config.title {
        block = block.title(Span::styled(format!(" {} ", title), title_style()));
    }

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

/// Render a dialog whose body is `lines`, centered.
pub fn render_message_dialog(
    frame: &mut Frame,
    area: Rect,
    config: &DialogFrameConfig,
    lines: Vec<Line<'static>>,
) {
    let inner = render_dialog_frame(frame, area, config);
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new(3)
            .title("Test")
            .border_color(Color::Red)
            .max_width(70);

        assert_eq!(config.title, Some("Test"));
        assert_eq!(config.content_height, 3);
        assert_eq!(config.border_color, Color::Red);
        assert_eq!(config.max_width, 70);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new(3);
        // 50% of 120 = 60, at the max
        assert_eq!(calculate_dialog_width(&ctx, &config), 60);
    }

    #[test]
    fn test_calculate_dialog_width_narrow() {
        let ctx = LayoutContext::new(50, 20);
        let config = DialogFrameConfig::new(3);
        assert_eq!(calculate_dialog_width(&ctx, &config), 40);
    }

    #[test]
    fn test_calculate_total_dialog_height() {
        assert_eq!(calculate_total_dialog_height(3), 7);
    }
}
