//! Responsive sizing for dialogs and panels.
//!
//! [`LayoutContext`] wraps the size of the area being drawn into and answers
//! proportional sizing questions, so screens never hard-code column counts.

use ratatui::layout::Rect;

/// Breakpoints below which the UI condenses.
pub mod breakpoints {
    /// Narrow terminal threshold (columns)
    pub const SM_WIDTH: u16 = 80;
    /// Short terminal threshold (rows)
    pub const SM_HEIGHT: u16 = 24;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of the available width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `[min, max]`.
    ///
    /// ```ignore
    /// let ctx = LayoutContext::new(200, 40);
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
