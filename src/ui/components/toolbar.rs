//! Toolbar Component
//!
//! Horizontal row of toolbar entries; the active one is highlighted.

use ratatui::text::{Line, Span};

use crate::state::Toolbar;
use crate::ui::theme::{toolbar_selected_style, toolbar_style};

pub fn render_toolbar(toolbar: &Toolbar) -> Line<'static> {
    let mut spans = Vec::with_capacity(toolbar.len() * 2);
    for (idx, item) in toolbar.items().iter().enumerate() {
        let style = if idx == toolbar.active_index() {
            toolbar_selected_style()
        } else {
            toolbar_style()
        };
        spans.push(Span::styled(format!(" {} ", item.label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
