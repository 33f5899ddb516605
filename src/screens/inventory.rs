//! Items the player carries.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use super::{Screen, Update};
use crate::app::{AppEvent, ScreenId};
use crate::input::{intent_of, Intent};
use crate::state::GameState;
use crate::ui::components::{render_message_dialog, DialogFrameConfig};
use crate::ui::theme::hint_style;

pub const EMPTY_INVENTORY: &str = "Your pack is empty.";

#[derive(Debug, Default)]
pub struct InventoryScreen;

impl Screen for InventoryScreen {
    fn handle(&mut self, event: &AppEvent, _state: &mut GameState) -> Update {
        match intent_of(event) {
            Some(Intent::Cancel) => Update::switch(ScreenId::Game),
            _ => Update::none(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let mut lines: Vec<Line<'static>> = if state.inventory.is_empty() {
            vec![Line::raw(EMPTY_INVENTORY)]
        } else {
            state
                .inventory
                .iter()
                .map(|item| Line::raw(format!("- {}", item)))
                .collect()
        };
        lines.push(Line::raw(""));
        lines.push(Line::styled("ESC to go back", hint_style()));

        let config = DialogFrameConfig::new(lines.len() as u16).title("Inventory");
        render_message_dialog(frame, area, &config, lines);
    }
}
