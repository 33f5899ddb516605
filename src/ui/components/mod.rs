//! Reusable UI Components
//!
//! ## Components
//!
//! - `DialogFrame` - Centered dialog with rounded borders
//! - `HealthBar` - Health gauge colored from low to high
//! - `Toolbar` - In-game toolbar row

mod dialog_frame;
mod health_bar;
mod toolbar;

pub use dialog_frame::{
    calculate_total_dialog_height, render_dialog_frame, render_message_dialog, DialogFrameConfig,
};
pub use health_bar::{health_label, render_health_bar};
pub use toolbar::render_toolbar;
