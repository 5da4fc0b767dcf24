//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{info_dialog_area, render_error_dialog, render_info_dialog};
