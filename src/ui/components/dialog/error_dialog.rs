//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use super::dismiss_hint;
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Could not send",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(dismiss_hint("dismiss")),
            max_width: 60,
        },
    );
}
