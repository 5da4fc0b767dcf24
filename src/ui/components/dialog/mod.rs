//! Dialog components for TUI

mod base;
mod error_dialog;
mod info_dialog;

pub use error_dialog::render_error_dialog;
pub use info_dialog::{info_dialog_area, render_info_dialog};

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// "Press Enter or Esc to <action>" hint line
fn dismiss_hint(action: &str) -> Vec<Span<'static>> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(format!(" to {action}")),
    ]
}
