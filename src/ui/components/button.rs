//! Button component for TUI

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered, centered button. Focused buttons take the accent color.
pub fn render_button(
    buf: &mut Buffer,
    area: Rect,
    content: &str,
    is_focused: bool,
    accent: Color,
) {
    let border_style = if is_focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_focused {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    paragraph.block(block).render(area, buf);
}
