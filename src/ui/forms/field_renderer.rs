//! Field rendering utilities for the contact form

use crate::state::{FormField, ValidationError};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const CURSOR: &str = "▌";

/// Draw a form field. Fields with a validation error get a red border.
pub fn draw_field(
    buf: &mut Buffer,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&ValidationError>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = match (is_active, error.is_some()) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        // Keep the cursor row on screen once the text outgrows the box
        let rows = area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(rows.max(1));
        Paragraph::new(lines.split_off(skip))
    } else if field.value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.as_text(), style),
            cursor,
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    content.wrap(Wrap { trim: false }).block(block).render(area, buf);
}

/// Draw the inline validation message under a field
pub fn draw_field_error(buf: &mut Buffer, area: Rect, error: Option<&ValidationError>) {
    let Some(error) = error else {
        return;
    };
    let line = Line::from(Span::styled(
        format!(" {error}"),
        Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
    ));
    Paragraph::new(line).render(area, buf);
}
