//! Navigation drawer with the section anchors

use super::layout::drawer_area;
use crate::app::App;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub fn draw(frame: &mut Frame, body: Rect, app: &App) {
    if !app.state.drawer.is_open() {
        return;
    }
    let area = drawer_area(body);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| ListItem::new(format!(" {}", section.label())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸");

    let mut list_state = ListState::default();
    list_state.select(Some(app.state.drawer.highlighted_index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}
