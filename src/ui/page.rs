//! Scrollable page body: hero, services and contact sections

use super::components::render_button;
use super::forms::{draw_field, draw_field_error};
use super::layout::{PageElement, PageLayout};
use crate::app::App;
use crate::state::Focus;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Draw the page column at its virtual rows, then copy the rows the body
/// shows. Elements cut by the top or bottom edge keep their visible part.
pub fn draw(frame: &mut Frame, body: Rect, layout: &PageLayout, app: &App) {
    let scroll = app.state.scroll_offset;
    let mut canvas = Buffer::empty(Rect::new(
        body.x,
        0,
        body.width,
        layout.content_height(),
    ));
    let window = Rect::new(body.x, scroll, body.width, body.height);
    for (element, virt) in layout.elements() {
        if virt.intersects(window) {
            draw_element(&mut canvas, element, virt, app);
        }
    }

    let shown = window.intersection(canvas.area);
    let target = frame.buffer_mut();
    for y in shown.top()..shown.bottom() {
        for x in shown.left()..shown.right() {
            target[(x, body.y + (y - scroll))] = canvas[(x, y)].clone();
        }
    }
}

fn heading(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )))
}

fn draw_element(buf: &mut Buffer, element: PageElement, area: Rect, app: &App) {
    let state = &app.state;
    // The drawer owns keyboard focus while it is open
    let page_focus = (!state.drawer.is_open()).then_some(state.focus);

    match element {
        PageElement::Hero => {
            let hero = Paragraph::new(vec![
                Line::from(Span::styled(
                    app.config.welcome(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    app.config.tagline(),
                    Style::default().fg(Color::Gray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
            hero.render(area, buf);
        }
        PageElement::ServicesHeading => heading("Our Services").render(area, buf),
        PageElement::ServicesToggle => render_button(
            buf,
            area,
            state.services.button_label(),
            page_focus == Some(Focus::ServicesToggle),
            Color::Cyan,
        ),
        PageElement::ServicesList => {
            let items: Vec<ListItem> = app
                .config
                .services()
                .into_iter()
                .map(|service| ListItem::new(format!(" • {service}")))
                .collect();
            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            Widget::render(list, area, buf);
        }
        PageElement::ContactHeading => heading("Contact").render(area, buf),
        PageElement::Field(key) => draw_field(
            buf,
            area,
            state.form.field(key),
            page_focus == Some(Focus::Field(key)),
            state.form.error_for(key),
        ),
        PageElement::FieldError(key) => draw_field_error(buf, area, state.form.error_for(key)),
        PageElement::Submit => render_button(
            buf,
            area,
            "Send",
            page_focus == Some(Focus::Submit),
            Color::Green,
        ),
        PageElement::Banner => {
            if state.banner.is_visible() {
                let banner = Paragraph::new(Line::from(Span::styled(
                    format!("✓ {SUCCESS_MESSAGE}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center);
                banner.render(area, buf);
            }
        }
        PageElement::Footer => {
            let footer = Paragraph::new(app.config.footer())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            footer.render(area, buf);
        }
    }
}
