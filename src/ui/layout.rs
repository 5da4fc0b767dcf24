//! Layout components (header, scrollable page body, status bar)
//!
//! The page body is laid out in a virtual column whose rows start at 0; the
//! scroll offset maps it onto the screen. Drawing and mouse hit-testing both go
//! through [`PageLayout`] so they always agree.

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldKey, Focus, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const MENU_LABEL: &str = " ≡ Menu ";
pub const CONTENT_MAX_WIDTH: u16 = 64;
pub const DRAWER_WIDTH: u16 = 24;
pub const SERVICES_BUTTON_WIDTH: u16 = 22;
/// Lines moved by PageUp/PageDown
pub const PAGE_SCROLL: u16 = 10;
/// Lines moved by one mouse wheel notch
pub const WHEEL_SCROLL: u16 = 3;

const HERO_HEIGHT: u16 = 5;
const SECTION_GAP: u16 = 1;
const FIELD_HEIGHT: u16 = 3;
const MESSAGE_ROWS: u16 = 4;

/// Fixed screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub header: Rect,
    pub menu_button: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

/// Split the terminal into header, body and status bar
pub fn split_screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Min(0),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = chunks[0];
    let menu_width = (MENU_LABEL.chars().count() as u16).min(header.width);
    let menu_button = Rect {
        x: header.x + header.width - menu_width,
        y: header.y,
        width: menu_width,
        height: header.height,
    };

    Screen {
        header,
        menu_button,
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// Right-anchored drawer covering the body height
pub fn drawer_area(body: Rect) -> Rect {
    let width = DRAWER_WIDTH.min(body.width);
    Rect {
        x: body.x + body.width - width,
        y: body.y,
        width,
        height: body.height,
    }
}

/// Index of the drawer item under `position`, if any
pub fn drawer_item_at(drawer: Rect, position: Position) -> Option<usize> {
    if !drawer.contains(position) {
        return None;
    }
    // Items sit inside the border, one per row.
    let first_row = drawer.y + 1;
    if position.y < first_row || position.x == drawer.x || position.x + 1 == drawer.right() {
        return None;
    }
    let index = (position.y - first_row) as usize;
    (index < Section::ALL.len()).then_some(index)
}

/// Elements of the scrollable page body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageElement {
    Hero,
    ServicesHeading,
    ServicesToggle,
    ServicesList,
    ContactHeading,
    Field(FieldKey),
    FieldError(FieldKey),
    Submit,
    Banner,
    Footer,
}

/// Column builder that stacks elements top to bottom
struct Column {
    x: u16,
    width: u16,
    y: u16,
    elements: Vec<(PageElement, Rect)>,
}

impl Column {
    fn push(&mut self, element: PageElement, height: u16) {
        self.push_centered(element, height, self.width);
    }

    fn push_centered(&mut self, element: PageElement, height: u16, width: u16) {
        let width = width.min(self.width);
        let x = self.x + (self.width - width) / 2;
        self.elements.push((
            element,
            Rect {
                x,
                y: self.y,
                width,
                height,
            },
        ));
        self.y = self.y.saturating_add(height);
    }

    fn gap(&mut self) {
        self.y = self.y.saturating_add(SECTION_GAP);
    }
}

/// Virtual layout of the page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    elements: Vec<(PageElement, Rect)>,
    content_height: u16,
}

impl PageLayout {
    pub fn compute(body: Rect, services_visible: bool, service_count: usize) -> Self {
        let width = body.width.min(CONTENT_MAX_WIDTH);
        let mut column = Column {
            x: body.x + (body.width - width) / 2,
            width,
            y: 0,
            elements: Vec::new(),
        };

        column.push(PageElement::Hero, HERO_HEIGHT);
        column.gap();

        column.push(PageElement::ServicesHeading, 1);
        column.push_centered(
            PageElement::ServicesToggle,
            BUTTON_HEIGHT,
            SERVICES_BUTTON_WIDTH,
        );
        if services_visible {
            let rows = u16::try_from(service_count).unwrap_or(u16::MAX);
            column.push(PageElement::ServicesList, rows.saturating_add(2));
        }
        column.gap();

        column.push(PageElement::ContactHeading, 1);
        for key in FieldKey::ALL {
            let height = if key == FieldKey::Message {
                MESSAGE_ROWS + 2
            } else {
                FIELD_HEIGHT
            };
            column.push(PageElement::Field(key), height);
            column.push(PageElement::FieldError(key), 1);
        }
        column.push(PageElement::Submit, BUTTON_HEIGHT);
        column.push(PageElement::Banner, 1);
        column.gap();

        column.push(PageElement::Footer, 1);

        Self {
            content_height: column.y,
            elements: column.elements,
        }
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Largest useful scroll offset for a body of `viewport_height` rows
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.content_height.saturating_sub(viewport_height)
    }

    /// Every laid out element with its virtual rect, top to bottom
    pub fn elements(&self) -> impl Iterator<Item = (PageElement, Rect)> + '_ {
        self.elements.iter().copied()
    }

    /// Virtual rect of an element, if it is laid out
    pub fn element(&self, element: PageElement) -> Option<Rect> {
        self.elements
            .iter()
            .find(|(e, _)| *e == element)
            .map(|(_, rect)| *rect)
    }

    /// Scroll offset that puts a section at the top of the body
    pub fn section_offset(&self, section: Section) -> u16 {
        let anchor = match section {
            Section::Home => PageElement::Hero,
            Section::Services => PageElement::ServicesHeading,
            Section::Contact => PageElement::ContactHeading,
        };
        self.element(anchor).map(|rect| rect.y).unwrap_or_default()
    }

    /// Screen rect of the part of a virtual rect inside the body, if any
    pub fn project(&self, virt: Rect, scroll: u16, body: Rect) -> Option<Rect> {
        let window = Rect::new(virt.x, scroll, virt.width, body.height);
        let shown = virt.intersection(window);
        if shown.is_empty() {
            return None;
        }
        Some(Rect {
            y: body.y + (shown.y - scroll),
            ..shown
        })
    }

    /// Elements at least partly on screen, with their clipped screen rects
    pub fn visible(
        &self,
        scroll: u16,
        body: Rect,
    ) -> impl Iterator<Item = (PageElement, Rect)> + '_ {
        self.elements.iter().filter_map(move |(element, virt)| {
            self.project(*virt, scroll, body)
                .map(|rect| (*element, rect))
        })
    }

    pub fn hit_test(&self, position: Position, scroll: u16, body: Rect) -> Option<PageElement> {
        self.visible(scroll, body)
            .find(|(_, rect)| rect.contains(position))
            .map(|(element, _)| element)
    }

    /// Area that must be on screen while `focus` is focused
    fn reveal_rect(&self, focus: Focus) -> Option<Rect> {
        match focus {
            Focus::Menu => None,
            Focus::ServicesToggle => self.element(PageElement::ServicesToggle),
            Focus::Field(key) => {
                let field = self.element(PageElement::Field(key))?;
                Some(match self.element(PageElement::FieldError(key)) {
                    Some(error) => field.union(error),
                    None => field,
                })
            }
            Focus::Submit => {
                let submit = self.element(PageElement::Submit)?;
                Some(match self.element(PageElement::Banner) {
                    Some(banner) => submit.union(banner),
                    None => submit,
                })
            }
        }
    }

    /// Smallest scroll change that brings the focused element into view
    pub fn scroll_to_reveal(&self, focus: Focus, scroll: u16, viewport_height: u16) -> u16 {
        let Some(rect) = self.reveal_rect(focus) else {
            return scroll.min(self.max_scroll(viewport_height));
        };
        let bottom = rect.y.saturating_add(rect.height);
        let target = if rect.y < scroll {
            rect.y
        } else if bottom > scroll.saturating_add(viewport_height) {
            bottom.saturating_sub(viewport_height)
        } else {
            scroll
        };
        target.min(self.max_scroll(viewport_height))
    }
}

/// Draw the sticky header bar with the menu icon
pub fn draw_header(frame: &mut Frame, screen: &Screen, app: &App) {
    let bar_style = Style::default().bg(Color::Blue).fg(Color::White);
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.config.municipality()),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .style(bar_style);
    frame.render_widget(title, screen.header);

    let menu_focused = app.state.focus == Focus::Menu && !app.state.drawer.is_open();
    let menu_style = if menu_focused {
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        bar_style
    };
    frame.render_widget(
        Paragraph::new(MENU_LABEL).style(menu_style),
        screen.menu_button,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if app.state.banner.is_visible() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("sent", Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width - quit_width,
        y: area.y,
        width: quit_width,
        height: area.height,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current interaction context
fn get_hints(app: &App) -> String {
    let state = &app.state;
    if state.has_errors() {
        "Enter/Esc:dismiss".to_string()
    } else if state.overlay.is_visible() {
        "Enter/Esc:close notice".to_string()
    } else if state.drawer.is_open() {
        "j/k:move  Enter:go  Esc:close".to_string()
    } else if state.focus.is_text_field() {
        format!("Tab:next  Shift+Tab:prev  {SUBMIT_SHORTCUT}:send")
    } else {
        "Tab:next  Enter:activate  m:menu  s:services  PgUp/PgDn:scroll".to_string()
    }
}
