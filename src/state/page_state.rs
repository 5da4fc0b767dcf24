//! Page state definitions

use super::forms::{ContactForm, FieldKey};
use super::overlay::InfoOverlay;
use super::success_banner::SuccessBanner;
use super::toggles::{NavDrawer, ServicesToggle};
use std::collections::VecDeque;

/// In-page anchors reachable from the navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Services, Section::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Contact => "Contact",
        }
    }

    /// Element that receives focus when jumping to this section
    pub fn first_focus(&self) -> Focus {
        match self {
            Self::Home => Focus::Menu,
            Self::Services => Focus::ServicesToggle,
            Self::Contact => Focus::Field(FieldKey::Name),
        }
    }
}

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Menu,
    ServicesToggle,
    Field(FieldKey),
    Submit,
}

impl Focus {
    const RING: [Focus; 6] = [
        Focus::Menu,
        Focus::ServicesToggle,
        Focus::Field(FieldKey::Name),
        Focus::Field(FieldKey::Email),
        Focus::Field(FieldKey::Message),
        Focus::Submit,
    ];

    fn index(self) -> usize {
        Self::RING
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::RING[Self::RING.len() - 1]
        } else {
            Self::RING[index - 1]
        }
    }

    /// The text field under focus, if any
    pub fn field(self) -> Option<FieldKey> {
        match self {
            Self::Field(key) => Some(key),
            _ => None,
        }
    }

    pub fn is_text_field(self) -> bool {
        self.field().is_some()
    }
}

/// Snapshot of the page's boolean flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiFlags {
    pub submission_succeeded: bool,
    pub services_visible: bool,
    pub nav_drawer_open: bool,
    pub info_overlay_shown: bool,
}

/// State owned by one page instance
#[derive(Debug, Default)]
pub struct PageState {
    pub form: ContactForm,
    pub focus: Focus,
    pub services: ServicesToggle,
    pub drawer: NavDrawer,
    pub overlay: InfoOverlay,
    pub banner: SuccessBanner,
    pub scroll_offset: u16,
    error_queue: VecDeque<String>,
}

impl PageState {
    pub fn flags(&self) -> UiFlags {
        UiFlags {
            submission_succeeded: self.banner.is_visible(),
            services_visible: self.services.is_visible(),
            nav_drawer_open: self.drawer.is_open(),
            info_overlay_shown: self.overlay.was_shown(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Move focus to the first element of a section
    pub fn jump_to(&mut self, section: Section) {
        self.focus = section.first_focus();
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(key) = self.focus.field() {
            self.form.field_mut(key).push_char(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(key) = self.focus.field() {
            self.form.field_mut(key).pop_char();
        }
    }

    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// True while a modal layer captures all input
    pub fn is_modal_active(&self) -> bool {
        self.has_errors() || self.overlay.is_visible()
    }
}
