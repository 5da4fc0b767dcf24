//! Independent page toggles: the services list and the navigation drawer

use super::Section;
use crossterm::event::{KeyCode, KeyEvent, ModifierKeyCode};

/// Visibility of the services list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServicesToggle {
    visible: bool,
}

impl ServicesToggle {
    /// Flip visibility and return the new value
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        tracing::debug!(visible = self.visible, "services list toggled");
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn button_label(&self) -> &'static str {
        if self.visible {
            "Hide services"
        } else {
            "Show services"
        }
    }
}

/// Why the drawer was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerCloseReason {
    OutsideClick,
    ItemSelected,
    CloseAction,
    KeyPress,
}

impl DrawerCloseReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OutsideClick => "outside click",
            Self::ItemSelected => "item selected",
            Self::CloseAction => "close action",
            Self::KeyPress => "key press",
        }
    }
}

/// What a key press does while the drawer is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKeyAction {
    Ignore,
    HighlightPrev,
    HighlightNext,
    Select,
    Close(DrawerCloseReason),
}

/// Tab, Shift+Tab and bare Shift presses move focus and never close the drawer.
pub fn is_focus_traversal_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift)
    )
}

pub fn drawer_key_action(key: &KeyEvent) -> DrawerKeyAction {
    if is_focus_traversal_key(key) {
        return DrawerKeyAction::Ignore;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => DrawerKeyAction::HighlightPrev,
        KeyCode::Down | KeyCode::Char('j') => DrawerKeyAction::HighlightNext,
        KeyCode::Enter | KeyCode::Char(' ') => DrawerKeyAction::Select,
        KeyCode::Esc => DrawerKeyAction::Close(DrawerCloseReason::CloseAction),
        _ => DrawerKeyAction::Close(DrawerCloseReason::KeyPress),
    }
}

/// Right-anchored navigation drawer
#[derive(Debug, Clone, Default)]
pub struct NavDrawer {
    open: bool,
    highlighted: usize,
}

impl NavDrawer {
    /// Open the drawer; returns false if it was already open
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        tracing::debug!("navigation drawer opened");
        true
    }

    /// Close the drawer; returns false if it was already closed
    pub fn close(&mut self, reason: DrawerCloseReason) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        tracing::debug!(reason = reason.label(), "navigation drawer closed");
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn highlighted(&self) -> Section {
        Section::ALL[self.highlighted]
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % Section::ALL.len();
    }

    pub fn highlight_prev(&mut self) {
        if self.highlighted == 0 {
            self.highlighted = Section::ALL.len() - 1;
        } else {
            self.highlighted -= 1;
        }
    }

    /// Select the item at `index`, closing the drawer
    pub fn select(&mut self, index: usize) -> Option<Section> {
        let section = Section::ALL.get(index).copied()?;
        self.highlighted = index;
        self.close(DrawerCloseReason::ItemSelected);
        Some(section)
    }

    /// Select the highlighted item, closing the drawer
    pub fn select_highlighted(&mut self) -> Section {
        let section = self.highlighted();
        self.close(DrawerCloseReason::ItemSelected);
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    mod services_toggle {
        use super::*;

        #[test]
        fn test_hidden_by_default() {
            let toggle = ServicesToggle::default();
            assert!(!toggle.is_visible());
            assert_eq!(toggle.button_label(), "Show services");
        }

        #[test]
        fn test_toggle_twice_restores_value() {
            let mut toggle = ServicesToggle::default();
            let original = toggle.is_visible();
            assert!(toggle.toggle());
            assert_eq!(toggle.button_label(), "Hide services");
            toggle.toggle();
            assert_eq!(toggle.is_visible(), original);
        }
    }

    mod drawer_keys {
        use super::*;

        #[test]
        fn test_tab_and_shift_are_ignored() {
            assert_eq!(drawer_key_action(&key(KeyCode::Tab)), DrawerKeyAction::Ignore);
            assert_eq!(
                drawer_key_action(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
                DrawerKeyAction::Ignore
            );
            assert_eq!(
                drawer_key_action(&KeyEvent::new(
                    KeyCode::Modifier(ModifierKeyCode::LeftShift),
                    KeyModifiers::SHIFT
                )),
                DrawerKeyAction::Ignore
            );
            assert_eq!(
                drawer_key_action(&key(KeyCode::Modifier(ModifierKeyCode::RightShift))),
                DrawerKeyAction::Ignore
            );
        }

        #[test]
        fn test_escape_is_close_action() {
            assert_eq!(
                drawer_key_action(&key(KeyCode::Esc)),
                DrawerKeyAction::Close(DrawerCloseReason::CloseAction)
            );
        }

        #[test]
        fn test_navigation_keys() {
            assert_eq!(drawer_key_action(&key(KeyCode::Up)), DrawerKeyAction::HighlightPrev);
            assert_eq!(
                drawer_key_action(&key(KeyCode::Char('j'))),
                DrawerKeyAction::HighlightNext
            );
            assert_eq!(drawer_key_action(&key(KeyCode::Enter)), DrawerKeyAction::Select);
        }

        #[test]
        fn test_other_keys_close() {
            assert_eq!(
                drawer_key_action(&key(KeyCode::Char('x'))),
                DrawerKeyAction::Close(DrawerCloseReason::KeyPress)
            );
        }
    }

    mod nav_drawer {
        use super::*;

        #[test]
        fn test_closed_by_default() {
            let drawer = NavDrawer::default();
            assert!(!drawer.is_open());
            assert_eq!(drawer.highlighted(), Section::Home);
        }

        #[test]
        fn test_open_and_close_report_changes() {
            let mut drawer = NavDrawer::default();
            assert!(drawer.open());
            assert!(!drawer.open());
            assert!(drawer.close(DrawerCloseReason::OutsideClick));
            assert!(!drawer.close(DrawerCloseReason::OutsideClick));
        }

        #[test]
        fn test_highlight_wraps() {
            let mut drawer = NavDrawer::default();
            drawer.highlight_prev();
            assert_eq!(drawer.highlighted(), Section::Contact);
            drawer.highlight_next();
            assert_eq!(drawer.highlighted(), Section::Home);
        }

        #[test]
        fn test_select_closes_and_returns_section() {
            let mut drawer = NavDrawer::default();
            drawer.open();
            assert_eq!(drawer.select(1), Some(Section::Services));
            assert!(!drawer.is_open());
            assert_eq!(drawer.highlighted_index(), 1);
        }

        #[test]
        fn test_select_out_of_range_keeps_drawer_open() {
            let mut drawer = NavDrawer::default();
            drawer.open();
            assert_eq!(drawer.select(7), None);
            assert!(drawer.is_open());
        }

        #[test]
        fn test_select_highlighted() {
            let mut drawer = NavDrawer::default();
            drawer.open();
            drawer.highlight_next();
            drawer.highlight_next();
            assert_eq!(drawer.select_highlighted(), Section::Contact);
            assert!(!drawer.is_open());
        }
    }
}
