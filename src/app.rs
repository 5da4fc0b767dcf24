//! Application state and core logic

use crate::config::PageConfig;
use crate::event::AppEvent;
use crate::platform::is_submit_shortcut;
use crate::state::{
    drawer_key_action, DrawerCloseReason, DrawerKeyAction, FieldKey, Focus, PageState, Section,
};
use crate::submission::{SubmissionController, SubmissionSink, SubmitOutcome};
use crate::timer::{DeferredEvent, SUCCESS_BANNER_DURATION};
use crate::ui::info_dialog_area;
use crate::ui::layout::{
    drawer_area, drawer_item_at, split_screen, PageElement, PageLayout, Screen, PAGE_SCROLL,
    WHEEL_SCROLL,
};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Size assumed until the first frame reports the real one (height, width)
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (24, 80);

/// Main application struct
pub struct App {
    /// Current page state
    pub state: PageState,
    /// Municipal content
    pub config: PageConfig,
    controller: SubmissionController,
    sink: Box<dyn SubmissionSink>,
    /// Resets the success banner
    banner_timer: DeferredEvent,
    events: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: PageConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        Self {
            state: PageState::default(),
            config,
            controller: SubmissionController::new(),
            sink,
            banner_timer: DeferredEvent::new(tx),
            events,
            quit: false,
            terminal_size: None,
        }
    }

    /// Called once the page is on screen. Shows the notice the first time only.
    pub fn mount(&mut self) {
        if self.state.overlay.mount() {
            tracing::info!("informational overlay shown");
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Record a new terminal size and keep the scroll offset in range
    pub fn resize(&mut self, height: u16, width: u16) {
        self.terminal_size = Some((height, width));
        self.reveal_focus();
    }

    fn screen(&self) -> Screen {
        let (height, width) = self.terminal_size.unwrap_or(DEFAULT_TERMINAL_SIZE);
        split_screen(Rect::new(0, 0, width, height))
    }

    /// Layout of the page body for the current state
    pub fn page_layout(&self, body: Rect) -> PageLayout {
        PageLayout::compute(
            body,
            self.state.services.is_visible(),
            self.config.services().len(),
        )
    }

    /// Scroll just enough to show the focused element
    pub fn reveal_focus(&mut self) {
        let screen = self.screen();
        let layout = self.page_layout(screen.body);
        self.state.scroll_offset =
            layout.scroll_to_reveal(self.state.focus, self.state.scroll_offset, screen.body.height);
    }

    fn scroll_down(&mut self, lines: u16) {
        let screen = self.screen();
        let max = self.page_layout(screen.body).max_scroll(screen.body.height);
        self.state.scroll_down(lines, max);
    }

    /// Jump to a section anchor and focus its first element
    fn navigate_to(&mut self, section: Section) {
        let screen = self.screen();
        let layout = self.page_layout(screen.body);
        self.state.jump_to(section);
        self.state.scroll_offset = layout
            .section_offset(section)
            .min(layout.max_scroll(screen.body.height));
        tracing::debug!(section = section.label(), "navigated");
    }

    fn dismiss_overlay(&mut self) {
        if self.state.overlay.dismiss() {
            tracing::info!("informational overlay dismissed");
        }
    }

    fn open_drawer(&mut self) {
        self.state.focus = Focus::Menu;
        self.state.drawer.open();
    }

    /// Handle an event from the app's event channel
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SuccessBannerExpired { generation } => {
                if self.state.banner.expire(generation) {
                    tracing::debug!(generation, "success banner expired");
                }
            }
        }
    }

    /// Apply every event that is ready without waiting
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_app_event(event);
        }
    }

    /// Validate and record the form, then show the banner or the errors
    async fn submit(&mut self) {
        let outcome = self
            .controller
            .submit(&mut self.state.form, self.sink.as_ref())
            .await;

        match outcome {
            Ok(SubmitOutcome::Accepted(ack)) => {
                let generation = self.state.banner.show();
                self.banner_timer.schedule(
                    SUCCESS_BANNER_DURATION,
                    AppEvent::SuccessBannerExpired { generation },
                );
                tracing::debug!(
                    submission_id = %ack.submission_id,
                    generation,
                    "success banner shown"
                );
            }
            Ok(SubmitOutcome::Rejected(errors)) => {
                if let Some(key) = errors.fields().next() {
                    self.state.focus = Focus::Field(key);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                self.state
                    .push_error(format!("Your message could not be sent: {err}"));
            }
        }
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        if self.state.is_modal_active() {
            self.handle_modal_key(key);
            return Ok(());
        }

        if self.state.drawer.is_open() {
            self.handle_drawer_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::PageDown => {
                self.scroll_down(PAGE_SCROLL);
                return Ok(());
            }
            KeyCode::PageUp => {
                self.state.scroll_up(PAGE_SCROLL);
                return Ok(());
            }
            _ => {}
        }

        if is_submit_shortcut(&key) {
            self.submit().await;
        } else {
            match key.code {
                KeyCode::Tab => self.state.focus_next(),
                KeyCode::BackTab => self.state.focus_prev(),
                _ if self.state.focus.is_text_field() => self.handle_field_key(key),
                _ => self.handle_control_key(key).await,
            }
        }

        self.reveal_focus();
        Ok(())
    }

    /// Keys while the error dialog or the notice is up. The error dialog wins.
    fn handle_modal_key(&mut self, key: KeyEvent) {
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
        } else if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('x')
        ) {
            self.dismiss_overlay();
        }
    }

    fn handle_drawer_key(&mut self, key: KeyEvent) {
        match drawer_key_action(&key) {
            DrawerKeyAction::Ignore => {}
            DrawerKeyAction::HighlightPrev => self.state.drawer.highlight_prev(),
            DrawerKeyAction::HighlightNext => self.state.drawer.highlight_next(),
            DrawerKeyAction::Select => {
                let section = self.state.drawer.select_highlighted();
                self.navigate_to(section);
            }
            DrawerKeyAction::Close(reason) => {
                self.state.drawer.close(reason);
            }
        }
    }

    /// Keys while a text field is focused
    fn handle_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if self.state.focus == Focus::Field(FieldKey::Message) => {
                self.state.input_char('\n');
            }
            KeyCode::Enter => self.state.focus_next(),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.input_char(c);
            }
            _ => {}
        }
    }

    /// Keys while the menu icon or a button is focused
    async fn handle_control_key(&mut self, key: KeyEvent) {
        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
        match (self.state.focus, key.code) {
            (Focus::Menu, _) if activate => self.open_drawer(),
            (Focus::ServicesToggle, _) if activate => {
                self.state.services.toggle();
            }
            (Focus::Submit, _) if activate => self.submit().await,
            (_, KeyCode::Char('m')) => self.open_drawer(),
            (_, KeyCode::Char('s')) => {
                self.state.services.toggle();
            }
            (_, KeyCode::Down) => self.scroll_down(1),
            (_, KeyCode::Up) => self.state.scroll_up(1),
            _ => {}
        }
    }

    /// Handle mouse input
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let position = Position::new(mouse.column, mouse.row);

        if self.state.is_modal_active() {
            self.handle_modal_click(mouse.kind, position);
            return Ok(());
        }

        let screen = self.screen();
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(WHEEL_SCROLL),
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_SCROLL),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(position, &screen).await;
            }
            _ => {}
        }
        Ok(())
    }

    /// The error dialog is dismissed from the keyboard only; a left click
    /// outside the notice dismisses it.
    fn handle_modal_click(&mut self, kind: MouseEventKind, position: Position) {
        if self.state.has_errors() || kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (height, width) = self.terminal_size.unwrap_or(DEFAULT_TERMINAL_SIZE);
        let dialog = info_dialog_area(Rect::new(0, 0, width, height), self.config.notice());
        if !dialog.contains(position) {
            self.dismiss_overlay();
        }
    }

    async fn handle_click(&mut self, position: Position, screen: &Screen) {
        if self.state.drawer.is_open() {
            let drawer = drawer_area(screen.body);
            if let Some(index) = drawer_item_at(drawer, position) {
                if let Some(section) = self.state.drawer.select(index) {
                    self.navigate_to(section);
                }
            } else if !drawer.contains(position) {
                self.state.drawer.close(DrawerCloseReason::OutsideClick);
            }
            return;
        }

        if screen.menu_button.contains(position) {
            self.open_drawer();
            return;
        }

        let layout = self.page_layout(screen.body);
        match layout.hit_test(position, self.state.scroll_offset, screen.body) {
            Some(PageElement::ServicesToggle) => {
                self.state.focus = Focus::ServicesToggle;
                self.state.services.toggle();
            }
            Some(PageElement::Field(key)) => self.state.focus = Focus::Field(key),
            Some(PageElement::Submit) => {
                self.state.focus = Focus::Submit;
                self.submit().await;
            }
            _ => return,
        }
        self.reveal_focus();
    }
}
