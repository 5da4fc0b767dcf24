//! UI module for rendering the TUI

mod components;
mod drawer;
mod forms;
pub mod layout;
mod page;

pub use components::info_dialog_area;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::split_screen(frame.area());
    let page_layout = app.page_layout(screen.body);

    layout::draw_header(frame, &screen, app);
    page::draw(frame, screen.body, &page_layout, app);
    drawer::draw(frame, screen.body, app);
    layout::draw_status_bar(frame, screen.status_bar, app);

    // Modal layers, topmost last
    if app.state.overlay.is_visible() {
        components::render_info_dialog(frame, app.config.notice());
    }
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::state::{FieldKey, Focus, FormValues};
    use crate::submission::MockSubmissionSink;
    use super::layout::PageElement;
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

    fn app() -> App {
        App::new(PageConfig::default(), Box::new(MockSubmissionSink::new()))
    }

    fn render(app: &App) -> Buffer {
        render_sized(app, 80, 24)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[tokio::test]
    async fn test_page_shows_header_and_hero() {
        let app = app();
        let text = screen_text(&render(&app));
        assert!(text.contains("Municipalidad de Cholchol"));
        assert!(text.contains("≡ Menu"));
        assert!(text.contains("Welcome to Cholchol"));
        assert!(text.contains("Show services"));
        assert!(!text.contains("Citizen Services"));
    }

    #[tokio::test]
    async fn test_overlay_is_drawn_after_mount_only() {
        let mut app = app();
        assert!(!screen_text(&render(&app)).contains("Notice"));

        app.mount();
        assert!(screen_text(&render(&app)).contains("Notice"));

        app.state.overlay.dismiss();
        assert!(!screen_text(&render(&app)).contains("Notice"));
    }

    #[tokio::test]
    async fn test_services_list_is_drawn_when_visible() {
        let mut app = app();
        app.state.services.toggle();
        let text = screen_text(&render(&app));
        assert!(text.contains("Hide services"));
        assert!(text.contains("Citizen Services"));
        assert!(text.contains("Educational Programs"));
    }

    #[tokio::test]
    async fn test_services_list_taller_than_the_body_is_drawn() {
        let config = PageConfig {
            services: Some((1..=30).map(|n| format!("Office {n:02}")).collect()),
            ..Default::default()
        };
        let mut app = App::new(config, Box::new(MockSubmissionSink::new()));
        app.resize(24, 80);
        app.state.services.toggle();
        let screen = layout::split_screen(Rect::new(0, 0, 80, 24));
        let list = app
            .page_layout(screen.body)
            .element(PageElement::ServicesList)
            .unwrap();
        app.state.scroll_offset = list.y;

        let text = screen_text(&render(&app));
        assert!(text.contains("Office 01"));
        assert!(text.contains("Office 21"));
        assert!(!text.contains("Office 22"));
    }

    #[tokio::test]
    async fn test_message_field_is_drawn_on_a_short_terminal() {
        let mut app = app();
        app.state.form.message.push_char('h');
        app.state.form.message.push_char('i');
        app.state.focus = Focus::Field(FieldKey::Message);
        app.resize(8, 80);

        let text = screen_text(&render_sized(&app, 80, 8));
        assert!(text.contains("hi▌"));
    }

    #[tokio::test]
    async fn test_drawer_lists_sections() {
        let mut app = app();
        app.state.drawer.open();
        let text = screen_text(&render(&app));
        assert!(text.contains("▸ Home"));
        assert!(text.contains(" Services"));
        assert!(text.contains(" Contact"));
    }

    #[tokio::test]
    async fn test_errors_and_banner_are_drawn_in_contact_section() {
        let mut app = app();
        app.state.form.fill(&FormValues::new("", "nope", "hi"));
        app.state.form.set_errors(crate::state::validate(&app.state.form.values()));
        app.state.focus = Focus::Field(FieldKey::Email);
        app.reveal_focus();

        let text = screen_text(&render(&app));
        assert!(text.contains("name is required"));
        assert!(text.contains("email is invalid"));

        app.state.banner.show();
        app.state.focus = Focus::Submit;
        app.reveal_focus();
        let text = screen_text(&render(&app));
        assert!(text.contains("Form submitted successfully!"));
    }

    #[tokio::test]
    async fn test_error_dialog_is_drawn_on_top() {
        let mut app = app();
        app.state.push_error("sink unavailable".to_string());
        let text = screen_text(&render(&app));
        assert!(text.contains("Could not send"));
        assert!(text.contains("sink unavailable"));
    }
}
