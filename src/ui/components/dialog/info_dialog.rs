//! Informational notice shown once when the page opens

use super::base::{dialog_area, render_dialog, DialogConfig};
use super::dismiss_hint;
use ratatui::{layout::Rect, style::Color, Frame};

fn info_dialog_config(notice: &str) -> DialogConfig<'_> {
    DialogConfig {
        title: "Notice",
        title_color: Color::Yellow,
        border_color: Color::Yellow,
        message: notice,
        hint: Some(dismiss_hint("close")),
        max_width: 56,
    }
}

/// Area covered by the notice; clicks outside it dismiss the overlay
pub fn info_dialog_area(area: Rect, notice: &str) -> Rect {
    dialog_area(area, &info_dialog_config(notice))
}

pub fn render_info_dialog(frame: &mut Frame, notice: &str) {
    render_dialog(frame, info_dialog_config(notice));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_notice_is_drawn_inside_its_area() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_info_dialog(frame, "Offices open at 8:30"))
            .unwrap();

        let area = info_dialog_area(Rect::new(0, 0, 80, 24), "Offices open at 8:30");
        let buffer = terminal.backend().buffer();
        let row: String = (area.x..area.right())
            .map(|x| buffer[(x, area.y + 3)].symbol())
            .collect();
        assert!(row.contains("Offices open at 8:30"));
        assert_eq!(buffer[(area.x, area.y)].fg, Color::Yellow);
    }
}
