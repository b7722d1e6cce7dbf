use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{AppView, ViewContext};
use crate::apps::AppId;
use crate::ui::UiFrame;
use crate::window::{OpenRequest, Payload};

/// Bookmarks shown in the Finder window. Digit `n` opens entry `n`.
pub const BOOKMARKS: [(&str, &str); 4] = [
    ("The Rust Book", "https://doc.rust-lang.org/book/"),
    ("crates.io", "https://crates.io"),
    ("docs.rs", "https://docs.rs"),
    ("Ratatui", "https://ratatui.rs"),
];

#[derive(Debug, Clone, Default)]
pub struct LauncherView;

impl LauncherView {
    pub fn new() -> Self {
        Self
    }

    fn request_for(index: usize) -> Option<OpenRequest> {
        let (_, url) = BOOKMARKS.get(index)?;
        Some(OpenRequest::new(AppId::Safari).with_payload(Payload::navigate(*url)))
    }
}

impl AppView for LauncherView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ViewContext<'_>) {
        let mut lines = vec![Line::from("Favorites"), Line::default()];
        lines.extend(BOOKMARKS.iter().enumerate().map(|(i, (name, url))| {
            Line::from(vec![
                Span::raw(format!("{}  ", i + 1)),
                Span::raw(*name),
                Span::raw("  "),
                Span::raw(*url),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_key(&mut self, key: &KeyEvent, _ctx: &ViewContext<'_>) -> Option<OpenRequest> {
        let KeyCode::Char(c) = key.code else {
            return None;
        };
        let digit = c.to_digit(10)? as usize;
        Self::request_for(digit.checked_sub(1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::buffer_lines;
    use crossterm::event::KeyModifiers;
    use ratatui::buffer::Buffer;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn digits_open_browser_with_bookmark() {
        let mut view = LauncherView::new();
        let ctx = ViewContext::default();
        let request = view.handle_key(&press('2'), &ctx).expect("request");
        assert_eq!(request.app, AppId::Safari);
        assert_eq!(request.payload, Some(Payload::navigate("https://crates.io")));
    }

    #[test]
    fn other_keys_and_out_of_range_digits_do_nothing() {
        let mut view = LauncherView::new();
        let ctx = ViewContext::default();
        assert_eq!(view.handle_key(&press('0'), &ctx), None);
        assert_eq!(view.handle_key(&press('9'), &ctx), None);
        assert_eq!(view.handle_key(&press('x'), &ctx), None);
    }

    #[test]
    fn lists_numbered_bookmarks() {
        let area = Rect::new(0, 0, 50, 6);
        let mut buf = Buffer::empty(area);
        LauncherView::new().render(
            &mut UiFrame::from_parts(area, &mut buf),
            area,
            &ViewContext::default(),
        );
        let lines = buffer_lines(&buf);
        assert_eq!(lines[0], "Favorites");
        assert_eq!(lines[3], "2  crates.io  https://crates.io");
    }
}
