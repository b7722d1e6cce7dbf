use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::{AppView, ViewContext};
use crate::ui::UiFrame;
use crate::window::{OpenRequest, Payload};

const BLANK_PAGE: &str = "about:blank";

/// Browser-style view. Shows the navigation target it was opened with and
/// counts reloads.
#[derive(Debug, Clone, Default)]
pub struct BrowserView {
    reloads: u32,
}

impl BrowserView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reloads(&self) -> u32 {
        self.reloads
    }

    fn address<'a>(ctx: &ViewContext<'a>) -> &'a str {
        match ctx.payload() {
            Some(Payload::Navigate { url }) => url.as_str(),
            None => BLANK_PAGE,
        }
    }
}

impl AppView for BrowserView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        let mut lines = vec![
            Line::styled(
                format!("Address: {}", Self::address(ctx)),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
        ];
        // Embedded pages stop reacting while a window is being moved or resized.
        if ctx.capture_active() {
            lines.push(Line::from("(page paused)"));
        } else if self.reloads > 0 {
            lines.push(Line::from(format!("Reloaded {} time(s)", self.reloads)));
        } else {
            lines.push(Line::from("Press r to reload."));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_key(&mut self, key: &KeyEvent, ctx: &ViewContext<'_>) -> Option<OpenRequest> {
        if key.code == KeyCode::Char('r') && !ctx.capture_active() {
            self.reloads += 1;
        }
        None
    }
}
