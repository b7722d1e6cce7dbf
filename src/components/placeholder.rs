use indoc::formatdoc;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};

use super::{AppView, ViewContext};
use crate::ui::UiFrame;

/// Stand-in content for applications without a terminal rendition.
#[derive(Debug, Clone)]
pub struct PlaceholderView {
    title: String,
}

impl PlaceholderView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn body(&self) -> String {
        formatdoc! {"
            {title}

            Nothing to show here yet.
            Drag the title bar to move this window.",
            title = self.title,
        }
    }
}

impl AppView for PlaceholderView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ViewContext<'_>) {
        let paragraph = Paragraph::new(self.body()).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
