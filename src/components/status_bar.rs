use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// One-row bar with left- and right-aligned text; used for the top bar.
pub struct StatusBar {
    left: String,
    right: String,
    style: Style,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            style: Style::default(),
        }
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Fill the first row of `area` and write both labels. The right label
    /// is dropped when the two would overlap.
    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let (x, y) = (area.x, area.y);
        let width = area.width as usize;
        let buffer = frame.buffer_mut();
        let bounds = Rect::new(x, y, area.width, 1).intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        buffer.set_style(bounds, self.style);

        let left = truncate_to_width(&self.left, width);
        let left_width = left.chars().count();
        safe_set_string(buffer, bounds, x, y, &left, self.style);

        let right_width = self.right.chars().count();
        if !self.right.is_empty() && left_width + right_width < width {
            let start_x = x.saturating_add((width - right_width) as u16);
            safe_set_string(buffer, bounds, start_x, y, &self.right, self.style);
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::buffer_lines;
    use ratatui::buffer::Buffer;

    #[test]
    fn renders_left_and_right_labels() {
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        let mut bar = StatusBar::new();
        bar.set_left(" Notes");
        bar.set_right("^Q ");
        bar.render(&mut UiFrame::from_parts(area, &mut buf), area);
        assert_eq!(buffer_lines(&buf)[0], " Notes           ^Q");
        assert_eq!(buffer_lines(&buf)[1], "");
    }

    #[test]
    fn right_label_yields_to_long_left_label() {
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        let mut bar = StatusBar::default();
        bar.set_left("System Settings");
        bar.set_right("^Q");
        bar.render(&mut UiFrame::from_parts(area, &mut buf), area);
        assert_eq!(buffer_lines(&buf)[0], "System S");
    }
}
