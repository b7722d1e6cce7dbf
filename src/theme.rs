use ratatui::style::{Color, Modifier, Style};

// Desktop colors for both appearance modes. Kept as plain values so the
// renderer can pick a palette once per frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub desktop_bg: Color,
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub window_bg: Color,
    pub window_fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub dock_bg: Color,
    pub dock_fg: Color,
    pub dock_running: Color,
    pub close: Color,
    pub minimize: Color,
    pub maximize: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        desktop_bg: Color::Rgb(96, 140, 200),
        bar_bg: Color::Rgb(236, 236, 236),
        bar_fg: Color::Black,
        window_bg: Color::Rgb(250, 250, 250),
        window_fg: Color::Black,
        border: Color::Gray,
        border_focused: Color::DarkGray,
        dock_bg: Color::Rgb(220, 220, 220),
        dock_fg: Color::Black,
        dock_running: Color::Blue,
        close: Color::Rgb(255, 95, 87),
        minimize: Color::Rgb(254, 188, 46),
        maximize: Color::Rgb(40, 200, 64),
    };

    pub const DARK: Theme = Theme {
        desktop_bg: Color::Rgb(28, 32, 48),
        bar_bg: Color::Rgb(40, 40, 40),
        bar_fg: Color::White,
        window_bg: Color::Rgb(30, 30, 30),
        window_fg: Color::Gray,
        border: Color::DarkGray,
        border_focused: Color::Gray,
        dock_bg: Color::Rgb(50, 50, 50),
        dock_fg: Color::White,
        dock_running: Color::LightBlue,
        close: Color::Rgb(255, 95, 87),
        minimize: Color::Rgb(254, 188, 46),
        maximize: Color::Rgb(40, 200, 64),
    };

    pub fn for_mode(dark: bool) -> Theme {
        if dark { Theme::DARK } else { Theme::LIGHT }
    }

    pub fn window_style(&self) -> Style {
        Style::default().bg(self.window_bg).fg(self.window_fg)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.border_focused
        } else {
            self.border
        };
        Style::default().fg(color).bg(self.window_bg)
    }

    pub fn title_style(&self, focused: bool) -> Style {
        let style = self.window_style();
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style.fg(self.border)
        }
    }

    pub fn bar_style(&self) -> Style {
        Style::default().bg(self.bar_bg).fg(self.bar_fg)
    }

    pub fn dock_style(&self, running: bool) -> Style {
        let style = Style::default().bg(self.dock_bg).fg(self.dock_fg);
        if running {
            style.fg(self.dock_running).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::LIGHT
    }
}
