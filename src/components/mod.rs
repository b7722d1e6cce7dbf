use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::apps::AppId;
use crate::ui::UiFrame;
use crate::window::OpenRequest;

pub mod browser;
pub mod launcher;
pub mod placeholder;
pub mod status_bar;

pub use browser::BrowserView;
pub use launcher::LauncherView;
pub use placeholder::PlaceholderView;
pub use status_bar::StatusBar;

pub use crate::component_context::ViewContext;

/// Content of one application window.
pub trait AppView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>);

    /// Handle a key while the window is active. A view may ask for another
    /// window to be opened.
    fn handle_key(&mut self, _key: &KeyEvent, _ctx: &ViewContext<'_>) -> Option<OpenRequest> {
        None
    }
}

/// Default view for an application.
pub fn view_for(app: AppId, title: &str) -> Box<dyn AppView> {
    match app {
        AppId::Finder => Box::new(LauncherView::new()),
        AppId::Safari => Box::new(BrowserView::new()),
        _ => Box::new(PlaceholderView::new(title)),
    }
}
