use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::{InputDriver, OutputDriver};
use crate::ui::UiFrame;

/// Reads crossterm events from the controlling terminal. Runs of drag motion
/// already waiting in the queue collapse to the latest position, so a slow
/// frame never replays a stale trail of window positions.
#[derive(Default)]
pub struct ConsoleInputDriver {
    pending: VecDeque<Event>,
}

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key releases are reported by some terminals; nothing here acts on them.
    fn accept(event: &Event) -> bool {
        !matches!(event, Event::Key(key) if key.kind == KeyEventKind::Release)
    }

    fn is_drag(event: &Event) -> bool {
        matches!(event, Event::Mouse(m) if matches!(m.kind, MouseEventKind::Drag(_)))
    }

    fn same_drag(a: &Event, b: &Event) -> bool {
        Self::is_drag(a)
            && matches!((a, b), (Event::Mouse(a), Event::Mouse(b)) if a.kind == b.kind)
    }

    /// Skip over queued drags that `latest` continues. Returns `true` when a
    /// different event is next in the queue.
    fn coalesce_pending(&mut self, latest: &mut Event) -> bool {
        while let Some(next) = self.pending.front() {
            if !Self::same_drag(latest, next) {
                return true;
            }
            if let Some(next) = self.pending.pop_front() {
                *latest = next;
            }
        }
        false
    }

    fn read_internal(&mut self) -> io::Result<Event> {
        loop {
            let evt = crossterm::event::read()?;
            if Self::accept(&evt) {
                return Ok(evt);
            }
        }
    }
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        if !self.pending.is_empty() {
            return Ok(true);
        }
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        let mut latest = match self.pending.pop_front() {
            Some(evt) => evt,
            None => self.read_internal()?,
        };
        if !Self::is_drag(&latest) || self.coalesce_pending(&mut latest) {
            return Ok(latest);
        }
        while crossterm::event::poll(Duration::ZERO)? {
            let next = self.read_internal()?;
            if Self::same_drag(&latest, &next) {
                latest = next;
            } else {
                self.pending.push_back(next);
                break;
            }
        }
        Ok(latest)
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableMouseCapture)
        } else {
            execute!(io::stdout(), DisableMouseCapture)
        }
    }
}

/// Terminal window title shown while `active` is the focused window.
pub fn host_title(active: &str) -> String {
    format!("{active} - desk-wm")
}

/// Owns the alternate screen and raw mode for the lifetime of the app, and
/// mirrors the top bar title onto the host terminal.
pub struct ConsoleOutputDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
    title: Option<String>,
}

impl ConsoleOutputDriver {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            entered: false,
            title: None,
        })
    }
}

impl OutputDriver for ConsoleOutputDriver {
    type Backend = CrosstermBackend<Stdout>;

    fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.terminal.hide_cursor()?;
        self.entered = true;
        Ok(())
    }

    /// Every restore step runs even if an earlier one fails; the first
    /// failure is reported.
    fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.title = None;
        let raw = terminal::disable_raw_mode();
        let screen = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let cursor = self.terminal.show_cursor();
        raw.and(screen).and(cursor)
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        if self.title.as_deref() == Some(title) {
            return Ok(());
        }
        execute!(self.terminal.backend_mut(), SetTitle(host_title(title)))?;
        self.title = Some(title.to_string());
        Ok(())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>),
    {
        self.terminal
            .draw(move |frame| {
                let wrapper = UiFrame::new(frame);
                f(wrapper);
            })
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }
}

impl Drop for ConsoleOutputDriver {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    #[test]
    fn poll_and_read_from_queue() {
        let mut d = ConsoleInputDriver::new();
        d.pending.push_back(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }));
        assert!(d.poll(Duration::from_millis(0)).expect("poll"));
        let ev = d.read().expect("read");
        assert!(matches!(ev, Event::Mouse(m) if m.column == 2 && m.row == 3));
    }

    fn drag(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn queued_drags_collapse_to_latest() {
        let mut d = ConsoleInputDriver::new();
        let up = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 9,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        d.pending.extend([drag(5, 2), drag(7, 3), drag(9, 4), up.clone()]);
        assert_eq!(d.read().expect("drag"), drag(9, 4));
        assert_eq!(d.read().expect("up"), up);
        assert!(d.pending.is_empty());
    }

    #[test]
    fn drags_with_other_buttons_are_kept_apart() {
        let mut d = ConsoleInputDriver::new();
        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Right),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        let resize = Event::Resize(80, 24);
        d.pending.extend([drag(5, 2), right.clone(), resize.clone()]);
        assert_eq!(d.read().expect("left"), drag(5, 2));
        assert_eq!(d.read().expect("right"), right);
        assert_eq!(d.read().expect("resize"), resize);
    }

    #[test]
    fn host_title_names_the_active_window() {
        assert_eq!(host_title("Notes"), "Notes - desk-wm");
    }

    #[test]
    fn key_releases_are_filtered() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!ConsoleInputDriver::accept(&Event::Key(release)));
        let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(ConsoleInputDriver::accept(&Event::Key(press)));
        assert!(ConsoleInputDriver::accept(&Event::Resize(80, 24)));
    }
}
