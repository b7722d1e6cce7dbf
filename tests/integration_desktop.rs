use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use desk_wm::apps::{AppCatalog, AppId};
use desk_wm::config::{DeskCli, DeskConfig};
use desk_wm::desktop::Desktop;
use desk_wm::drivers::{InputDriver, OutputDriver};
use desk_wm::runner::run_desktop;
use desk_wm::ui::{UiFrame, dock_slots};
use desk_wm::window::Payload;

use clap::Parser;

/// Input script. `None` entries end a burst so the loop draws a frame.
struct ScriptedInput {
    script: VecDeque<Option<Event>>,
    capture: Vec<bool>,
}

impl ScriptedInput {
    fn new(script: Vec<Option<Event>>) -> Self {
        Self {
            script: script.into(),
            capture: Vec::new(),
        }
    }
}

impl InputDriver for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        match self.script.front() {
            Some(Some(_)) => Ok(true),
            Some(None) => {
                self.script.pop_front();
                Ok(false)
            }
            None => Err(io::Error::other("script ended without quitting")),
        }
    }

    fn read(&mut self) -> io::Result<Event> {
        self.script
            .pop_front()
            .flatten()
            .ok_or_else(|| io::Error::other("no event queued"))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.capture.push(enabled);
        Ok(())
    }
}

struct TestOutput {
    terminal: Terminal<TestBackend>,
    entered: bool,
    exits: usize,
    titles: Vec<String>,
}

impl TestOutput {
    fn new(cols: u16, rows: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(cols, rows)).expect("test terminal");
        Self {
            terminal,
            entered: false,
            exits: 0,
            titles: Vec::new(),
        }
    }

    fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }
}

impl OutputDriver for TestOutput {
    type Backend = TestBackend;

    fn enter(&mut self) -> io::Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        self.entered = false;
        self.exits += 1;
        Ok(())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        let area = self.terminal.backend().buffer().area;
        Ok((area.width, area.height))
    }

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>),
    {
        self.terminal
            .draw(move |frame| f(UiFrame::new(frame)))
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        if self.titles.last().map(String::as_str) != Some(title) {
            self.titles.push(title.to_string());
        }
        Ok(())
    }
}

fn config(args: &[&str]) -> DeskConfig {
    let cli = DeskCli::try_parse_from(std::iter::once("desk-wm").chain(args.iter().copied()))
        .expect("cli");
    DeskConfig::try_from(&cli).expect("config")
}

fn click(column: u16, row: u16) -> Vec<Option<Event>> {
    let mouse = |kind| {
        Some(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    };
    vec![
        mouse(MouseEventKind::Down(MouseButton::Left)),
        mouse(MouseEventKind::Up(MouseButton::Left)),
    ]
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Event> {
    Some(Event::Key(KeyEvent::new(code, modifiers)))
}

fn dock_cell(app: AppId) -> (u16, u16) {
    let slot = dock_slots(Rect::new(0, 0, 120, 40), &AppCatalog::default())
        .into_iter()
        .find(|slot| slot.app == app)
        .expect("dock slot");
    (slot.area.x + 1, slot.area.y)
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
        .collect()
}

#[test]
fn dock_launcher_and_keys_drive_the_desktop() {
    let config = config(&[]);
    let mut desktop = Desktop::new(&config, 120, 40);
    let mut output = TestOutput::new(120, 40);

    let (notes_col, notes_row) = dock_cell(AppId::Notes);
    let (finder_col, finder_row) = dock_cell(AppId::Finder);
    let mut script = click(notes_col, notes_row);
    script.push(None);
    script.push(key(KeyCode::Char('w'), KeyModifiers::CONTROL));
    script.extend(click(finder_col, finder_row));
    script.push(key(KeyCode::Char('1'), KeyModifiers::NONE));
    script.push(None);
    script.push(key(KeyCode::Char('q'), KeyModifiers::CONTROL));

    let mut input = ScriptedInput::new(script);
    run_desktop(&mut output, &mut input, &mut desktop, Duration::from_millis(0))
        .expect("run");

    let wm = desktop.window_manager();
    assert!(wm.window(AppId::Notes).is_none());
    let safari = wm.window(AppId::Safari).expect("safari");
    assert_eq!(
        safari.payload(),
        Some(&Payload::navigate("https://doc.rust-lang.org/book/"))
    );
    assert_eq!(wm.active(), Some(AppId::Safari));
    assert_eq!(desktop.top_bar_title(), "Safari");

    let buffer = output.buffer();
    assert!(row_text(buffer, 0).starts_with(" Safari"));
    let shows_address = (0..buffer.area.height)
        .any(|y| row_text(buffer, y).contains("Address: https://doc.rust-lang.org/book/"));
    assert!(shows_address);

    assert_eq!(output.titles.last().map(String::as_str), Some("Safari"));
    assert!(output.titles.iter().any(|t| t == "Notes"));
    assert_eq!(input.capture, vec![true, false]);
    assert!(!output.entered);
    assert_eq!(output.exits, 1);
}

#[test]
fn terminal_resize_below_breakpoint_goes_full_bleed() {
    let config = config(&["--open", "notes", "calculator"]);
    let mut desktop = Desktop::new(&config, 120, 40);
    assert!(!desktop.window_manager().is_constrained());

    desktop.handle_event(&Event::Resize(60, 40));
    let wm = desktop.window_manager();
    assert!(wm.is_constrained());
    let plan = wm.draw_plan();
    assert_eq!(plan.len(), 2);
    assert!(plan.iter().all(|d| d.rect == desk_wm::Rect::new(0, 48, 600, 688)));
}

#[test]
fn empty_desktop_defaults_top_bar_title() {
    let config = config(&["--open", "notes"]);
    let mut desktop = Desktop::new(&config, 120, 40);
    desktop.handle_event(&Event::Key(KeyEvent::new(
        KeyCode::Char('w'),
        KeyModifiers::CONTROL,
    )));
    assert!(desktop.window_manager().registry().is_empty());
    assert_eq!(desktop.top_bar_title(), "Finder");
}

#[test]
fn ctrl_d_flips_dark_mode_from_configured_start() {
    let mut desktop = Desktop::new(&config(&["--dark"]), 120, 40);
    assert!(desktop.dark_mode());
    let toggle = Event::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
    desktop.handle_event(&toggle);
    assert!(!desktop.dark_mode());
    desktop.handle_event(&toggle);
    assert!(desktop.dark_mode());
}

#[test]
fn dragging_title_bar_with_the_mouse_moves_window() {
    let config = config(&["--open", "notes"]);
    let mut desktop = Desktop::new(&config, 120, 40);
    // Notes at (400, 150) px; cell (50, 8) centers on (505, 170), the title bar.
    let mouse = |kind, column, row| {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    };
    desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 50, 8));
    assert!(desktop.capture_active());
    desktop.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10));
    desktop.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 40, 10));
    assert!(!desktop.capture_active());
    let notes = desktop.window_manager().window(AppId::Notes).expect("notes");
    assert_eq!(notes.position(), desk_wm::Point::new(300, 190));
}
