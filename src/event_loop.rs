use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Owns the UI thread: polls the input driver and hands events to a handler.
///
/// The handler sees `None` once per turn before input is polled, which is
/// where drawing happens, then `Some(event)` for every queued event. Bursts
/// (drags, scrolling) are drained in one turn so the frame never lags the
/// pointer.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if handler(&mut self.driver, None)? == ControlFlow::Quit {
                return Ok(());
            }

            if self.driver.poll(self.poll_interval)? {
                loop {
                    let event = self.driver.read()?;
                    if handler(&mut self.driver, Some(event))? == ControlFlow::Quit {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        events: VecDeque<Event>,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    #[test]
    fn bursts_are_drained_between_ticks() {
        let driver = Scripted {
            events: VecDeque::from(vec![
                Event::Resize(80, 24),
                Event::Resize(100, 30),
                Event::FocusLost,
            ]),
        };
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(0));
        let mut seen = Vec::new();
        event_loop
            .run(|_, event| {
                seen.push(event.is_some());
                Ok(match event {
                    Some(Event::FocusLost) => ControlFlow::Quit,
                    _ => ControlFlow::Continue,
                })
            })
            .expect("loop");
        assert_eq!(seen, vec![false, true, true, true]);
    }

    #[test]
    fn tick_can_quit_before_polling() {
        let driver = Scripted {
            events: VecDeque::from(vec![Event::FocusGained]),
        };
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(0));
        let mut ticks = 0;
        event_loop
            .run(|_, _| {
                ticks += 1;
                Ok(ControlFlow::Quit)
            })
            .expect("loop");
        assert_eq!(ticks, 1);
        assert_eq!(event_loop.driver().events.len(), 1);
    }
}
