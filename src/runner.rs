use std::io;
use std::time::Duration;

use crate::desktop::Desktop;
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};

/// Drive `desktop` until it asks to quit. The output driver is entered on
/// start and left on every exit path, errors included.
pub fn run_desktop<O, D>(
    output: &mut O,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    output.enter()?;
    let result = pump(output, driver, desktop, poll_interval);
    let exited = output.exit();
    result.and(exited)
}

fn pump<O, D>(
    output: &mut O,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    let (cols, rows) = output.size()?;
    desktop.resize(cols, rows);

    let result = event_loop.run(|_, event| match event {
        Some(evt) => Ok(desktop.handle_event(&evt)),
        None => {
            output.draw(|mut frame| desktop.render(&mut frame))?;
            output.set_title(desktop.top_bar_title())?;
            Ok(ControlFlow::Continue)
        }
    });
    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    let _ = event_loop.driver().set_mouse_capture(false);
    result
}
