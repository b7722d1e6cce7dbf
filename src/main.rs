use std::io;
use std::time::Duration;

use clap::Parser;

use desk_wm::config::{DeskCli, DeskConfig};
use desk_wm::desktop::Desktop;
use desk_wm::drivers::OutputDriver;
use desk_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use desk_wm::runner::run_desktop;
use desk_wm::tracing_sub::{self, LogTarget};

fn main() -> io::Result<()> {
    let cli = DeskCli::parse();
    let config = DeskConfig::try_from(&cli)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let target = match &config.log_file {
        Some(path) => LogTarget::file(path)?,
        None => LogTarget::Discard,
    };
    tracing_sub::init(target, config.log_level);

    let mut output = ConsoleOutputDriver::new()?;
    let (cols, rows) = output.size()?;
    let mut desktop = Desktop::new(&config, cols, rows);
    tracing::info!(cols, rows, apps = ?config.startup_apps, "desktop started");

    run_desktop(
        &mut output,
        ConsoleInputDriver::new(),
        &mut desktop,
        Duration::from_millis(16),
    )
}
