//! Command line surface and its validated form.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

use crate::apps::{AppCatalog, AppId};
use crate::ui::Scale;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "desk-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Desktop-style window manager for the terminal"
)]
pub struct DeskCli {
    /// Logical pixels per terminal column.
    #[arg(long = "px-per-col", value_name = "PX", default_value_t = 10)]
    pub px_per_col: u32,

    /// Logical pixels per terminal row.
    #[arg(long = "px-per-row", value_name = "PX", default_value_t = 20)]
    pub px_per_row: u32,

    /// Start in dark mode.
    #[arg(long)]
    pub dark: bool,

    /// Applications to open at startup, in order.
    #[arg(long = "open", value_name = "APP", num_args = 1..)]
    pub open: Vec<AppId>,

    /// Replace the set of applications that stay windowed below the mobile
    /// breakpoint.
    #[arg(long = "windowed-on-mobile", value_name = "APP", num_args = 0..)]
    pub windowed_on_mobile: Option<Vec<AppId>>,

    /// Append log output to this file. Logs are dropped when absent.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum log level.
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{axis} scale must be between 1 and 64 pixels, got {value}")]
    ScaleOutOfRange { axis: &'static str, value: u32 },
}

#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub scale: Scale,
    pub dark_mode: bool,
    pub startup_apps: Vec<AppId>,
    pub catalog: AppCatalog,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
}

const SCALE_RANGE: std::ops::RangeInclusive<u32> = 1..=64;

impl TryFrom<&DeskCli> for DeskConfig {
    type Error = ConfigError;

    fn try_from(cli: &DeskCli) -> Result<Self, Self::Error> {
        if !SCALE_RANGE.contains(&cli.px_per_col) {
            return Err(ConfigError::ScaleOutOfRange {
                axis: "column",
                value: cli.px_per_col,
            });
        }
        if !SCALE_RANGE.contains(&cli.px_per_row) {
            return Err(ConfigError::ScaleOutOfRange {
                axis: "row",
                value: cli.px_per_row,
            });
        }
        let mut catalog = AppCatalog::default();
        if let Some(apps) = &cli.windowed_on_mobile {
            catalog.set_windowed_on_mobile(apps.iter().copied());
        }
        let startup_apps = if cli.open.is_empty() {
            vec![AppId::Finder]
        } else {
            cli.open.clone()
        };
        Ok(Self {
            scale: Scale::new(cli.px_per_col, cli.px_per_row),
            dark_mode: cli.dark,
            startup_apps,
            catalog,
            log_file: cli.log_file.clone(),
            log_level: cli.log_level,
        })
    }
}
