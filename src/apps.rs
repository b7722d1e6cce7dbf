//! Application identifiers and the per-application window policy table.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::layout::Size;

/// Which application a window belongs to. At most one window exists per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppId {
    Finder,
    Safari,
    Terminal,
    Calculator,
    Settings,
    Photos,
    TicTacToe,
    Notes,
}

impl AppId {
    /// Dock order.
    pub const ALL: [AppId; 8] = [
        AppId::Finder,
        AppId::Safari,
        AppId::Terminal,
        AppId::Notes,
        AppId::TicTacToe,
        AppId::Calculator,
        AppId::Photos,
        AppId::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppId::Finder => "finder",
            AppId::Safari => "safari",
            AppId::Terminal => "terminal",
            AppId::Calculator => "calculator",
            AppId::Settings => "settings",
            AppId::Photos => "photos",
            AppId::TicTacToe => "tictactoe",
            AppId::Notes => "notes",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application id: {0:?}")]
pub struct ParseAppIdError(pub String);

impl FromStr for AppId {
    type Err = ParseAppIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        AppId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| ParseAppIdError(value.to_string()))
    }
}

/// How the window manager treats one application's window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppProfile {
    pub title: String,
    pub default_size: Size,
    /// Stay a normal window even when the viewport is below the mobile
    /// breakpoint.
    pub windowed_on_mobile: bool,
    /// Re-opening with a payload replaces the stored payload.
    pub payload_reopens: bool,
}

impl AppProfile {
    pub fn new(title: impl Into<String>, default_size: Size) -> Self {
        Self {
            title: title.into(),
            default_size,
            windowed_on_mobile: false,
            payload_reopens: false,
        }
    }

    pub fn windowed_on_mobile(mut self, value: bool) -> Self {
        self.windowed_on_mobile = value;
        self
    }

    pub fn payload_reopens(mut self, value: bool) -> Self {
        self.payload_reopens = value;
        self
    }
}

impl Default for AppProfile {
    fn default() -> Self {
        Self::new("App", Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT))
    }
}

/// Policy table keyed by application id.
#[derive(Debug, Clone)]
pub struct AppCatalog {
    profiles: BTreeMap<AppId, AppProfile>,
    fallback: AppProfile,
}

impl AppCatalog {
    /// A catalog where every id uses the fallback profile.
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
            fallback: AppProfile::default(),
        }
    }

    pub fn profile(&self, id: AppId) -> &AppProfile {
        self.profiles.get(&id).unwrap_or(&self.fallback)
    }

    pub fn set_profile(&mut self, id: AppId, profile: AppProfile) {
        self.profiles.insert(id, profile);
    }

    pub fn title(&self, id: AppId) -> &str {
        &self.profile(id).title
    }

    /// Replace the set of applications that stay windowed on small viewports.
    pub fn set_windowed_on_mobile<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = AppId>,
    {
        let keep: Vec<AppId> = ids.into_iter().collect();
        for id in AppId::ALL {
            let profile = self
                .profiles
                .entry(id)
                .or_insert_with(|| self.fallback.clone());
            profile.windowed_on_mobile = keep.contains(&id);
        }
    }
}

impl Default for AppCatalog {
    fn default() -> Self {
        let full = Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
        let mut catalog = Self::empty();
        catalog.set_profile(AppId::Finder, AppProfile::new("Finder", full));
        catalog.set_profile(
            AppId::Safari,
            AppProfile::new("Safari", full).payload_reopens(true),
        );
        catalog.set_profile(AppId::Terminal, AppProfile::new("Terminal", full));
        catalog.set_profile(
            AppId::Calculator,
            AppProfile::new("Calculator", Size::new(320, 480)).windowed_on_mobile(true),
        );
        catalog.set_profile(AppId::Settings, AppProfile::new("System Settings", full));
        catalog.set_profile(AppId::Photos, AppProfile::new("Photos", full));
        catalog.set_profile(
            AppId::TicTacToe,
            AppProfile::new("Tic Tac Toe", Size::new(400, 500)).windowed_on_mobile(true),
        );
        catalog.set_profile(AppId::Notes, AppProfile::new("Notes", Size::new(400, 500)));
        catalog
    }
}
