//! Window manager core for a desktop-style shell, with a terminal front end.
//!
//! The core (`window`, `layout`, `apps`, `viewport`) is pure state and
//! geometry in logical pixels: a registry of at most one window per
//! application, a monotonic stacking counter, and a drag/resize session
//! controller that holds pointer capture while it runs. The rest maps a
//! terminal onto that model.

pub mod apps;
pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod event_loop;
pub mod input;
pub mod layout;
pub mod runner;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod viewport;
pub mod window;

pub use apps::{AppCatalog, AppId, AppProfile};
pub use input::{PointerEvent, PointerEventKind};
pub use layout::{Point, Rect, Size};
pub use viewport::Viewport;
pub use window::{OpenOutcome, OpenRequest, Payload, WindowManager};
