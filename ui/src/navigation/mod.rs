//! Screen identifiers, the navigation state machine and its Dioxus handle.

mod handle;
mod host;
mod screen;
mod tabs;

pub use handle::{use_nav, use_nav_host, use_nav_provider, NavHandle};
pub use host::{Dispatch, InertReason, Interaction, NavHost};
pub use screen::ScreenId;
pub use tabs::{tab_bar_for, TabSpec};
