//! Terminal new-tab dashboard
//!
//! Hosts the search box, the suggestion dropdown and the shortcut sections.

mod app_events;
mod app_render;
mod app_state;
mod dropdown;
mod mouse_capture;
mod mouse_click;

pub use app_state::App;
pub use dropdown::DropdownView;
pub use mouse_capture::MouseCapture;
