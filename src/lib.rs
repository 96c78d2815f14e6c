//! newtab: a terminal new-tab dashboard with debounced search suggestions

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod search;
pub mod suggest;
pub mod widgets;
