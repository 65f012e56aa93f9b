pub mod actions;
pub mod catalog;
pub mod context;
pub mod error;
pub mod loader;
pub mod logging;
pub mod model;
pub mod remote;
pub mod session;
pub mod store;
pub mod tui;
mod tui_shell;
pub mod view;
