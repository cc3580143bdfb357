//! Terminal User Interface module
//!
//! A ratatui front end with two views: the component catalogue browser and
//! the benefit application wizard.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
