//! formview-tui - Terminal UI for formview
//!
//! Draws the rendered form with ratatui, polls crossterm for key presses and
//! feeds them through the formview-app update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
