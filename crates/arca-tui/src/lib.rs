//! arca-tui - Terminal UI for the ARCA console
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from arca-app and adds terminal rendering, key polling and the
//! landing/analyzer views.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
