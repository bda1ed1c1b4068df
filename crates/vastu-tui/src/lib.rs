//! vastu-tui - Terminal UI for Vastu Desk
//!
//! Creates an Engine from vastu-app and adds terminal rendering, event
//! polling and the widgets for each view.

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
