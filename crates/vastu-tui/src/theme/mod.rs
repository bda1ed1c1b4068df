//! Centralized theme for the Vastu Desk TUI.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;
