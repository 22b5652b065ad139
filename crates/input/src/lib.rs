//! Terminal input module (host-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into demo commands and converts mouse motion into
//! window-space [`crate::types::PointerMotion`] events for the camera.

pub mod handler;
pub mod map;

pub use tui_tactics_types as types;

pub use handler::PointerTracker;
pub use map::{should_quit, toggles_status};
