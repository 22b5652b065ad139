//! Terminal "scene renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal hosts.
//! It renders the layer stack into a simple framebuffer of colored cells
//! that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Treat every terminal cell as one sample of world space
//! - Keep the camera viewport in window pixels, independent of font size

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_tactics_core as core;
pub use tui_tactics_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{SceneView, StatusView, TermSize};
