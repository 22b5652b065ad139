//! TUI Tactics (workspace facade crate).
//!
//! Re-exports the member crates under `tui_tactics::{core,input,map,term,types}`
//! so the binary, integration tests and benchmarks share one import path.
//! The only code living here is the application glue in [`app`] and
//! [`config`].

pub mod app;
pub mod config;

pub use tui_tactics_core as core;
pub use tui_tactics_input as input;
pub use tui_tactics_map as map;
pub use tui_tactics_term as term;
pub use tui_tactics_types as types;
