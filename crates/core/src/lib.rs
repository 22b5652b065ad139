//! Core demo logic module - pure, deterministic, and testable
//!
//! This module contains the camera controller, the tint rasterizer, the
//! opacity animation and the layer stack. It has **no dependencies** on
//! terminal I/O or file formats, making it:
//!
//! - **Deterministic**: identical inputs always give identical focus points and pixels
//! - **Testable**: every operation is a plain method call with a plain result
//! - **Portable**: any host that delivers ticks and pointer motion can drive it
//!
//! # Module Structure
//!
//! - [`camera`]: edge-scrolling focus point clamped to the map
//! - [`overlay`]: sparse tile table -> full-map RGBA pixel buffer
//! - [`fade`]: looping opacity animation for tint layers
//! - [`scene`]: ordered layer stack and per-pixel compositing
//!
//! # Example
//!
//! ```
//! use tui_tactics_core::{battle_scene, CameraController, FadeLoop, LayerKind, TerrainLayer};
//! use tui_tactics_types::{Color, Rect};
//!
//! let terrain = TerrainLayer::new(50, 40, 32, 32, vec![Color::opaque(90, 90, 90); 2000]);
//! let mut scene = battle_scene(terrain);
//! let mut camera = CameraController::new(Rect::new(0, 0, 800, 600), scene.bounds());
//! let mut pulse = FadeLoop::pulse();
//!
//! // One frame of the host loop.
//! camera.on_pointer_motion(5, 300);
//! let focus = camera.on_tick(16);
//! scene.set_opacity(LayerKind::Overlay, pulse.advance(16));
//!
//! assert_eq!(focus.x, 790);
//! let _ = scene.sample(focus.x, focus.y);
//! ```
//!
//! # Timing
//!
//! Hosts call [`CameraController::on_tick`](camera::CameraController::on_tick)
//! once per frame. The camera moves a fixed distance per tick, so the
//! tick rate alone determines scroll speed.

pub mod camera;
pub mod fade;
pub mod overlay;
pub mod scene;

pub use tui_tactics_types as types;

// Re-export commonly used types for convenience
pub use camera::{classify_x, classify_y, CameraController};
pub use fade::{FadeLoop, FadeTo};
pub use overlay::{rasterize, OverlayTable, PixelBuffer, TintStyle};
pub use scene::{
    battle_scene, blend, Glyph, Layer, LayerKind, Sample, Scene, Sprite, SpriteLayer,
    TerrainLayer, TintLayer,
};
