//! Demo application state: the glue between terminal events, the camera,
//! the layer stack and the scene view.
//!
//! `main` owns the terminal and the clock; everything here is driven by
//! explicit calls so it can be exercised without a terminal.

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::core::{battle_scene, CameraController, FadeLoop, LayerKind, Scene, TerrainLayer};
use crate::input::{should_quit, toggles_status, PointerTracker};
use crate::map::{TileLayer, TileMap};
use crate::term::{FrameBuffer, SceneView, StatusView, TermSize};
use crate::types::{CellScale, Point};

/// What the host loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Terminal size changed; the renderer must do a full redraw.
    Redraw,
    Quit,
}

/// Build the terrain layer for one layer of a loaded map.
pub fn terrain_from_map(map: &TileMap, layer: &TileLayer) -> TerrainLayer {
    TerrainLayer::new(
        layer.columns(),
        layer.rows(),
        layer.tile_width(),
        layer.tile_height(),
        map.layer_colors(layer),
    )
}

/// Load the configured map and assemble the full layer stack.
pub fn load_scene(cfg: &DemoConfig) -> Result<Scene> {
    let map = TileMap::load(&cfg.map_path)?;
    let layer = map.require_layer(&cfg.map_layer)?;
    info!(
        layer = layer.name(),
        columns = layer.columns(),
        rows = layer.rows(),
        px_width = layer.px_width(),
        px_height = layer.px_height(),
        "building scene"
    );
    Ok(battle_scene(terrain_from_map(&map, layer)))
}

pub struct App {
    scene: Scene,
    camera: CameraController,
    pulse: FadeLoop,
    pointer: PointerTracker,
    view: SceneView,
    size: TermSize,
    tick_ms: u32,
    show_status: bool,
}

impl App {
    pub fn new(scene: Scene, cfg: &DemoConfig, size: TermSize) -> Self {
        let scale = CellScale::default();
        let camera = CameraController::new(scale.viewport(size.cols, size.rows), scene.bounds())
            .with_speed(cfg.scroll_speed)
            .with_margin(cfg.edge_margin);
        let pulse = FadeLoop::pulse();
        let mut scene = scene;
        scene.set_opacity(LayerKind::Overlay, pulse.opacity());

        Self {
            scene,
            camera,
            pulse,
            pointer: PointerTracker::new(scale),
            view: SceneView::new(scale),
            size,
            tick_ms: cfg.tick_ms,
            show_status: cfg.show_status,
        }
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn size(&self) -> TermSize {
        self.size
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Flow::Quit;
                }
                if toggles_status(key) {
                    self.show_status = !self.show_status;
                }
                Flow::Continue
            }
            Event::Mouse(mouse) => {
                if let Some(motion) = self.pointer.handle_mouse(mouse, self.size.rows) {
                    self.camera.on_motion(motion);
                }
                Flow::Continue
            }
            Event::Resize(cols, rows) => {
                self.resize(TermSize::new(cols, rows));
                Flow::Redraw
            }
            _ => Flow::Continue,
        }
    }

    pub fn resize(&mut self, size: TermSize) {
        debug!(cols = size.cols, rows = size.rows, "terminal resized");
        self.size = size;
        self.pointer.reset();
        self.camera
            .resize(self.view.scale().viewport(size.cols, size.rows));
    }

    /// Advance one fixed timestep and return the published focus point.
    pub fn tick(&mut self) -> Point {
        let focus = self.camera.on_tick(self.tick_ms);
        let opacity = self.pulse.advance(self.tick_ms);
        self.scene.set_opacity(LayerKind::Overlay, opacity);
        focus
    }

    pub fn render_into(&self, fb: &mut FrameBuffer) {
        let status = StatusView {
            focus: self.camera.focus(),
            direction: self.camera.direction(),
            overlay_opacity: self.pulse.opacity(),
        };
        self.view.render_into(
            &self.scene,
            self.camera.focus(),
            self.size,
            self.show_status.then_some(&status),
            fb,
        );
    }
}
