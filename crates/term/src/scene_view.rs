//! SceneView: maps a `core::Scene` seen through the camera into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Scene;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellScale, Direction, Point};

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

impl TermSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// Values shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub focus: Point,
    pub direction: Direction,
    pub overlay_opacity: u8,
}

/// Renders the layer stack, one world sample per terminal cell.
#[derive(Debug, Clone, Default)]
pub struct SceneView {
    scale: CellScale,
}

impl SceneView {
    pub fn new(scale: CellScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    /// World pixel sampled for terminal cell `(col, row)` when the camera
    /// focus is centered in a terminal of `size`.
    pub fn world_point(&self, focus: Point, size: TermSize, col: u16, row: u16) -> Point {
        let viewport = self.scale.viewport(size.cols, size.rows);
        let p = self.scale.cell_center(col, row, size.rows);
        Point::new(
            focus.x - viewport.width / 2 + p.x,
            focus.y - viewport.height / 2 + p.y,
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        scene: &Scene,
        focus: Point,
        size: TermSize,
        status: Option<&StatusView>,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(size.cols, size.rows);

        for row in 0..size.rows {
            for col in 0..size.cols {
                let w = self.world_point(focus, size, col, row);
                let sample = scene.sample(w.x, w.y);
                let bg = Rgb::from(sample.color);
                let cell = match sample.glyph {
                    Some(g) => Cell {
                        ch: g.ch,
                        style: CellStyle {
                            fg: Rgb::from(g.color),
                            bg,
                            bold: true,
                        },
                    },
                    None => Cell {
                        ch: ' ',
                        style: CellStyle {
                            bg,
                            ..CellStyle::default()
                        },
                    },
                };
                fb.set(col, row, cell);
            }
        }

        if let Some(st) = status {
            self.draw_status(fb, size, st);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        scene: &Scene,
        focus: Point,
        size: TermSize,
        status: Option<&StatusView>,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(size.cols, size.rows);
        self.render_into(scene, focus, size, status, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, size: TermSize, st: &StatusView) {
        if size.rows == 0 {
            return;
        }
        let bar = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        let label = CellStyle { bold: true, ..bar };

        fb.fill_rect(0, 0, size.cols, 1, ' ', bar);
        let mut x = fb.put_str(1, 0, "focus ", label);
        x = fb.put_i32(x, 0, st.focus.x, bar);
        x = fb.put_str(x, 0, ",", bar);
        x = fb.put_i32(x, 0, st.focus.y, bar);
        x = fb.put_str(x, 0, "  scroll ", label);
        x = fb.put_str(x, 0, st.direction.x.as_str(), bar);
        x = fb.put_str(x, 0, st.direction.y.as_str(), bar);
        x = fb.put_str(x, 0, "  overlay ", label);
        x = fb.put_i32(x, 0, st.overlay_opacity as i32, bar);
        fb.put_str(x, 0, "  q quit", bar);
    }
}
