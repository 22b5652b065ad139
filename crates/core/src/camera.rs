//! Camera module - edge-scrolling focus point over a bounded map
//!
//! The camera owns a focus point and a per-axis scroll direction.
//! Pointer motion near a viewport edge sets the direction; every tick moves
//! the focus by `speed` along each active axis and clamps it so the viewport
//! never shows anything past the map edges.

use tracing::debug;

use crate::types::{
    Axis, Direction, MapBounds, Point, PointerMotion, Rect, EDGE_MARGIN, SCROLL_SPEED,
};

/// Edge-scrolling camera controller.
///
/// # Example
///
/// ```
/// use tui_tactics_core::CameraController;
/// use tui_tactics_types::{MapBounds, Point, Rect};
///
/// let mut camera = CameraController::new(Rect::new(0, 0, 800, 600), MapBounds::new(1600, 1200));
/// assert_eq!(camera.focus(), Point::new(800, 600));
///
/// // Pointer near the right edge scrolls right.
/// camera.on_pointer_motion(790, 300);
/// assert_eq!(camera.on_tick(16), Point::new(810, 600));
/// ```
#[derive(Debug, Clone)]
pub struct CameraController {
    viewport: Rect,
    bounds: MapBounds,
    position: Point,
    direction: Direction,
    speed: i32,
    margin: i32,
}

impl CameraController {
    /// Create a camera focused on the center of the map.
    pub fn new(viewport: Rect, bounds: MapBounds) -> Self {
        let mut camera = Self {
            viewport,
            bounds,
            position: Point::new(bounds.width / 2, bounds.height / 2),
            direction: Direction::IDLE,
            speed: SCROLL_SPEED,
            margin: EDGE_MARGIN,
        };
        camera.clamp();
        camera
    }

    /// Pixels moved per tick along each active axis. Negative speeds are
    /// treated as zero so the scroll always follows the pointer's edge.
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed.max(0);
        self
    }

    /// Edge-sensitivity margin in pixels.
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    pub fn focus(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Swap in a new viewport (e.g. after a terminal resize) and re-clamp.
    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.clamp();
    }

    /// Recompute the scroll direction from the latest pointer position.
    ///
    /// Only the most recent event matters; there is no event history.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) {
        let direction = Direction::new(
            classify_x(x, self.viewport, self.margin),
            classify_y(y, self.viewport, self.margin),
        );
        if direction != self.direction {
            debug!(
                x,
                y,
                dir_x = direction.x.as_str(),
                dir_y = direction.y.as_str(),
                "camera direction changed"
            );
        }
        self.direction = direction;
    }

    pub fn on_motion(&mut self, motion: PointerMotion) {
        self.on_pointer_motion(motion.x, motion.y);
    }

    /// Advance one frame and return the focus point to publish.
    ///
    /// `dt_ms` is accepted for the host loop's convenience but does not
    /// scale movement: the tick rate alone sets the scroll speed.
    pub fn on_tick(&mut self, _dt_ms: u32) -> Point {
        self.position.x = self
            .position
            .x
            .saturating_add(self.speed.saturating_mul(self.direction.x.sign()));
        self.position.y = self
            .position
            .y
            .saturating_add(self.speed.saturating_mul(self.direction.y.sign()));
        self.clamp();
        self.position
    }

    fn clamp(&mut self) {
        self.position.x = clamp_axis(self.position.x, self.viewport.width, self.bounds.width);
        self.position.y = clamp_axis(self.position.y, self.viewport.height, self.bounds.height);
    }
}

/// Horizontal scroll state for a pointer at window `x`.
pub fn classify_x(x: i32, viewport: Rect, margin: i32) -> Axis {
    if x < viewport.left + margin {
        Axis::Decreasing
    } else if x > viewport.right() - margin {
        Axis::Increasing
    } else {
        Axis::Idle
    }
}

/// Vertical scroll state for a pointer at window `y`.
///
/// The bottom band excludes `y == bottom` itself while the top band has no
/// such exclusion. This asymmetry is kept as observed behavior.
pub fn classify_y(y: i32, viewport: Rect, margin: i32) -> Axis {
    if y < viewport.bottom + margin && y > viewport.bottom {
        Axis::Decreasing
    } else if y > viewport.top() - margin {
        Axis::Increasing
    } else {
        Axis::Idle
    }
}

/// Clamp one focus coordinate so a viewport of `extent` stays inside `bound`.
///
/// A map narrower than the viewport pins the focus to the map center.
fn clamp_axis(value: i32, extent: i32, bound: i32) -> i32 {
    let lo = extent / 2;
    let hi = bound - extent / 2;
    if lo > hi {
        return bound / 2;
    }
    value.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 800, 600)
    }

    #[test]
    fn starts_at_map_center() {
        let camera = CameraController::new(screen(), MapBounds::new(2000, 1000));
        assert_eq!(camera.focus(), Point::new(1000, 500));
        assert!(camera.direction().is_idle());
    }

    #[test]
    fn classify_horizontal_edges() {
        let vp = screen();
        assert_eq!(classify_x(10, vp, 30), Axis::Decreasing);
        assert_eq!(classify_x(29, vp, 30), Axis::Decreasing);
        assert_eq!(classify_x(30, vp, 30), Axis::Idle);
        assert_eq!(classify_x(400, vp, 30), Axis::Idle);
        assert_eq!(classify_x(770, vp, 30), Axis::Idle);
        assert_eq!(classify_x(771, vp, 30), Axis::Increasing);
        assert_eq!(classify_x(790, vp, 30), Axis::Increasing);
    }

    #[test]
    fn classify_vertical_edges() {
        let vp = screen();
        assert_eq!(classify_y(590, vp, 30), Axis::Increasing);
        assert_eq!(classify_y(571, vp, 30), Axis::Increasing);
        assert_eq!(classify_y(570, vp, 30), Axis::Idle);
        assert_eq!(classify_y(300, vp, 30), Axis::Idle);
        assert_eq!(classify_y(10, vp, 30), Axis::Decreasing);
        assert_eq!(classify_y(1, vp, 30), Axis::Decreasing);
        assert_eq!(classify_y(30, vp, 30), Axis::Idle);
    }

    #[test]
    fn bottom_edge_itself_does_not_scroll() {
        let vp = screen();
        assert_eq!(classify_y(0, vp, 30), Axis::Idle);
        // Left edge has no such exclusion.
        assert_eq!(classify_x(0, vp, 30), Axis::Decreasing);
    }

    #[test]
    fn classification_respects_viewport_offset() {
        let vp = Rect::new(100, 50, 800, 600);
        assert_eq!(classify_x(110, vp, 30), Axis::Decreasing);
        assert_eq!(classify_x(890, vp, 30), Axis::Increasing);
        assert_eq!(classify_y(60, vp, 30), Axis::Decreasing);
        assert_eq!(classify_y(640, vp, 30), Axis::Increasing);
        assert_eq!(classify_y(50, vp, 30), Axis::Idle);
    }

    #[test]
    fn tick_moves_by_speed_along_active_axes() {
        let mut camera = CameraController::new(screen(), MapBounds::new(2000, 2000));
        camera.on_pointer_motion(10, 590);
        assert_eq!(camera.on_tick(16), Point::new(990, 1010));
        assert_eq!(camera.on_tick(16), Point::new(980, 1020));
    }

    #[test]
    fn dt_does_not_scale_movement() {
        let mut a = CameraController::new(screen(), MapBounds::new(2000, 2000));
        let mut b = a.clone();
        a.on_pointer_motion(790, 300);
        b.on_pointer_motion(790, 300);
        assert_eq!(a.on_tick(1), b.on_tick(1000));
    }

    #[test]
    fn tick_clamps_to_map_edges() {
        let mut camera = CameraController::new(screen(), MapBounds::new(1000, 800));
        camera.on_pointer_motion(790, 590);
        for _ in 0..100 {
            camera.on_tick(16);
        }
        assert_eq!(camera.focus(), Point::new(600, 500));

        camera.on_pointer_motion(10, 10);
        for _ in 0..100 {
            camera.on_tick(16);
        }
        assert_eq!(camera.focus(), Point::new(400, 300));
    }

    #[test]
    fn idle_ticks_keep_position() {
        let mut camera = CameraController::new(screen(), MapBounds::new(1234, 987));
        let start = camera.focus();
        camera.on_pointer_motion(400, 300);
        for _ in 0..50 {
            assert_eq!(camera.on_tick(16), start);
        }
    }

    #[test]
    fn custom_speed_and_margin() {
        let mut camera = CameraController::new(screen(), MapBounds::new(2000, 2000))
            .with_speed(3)
            .with_margin(100);
        camera.on_pointer_motion(90, 300);
        assert_eq!(camera.direction().x, Axis::Decreasing);
        assert_eq!(camera.on_tick(16), Point::new(997, 1000));
    }

    #[test]
    fn smaller_map_pins_focus_to_map_center() {
        // 25x15 tiles of 32px is 800x480: fits horizontally, too short vertically.
        let mut camera = CameraController::new(screen(), MapBounds::new(800, 480));
        assert_eq!(camera.focus(), Point::new(400, 240));
        camera.on_pointer_motion(10, 590);
        for _ in 0..10 {
            camera.on_tick(16);
        }
        assert_eq!(camera.focus(), Point::new(400, 240));
    }

    #[test]
    fn resize_reclamps_position() {
        let mut camera = CameraController::new(screen(), MapBounds::new(1000, 1000));
        camera.on_pointer_motion(790, 590);
        for _ in 0..100 {
            camera.on_tick(16);
        }
        assert_eq!(camera.focus(), Point::new(600, 700));

        camera.resize(Rect::new(0, 0, 900, 900));
        assert_eq!(camera.focus(), Point::new(550, 550));
    }

    #[test]
    fn extreme_speed_saturates_then_clamps() {
        let mut camera =
            CameraController::new(screen(), MapBounds::new(2000, 2000)).with_speed(i32::MAX);
        camera.on_pointer_motion(790, 300);
        assert_eq!(camera.on_tick(16), Point::new(1600, 1000));
        camera.on_pointer_motion(10, 590);
        assert_eq!(camera.on_tick(16), Point::new(400, 1700));
    }

    #[test]
    fn negative_speed_does_not_reverse_scrolling() {
        let mut camera =
            CameraController::new(screen(), MapBounds::new(2000, 2000)).with_speed(-10);
        assert_eq!(camera.speed(), 0);
        camera.on_pointer_motion(790, 300);
        assert_eq!(camera.on_tick(16), Point::new(1000, 1000));
    }
}
