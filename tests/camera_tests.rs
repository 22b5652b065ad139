//! Integration tests for the edge-scrolling camera

use tui_tactics::core::CameraController;
use tui_tactics::types::{
    Axis, MapBounds, Point, Rect, MAP_COLUMNS, MAP_ROWS, SCREEN_HEIGHT, SCREEN_WIDTH,
    SHORT_SCREEN_HEIGHT, TILE_SIZE,
};

/// Deterministic pointer positions for long tick sequences.
struct Lcg(u32);

impl Lcg {
    fn next(&mut self, max: i32) -> i32 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        ((self.0 >> 8) % max as u32) as i32
    }
}

fn screen() -> Rect {
    Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT)
}

fn assert_in_bounds(camera: &CameraController) {
    let vp = camera.viewport();
    let b = camera.bounds();
    let p = camera.focus();
    assert!(p.x >= vp.width / 2 && p.x <= b.width - vp.width / 2, "x out of range: {p:?}");
    assert!(p.y >= vp.height / 2 && p.y <= b.height - vp.height / 2, "y out of range: {p:?}");
}

#[test]
fn direction_classification_table() {
    let mut camera = CameraController::new(screen(), MapBounds::new(1600, 1200));

    let cases = [
        ((10, 300), Axis::Decreasing, Axis::Idle),
        ((790, 300), Axis::Increasing, Axis::Idle),
        ((400, 300), Axis::Idle, Axis::Idle),
        ((400, 590), Axis::Idle, Axis::Increasing),
        ((400, 10), Axis::Idle, Axis::Decreasing),
        ((10, 10), Axis::Decreasing, Axis::Decreasing),
        ((790, 590), Axis::Increasing, Axis::Increasing),
    ];
    for ((x, y), dx, dy) in cases {
        camera.on_pointer_motion(x, y);
        assert_eq!(camera.direction().x, dx, "x at ({x}, {y})");
        assert_eq!(camera.direction().y, dy, "y at ({x}, {y})");
    }
}

#[test]
fn only_latest_pointer_event_matters() {
    let mut camera = CameraController::new(screen(), MapBounds::new(1600, 1200));
    camera.on_pointer_motion(10, 10);
    camera.on_pointer_motion(400, 300);
    assert!(camera.direction().is_idle());
}

#[test]
fn clamp_invariant_holds_for_random_sequences() {
    for seed in 1..20u32 {
        let mut rng = Lcg(seed);
        let bounds = MapBounds::new(800 + rng.next(2000), 600 + rng.next(2000));
        let mut camera = CameraController::new(screen(), bounds);
        assert_in_bounds(&camera);

        for _ in 0..500 {
            if rng.next(4) == 0 {
                camera.on_pointer_motion(rng.next(800), rng.next(600));
            }
            camera.on_tick(16);
            assert_in_bounds(&camera);
        }
    }
}

#[test]
fn idle_direction_never_moves_the_camera() {
    let mut camera = CameraController::new(screen(), MapBounds::new(3000, 2000));
    camera.on_pointer_motion(790, 590);
    for _ in 0..7 {
        camera.on_tick(16);
    }
    let parked = camera.focus();

    camera.on_pointer_motion(400, 300);
    for _ in 0..1000 {
        assert_eq!(camera.on_tick(16), parked);
    }
}

#[test]
fn bundled_map_in_full_size_window_is_pinned_vertically() {
    // 25x15 tiles of 32px in an 800x600 window.
    let mut camera = CameraController::new(screen(), MapBounds::from_tiles(25, 15, 32, 32));
    camera.on_pointer_motion(790, 590);
    for _ in 0..60 {
        camera.on_tick(16);
    }
    assert_eq!(camera.focus(), Point::new(400, 240));
}

#[test]
fn bundled_map_in_short_window_scrolls_vertically() {
    // The 800x300 snapshot can scroll the 480px-tall map.
    let mut camera = CameraController::new(
        Rect::new(0, 0, SCREEN_WIDTH, SHORT_SCREEN_HEIGHT),
        MapBounds::from_tiles(MAP_COLUMNS, MAP_ROWS, TILE_SIZE, TILE_SIZE),
    );
    assert_eq!(camera.focus(), Point::new(400, 240));

    camera.on_pointer_motion(400, 290);
    assert_eq!(camera.on_tick(16), Point::new(400, 250));
    for _ in 0..20 {
        camera.on_tick(16);
    }
    assert_eq!(camera.focus(), Point::new(400, 330));

    camera.on_pointer_motion(400, 5);
    for _ in 0..40 {
        camera.on_tick(16);
    }
    assert_eq!(camera.focus(), Point::new(400, 150));
}
