use tui_tactics::core::scene::{SELECTOR_GLYPH, UNIT_GLYPH, UNIT_TILE};
use tui_tactics::core::{battle_scene, LayerKind, Scene, TerrainLayer};
use tui_tactics::term::{FrameBuffer, Rgb, SceneView, StatusView, TermSize};
use tui_tactics::types::{CellScale, Color, Direction, Point};

const GROUND: Color = Color::opaque(100, 140, 100);

fn scene() -> Scene {
    battle_scene(TerrainLayer::new(25, 15, 32, 32, vec![GROUND; 25 * 15]))
}

fn find_glyph(fb: &FrameBuffer, ch: char) -> Option<(u16, u16)> {
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if fb.get(x, y).unwrap().ch == ch {
                return Some((x, y));
            }
        }
    }
    None
}

#[test]
fn terminal_larger_than_map_shows_background_margin() {
    let view = SceneView::new(CellScale::new(8, 16));
    // 120x40 cells is a 960x640 viewport around an 800x480 map.
    let fb = view.render(&scene(), Point::new(400, 240), TermSize::new(120, 40), None);
    let corner = fb.get(0, 0).unwrap();
    assert_eq!(corner.style.bg, Rgb::from(Color::BACKGROUND));
    assert_eq!(corner.ch, ' ');
}

#[test]
fn unit_glyph_lands_on_its_tile() {
    let view = SceneView::new(CellScale::new(8, 16));
    let size = TermSize::new(100, 30);
    let focus = Point::new(400, 240);
    let fb = view.render(&scene(), focus, size, None);

    let (x, y) = find_glyph(&fb, UNIT_GLYPH).expect("unit glyph drawn");
    let w = view.world_point(focus, size, x, y);
    assert_eq!((w.x / 32, w.y / 32), (UNIT_TILE.column as i32, UNIT_TILE.row as i32));
}

#[test]
fn selector_sits_at_map_origin() {
    let view = SceneView::new(CellScale::new(8, 16));
    let size = TermSize::new(100, 30);
    // Focus at (400, 240) puts the map's bottom-left tile in the bottom-left cells.
    let fb = view.render(&scene(), Point::new(400, 240), size, None);
    assert_eq!(fb.get(0, 29).unwrap().ch, SELECTOR_GLYPH);
    assert_eq!(fb.get(3, 28).unwrap().ch, SELECTOR_GLYPH);
    assert_ne!(fb.get(4, 29).unwrap().ch, SELECTOR_GLYPH);
}

#[test]
fn overlay_opacity_changes_highlighted_cells() {
    let view = SceneView::new(CellScale::new(8, 16));
    let size = TermSize::new(100, 30);
    let focus = Point::new(400, 240);
    let mut scene = scene();

    // Tile (1, 0) is blue in the highlight and carries no sprite.
    let bright = view.render(&scene, focus, size, None);
    scene.set_opacity(LayerKind::Overlay, 0);
    let faded = view.render(&scene, focus, size, None);

    let a = bright.get(5, 29).unwrap().style.bg;
    let b = faded.get(5, 29).unwrap().style.bg;
    assert_ne!(a, b);
    assert!(a.b > b.b);
}

#[test]
fn status_line_reports_focus() {
    let view = SceneView::default();
    let status = StatusView {
        focus: Point::new(412, -7),
        direction: Direction::IDLE,
        overlay_opacity: 64,
    };
    let fb = view.render(&scene(), Point::new(400, 240), TermSize::new(80, 10), Some(&status));
    let line: String = (0..fb.width()).map(|x| fb.get(x, 0).unwrap().ch).collect();
    assert!(line.contains("focus 412,-7"), "{line}");
    assert!(line.contains("overlay 64"), "{line}");
}
