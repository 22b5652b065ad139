//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the demo.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (camera logic, rasterization, terminal rendering).
//!
//! # Coordinate System
//!
//! World and window coordinates are in pixels with the origin at the
//! bottom-left corner and `y` growing upwards:
//!
//! - **Window**: `(0, 0)` is the bottom-left corner of the viewport
//! - **World**: `(0, 0)` is the bottom-left corner of the map
//! - **Tiles**: `(column, row)`, row 0 is the bottom row of the map
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SCROLL_SPEED` | 10 | Camera movement per tick, in pixels |
//! | `EDGE_MARGIN` | 30 | Edge-sensitivity margin, in pixels |
//! | `TILE_SIZE` | 32 | Tile edge length, in pixels |
//! | `MAP_COLUMNS` | 25 | Width of the bundled map, in tiles |
//! | `MAP_ROWS` | 15 | Height of the bundled map, in tiles |
//!
//! # Examples
//!
//! ```
//! use tui_tactics_types::{Axis, Color, Rect, TileCoord, TILE_SIZE};
//!
//! let viewport = Rect::new(0, 0, 800, 600);
//! assert_eq!(viewport.right(), 800);
//! assert_eq!(viewport.top(), 600);
//!
//! assert_eq!(TileCoord::from_pixel(31, 0, TILE_SIZE), TileCoord::new(0, 0));
//! assert_eq!(TileCoord::from_pixel(32, 0, TILE_SIZE), TileCoord::new(1, 0));
//!
//! assert_eq!(Color::from_bytes(Color::RED.to_bytes()), Color::RED);
//! assert_eq!(Axis::Decreasing.sign(), -1);
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Camera movement per tick along each active axis, in pixels
pub const SCROLL_SPEED: i32 = 10;

/// Distance from a viewport edge that triggers scrolling, in pixels
pub const EDGE_MARGIN: i32 = 30;

/// Tile edge length in pixels
pub const TILE_SIZE: u32 = 32;

/// Width of the bundled map in tiles
pub const MAP_COLUMNS: u32 = 25;

/// Height of the bundled map in tiles
pub const MAP_ROWS: u32 = 15;

/// Window width used by every demo snapshot
pub const SCREEN_WIDTH: i32 = 800;

/// Window height of the full-size snapshot
pub const SCREEN_HEIGHT: i32 = 600;

/// Window height of the letterboxed snapshot
pub const SHORT_SCREEN_HEIGHT: i32 = 300;

/// Low point of the highlight pulse (opacity out of 255)
pub const FADE_LOW: u8 = 64;

/// High point of the highlight pulse (opacity out of 255)
pub const FADE_HIGH: u8 = 192;

/// Time to fade down to [`FADE_LOW`]
pub const FADE_DOWN_MS: u32 = 2000;

/// Time to fade back up to [`FADE_HIGH`]
pub const FADE_UP_MS: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults() {
        assert_eq!(SCROLL_SPEED, 10);
        assert_eq!(EDGE_MARGIN, 30);
        assert_eq!(TILE_SIZE, 32);
        assert_eq!(MAP_COLUMNS * TILE_SIZE, 800);
        assert_eq!(MAP_ROWS * TILE_SIZE, 480);
        assert_eq!((FADE_LOW, FADE_HIGH), (64, 192));
    }

    #[test]
    fn tile_coord_floors_at_tile_edges() {
        assert_eq!(TileCoord::from_pixel(0, 0, 32), TileCoord::new(0, 0));
        assert_eq!(TileCoord::from_pixel(31, 31, 32), TileCoord::new(0, 0));
        assert_eq!(TileCoord::from_pixel(32, 0, 32), TileCoord::new(1, 0));
        assert_eq!(TileCoord::from_pixel(0, 32, 32), TileCoord::new(0, 1));
        assert_eq!(TileCoord::from_pixel(160, 160, 32), TileCoord::new(5, 5));
    }

    #[test]
    fn map_bounds_from_tiles() {
        let b = MapBounds::from_tiles(25, 15, 32, 32);
        assert_eq!(b, MapBounds::new(800, 480));
        assert_eq!(MapBounds::from_tiles(3, 2, 16, 8), MapBounds::new(48, 16));
    }
}

/// An RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::new(128, 0, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 128, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    /// Uniform dimming used by the shading layer.
    pub const SHADE: Color = Color::new(0, 0, 0, 127);
    /// Light gray backdrop drawn behind the map.
    pub const BACKGROUND: Color = Color::new(192, 192, 192, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// An axis-aligned rectangle in pixels, anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(left: i32, bottom: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.left + self.width
    }

    pub const fn top(&self) -> i32 {
        self.bottom + self.height
    }
}

/// Pixel size of the scrollable map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapBounds {
    pub width: i32,
    pub height: i32,
}

impl MapBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Bounds of a `columns x rows` grid of `tile_w x tile_h` tiles.
    pub const fn from_tiles(columns: u32, rows: u32, tile_w: u32, tile_h: u32) -> Self {
        Self {
            width: (columns * tile_w) as i32,
            height: (rows * tile_h) as i32,
        }
    }
}

/// A point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Scroll state of a single camera axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    Decreasing,
    #[default]
    Idle,
    Increasing,
}

impl Axis {
    /// Unit step for this axis: -1, 0 or 1.
    pub const fn sign(&self) -> i32 {
        match self {
            Axis::Decreasing => -1,
            Axis::Idle => 0,
            Axis::Increasing => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Decreasing => "-",
            Axis::Idle => "0",
            Axis::Increasing => "+",
        }
    }
}

/// Per-axis scroll direction of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction {
    pub x: Axis,
    pub y: Axis,
}

impl Direction {
    pub const IDLE: Direction = Direction {
        x: Axis::Idle,
        y: Axis::Idle,
    };

    pub const fn new(x: Axis, y: Axis) -> Self {
        Self { x, y }
    }

    pub const fn is_idle(&self) -> bool {
        matches!((self.x, self.y), (Axis::Idle, Axis::Idle))
    }
}

/// Integer tile address, `column` counted from the left, `row` from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub column: u32,
    pub row: u32,
}

impl TileCoord {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Tile containing pixel `(px, py)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tactics_types::TileCoord;
    ///
    /// assert_eq!(TileCoord::from_pixel(0, 32, 32), TileCoord::new(0, 1));
    /// assert_eq!(TileCoord::from_pixel(63, 95, 32), TileCoord::new(1, 2));
    /// ```
    pub const fn from_pixel(px: u32, py: u32, tile_size: u32) -> Self {
        Self {
            column: px / tile_size,
            row: py / tile_size,
        }
    }
}

/// A pointer-motion event in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerMotion {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

/// How many window pixels one terminal cell covers.
///
/// The default of 8x16 keeps the roughly 1:2 glyph aspect ratio of
/// terminal fonts, so a 32px tile spans 4 columns and 2 rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellScale {
    pub px_per_col: i32,
    pub px_per_row: i32,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            px_per_col: 8,
            px_per_row: 16,
        }
    }
}

impl CellScale {
    pub const fn new(px_per_col: i32, px_per_row: i32) -> Self {
        Self {
            px_per_col,
            px_per_row,
        }
    }

    /// Window rectangle covered by a `cols x rows` terminal.
    pub const fn viewport(&self, cols: u16, rows: u16) -> Rect {
        Rect::new(
            0,
            0,
            cols as i32 * self.px_per_col,
            rows as i32 * self.px_per_row,
        )
    }

    /// Window point at the center of cell `(col, row)`, where `row` 0 is the
    /// top terminal line of a terminal `rows` lines tall.
    pub const fn cell_center(&self, col: u16, row: u16, rows: u16) -> Point {
        let flipped = rows as i32 - 1 - row as i32;
        Point {
            x: col as i32 * self.px_per_col + self.px_per_col / 2,
            y: flipped * self.px_per_row + self.px_per_row / 2,
        }
    }
}
