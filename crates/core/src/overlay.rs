//! Overlay module - per-tile tint rasterization
//!
//! Turns a sparse `(column, row) -> Color` table into a full-resolution RGBA
//! pixel buffer covering the whole map. The buffer is built once when a tint
//! layer is constructed and never mutated afterwards; only its display
//! opacity changes (see [`crate::fade`]).
//!
//! Both tint layers of the demo come from the same function and differ only
//! in their [`TintStyle`]:
//!
//! - **Highlight**: transparent by default, a handful of tiles marked red or blue
//! - **Shading**: every tile dimmed, one tile carved out fully transparent

use std::collections::BTreeMap;

use tracing::debug;

use crate::types::{Color, TileCoord};

/// Sparse row -> (column -> color) lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayTable {
    rows: BTreeMap<u32, BTreeMap<u32, Color>>,
}

impl OverlayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`OverlayTable::insert`].
    pub fn with_tile(mut self, column: u32, row: u32, color: Color) -> Self {
        self.insert(column, row, color);
        self
    }

    pub fn insert(&mut self, column: u32, row: u32, color: Color) {
        self.rows.entry(row).or_default().insert(column, color);
    }

    pub fn get(&self, column: u32, row: u32) -> Option<Color> {
        self.rows.get(&row)?.get(&column).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All marked tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, Color)> + '_ {
        self.rows.iter().flat_map(|(&row, cols)| {
            cols.iter()
                .map(move |(&column, &color)| (TileCoord::new(column, row), color))
        })
    }
}

/// Immutable row-major RGBA image, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px: [u8; 4] = self.data.get(i..i + 4)?.try_into().ok()?;
        Some(Color::from_bytes(px))
    }
}

/// Rasterize a sparse tile table into a full-map pixel buffer.
///
/// The output is `columns * tile_size` by `rows * tile_size` pixels. Pixel
/// `(px, py)` takes the color of tile `(px / tile_size, py / tile_size)`, or
/// `default` when that tile has no entry.
///
/// This writes every pixel of the map: call it once per layer, not per frame.
///
/// # Example
///
/// ```
/// use tui_tactics_core::overlay::{rasterize, OverlayTable};
/// use tui_tactics_types::Color;
///
/// let table = OverlayTable::new().with_tile(0, 1, Color::RED);
/// let img = rasterize(25, 15, 32, &table, Color::TRANSPARENT);
/// assert_eq!(img.pixel(0, 32), Some(Color::RED));
/// assert_eq!(img.pixel(0, 31), Some(Color::TRANSPARENT));
/// ```
pub fn rasterize(
    columns: u32,
    rows: u32,
    tile_size: u32,
    table: &OverlayTable,
    default: Color,
) -> PixelBuffer {
    let width = columns * tile_size;
    let height = rows * tile_size;
    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);

    // Resolve each tile row once and stamp it `tile_size` times.
    let mut row_pixels = Vec::with_capacity((width as usize) * 4);
    for row in 0..rows {
        row_pixels.clear();
        for px in 0..width {
            let color = table.get(px / tile_size, row).unwrap_or(default);
            row_pixels.extend_from_slice(&color.to_bytes());
        }
        for _ in 0..tile_size {
            data.extend_from_slice(&row_pixels);
        }
    }

    debug!(width, height, marked = table.len(), "rasterized overlay");
    PixelBuffer {
        width,
        height,
        data,
    }
}

/// Default color plus the tiles that differ from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TintStyle {
    pub default: Color,
    pub table: OverlayTable,
}

impl TintStyle {
    pub fn new(default: Color, table: OverlayTable) -> Self {
        Self { default, table }
    }

    /// Selection indicator: a few tiles marked red/blue over a clear map.
    pub fn highlight() -> Self {
        let table = OverlayTable::new()
            .with_tile(0, 0, Color::BLUE)
            .with_tile(1, 0, Color::BLUE)
            .with_tile(0, 1, Color::RED)
            .with_tile(0, 2, Color::BLUE)
            .with_tile(0, 10, Color::BLUE);
        Self::new(Color::TRANSPARENT, table)
    }

    /// Dim the whole map except the tile at `(10, 5)`.
    pub fn shading() -> Self {
        let table = OverlayTable::new().with_tile(10, 5, Color::TRANSPARENT);
        Self::new(Color::SHADE, table)
    }

    pub fn render(&self, columns: u32, rows: u32, tile_size: u32) -> PixelBuffer {
        rasterize(columns, rows, tile_size, &self.table, self.default)
    }
}
