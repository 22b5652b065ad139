//! Tile-map loading.
//!
//! Maps are JSON documents with a tileset and one or more named layers.
//! Each layer is a grid of single-character tile keys, written top row first
//! the way it reads in a text editor:
//!
//! ```json
//! {
//!   "tileset": {
//!     "r": { "name": "red",  "color": [150, 60, 50] },
//!     "g": { "name": "gray", "color": [120, 120, 120] }
//!   },
//!   "layers": [
//!     { "name": "Tile Layer 1", "tile_width": 32, "tile_height": 32,
//!       "rows": ["rrg", "ggr"] }
//!   ]
//! }
//! ```
//!
//! After loading, row 0 is the *bottom* row so tile coordinates match the
//! y-up world space used by the camera and the layer stack.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

pub use tui_tactics_types as types;

use crate::types::{Color, MapBounds, TileCoord};

/// Name of the terrain layer in maps exported from the editor.
pub const DEFAULT_LAYER: &str = "Tile Layer 1";

#[derive(Debug, Deserialize)]
struct RawMap {
    tileset: BTreeMap<String, RawTile>,
    layers: Vec<RawLayer>,
}

#[derive(Debug, Deserialize)]
struct RawTile {
    name: String,
    color: [u8; 3],
}

#[derive(Debug, Deserialize)]
struct RawLayer {
    name: String,
    tile_width: u32,
    tile_height: u32,
    rows: Vec<String>,
}

/// One tileset entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub key: char,
    pub name: String,
    pub color: Color,
}

/// A rectangular grid of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    name: String,
    tile_width: u32,
    tile_height: u32,
    columns: u32,
    rows: u32,
    /// Indices into the map's tileset, row-major from the bottom row.
    cells: Vec<usize>,
}

impl TileLayer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn px_width(&self) -> u32 {
        self.columns * self.tile_width
    }

    pub fn px_height(&self) -> u32 {
        self.rows * self.tile_height
    }

    pub fn bounds(&self) -> MapBounds {
        MapBounds::from_tiles(self.columns, self.rows, self.tile_width, self.tile_height)
    }

    fn index(&self, tile: TileCoord) -> Option<usize> {
        if tile.column >= self.columns || tile.row >= self.rows {
            return None;
        }
        Some(self.cells[(tile.row * self.columns + tile.column) as usize])
    }
}

/// A loaded tile map: tileset plus named layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Vec<Tile>,
    layers: Vec<TileLayer>,
}

impl TileMap {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading tile map {}", path.display()))?;
        let map = Self::from_json_str(&text)
            .with_context(|| format!("parsing tile map {}", path.display()))?;
        info!(
            path = %path.display(),
            layers = map.layers.len(),
            tiles = map.tiles.len(),
            "loaded tile map"
        );
        Ok(map)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawMap = serde_json::from_str(text)?;

        let mut tiles = Vec::with_capacity(raw.tileset.len());
        for (key, tile) in raw.tileset {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                bail!("tileset key {key:?} must be a single character");
            };
            let [r, g, b] = tile.color;
            tiles.push(Tile {
                key: ch,
                name: tile.name,
                color: Color::opaque(r, g, b),
            });
        }

        let mut layers = Vec::with_capacity(raw.layers.len());
        for layer in raw.layers {
            layers.push(build_layer(layer, &tiles)?);
        }
        if layers.is_empty() {
            bail!("tile map has no layers");
        }

        Ok(Self { tiles, layers })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Like [`TileMap::layer`] but missing layers are an error.
    pub fn require_layer(&self, name: &str) -> Result<&TileLayer> {
        self.layer(name)
            .with_context(|| format!("tile map has no layer named {name:?}"))
    }

    pub fn tile_at(&self, layer: &TileLayer, tile: TileCoord) -> Option<&Tile> {
        layer.index(tile).map(|i| &self.tiles[i])
    }

    /// Tile colors of `layer`, row-major from the bottom row.
    pub fn layer_colors(&self, layer: &TileLayer) -> Vec<Color> {
        layer.cells.iter().map(|&i| self.tiles[i].color).collect()
    }
}

fn build_layer(raw: RawLayer, tiles: &[Tile]) -> Result<TileLayer> {
    if raw.tile_width == 0 || raw.tile_height == 0 {
        bail!("layer {:?} has a zero tile size", raw.name);
    }
    if raw.tile_width != raw.tile_height {
        bail!(
            "layer {:?} has non-square {}x{} tiles",
            raw.name,
            raw.tile_width,
            raw.tile_height
        );
    }
    let Some(first) = raw.rows.first() else {
        bail!("layer {:?} has no rows", raw.name);
    };
    let columns = first.chars().count();
    if columns == 0 {
        bail!("layer {:?} has empty rows", raw.name);
    }
    if pixel_extent(columns, raw.tile_width).is_none()
        || pixel_extent(raw.rows.len(), raw.tile_height).is_none()
    {
        bail!(
            "layer {:?} is too large: {}x{} tiles of {} px",
            raw.name,
            columns,
            raw.rows.len(),
            raw.tile_width
        );
    }

    let mut cells = Vec::with_capacity(columns * raw.rows.len());
    // Authored top row first; store bottom row first.
    for (i, row) in raw.rows.iter().enumerate().rev() {
        if row.chars().count() != columns {
            bail!(
                "layer {:?} row {} has {} tiles, expected {}",
                raw.name,
                i,
                row.chars().count(),
                columns
            );
        }
        for ch in row.chars() {
            let Some(idx) = tiles.iter().position(|t| t.key == ch) else {
                bail!("layer {:?} row {} uses unknown tile {:?}", raw.name, i, ch);
            };
            cells.push(idx);
        }
    }

    Ok(TileLayer {
        rows: raw.rows.len() as u32,
        columns: columns as u32,
        name: raw.name,
        tile_width: raw.tile_width,
        tile_height: raw.tile_height,
        cells,
    })
}

/// `count * size` in pixels, if it fits the signed world coordinates.
fn pixel_extent(count: usize, size: u32) -> Option<i32> {
    let count = u32::try_from(count).ok()?;
    i32::try_from(count.checked_mul(size)?).ok()
}
