//! Scene module - the layer stack drawn over the map
//!
//! A [`Scene`] is an ordered stack of scrollable layers on top of a solid
//! background. Layers live in world space (pixels, y-up) and are composited
//! bottom to top with source-over alpha blending.
//!
//! | z | Layer | Content |
//! |---|-------|---------|
//! | 1 | terrain | tile colors from the loaded map |
//! | 2 | obstacles | rock sprites |
//! | 3 | units | unit sprites |
//! | 4 | shading | dimming tint, one tile left clear |
//! | 5 | overlay | pulsing red/blue highlight tint |
//! | 6 | selector | selection cursor sprite |

use arrayvec::ArrayVec;

use crate::overlay::{PixelBuffer, TintStyle};
use crate::types::{Color, MapBounds, TileCoord};

/// Named slots of the layer stack, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    Terrain,
    Obstacles,
    Units,
    Shading,
    Overlay,
    Selector,
}

impl LayerKind {
    pub const ALL: [LayerKind; 6] = [
        LayerKind::Terrain,
        LayerKind::Obstacles,
        LayerKind::Units,
        LayerKind::Shading,
        LayerKind::Overlay,
        LayerKind::Selector,
    ];

    pub fn z(&self) -> u8 {
        match self {
            LayerKind::Terrain => 1,
            LayerKind::Obstacles => 2,
            LayerKind::Units => 3,
            LayerKind::Shading => 4,
            LayerKind::Overlay => 5,
            LayerKind::Selector => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Terrain => "terrain",
            LayerKind::Obstacles => "obstacles",
            LayerKind::Units => "units",
            LayerKind::Shading => "shading",
            LayerKind::Overlay => "overlay",
            LayerKind::Selector => "selector",
        }
    }
}

/// Solid-colored tile grid, row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainLayer {
    columns: u32,
    rows: u32,
    tile_width: u32,
    tile_height: u32,
    colors: Vec<Color>,
}

impl TerrainLayer {
    /// `colors` is row-major starting at the bottom row. Missing trailing
    /// entries are treated as transparent.
    pub fn new(
        columns: u32,
        rows: u32,
        tile_width: u32,
        tile_height: u32,
        mut colors: Vec<Color>,
    ) -> Self {
        colors.resize((columns * rows) as usize, Color::TRANSPARENT);
        Self {
            columns,
            rows,
            tile_width,
            tile_height,
            colors,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub fn bounds(&self) -> MapBounds {
        MapBounds::from_tiles(self.columns, self.rows, self.tile_width, self.tile_height)
    }

    pub fn tile_color(&self, tile: TileCoord) -> Option<Color> {
        if tile.column >= self.columns || tile.row >= self.rows {
            return None;
        }
        Some(self.colors[(tile.row * self.columns + tile.column) as usize])
    }

    pub fn color_at(&self, wx: i32, wy: i32) -> Option<Color> {
        if wx < 0 || wy < 0 || self.tile_width == 0 || self.tile_height == 0 {
            return None;
        }
        self.tile_color(TileCoord::new(
            wx as u32 / self.tile_width,
            wy as u32 / self.tile_height,
        ))
    }
}

/// A one-tile image drawn as a colored glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub tile: TileCoord,
    pub glyph: char,
    pub color: Color,
}

impl Sprite {
    pub const fn new(tile: TileCoord, glyph: char, color: Color) -> Self {
        Self { tile, glyph, color }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteLayer {
    tile_size: u32,
    sprites: Vec<Sprite>,
}

impl SpriteLayer {
    pub fn new(tile_size: u32) -> Self {
        Self {
            tile_size,
            sprites: Vec::new(),
        }
    }

    pub fn with(mut self, sprite: Sprite) -> Self {
        self.sprites.push(sprite);
        self
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Topmost sprite covering world pixel `(wx, wy)`.
    pub fn sprite_at(&self, wx: i32, wy: i32) -> Option<&Sprite> {
        if wx < 0 || wy < 0 || self.tile_size == 0 {
            return None;
        }
        let tile = TileCoord::from_pixel(wx as u32, wy as u32, self.tile_size);
        self.sprites.iter().rev().find(|s| s.tile == tile)
    }
}

/// A rasterized tint with a display opacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TintLayer {
    pixels: PixelBuffer,
    opacity: u8,
}

impl TintLayer {
    pub fn new(pixels: PixelBuffer) -> Self {
        Self {
            pixels,
            opacity: 255,
        }
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity;
    }

    pub fn color_at(&self, wx: i32, wy: i32) -> Option<Color> {
        if wx < 0 || wy < 0 {
            return None;
        }
        self.pixels.pixel(wx as u32, wy as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    Terrain(TerrainLayer),
    Sprites(SpriteLayer),
    Tint(TintLayer),
}

/// A glyph left on top of a sample by a sprite layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Color,
}

/// Composited result for one world pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Opaque backdrop color.
    pub color: Color,
    pub glyph: Option<Glyph>,
}

pub const MAX_LAYERS: usize = LayerKind::ALL.len();

#[derive(Debug, Clone)]
pub struct Scene {
    background: Color,
    layers: ArrayVec<(LayerKind, Layer), MAX_LAYERS>,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            layers: ArrayVec::new(),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Insert or replace the layer in slot `kind`, keeping z order.
    pub fn add(&mut self, kind: LayerKind, layer: Layer) {
        if let Some(slot) = self.layer_mut(kind) {
            *slot = layer;
            return;
        }
        let at = self
            .layers
            .iter()
            .position(|(k, _)| k.z() > kind.z())
            .unwrap_or(self.layers.len());
        // One slot per kind, so capacity cannot be exceeded.
        self.layers.insert(at, (kind, layer));
    }

    pub fn with(mut self, kind: LayerKind, layer: Layer) -> Self {
        self.add(kind, layer);
        self
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|(k, _)| *k == kind).map(|(_, l)| l)
    }

    pub fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut Layer> {
        self.layers
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .map(|(_, l)| l)
    }

    /// Layer kinds in drawing order.
    pub fn kinds(&self) -> impl Iterator<Item = LayerKind> + '_ {
        self.layers.iter().map(|(k, _)| *k)
    }

    /// Set the display opacity of a tint layer. Other layers are left alone.
    pub fn set_opacity(&mut self, kind: LayerKind, opacity: u8) {
        if let Some(Layer::Tint(tint)) = self.layer_mut(kind) {
            tint.set_opacity(opacity);
        }
    }

    /// Pixel size of the terrain, or empty bounds without one.
    pub fn bounds(&self) -> MapBounds {
        match self.layer(LayerKind::Terrain) {
            Some(Layer::Terrain(t)) => t.bounds(),
            _ => MapBounds::new(0, 0),
        }
    }

    /// Composite every layer at world pixel `(wx, wy)`.
    pub fn sample(&self, wx: i32, wy: i32) -> Sample {
        let mut color = self.background;
        let mut glyph: Option<Glyph> = None;

        for (_, layer) in &self.layers {
            match layer {
                Layer::Terrain(t) => {
                    if let Some(c) = t.color_at(wx, wy) {
                        color = blend(color, c, 255);
                    }
                }
                Layer::Sprites(s) => {
                    if let Some(sprite) = s.sprite_at(wx, wy) {
                        glyph = Some(Glyph {
                            ch: sprite.glyph,
                            color: sprite.color,
                        });
                    }
                }
                Layer::Tint(t) => {
                    if let Some(c) = t.color_at(wx, wy) {
                        color = blend(color, c, t.opacity());
                        if let Some(g) = glyph.as_mut() {
                            g.color = blend(g.color, c, t.opacity());
                        }
                    }
                }
            }
        }

        Sample { color, glyph }
    }
}

/// Source-over blend of `src` (scaled by `opacity`) onto opaque `dst`.
pub fn blend(dst: Color, src: Color, opacity: u8) -> Color {
    let a = src.a as u32 * opacity as u32 / 255;
    let mix = |d: u8, s: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
    Color::new(mix(dst.r, src.r), mix(dst.g, src.g), mix(dst.b, src.b), 255)
}

pub const ROCK_GLYPH: char = '▲';
pub const UNIT_GLYPH: char = '♞';
pub const SELECTOR_GLYPH: char = '◇';

/// Where the demo places its single unit, obstacle and cursor.
pub const UNIT_TILE: TileCoord = TileCoord::new(10, 5);
pub const ROCK_TILE: TileCoord = TileCoord::new(2, 3);
pub const SELECTOR_TILE: TileCoord = TileCoord::new(0, 0);

/// Assemble the full demo stack over `terrain`.
///
/// Tint layers are rasterized here, once, at the terrain's size.
pub fn battle_scene(terrain: TerrainLayer) -> Scene {
    let columns = terrain.columns();
    let rows = terrain.rows();
    let tile = terrain.tile_width();

    let shading = TintStyle::shading().render(columns, rows, tile);
    let overlay = TintStyle::highlight().render(columns, rows, tile);

    Scene::new(Color::BACKGROUND)
        .with(LayerKind::Terrain, Layer::Terrain(terrain))
        .with(
            LayerKind::Obstacles,
            Layer::Sprites(SpriteLayer::new(tile).with(Sprite::new(
                ROCK_TILE,
                ROCK_GLYPH,
                Color::opaque(110, 100, 90),
            ))),
        )
        .with(
            LayerKind::Units,
            Layer::Sprites(SpriteLayer::new(tile).with(Sprite::new(
                UNIT_TILE,
                UNIT_GLYPH,
                Color::opaque(230, 40, 40),
            ))),
        )
        .with(LayerKind::Shading, Layer::Tint(TintLayer::new(shading)))
        .with(LayerKind::Overlay, Layer::Tint(TintLayer::new(overlay)))
        .with(
            LayerKind::Selector,
            Layer::Sprites(SpriteLayer::new(tile).with(Sprite::new(
                SELECTOR_TILE,
                SELECTOR_GLYPH,
                Color::opaque(255, 255, 255),
            ))),
        )
}
