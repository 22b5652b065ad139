//! Demo configuration.
//!
//! Every setting has a compile-time default and can be overridden through
//! the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TACTICS_MAP_PATH` | `assets/red_and_gray.json` | tile map to load |
//! | `TACTICS_MAP_LAYER` | `Tile Layer 1` | terrain layer inside the map |
//! | `TACTICS_TICK_MS` | 16 | fixed timestep |
//! | `TACTICS_SCROLL_SPEED` | 10 | camera pixels per tick |
//! | `TACTICS_EDGE_MARGIN` | 30 | edge-sensitivity margin in pixels |
//! | `TACTICS_LOG_PATH` | unset | log file; no logging when unset |
//! | `TACTICS_STATUS` | on | `0`/`false`/`off` hides the status line |

use std::path::PathBuf;

use crate::map::DEFAULT_LAYER;
use crate::types::{EDGE_MARGIN, SCROLL_SPEED, TICK_MS};

pub const DEFAULT_MAP_PATH: &str = "assets/red_and_gray.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub map_path: PathBuf,
    pub map_layer: String,
    pub tick_ms: u32,
    pub scroll_speed: i32,
    pub edge_margin: i32,
    pub log_path: Option<PathBuf>,
    pub show_status: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            map_layer: DEFAULT_LAYER.to_string(),
            tick_ms: TICK_MS,
            scroll_speed: SCROLL_SPEED,
            edge_margin: EDGE_MARGIN,
            log_path: None,
            show_status: true,
        }
    }
}

impl DemoConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Unparseable values fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let map_path = non_empty("TACTICS_MAP_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.map_path);

        let map_layer = non_empty("TACTICS_MAP_LAYER").unwrap_or(defaults.map_layer);

        let tick_ms = non_empty("TACTICS_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let scroll_speed = non_empty("TACTICS_SCROLL_SPEED")
            .and_then(|s| s.parse().ok())
            .filter(|&px: &i32| px > 0)
            .unwrap_or(defaults.scroll_speed);

        let edge_margin = non_empty("TACTICS_EDGE_MARGIN")
            .and_then(|s| s.parse().ok())
            .filter(|&m: &i32| m >= 0)
            .unwrap_or(defaults.edge_margin);

        let log_path = non_empty("TACTICS_LOG_PATH").map(PathBuf::from);

        let show_status = non_empty("TACTICS_STATUS")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or(defaults.show_status);

        Self {
            map_path,
            map_layer,
            tick_ms,
            scroll_speed,
            edge_margin,
            log_path,
            show_status,
        }
    }
}
