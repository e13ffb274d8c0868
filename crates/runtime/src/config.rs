//! Engine configuration from environment variables.
//!
//! - `TENGINE_FPS`: frame loop tick rate (default 30, minimum 1)
//! - `TENGINE_WORLD_W` / `TENGINE_WORLD_H`: world size in pixels (default 720x270)
//! - `TENGINE_CAMERA_W` / `TENGINE_CAMERA_H`: viewport size (default 480x270)
//! - `TENGINE_ASSET`: optional `.timg` sprite for the demo scene
//! - `TENGINE_FRAME_DELAY_MS`: pause after each written frame (default 0)
//! - `TENGINE_LOG_FILE`: write logs to this file instead of stderr

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::types::{
    DEFAULT_CAMERA_HEIGHT, DEFAULT_CAMERA_WIDTH, DEFAULT_FPS, DEFAULT_WORLD_HEIGHT,
    DEFAULT_WORLD_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub fps: u32,
    pub world_width: usize,
    pub world_height: usize,
    pub camera_width: usize,
    pub camera_height: usize,
    pub asset_path: Option<PathBuf>,
    pub frame_delay: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            camera_width: DEFAULT_CAMERA_WIDTH,
            camera_height: DEFAULT_CAMERA_HEIGHT,
            asset_path: None,
            frame_delay: Duration::ZERO,
            log_file: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparsable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let parsed = |key: &str, default: usize| parse_or(lookup(key), default);
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
        };

        let world_width = parsed("TENGINE_WORLD_W", d.world_width);
        let world_height = parsed("TENGINE_WORLD_H", d.world_height);

        Self {
            fps: parse_or(lookup("TENGINE_FPS"), d.fps).max(1),
            world_width,
            world_height,
            camera_width: parsed("TENGINE_CAMERA_W", d.camera_width).min(world_width),
            camera_height: parsed("TENGINE_CAMERA_H", d.camera_height).min(world_height),
            asset_path: path("TENGINE_ASSET"),
            frame_delay: Duration::from_millis(parse_or(lookup("TENGINE_FRAME_DELAY_MS"), 0)),
            log_file: path("TENGINE_LOG_FILE"),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
