//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no I/O, so the compositor, the terminal
//! renderer and the input decoder can all agree on one vocabulary.
//!
//! # Pixels
//!
//! A pixel is a [`Color`] with four 8-bit channels. The scene is always treated
//! as an opaque canvas: [`blend`] draws a source colour over a destination and
//! produces a fully opaque result.
//!
//! # Frame Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 30 | Frame loop tick rate |
//! | `INPUT_QUEUE_CAPACITY` | 32 | Bounded key event queue size |
//!
//! # Examples
//!
//! ```
//! use tengine_types::{blend, Color, KeyEvent, KeyMods};
//!
//! let red = Color::rgb(255, 0, 0);
//! let glass = Color::rgba(0, 0, 255, 0);
//! assert_eq!(blend(red, glass), red);
//!
//! let ctrl_c = KeyEvent::down('C', KeyMods::CTRL);
//! assert!(ctrl_c.is_interrupt());
//! ```

pub mod color;
pub mod keys;

pub use color::{blend, Color};
pub use keys::{KeyAction, KeyEvent, KeyMods};

/// Default frame loop tick rate (frames per second).
pub const DEFAULT_FPS: u32 = 30;

/// Default world width in pixels.
pub const DEFAULT_WORLD_WIDTH: usize = 720;

/// Default world height in pixels.
pub const DEFAULT_WORLD_HEIGHT: usize = 270;

/// Default camera viewport width in pixels.
pub const DEFAULT_CAMERA_WIDTH: usize = 480;

/// Default camera viewport height in pixels.
pub const DEFAULT_CAMERA_HEIGHT: usize = 270;

/// Capacity of the bounded queue between the input listener and the frame loop.
pub const INPUT_QUEUE_CAPACITY: usize = 32;

/// File extension of compressed pixel assets.
pub const ASSET_EXTENSION: &str = "timg";

/// The raw byte a terminal in raw mode sends for Ctrl+C.
pub const INTERRUPT_BYTE: u8 = 3;

/// 2D integer vector in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_fit_camera_inside_world() {
        assert!(DEFAULT_CAMERA_WIDTH <= DEFAULT_WORLD_WIDTH);
        assert!(DEFAULT_CAMERA_HEIGHT <= DEFAULT_WORLD_HEIGHT);
        assert!(DEFAULT_FPS > 0);
    }

    #[test]
    fn vec2_arithmetic() {
        let pos = Vec2::new(5, 7);
        let pivot = Vec2::new(1, 2);
        assert_eq!(pos - pivot, Vec2::new(4, 5));
        assert_eq!(pos + pivot, Vec2::new(6, 9));
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }
}
