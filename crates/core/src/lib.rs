//! Core scene module - pixel world, sprites, compositing and camera
//!
//! This crate holds the pure, deterministic part of the engine. It has no
//! terminal or threading dependencies, which keeps it:
//!
//! - **Testable**: every rule is checked with plain unit tests
//! - **Portable**: the same world can be rendered to any sink
//! - **Cheap per frame**: `clear` + composite reuse the world allocation
//!
//! # Module Structure
//!
//! - [`world`]: row-major RGBA grid with blend-on-write and sub-views
//! - [`object`]: positioned, pivoted sprites and the z-ordered [`Compositor`]
//! - [`camera`]: viewport extraction
//! - [`asset`]: zstd-compressed `.timg` pixel assets
//!
//! # Example
//!
//! ```
//! use tengine_core::{Camera, Compositor, GameObject, World};
//! use tengine_types::{Color, Vec2};
//!
//! let mut world = World::new(16, 8);
//! world.clear(Color::WHITE);
//!
//! let red = Color::rgb(255, 0, 0);
//! let player = GameObject::from_rows(vec![vec![red; 2]; 2])
//!     .unwrap()
//!     .with_position(Vec2::new(4, 4))
//!     .with_pivot(Vec2::new(1, 1));
//!
//! Compositor::new().draw(&mut world, &[player]);
//! let view = Camera::new(0, 0, 8, 8).view(&world);
//! assert_eq!(view.get(3, 3), Some(red));
//! ```

pub mod asset;
pub mod camera;
pub mod error;
pub mod object;
pub mod world;

pub use tengine_types as types;

pub use asset::{decode_pixels, encode_pixels, load_pixels, save_pixels};
pub use camera::Camera;
pub use error::{Error, Result};
pub use object::{Compositor, GameObject};
pub use world::World;
