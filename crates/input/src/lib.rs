//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer and the scene. It decodes
//! raw-mode terminal bytes into [`crate::types::KeyEvent`] values and delivers
//! them from a reader thread to the frame loop through a bounded queue.

pub mod listener;
pub mod map;

pub use tengine_types as types;

pub use listener::InputListener;
pub use map::{decode_bytes, decode_key_byte, pan_delta, should_quit};
