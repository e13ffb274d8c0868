//! Terminal renderer module.
//!
//! Streams pixel views to a text terminal as ANSI escape sequences: one pixel
//! is one space cell with a truecolor background.
//!
//! Goals:
//! - Keep the encoders pure so their output can be inspected in tests
//! - Redraw only changed pixels once the terminal holds a known frame
//! - Write each frame with a single buffered write

pub mod renderer;

pub use tengine_core as core;
pub use tengine_types as types;

pub use renderer::{
    encode_diff_into, encode_full_into, for_each_dirty_run, SetPixelColor, TerminalRenderer,
};
