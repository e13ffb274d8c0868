//! Error types for pixel grids and asset I/O

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Asset file could not be opened
    #[error("failed to open asset {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error while streaming an asset
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Asset header declares a zero-sized image
    #[error("invalid asset dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Asset header declares more pixels than can be addressed
    #[error("asset dimensions {width}x{height} are too large")]
    TooLarge { width: u32, height: u32 },

    /// Stream ended before the named section was complete
    #[error("truncated asset: missing {0}")]
    Truncated(&'static str),

    /// Pixel rows of unequal length
    #[error("row {row} has {found} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat pixel buffer does not match the requested dimensions
    #[error("expected {expected} pixels, got {found}")]
    PixelCount { expected: usize, found: usize },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
