//! Compressed pixel asset codec (`.timg`).
//!
//! Layout of the decompressed stream:
//!
//! ```text
//! u32 LE width | u32 LE height | width * height * [r, g, b]
//! ```
//!
//! The whole stream is zstd-compressed. Pixels have no alpha channel and load
//! as opaque.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::types::Color;
use crate::world::World;

/// zstd level used when writing assets.
pub const COMPRESSION_LEVEL: i32 = 19;

const BYTES_PER_PIXEL: usize = 3;

/// Load an asset file into a pixel grid.
pub fn load_pixels(path: impl AsRef<Path>) -> Result<World> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let pixels = decode_pixels(file)?;
    info!(
        "loaded asset {} ({}x{})",
        path.display(),
        pixels.width(),
        pixels.height()
    );
    Ok(pixels)
}

/// Decode a compressed asset stream.
pub fn decode_pixels<R: Read>(reader: R) -> Result<World> {
    let mut decoder = zstd::stream::read::Decoder::new(reader)?;

    let width = read_u32_le(&mut decoder, "width")?;
    let height = read_u32_le(&mut decoder, "height")?;
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let (w, h) = (width as usize, height as usize);
    let len = w
        .checked_mul(h)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(Error::TooLarge { width, height })?;

    let mut raw = vec![0u8; len];
    read_section(&mut decoder, &mut raw, "pixel data")?;

    let cells = raw
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|p| Color::rgb(p[0], p[1], p[2]))
        .collect();
    World::from_pixels(w, h, cells)
}

/// Save a pixel grid as an asset file.
pub fn save_pixels(path: impl AsRef<Path>, pixels: &World) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut out = BufWriter::new(file);
    encode_pixels(&mut out, pixels)?;
    out.flush()?;
    Ok(())
}

/// Compress `pixels` into `writer`. Alpha is discarded.
pub fn encode_pixels<W: Write>(writer: W, pixels: &World) -> Result<()> {
    let dims = (u32::try_from(pixels.width()), u32::try_from(pixels.height()));
    let (Ok(width), Ok(height)) = dims else {
        return Err(Error::TooLarge {
            width: u32::MAX,
            height: u32::MAX,
        });
    };
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let mut encoder = zstd::stream::write::Encoder::new(writer, COMPRESSION_LEVEL)?;
    encoder.write_all(&width.to_le_bytes())?;
    encoder.write_all(&height.to_le_bytes())?;

    let mut row_buf = Vec::with_capacity(pixels.width() * BYTES_PER_PIXEL);
    for row in pixels.rows() {
        row_buf.clear();
        for c in row {
            row_buf.extend_from_slice(&[c.r, c.g, c.b]);
        }
        encoder.write_all(&row_buf)?;
    }
    encoder.finish()?;
    Ok(())
}

fn read_u32_le<R: Read>(reader: &mut R, what: &'static str) -> Result<u32> {
    let mut buf = [0u8; 4];
    read_section(reader, &mut buf, what)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_section<R: Read>(reader: &mut R, buf: &mut [u8], what: &'static str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::Truncated(what),
        _ => Error::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress(raw: &[u8]) -> Vec<u8> {
        zstd::stream::encode_all(raw, 3).unwrap()
    }

    fn header(w: u32, h: u32) -> Vec<u8> {
        let mut v = w.to_le_bytes().to_vec();
        v.extend_from_slice(&h.to_le_bytes());
        v
    }

    #[test]
    fn decodes_rgb_payload_as_opaque() {
        let mut raw = header(2, 1);
        raw.extend_from_slice(&[10, 20, 30, 40, 50, 60]);
        let grid = decode_pixels(compress(&raw).as_slice()).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 1));
        assert_eq!(grid.get(0, 0), Some(Color::rgb(10, 20, 30)));
        assert_eq!(grid.get(1, 0), Some(Color::rgb(40, 50, 60)));
    }

    #[test]
    fn zero_width_fails_before_payload() {
        // No payload at all: must still report the dimension problem.
        let err = decode_pixels(compress(&header(0, 5)).as_slice()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 0, height: 5 }));

        let err = decode_pixels(compress(&header(7, 0)).as_slice()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 7, height: 0 }));
    }

    #[test]
    fn short_payload_is_truncated() {
        let mut raw = header(2, 2);
        raw.extend_from_slice(&[1, 2, 3, 4, 5]);
        let err = decode_pixels(compress(&raw).as_slice()).unwrap_err();
        assert!(matches!(err, Error::Truncated("pixel data")));
    }

    #[test]
    fn short_header_is_truncated() {
        let err = decode_pixels(compress(&[1, 0, 0]).as_slice()).unwrap_err();
        assert!(matches!(err, Error::Truncated("width")));
    }

    #[test]
    fn garbage_stream_is_an_error() {
        assert!(decode_pixels(&b"definitely not zstd"[..]).is_err());
    }

    #[test]
    fn encode_then_decode_preserves_rgb() {
        let grid = World::from_rows(vec![
            vec![Color::rgb(1, 2, 3), Color::rgba(4, 5, 6, 7)],
            vec![Color::rgb(8, 9, 10), Color::rgb(11, 12, 13)],
        ])
        .unwrap();
        let mut bytes = Vec::new();
        encode_pixels(&mut bytes, &grid).unwrap();
        let back = decode_pixels(bytes.as_slice()).unwrap();
        assert_eq!(back.get(1, 0), Some(Color::rgb(4, 5, 6)));
        assert_eq!(back.get(1, 1), Some(Color::rgb(11, 12, 13)));
    }

    #[test]
    fn encoding_empty_grid_is_rejected() {
        let err = encode_pixels(Vec::new(), &World::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_pixels("/nonexistent/sprite.timg").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/sprite.timg"));
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.timg");
        let grid = World::from_rows(vec![vec![Color::rgb(200, 100, 50); 3]; 2]).unwrap();
        save_pixels(&path, &grid).unwrap();
        assert_eq!(load_pixels(&path).unwrap(), grid);
    }
}
