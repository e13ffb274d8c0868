//! Asset tool: packs binary PPM (P6) images into `.timg` pixel assets.
//!
//! ```text
//! timg-pack pack sprite.ppm            # writes sprite.timg
//! timg-pack pack sprite.ppm -o out.timg
//! timg-pack info out.timg
//! ```
//!
//! Only binary PPM input is read. PNG, JPEG and GIF are not decoded; convert
//! them to PPM first (for example `magick sprite.png sprite.ppm`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use tengine::core::{load_pixels, save_pixels, World};
use tengine::types::{Color, ASSET_EXTENSION};

#[derive(Parser, Debug)]
#[command(name = "timg-pack", version, about = "Pack PPM images into .timg assets")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a binary PPM (P6) image
    Pack {
        /// Input image path
        input: PathBuf,

        /// Output path (defaults to the input with a .timg extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the dimensions of an asset
    Info {
        /// Asset path
        asset: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Args::parse().command {
        Command::Pack { input, output } => {
            let out = output.unwrap_or_else(|| input.with_extension(ASSET_EXTENSION));
            pack(&input, &out)?;
            println!("saved {}", out.display());
        }
        Command::Info { asset } => {
            let pixels = load_pixels(&asset)?;
            println!("{}: {}x{}", asset.display(), pixels.width(), pixels.height());
        }
    }
    Ok(())
}

fn pack(input: &Path, output: &Path) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let pixels = parse_ppm(&bytes).with_context(|| format!("parse {}", input.display()))?;
    save_pixels(output, &pixels).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

/// Parse a binary PPM with an 8-bit max value.
fn parse_ppm(bytes: &[u8]) -> Result<World> {
    let mut pos = 0;
    let magic = next_token(bytes, &mut pos)?;
    if magic != b"P6" {
        bail!("not a binary PPM (P6) file");
    }
    let width: usize = parse_number(next_token(bytes, &mut pos)?)?;
    let height: usize = parse_number(next_token(bytes, &mut pos)?)?;
    let max: u32 = parse_number(next_token(bytes, &mut pos)?)?;
    if max == 0 || max > 255 {
        bail!("unsupported max value {max}");
    }
    // Exactly one whitespace byte separates the header from the raster.
    pos += 1;

    let len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .context("image too large")?;
    let Some(raster) = bytes.get(pos..).and_then(|r| r.get(..len)) else {
        bail!("truncated raster: expected {len} bytes");
    };

    let scale = |v: u8| (v as u32 * 255 / max) as u8;
    let cells = raster
        .chunks_exact(3)
        .map(|p| Color::rgb(scale(p[0]), scale(p[1]), scale(p[2])))
        .collect();
    Ok(World::from_pixels(width, height, cells)?)
}

fn next_token<'a>(bytes: &'a [u8], pos: &mut usize) -> Result<&'a [u8]> {
    loop {
        match bytes.get(*pos) {
            Some(b'#') => {
                while bytes.get(*pos).is_some_and(|&b| b != b'\n') {
                    *pos += 1;
                }
            }
            Some(b) if b.is_ascii_whitespace() => *pos += 1,
            Some(_) => break,
            None => bail!("unexpected end of header"),
        }
    }
    let start = *pos;
    while bytes.get(*pos).is_some_and(|b| !b.is_ascii_whitespace()) {
        *pos += 1;
    }
    Ok(&bytes[start..*pos])
}

fn parse_number<T: std::str::FromStr>(token: &[u8]) -> Result<T> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .with_context(|| format!("bad header value {:?}", String::from_utf8_lossy(token)))
}
