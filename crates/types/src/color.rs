//! RGBA pixel colour and the "draw over an opaque canvas" blend rule.

/// 8-bit RGBA colour. Equality is exact on all four channels.
///
/// The default value is fully transparent black, which is also what a view
/// holds for cells that fall outside the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with alpha forced to 255.
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Draw `src` over `dst`.
///
/// - `src.a == 0`: `dst` is returned untouched.
/// - `src.a == 255`: `src` replaces `dst`.
/// - otherwise each channel is `(src * a + dst * (255 - a)) / 255`, truncating.
///
/// Every non-trivial result is opaque; partially transparent composition over a
/// transparent destination is not modelled.
pub fn blend(dst: Color, src: Color) -> Color {
    match src.a {
        0 => dst,
        255 => src,
        alpha => {
            let a = alpha as u32;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
            Color::rgba(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), 255)
        }
    }
}
