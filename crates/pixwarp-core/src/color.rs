//! Pixel formats and color mixing
//!
//! A source pixel is `COLOR_BYTES` bytes of packed color followed by an
//! alpha byte at `PIXEL_SIZE - 1`. The layout is fixed per [`PixelFormat`]
//! implementation; no conversion between formats happens anywhere in the
//! sampling path.
//!
//! # Formats
//!
//! | Type | Color | Bytes per pixel | Alpha byte |
//! |---|---|---|---|
//! | [`Rgb565A8`] | [`Color16`], RGB565 little-endian | 3 | 2 |
//! | [`Argb8888`] | [`Color32`], B,G,R,A | 4 | 3 (shared with the color) |

use std::fmt::Debug;

/// Fully transparent
pub const OPA_TRANSP: u8 = 0;
/// Half coverage, used for the final 50/50 blend of the bilinear sampler
pub const OPA_50: u8 = 127;
/// Fully opaque
pub const OPA_COVER: u8 = 255;

/// Divide by 255 without a division: exact for `x <= 255 * 255 + 255`.
#[inline]
pub const fn udiv255(x: u32) -> u32 {
    (x * 0x8081) >> 23
}

/// Layout of one source pixel and the operations the sampler needs on it.
pub trait PixelFormat: Copy + Debug + Send + Sync + 'static {
    /// Color value produced into the output color array
    type Color: Copy + Default + PartialEq + Eq + Debug + Send + Sync;

    /// Number of leading bytes holding the packed color
    const COLOR_BYTES: usize;
    /// Bytes per pixel including the trailing alpha byte
    const PIXEL_SIZE: usize;
    /// Position of the alpha byte within a pixel
    const ALPHA_OFFSET: usize = Self::PIXEL_SIZE - 1;

    /// Decode the color of a pixel; `px` is at least `PIXEL_SIZE` bytes.
    fn read_color(px: &[u8]) -> Self::Color;

    /// Encode a color and alpha into `px` (at least `PIXEL_SIZE` bytes).
    ///
    /// Alpha is written last, so formats whose alpha byte overlaps the color
    /// take the explicit `alpha`.
    fn write_pixel(px: &mut [u8], color: Self::Color, alpha: u8);

    /// Blend `c1` over `c2`; `ratio` 255 gives `c1`, 0 gives `c2`.
    fn mix(c1: Self::Color, c2: Self::Color, ratio: u8) -> Self::Color;

    /// Build a color from 8-bit channels
    fn from_rgb8(r: u8, g: u8, b: u8) -> Self::Color;

    /// Expand a color to 8-bit channels
    fn to_rgb8(color: Self::Color) -> [u8; 3];

    /// Read the alpha byte of a pixel
    #[inline]
    fn read_alpha(px: &[u8]) -> u8 {
        px[Self::ALPHA_OFFSET]
    }
}

// ============================================================================
// 16-bit color
// ============================================================================

/// RGB565 color, red in the top 5 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color16(pub u16);

impl Color16 {
    /// Compose from 5/6/5-bit channels; out-of-range bits are masked.
    #[inline]
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0x1F) << 11) | (((g as u16) & 0x3F) << 5) | ((b as u16) & 0x1F))
    }

    /// 5-bit red channel
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8 & 0x1F
    }

    /// 6-bit green channel
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 5) as u8 & 0x3F
    }

    /// 5-bit blue channel
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8 & 0x1F
    }
}

/// 16-bit RGB565 color with a separate alpha byte (3 bytes per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb565A8;

impl PixelFormat for Rgb565A8 {
    type Color = Color16;

    const COLOR_BYTES: usize = 2;
    const PIXEL_SIZE: usize = 3;

    #[inline]
    fn read_color(px: &[u8]) -> Color16 {
        let mut bytes = [0u8; 2];
        bytes.copy_from_slice(&px[..Self::COLOR_BYTES]);
        Color16(u16::from_le_bytes(bytes))
    }

    #[inline]
    fn write_pixel(px: &mut [u8], color: Color16, alpha: u8) {
        px[..Self::COLOR_BYTES].copy_from_slice(&color.0.to_le_bytes());
        px[Self::ALPHA_OFFSET] = alpha;
    }

    #[inline]
    fn mix(c1: Color16, c2: Color16, ratio: u8) -> Color16 {
        let mix = ratio as u32;
        let inv = 255 - mix;
        let ch = |a: u8, b: u8| udiv255(a as u32 * mix + b as u32 * inv + 128) as u8;
        Color16::from_channels(
            ch(c1.red(), c2.red()),
            ch(c1.green(), c2.green()),
            ch(c1.blue(), c2.blue()),
        )
    }

    fn from_rgb8(r: u8, g: u8, b: u8) -> Color16 {
        Color16::from_channels(r >> 3, g >> 2, b >> 3)
    }

    fn to_rgb8(color: Color16) -> [u8; 3] {
        let (r, g, b) = (color.red(), color.green(), color.blue());
        [(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]
    }
}

// ============================================================================
// 32-bit color
// ============================================================================

/// 32-bit color stored as `0xAARRGGBB` (bytes B, G, R, A in memory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color32(pub u32);

impl Color32 {
    /// Compose from 8-bit channels
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// 32-bit ARGB8888; the alpha byte is the color's own top byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Argb8888;

impl PixelFormat for Argb8888 {
    type Color = Color32;

    const COLOR_BYTES: usize = 4;
    const PIXEL_SIZE: usize = 4;

    #[inline]
    fn read_color(px: &[u8]) -> Color32 {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&px[..Self::COLOR_BYTES]);
        Color32(u32::from_le_bytes(bytes))
    }

    #[inline]
    fn write_pixel(px: &mut [u8], color: Color32, alpha: u8) {
        px[..Self::COLOR_BYTES].copy_from_slice(&color.0.to_le_bytes());
        px[Self::ALPHA_OFFSET] = alpha;
    }

    #[inline]
    fn mix(c1: Color32, c2: Color32, ratio: u8) -> Color32 {
        let mix = ratio as u32;
        let inv = 255 - mix;
        let ch = |a: u8, b: u8| udiv255(a as u32 * mix + b as u32 * inv) as u8;
        Color32::from_argb(
            OPA_COVER,
            ch(c1.red(), c2.red()),
            ch(c1.green(), c2.green()),
            ch(c1.blue(), c2.blue()),
        )
    }

    fn from_rgb8(r: u8, g: u8, b: u8) -> Color32 {
        Color32::from_argb(OPA_COVER, r, g, b)
    }

    fn to_rgb8(color: Color32) -> [u8; 3] {
        [color.red(), color.green(), color.blue()]
    }
}
