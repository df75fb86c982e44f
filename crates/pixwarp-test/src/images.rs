//! Deterministic synthetic source images
//!
//! Every generator returns packed pixel bytes (`stride == width`) for any
//! [`PixelFormat`], ready for [`SourceImage::packed`]:
//!
//! ```ignore
//! let data = images::gradient::<Rgb565A8>(16, 16);
//! let src = SourceImage::<Rgb565A8>::packed(&data, 16, 16)?;
//! ```
//!
//! Colors are unique per pixel where the format allows, so a rendered pixel
//! can be traced back to the source pixel it came from.

use pixwarp_core::{OPA_COVER, PixelFormat, SourceImage};

/// Build a packed image from a per-pixel function returning `(color, alpha)`
pub fn from_fn<F, P>(width: i32, height: i32, mut pixel: P) -> Vec<u8>
where
    F: PixelFormat,
    P: FnMut(i32, i32) -> (F::Color, u8),
{
    let w = width.max(0);
    let h = height.max(0);
    let mut data = vec![0u8; (w * h) as usize * F::PIXEL_SIZE];
    for (i, px) in data.chunks_exact_mut(F::PIXEL_SIZE).enumerate() {
        let (x, y) = (i as i32 % w, i as i32 / w);
        let (color, alpha) = pixel(x, y);
        F::write_pixel(px, color, alpha);
    }
    data
}

/// Opaque gradient: red grows along x, green along y
///
/// Channels step by 8 so that 5- and 6-bit formats keep every step.
pub fn gradient<F: PixelFormat>(width: i32, height: i32) -> Vec<u8> {
    from_fn::<F, _>(width, height, |x, y| {
        let r = (x * 8).min(255) as u8;
        let g = (y * 8).min(255) as u8;
        (F::from_rgb8(r, g, 0x40), OPA_COVER)
    })
}

/// Opaque black/white checkerboard with square cells of `cell` pixels
pub fn checkerboard<F: PixelFormat>(width: i32, height: i32, cell: i32) -> Vec<u8> {
    let cell = cell.max(1);
    from_fn::<F, _>(width, height, |x, y| {
        let v = if (x / cell + y / cell) % 2 == 0 { 0xFF } else { 0x00 };
        (F::from_rgb8(v, v, v), OPA_COVER)
    })
}

/// Single white color with alpha growing along x from 0 to 255
pub fn alpha_ramp<F: PixelFormat>(width: i32, height: i32) -> Vec<u8> {
    let span = (width - 1).max(1);
    from_fn::<F, _>(width, height, |x, _| {
        let a = (x * 255 / span) as u8;
        (F::from_rgb8(0xFF, 0xFF, 0xFF), a)
    })
}

/// Uniform image of one color and alpha
pub fn solid<F: PixelFormat>(width: i32, height: i32, color: F::Color, alpha: u8) -> Vec<u8> {
    from_fn::<F, _>(width, height, |_, _| (color, alpha))
}

/// Decode every pixel of `src` into row-major color and alpha arrays
///
/// Handy as the expected output of an identity draw.
pub fn unpack<F: PixelFormat>(src: &SourceImage<'_, F>) -> (Vec<F::Color>, Vec<u8>) {
    let n = (src.width() * src.height()) as usize;
    let mut colors = Vec::with_capacity(n);
    let mut alphas = Vec::with_capacity(n);
    for y in 0..src.height() {
        for x in 0..src.width() {
            if let Some((c, a)) = src.get(x, y) {
                colors.push(c);
                alphas.push(a);
            }
        }
    }
    (colors, alphas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixwarp_core::{Argb8888, Color16, Rgb565A8};

    #[test]
    fn test_gradient_sizes_and_values() {
        let data = gradient::<Rgb565A8>(5, 4);
        assert_eq!(data.len(), 5 * 4 * 3);
        let src = SourceImage::<Rgb565A8>::packed(&data, 5, 4).unwrap();
        let (c, a) = src.get(3, 2).unwrap();
        assert_eq!(a, OPA_COVER);
        assert_eq!(Rgb565A8::to_rgb8(c)[0] >> 3, 3);

        let data = gradient::<Argb8888>(5, 4);
        let src = SourceImage::<Argb8888>::packed(&data, 5, 4).unwrap();
        let (c, _) = src.get(4, 1).unwrap();
        assert_eq!(Argb8888::to_rgb8(c), [32, 8, 0x40]);
    }

    #[test]
    fn test_checkerboard_cells() {
        let data = checkerboard::<Rgb565A8>(4, 4, 2);
        let src = SourceImage::<Rgb565A8>::packed(&data, 4, 4).unwrap();
        assert_eq!(src.get(0, 0).unwrap().0, Color16(0xFFFF));
        assert_eq!(src.get(1, 1).unwrap().0, Color16(0xFFFF));
        assert_eq!(src.get(2, 0).unwrap().0, Color16(0));
        assert_eq!(src.get(2, 2).unwrap().0, Color16(0xFFFF));
    }

    #[test]
    fn test_alpha_ramp_ends() {
        let data = alpha_ramp::<Rgb565A8>(6, 2);
        let src = SourceImage::<Rgb565A8>::packed(&data, 6, 2).unwrap();
        assert_eq!(src.get(0, 1).unwrap().1, 0);
        assert_eq!(src.get(5, 1).unwrap().1, 255);
    }

    #[test]
    fn test_unpack_matches_get() {
        let data = solid::<Rgb565A8>(3, 2, Color16(0x1234), 99);
        let src = SourceImage::<Rgb565A8>::packed(&data, 3, 2).unwrap();
        let (colors, alphas) = unpack(&src);
        assert_eq!(colors, vec![Color16(0x1234); 6]);
        assert_eq!(alphas, vec![99; 6]);
    }
}
