//! Per-pixel sampling of the source image
//!
//! Both samplers consume a sequence of .8 fixed-point source coordinates
//! (normally a [`RowStepper`](crate::RowStepper)) and write one color and
//! one alpha value per coordinate. A coordinate outside the source always
//! produces alpha 0 and leaves the color entry as it was.
//!
//! # Bilinear approximation
//!
//! The anti-aliased sampler reads at most three pixels: the base pixel, its
//! horizontal neighbor and its vertical neighbor, each neighbor taken on the
//! side the fractional coordinate leans toward. The fraction is remapped so
//! that the pixel center (fraction 128) has weight 0 toward either side and
//! the pixel border has weight 254:
//!
//! ```text
//! fract <  128: neighbor -1, weight (127 - fract) * 2
//! fract >= 128: neighbor +1, weight (fract - 128) * 2
//! ```
//!
//! On the outermost row or column the missing neighbor is replaced by a fade
//! of the base alpha toward the image edge.

use crate::state::FRACT_SHIFT;
use pixwarp_core::{OPA_50, OPA_TRANSP, PixelFormat, SourceImage};

const FRACT_MASK: i32 = (1 << FRACT_SHIFT) - 1;
const FRACT_HALF: i32 = 1 << (FRACT_SHIFT - 1);

/// Neighbor direction and blend weight for one axis
#[inline]
fn lean(fract: i32) -> (i32, u32) {
    if fract < FRACT_HALF {
        (-1, ((FRACT_HALF - 1 - fract) * 2) as u32)
    } else {
        (1, ((fract - FRACT_HALF) * 2) as u32)
    }
}

/// Blend a neighbor alpha toward the base alpha; equal alphas pass through.
#[inline]
fn blend_alpha(neighbor: u32, base: u32, weight: u32) -> u32 {
    if neighbor != base {
        (neighbor * weight + base * (256 - weight)) >> 8
    } else {
        neighbor
    }
}

/// Nearest-neighbor sampling
///
/// Copies the color and alpha of the source pixel containing each
/// coordinate. Stops at the shortest of `coords`, `cbuf` and `abuf`.
pub fn sample_nearest<F: PixelFormat>(
    src: &SourceImage<'_, F>,
    coords: impl Iterator<Item = (i32, i32)>,
    cbuf: &mut [F::Color],
    abuf: &mut [u8],
) {
    for ((xs, ys), (c, a)) in coords.zip(cbuf.iter_mut().zip(abuf.iter_mut())) {
        let xs_int = xs >> FRACT_SHIFT;
        let ys_int = ys >> FRACT_SHIFT;
        if !src.contains(xs_int, ys_int) {
            *a = OPA_TRANSP;
            continue;
        }

        let px = src.pixel_unchecked(xs_int, ys_int);
        *c = F::read_color(px);
        *a = F::read_alpha(px);
    }
}

/// Anti-aliased (3-tap bilinear) sampling
///
/// Where all three taps exist, a resulting alpha of 0 leaves the color
/// entry untouched. On the outermost row or column the base color is always
/// written, whatever the faded alpha.
///
/// Stops at the shortest of `coords`, `cbuf` and `abuf`.
pub fn sample_bilinear<F: PixelFormat>(
    src: &SourceImage<'_, F>,
    coords: impl Iterator<Item = (i32, i32)>,
    cbuf: &mut [F::Color],
    abuf: &mut [u8],
) {
    let last_x = src.width() - 1;
    let last_y = src.height() - 1;

    for ((xs, ys), (c, a)) in coords.zip(cbuf.iter_mut().zip(abuf.iter_mut())) {
        let xs_int = xs >> FRACT_SHIFT;
        let ys_int = ys >> FRACT_SHIFT;
        if !src.contains(xs_int, ys_int) {
            *a = OPA_TRANSP;
            continue;
        }

        let (x_next, wx) = lean(xs & FRACT_MASK);
        let (y_next, wy) = lean(ys & FRACT_MASK);
        let base = src.pixel_unchecked(xs_int, ys_int);

        if src.contains(xs_int + x_next, ys_int + y_next) {
            let hor = src.pixel_unchecked(xs_int + x_next, ys_int);
            let ver = src.pixel_unchecked(xs_int, ys_int + y_next);

            let a_base = F::read_alpha(base) as u32;
            let a_ver = blend_alpha(F::read_alpha(ver) as u32, a_base, wy);
            let a_hor = blend_alpha(F::read_alpha(hor) as u32, a_base, wx);
            *a = ((a_ver + a_hor) >> 1) as u8;

            if *a != OPA_TRANSP {
                let c_base = F::read_color(base);
                let c_ver = F::mix(F::read_color(ver), c_base, wy as u8);
                let c_hor = F::mix(F::read_color(hor), c_base, wx as u8);
                *c = F::mix(c_hor, c_ver, OPA_50);
            }
        } else {
            *c = F::read_color(base);
            let a_base = F::read_alpha(base) as u32;

            *a = if (xs_int == 0 && x_next < 0) || (xs_int == last_x && x_next > 0) {
                ((a_base * (255 - wx)) >> 8) as u8
            } else if (ys_int == 0 && y_next < 0) || (ys_int == last_y && y_next > 0) {
                ((a_base * (255 - wy)) >> 8) as u8
            } else {
                OPA_TRANSP
            };
        }
    }
}
