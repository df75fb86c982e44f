//! Inverse mapping and per-row stepping
//!
//! [`TransformState::map_point`] takes a destination pixel back to the
//! source image in .8 fixed point. [`RowStepper`] calls it only for the two
//! ends of a row and walks linearly in between.
//!
//! # Shift per path
//!
//! | Path | Input magnitude | Shift after rotation |
//! |---|---|---|
//! | [`MapPath::Rotate`] | integer pixels | [`ROTATE_SHIFT`] (2) |
//! | [`MapPath::Scale`] | integer pixels | [`SCALE_SHIFT`] (5), no rotation |
//! | [`MapPath::ScaleRotate`] | .8 scaled pixels | [`SCALE_ROTATE_SHIFT`] (10) |
//!
//! The three shifts bring each path's product back to exactly 8 fractional
//! bits. Using one path's shift on another's values gives coordinates that
//! are off by powers of two.

use crate::state::{FRACT_SHIFT, MapPath, TRANSFORM_TRIGO_SHIFT, TransformState, ZOOM_INV_UPSCALE};

/// Rotation of integer offsets: 10-bit trig in, .8 out
pub const ROTATE_SHIFT: u32 = TRANSFORM_TRIGO_SHIFT - FRACT_SHIFT;

/// Scaling of integer offsets by `zoom_inv`: 13-bit reciprocal in, .8 out
pub const SCALE_SHIFT: u32 = ZOOM_INV_UPSCALE;

/// Rotation of .8 offsets: 10-bit trig in, .8 out
pub const SCALE_ROTATE_SHIFT: u32 = TRANSFORM_TRIGO_SHIFT;

impl TransformState {
    /// Map a destination pixel to its source coordinate
    ///
    /// # Returns
    ///
    /// `(xs, ys)` in .8 fixed point: `xs >> 8` is the source column and
    /// `xs & 0xFF` the position inside it.
    ///
    /// Products are formed in 64 bits and the result truncated to 32, so
    /// extreme zooms wrap instead of trapping.
    pub fn map_point(&self, x: i32, y: i32) -> (i32, i32) {
        let xt = x as i64 - self.pivot.x as i64;
        let yt = y as i64 - self.pivot.y as i64;
        let sin = self.sin as i64;
        let cos = self.cos as i64;

        let (xs, ys) = match self.path {
            MapPath::Rotate => (
                (cos * xt - sin * yt) >> ROTATE_SHIFT,
                (sin * xt + cos * yt) >> ROTATE_SHIFT,
            ),
            MapPath::Scale => (self.scale(xt), self.scale(yt)),
            MapPath::ScaleRotate => {
                let xt = self.scale(xt);
                let yt = self.scale(yt);
                (
                    (cos * xt - sin * yt) >> SCALE_ROTATE_SHIFT,
                    (sin * xt + cos * yt) >> SCALE_ROTATE_SHIFT,
                )
            }
        };

        (
            (xs + self.pivot_x_256 as i64) as i32,
            (ys + self.pivot_y_256 as i64) as i32,
        )
    }

    #[inline]
    fn scale(&self, v: i64) -> i64 {
        (v * self.zoom_inv as i64) >> SCALE_SHIFT
    }
}

/// Source coordinates of the pixels of one destination row
///
/// The row ends are mapped exactly; every pixel in between advances by
/// `(end - start) / width`, truncated. That truncation accumulates along
/// long rows at steep angles, which is accepted in exchange for one
/// addition per pixel instead of a full mapping.
#[derive(Debug, Clone)]
pub struct RowStepper {
    xs: i32,
    ys: i32,
    xs_step: i32,
    ys_step: i32,
    remaining: usize,
}

impl RowStepper {
    /// Stepper for pixels `x1..x2` of row `y`
    ///
    /// `x2` is exclusive; an empty row yields nothing.
    pub fn new(state: &TransformState, x1: i32, x2: i32, y: i32) -> Self {
        let width = x2 as i64 - x1 as i64;
        if width <= 0 {
            return Self {
                xs: 0,
                ys: 0,
                xs_step: 0,
                ys_step: 0,
                remaining: 0,
            };
        }

        let (xs1, ys1) = state.map_point(x1, y);
        let (xs2, ys2) = state.map_point(x2, y);
        // Wide rows or tiny zooms may span more than i32; steps truncate
        let xs_step = ((xs2 as i64 - xs1 as i64) / width) as i32;
        let ys_step = ((ys2 as i64 - ys1 as i64) / width) as i32;

        // Sample pixel centers, not corners
        Self {
            xs: xs1.wrapping_add(xs_step / 2),
            ys: ys1.wrapping_add(ys_step / 2),
            xs_step,
            ys_step,
            remaining: width as usize,
        }
    }

    /// Per-pixel increment in .8 fixed point
    pub fn step(&self) -> (i32, i32) {
        (self.xs_step, self.ys_step)
    }
}

impl Iterator for RowStepper {
    type Item = (i32, i32);

    #[inline]
    fn next(&mut self) -> Option<(i32, i32)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cur = (self.xs, self.ys);
        self.xs = self.xs.wrapping_add(self.xs_step);
        self.ys = self.ys.wrapping_add(self.ys_step);
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RowStepper {}
