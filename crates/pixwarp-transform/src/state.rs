//! Transform configuration and derived state
//!
//! [`TransformConfig`] is what the caller asks for: a source image, a pivot,
//! an angle in tenths of a degree and a zoom. [`TransformState`] is the
//! fixed-point form of the same request, computed once per draw call and
//! only read afterwards.
//!
//! # Fixed-point budgets
//!
//! | Value | Fractional bits |
//! |---|---|
//! | table sine/cosine | [`TRIGO_SHIFT`] (15) |
//! | state sine/cosine | [`TRANSFORM_TRIGO_SHIFT`] (10) |
//! | zoom | 8 (256 = 1.0x) |
//! | `zoom_inv` | 8 + [`ZOOM_INV_UPSCALE`] (13) |
//! | pivot, mapped coordinates | [`FRACT_SHIFT`] (8) |
//!
//! The state sine/cosine are kept at 10 bits so that rotating an already
//! scaled .8 coordinate stays inside 32 bits for realistic image sizes.

use crate::trigo::{TRIGO_SHIFT, interpolate_tenths, trigo_sin};
use crate::{TransformError, TransformResult};
use log::trace;
use pixwarp_core::{PixelFormat, Point, SourceImage};
use std::num::NonZeroU16;

/// Fractional bits of source coordinates (.8 fixed point)
pub const FRACT_SHIFT: u32 = 8;

/// Fractional bits of the sine/cosine stored in [`TransformState`]
pub const TRANSFORM_TRIGO_SHIFT: u32 = 10;

/// Extra precision bits of the zoom reciprocal
pub const ZOOM_INV_UPSCALE: u32 = 5;

/// Zoom value meaning "no scaling"
pub const ZOOM_NONE: u16 = 256;

// ============================================================================
// Zoom
// ============================================================================

/// Uniform scale factor in .8 fixed point (256 = 1.0x, 512 = 2.0x)
///
/// Zero cannot be represented, so every `Zoom` has a reciprocal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zoom(NonZeroU16);

impl Zoom {
    /// No scaling
    pub const NONE: Zoom = match NonZeroU16::new(ZOOM_NONE) {
        Some(z) => Zoom(z),
        None => panic!("ZOOM_NONE is zero"),
    };

    /// Create a zoom from its raw .8 value
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidZoom`] for 0.
    pub fn new(raw: u16) -> TransformResult<Self> {
        NonZeroU16::new(raw)
            .map(Zoom)
            .ok_or(TransformError::InvalidZoom)
    }

    /// Raw .8 value
    #[inline]
    pub fn get(self) -> u16 {
        self.0.get()
    }

    /// Check if this zoom leaves the size unchanged
    #[inline]
    pub fn is_identity(self) -> bool {
        self.get() == ZOOM_NONE
    }

    /// Reciprocal of the scale factor at `FRACT_SHIFT + ZOOM_INV_UPSCALE`
    /// fractional bits, rounded
    pub fn inverse(self) -> u32 {
        let zoom = self.get() as u32;
        (((256 * 256) << ZOOM_INV_UPSCALE) + zoom / 2) / zoom
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<u16> for Zoom {
    type Error = TransformError;

    fn try_from(raw: u16) -> TransformResult<Self> {
        Self::new(raw)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Everything the caller specifies for one transformed draw
#[derive(Debug, Clone, Copy)]
pub struct TransformConfig<'a, F: PixelFormat> {
    /// Source pixels
    pub src: SourceImage<'a, F>,
    /// Rotation and scaling center, in source pixels
    pub pivot: Point,
    /// Rotation in tenths of a degree, clockwise on screen
    pub angle: i32,
    /// Scale factor
    pub zoom: Zoom,
    /// Use the bilinear sampler instead of nearest-neighbor
    pub antialias: bool,
}

impl<'a, F: PixelFormat> TransformConfig<'a, F> {
    /// Create a configuration that draws `src` unchanged
    ///
    /// The pivot defaults to the image center.
    pub fn new(src: SourceImage<'a, F>) -> Self {
        Self {
            pivot: Point::new(src.width() / 2, src.height() / 2),
            src,
            angle: 0,
            zoom: Zoom::NONE,
            antialias: false,
        }
    }

    /// Set the rotation angle (tenths of a degree)
    pub fn angle(mut self, angle: i32) -> Self {
        self.angle = angle;
        self
    }

    /// Set the zoom
    pub fn zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the pivot
    pub fn pivot(mut self, x: i32, y: i32) -> Self {
        self.pivot = Point::new(x, y);
        self
    }

    /// Enable or disable anti-aliasing
    pub fn antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }
}

// ============================================================================
// Derived state
// ============================================================================

/// Which inverse mapping the state uses
///
/// Each path works on values of a different magnitude and therefore
/// shifts by a different amount; see [`TransformState::map_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPath {
    /// Zoom is 1.0x: rotate only
    Rotate,
    /// Angle is 0: scale only
    Scale,
    /// Scale, then rotate
    ScaleRotate,
}

/// Precomputed fixed-point form of a [`TransformConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformState {
    pub(crate) pivot: Point,
    pub(crate) pivot_x_256: i32,
    pub(crate) pivot_y_256: i32,
    pub(crate) sin: i32,
    pub(crate) cos: i32,
    pub(crate) zoom_inv: u32,
    pub(crate) path: MapPath,
}

impl TransformState {
    /// Derive the state for a draw call
    pub fn new<F: PixelFormat>(config: &TransformConfig<'_, F>) -> Self {
        Self::from_parts(config.pivot, config.angle, config.zoom)
    }

    /// Derive the state from pivot, angle (tenths of a degree) and zoom
    ///
    /// The stored sine and cosine are those of `-angle`: the state maps
    /// destination pixels back into the source.
    pub fn from_parts(pivot: Point, angle: i32, zoom: Zoom) -> Self {
        let angle_low = angle / 10;
        let angle_high = angle_low + 1;
        let angle_rem = angle - angle_low * 10;

        let s1 = trigo_sin(-angle_low);
        let s2 = trigo_sin(-angle_high);
        let c1 = trigo_sin(-angle_low + 90);
        let c2 = trigo_sin(-angle_high + 90);

        let sin = interpolate_tenths(s1, s2, angle_rem) >> (TRIGO_SHIFT - TRANSFORM_TRIGO_SHIFT);
        let cos = interpolate_tenths(c1, c2, angle_rem) >> (TRIGO_SHIFT - TRANSFORM_TRIGO_SHIFT);

        let path = if zoom.is_identity() {
            MapPath::Rotate
        } else if angle == 0 {
            MapPath::Scale
        } else {
            MapPath::ScaleRotate
        };

        let state = Self {
            pivot,
            // Wraps like map_point's final truncation
            pivot_x_256: pivot.x.wrapping_mul(256),
            pivot_y_256: pivot.y.wrapping_mul(256),
            sin,
            cos,
            zoom_inv: zoom.inverse(),
            path,
        };
        trace!(
            "transform state: angle={} zoom={} sin={} cos={} zoom_inv={} path={:?}",
            angle,
            zoom.get(),
            state.sin,
            state.cos,
            state.zoom_inv,
            state.path
        );
        state
    }

    /// Sine of the inverse rotation at [`TRANSFORM_TRIGO_SHIFT`] bits
    pub fn sin(&self) -> i32 {
        self.sin
    }

    /// Cosine of the inverse rotation at [`TRANSFORM_TRIGO_SHIFT`] bits
    pub fn cos(&self) -> i32 {
        self.cos
    }

    /// Zoom reciprocal at `FRACT_SHIFT + ZOOM_INV_UPSCALE` bits
    pub fn zoom_inv(&self) -> u32 {
        self.zoom_inv
    }

    /// Pivot in source pixels
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Pivot in .8 fixed point
    pub fn pivot_256(&self) -> (i32, i32) {
        (self.pivot_x_256, self.pivot_y_256)
    }

    /// Selected mapping path
    pub fn path(&self) -> MapPath {
        self.path
    }
}
