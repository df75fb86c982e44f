//! pixwarp-transform - Rotated and scaled drawing of images
//!
//! This crate renders a source image rotated about a pivot and zoomed,
//! into caller-owned destination buffers, using only integer arithmetic:
//!
//! - Fixed-point sine/cosine lookup in tenths of a degree ([`trigo`])
//! - Per-draw fixed-point state ([`TransformState`], [`TransformConfig`])
//! - Inverse mapping of destination pixels and linear row stepping
//!   ([`mapper`])
//! - Nearest-neighbor and 3-tap bilinear sampling ([`sampler`])
//! - Whole-area, row-callback and single-row drawing ([`draw`])
//!
//! # Conventions
//!
//! - Angles are in tenths of a degree; positive is clockwise on screen.
//! - Zoom is 8-bit fixed point: 256 is 1.0x, 512 is 2x, 128 is 0.5x.
//! - Areas are half-open: `x1..x2`, `y1..y2`.
//! - Destination pixels that map outside the source get alpha 0.

pub mod draw;
mod error;
pub mod mapper;
pub mod sampler;
pub mod state;
pub mod trigo;

pub use draw::{draw_transformed, draw_transformed_rows, transform_row};
pub use error::{TransformError, TransformResult};
pub use mapper::{ROTATE_SHIFT, RowStepper, SCALE_ROTATE_SHIFT, SCALE_SHIFT};
pub use sampler::{sample_bilinear, sample_nearest};
pub use state::{
    FRACT_SHIFT, MapPath, TRANSFORM_TRIGO_SHIFT, TransformConfig, TransformState,
    ZOOM_INV_UPSCALE, ZOOM_NONE, Zoom,
};
pub use trigo::{TRIGO_SHIFT, TRIGO_SIN_MAX, trigo_cos, trigo_sin};
