//! pixwarp - Rotate and zoom pixel images with integer arithmetic
//!
//! Renders a source image rotated about a pivot and scaled, into
//! caller-owned color and alpha buffers, one destination row at a time.
//!
//! # Overview
//!
//! - Pixel formats: RGB565 with a separate alpha byte, ARGB8888
//! - Rotation in tenths of a degree through a fixed-point sine table
//! - Zoom in 1/256 steps
//! - Nearest-neighbor or anti-aliased (3-tap bilinear) sampling
//!
//! # Example
//!
//! ```
//! use pixwarp::transform::{TransformConfig, draw_transformed};
//! use pixwarp::{Area, Color32, Argb8888, SourceImage};
//!
//! // 4x4 opaque white source
//! let pixels = vec![0xFFu8; 4 * 4 * 4];
//! let src = SourceImage::<Argb8888>::packed(&pixels, 4, 4).unwrap();
//!
//! // Quarter turn clockwise about the center
//! let config = TransformConfig::new(src).angle(900);
//! let dest = Area::new(0, 0, 4, 4).unwrap();
//! let mut colors = vec![Color32::default(); dest.size()];
//! let mut alphas = vec![0u8; dest.size()];
//! draw_transformed(&dest, &config, &mut colors, &mut alphas).unwrap();
//! assert!(alphas.iter().all(|&a| a == 255));
//! ```

// Re-export core types (used by every transform call)
pub use pixwarp_core::*;

// Re-export the transform crate as a module
pub use pixwarp_transform as transform;
