//! pixwarp-core - Basic data structures for the pixwarp sampler
//!
//! This crate provides the types shared by every stage of the pipeline:
//!
//! - [`Area`] / [`Point`] - Destination rectangles and pixel positions
//! - [`SourceImage`] - Borrowed, validated view of a decoded pixel buffer
//! - [`PixelFormat`] - Fixed per-pixel layout (color bytes + alpha byte)
//!   with the [`Rgb565A8`] and [`Argb8888`] implementations
//!
//! Nothing in this crate allocates or uses floating point.

pub mod area;
pub mod color;
pub mod error;
pub mod image;

pub use area::{Area, Point};
pub use color::{
    Argb8888, Color16, Color32, OPA_50, OPA_COVER, OPA_TRANSP, PixelFormat, Rgb565A8, udiv255,
};
pub use error::{Error, Result};
pub use image::SourceImage;
