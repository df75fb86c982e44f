//! SourceImage - Borrowed view of a decoded pixel buffer
//!
//! The sampler never owns or copies source pixels. A `SourceImage` ties a
//! caller-owned byte slice to a width, height and row stride, validated once
//! at construction so that every pixel inside `[0, width) x [0, height)` can
//! be addressed without further checks.
//!
//! # Pixel layout
//!
//! - `PIXEL_SIZE` bytes per pixel, see [`PixelFormat`]
//! - Rows are `stride` pixels apart; `stride >= width`
//! - The last row only needs `width` pixels of storage

use crate::color::PixelFormat;
use crate::error::{Error, Result};
use std::marker::PhantomData;

/// Read-only view of a source image in pixel format `F`
#[derive(Debug)]
pub struct SourceImage<'a, F: PixelFormat> {
    data: &'a [u8],
    width: i32,
    height: i32,
    stride: i32,
    _format: PhantomData<F>,
}

// Manual impls: deriving would require `F: Clone`.
impl<F: PixelFormat> Clone for SourceImage<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: PixelFormat> Copy for SourceImage<'_, F> {}

impl<'a, F: PixelFormat> SourceImage<'a, F> {
    /// Create a view over `data`
    ///
    /// # Arguments
    ///
    /// * `data` - Pixel bytes, row-major
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `stride` - Distance between rows in pixels
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if `width` or `height` is not positive
    /// - [`Error::InvalidStride`] if `stride < width`
    /// - [`Error::BufferTooSmall`] if `data` cannot hold every row
    pub fn new(data: &'a [u8], width: i32, height: i32, stride: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if stride < width {
            return Err(Error::InvalidStride { stride, width });
        }

        let required = Self::required_len(width, height, stride);
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
            _format: PhantomData,
        })
    }

    /// Create a view of a tightly packed image (`stride == width`)
    pub fn packed(data: &'a [u8], width: i32, height: i32) -> Result<Self> {
        Self::new(data, width, height, width)
    }

    /// Bytes needed to back an image of the given geometry
    pub fn required_len(width: i32, height: i32, stride: i32) -> usize {
        if width <= 0 || height <= 0 {
            return 0;
        }
        ((height as usize - 1) * stride as usize + width as usize) * F::PIXEL_SIZE
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Row stride in pixels
    #[inline]
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Check if a pixel position is inside the image
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Byte offset of pixel `(x, y)`; the position must be inside the image.
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.contains(x, y), "({x}, {y}) outside source");
        (y as usize * self.stride as usize + x as usize) * F::PIXEL_SIZE
    }

    /// Bytes of pixel `(x, y)`; the position must be inside the image.
    #[inline]
    pub fn pixel_unchecked(&self, x: i32, y: i32) -> &'a [u8] {
        let off = self.offset(x, y);
        &self.data[off..off + F::PIXEL_SIZE]
    }

    /// Bytes of pixel `(x, y)`, `None` outside the image
    pub fn pixel(&self, x: i32, y: i32) -> Option<&'a [u8]> {
        self.contains(x, y).then(|| self.pixel_unchecked(x, y))
    }

    /// Color and alpha of pixel `(x, y)`, `None` outside the image
    pub fn get(&self, x: i32, y: i32) -> Option<(F::Color, u8)> {
        self.pixel(x, y)
            .map(|px| (F::read_color(px), F::read_alpha(px)))
    }
}
