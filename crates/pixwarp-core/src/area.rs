//! Area, Point - Destination rectangles and pixel positions
//!
//! Areas are half-open: `x1..x2` by `y1..y2`. The width of an area is
//! `x2 - x1`, so the right edge `x2` is the first column *not* covered.

use crate::error::{Error, Result};

/// A pixel position in integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangular destination region
///
/// Stored as two corners: the sampler maps the left and right edge of every
/// row independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Area {
    /// Left x coordinate (inclusive)
    pub x1: i32,
    /// Top y coordinate (inclusive)
    pub y1: i32,
    /// Right x coordinate (exclusive)
    pub x2: i32,
    /// Bottom y coordinate (exclusive)
    pub y2: i32,
}

impl Area {
    /// Create a new area from its corners
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertedArea`] if `x2 < x1` or `y2 < y1`.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self> {
        if x2 < x1 || y2 < y1 {
            return Err(Error::InvertedArea { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Number of pixels covered
    #[inline]
    pub fn size(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    /// Check if the area covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Iterate over the rows `y1..y2`
    pub fn rows(&self) -> std::ops::Range<i32> {
        self.y1..self.y2
    }
}
