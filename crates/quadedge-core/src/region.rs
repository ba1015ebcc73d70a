//! Region - rectangular sub-range of a buffer
//!
//! A region is a half-open range of rows `[x_start, x_end)` and columns
//! `[y_start, y_end)` together with the dimensions of the full buffer it
//! belongs to. It is a small `Copy` value: the quadrant splits derive new
//! regions and never touch the parent.
//!
//! All four quadrants of a region are cut at the same row midpoint
//! `x_start + rows / 2` and column midpoint `y_start + cols / 2`, so they
//! tile the parent exactly for odd and even extents alike.

use crate::error::{CoreError, CoreResult};

/// Rectangular range of rows and columns inside a `picture_width` x
/// `picture_height` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// First row (inclusive)
    pub x_start: u32,
    /// Last row (exclusive)
    pub x_end: u32,
    /// First column (inclusive)
    pub y_start: u32,
    /// Last column (exclusive)
    pub y_end: u32,
    /// Width of the full buffer
    pub picture_width: u32,
    /// Height of the full buffer
    pub picture_height: u32,
}

impl Region {
    /// Create a region, checking that it is non-empty and lies inside the
    /// picture.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidParameter`] if a range is empty or
    /// reaches past the picture.
    pub fn new(
        x_start: u32,
        x_end: u32,
        y_start: u32,
        y_end: u32,
        picture_width: u32,
        picture_height: u32,
    ) -> CoreResult<Self> {
        let region = Self {
            x_start,
            x_end,
            y_start,
            y_end,
            picture_width,
            picture_height,
        };
        if !region.is_valid() {
            return Err(CoreError::InvalidParameter(format!(
                "invalid region rows {}..{} cols {}..{} in {}x{} picture",
                x_start, x_end, y_start, y_end, picture_width, picture_height
            )));
        }
        Ok(region)
    }

    /// Region covering the whole `width` x `height` buffer, inset by
    /// `(filter_size - 1) / 2` on every side so that a centered
    /// `filter_size` window never leaves the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ImageTooSmall`] when no pixel has a full
    /// window, and [`CoreError::InvalidDimension`] for a zero dimension.
    pub fn init(width: u32, height: u32, filter_size: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimension { width, height });
        }
        let cut = filter_size.saturating_sub(1) / 2;
        if width <= 2 * cut || height <= 2 * cut {
            return Err(CoreError::ImageTooSmall {
                width,
                height,
                filter_size,
            });
        }
        Ok(Self {
            x_start: cut,
            x_end: height - cut,
            y_start: cut,
            y_end: width - cut,
            picture_width: width,
            picture_height: height,
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> u32 {
        self.x_end - self.x_start
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> u32 {
        self.y_end - self.y_start
    }

    /// Number of pixels
    #[inline]
    pub fn area(&self) -> u64 {
        self.rows() as u64 * self.cols() as u64
    }

    /// Check the region invariants: non-empty and inside the picture.
    pub fn is_valid(&self) -> bool {
        self.x_start < self.x_end
            && self.y_start < self.y_end
            && self.x_end <= self.picture_height
            && self.y_end <= self.picture_width
    }

    /// Check if row `x`, column `y` lies inside the region
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x_start && x < self.x_end && y >= self.y_start && y < self.y_end
    }

    /// True when both extents reach `cutoff`, i.e. the parallel pass
    /// splits this region instead of filtering it serially.
    #[inline]
    pub fn should_split(&self, cutoff: u32) -> bool {
        self.rows() >= cutoff && self.cols() >= cutoff
    }

    #[inline]
    fn x_mid(&self) -> u32 {
        self.x_start + self.rows() / 2
    }

    #[inline]
    fn y_mid(&self) -> u32 {
        self.y_start + self.cols() / 2
    }

    fn with_ranges(&self, x_start: u32, x_end: u32, y_start: u32, y_end: u32) -> Self {
        Self {
            x_start,
            x_end,
            y_start,
            y_end,
            picture_width: self.picture_width,
            picture_height: self.picture_height,
        }
    }

    /// Rows `[x_start, x_mid)`, columns `[y_start, y_mid)`
    pub fn upper_left(&self) -> Self {
        self.with_ranges(self.x_start, self.x_mid(), self.y_start, self.y_mid())
    }

    /// Rows `[x_start, x_mid)`, columns `[y_mid, y_end)`
    pub fn upper_right(&self) -> Self {
        self.with_ranges(self.x_start, self.x_mid(), self.y_mid(), self.y_end)
    }

    /// Rows `[x_mid, x_end)`, columns `[y_start, y_mid)`
    pub fn bottom_left(&self) -> Self {
        self.with_ranges(self.x_mid(), self.x_end, self.y_start, self.y_mid())
    }

    /// Rows `[x_mid, x_end)`, columns `[y_mid, y_end)`
    pub fn bottom_right(&self) -> Self {
        self.with_ranges(self.x_mid(), self.x_end, self.y_mid(), self.y_end)
    }

    /// The four quadrants in the order upper-left, upper-right,
    /// bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Self; 4] {
        [
            self.upper_left(),
            self.upper_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }
}
