//! GrayBuffer - flat single-channel pixel buffer
//!
//! Pixels are stored row-major as `i32` intensities. Throughout quadedge
//! the coordinate `x` indexes rows (`0..height`) and `y` indexes columns
//! (`0..width`), so the linear offset of `(x, y)` is `x * width + y`.

use crate::error::{CoreError, CoreResult};

/// Owned row-major intensity buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl GrayBuffer {
    /// Create a zero-filled buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        check_dimensions(width, height)?;
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap existing row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or if `data.len()`
    /// is not `width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<i32>) -> CoreResult<Self> {
        check_dimensions(width, height)?;
        if data.len() != width as usize * height as usize {
            return Err(CoreError::LengthMismatch {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a zero-filled buffer with the same dimensions as `self`.
    pub fn zeroed_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![0; self.data.len()],
        }
    }

    /// Width in pixels (number of columns)
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (number of rows)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the buffer holds no pixels (never for a constructed buffer)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major data
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Mutable raw row-major data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Linear offset of `(x, y)`; no bounds check.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.width as usize + y as usize
    }

    /// Value at row `x`, column `y`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.height || y >= self.width {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set the value at row `x`, column `y`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidParameter`] when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: i32) -> CoreResult<()> {
        if x >= self.height || y >= self.width {
            return Err(CoreError::InvalidParameter(format!(
                "pixel ({}, {}) outside {}x{} buffer",
                x, y, self.width, self.height
            )));
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Check that `other` has the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] otherwise.
    pub fn check_same_size(&self, other: &GrayBuffer) -> CoreResult<()> {
        if self.dimensions() != other.dimensions() {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Number of pixels with a non-zero value
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

fn check_dimensions(width: u32, height: u32) -> CoreResult<()> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimension { width, height });
    }
    Ok(())
}
