//! Convolution kernels
//!
//! Square integer kernels with odd side length. The Prewitt pairs are
//! looked up from the validated filter size; there is no kernel for any
//! other size.
//!
//! Kernel data is row-major: element `(m, n)` is `data[m * size + n]`,
//! where `m` walks the window rows and `n` the window columns.

use crate::{FilterError, FilterResult};

/// Gradient direction of a Prewitt kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrientation {
    /// Responds to intensity changes across columns
    Horizontal,
    /// Responds to intensity changes across rows
    Vertical,
}

#[rustfmt::skip]
const PREWITT_3_HORIZONTAL: [i32; 9] = [
    -1, 0, 1,
    -1, 0, 1,
    -1, 0, 1,
];

#[rustfmt::skip]
const PREWITT_3_VERTICAL: [i32; 9] = [
    -1, -1, -1,
     0,  0,  0,
     1,  1,  1,
];

#[rustfmt::skip]
const PREWITT_5_HORIZONTAL: [i32; 25] = [
     9,  9,  9,  9,  9,
     9,  5,  5,  5,  9,
    -7, -3,  0, -3, -7,
    -7, -3, -3, -3, -7,
    -7, -7, -7, -7, -7,
];

#[rustfmt::skip]
const PREWITT_5_VERTICAL: [i32; 25] = [
    9, 9, -7, -7, -7,
    9, 5, -3, -3, -7,
    9, 5,  0, -3, -7,
    9, 5, -3, -3, -7,
    9, 9, -7, -7, -7,
];

/// A square integer convolution kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    /// Side length (odd)
    size: u32,
    /// Kernel data (row-major order)
    data: Vec<i32>,
}

impl Kernel {
    /// Create a kernel from a slice of values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or zero, or
    /// if `data.len() != size * size`.
    pub fn from_slice(size: u32, data: &[i32]) -> FilterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel size must be odd, got {}",
                size
            )));
        }
        let expected = (size * size) as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {}x{} kernel, got {}",
                expected,
                size,
                size,
                data.len()
            )));
        }
        Ok(Self {
            size,
            data: data.to_vec(),
        })
    }

    /// Prewitt kernel of the given size and orientation.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for sizes other than 3 and 5.
    pub fn prewitt(size: u32, orientation: EdgeOrientation) -> FilterResult<Self> {
        let data: &[i32] = match (size, orientation) {
            (3, EdgeOrientation::Horizontal) => &PREWITT_3_HORIZONTAL,
            (3, EdgeOrientation::Vertical) => &PREWITT_3_VERTICAL,
            (5, EdgeOrientation::Horizontal) => &PREWITT_5_HORIZONTAL,
            (5, EdgeOrientation::Vertical) => &PREWITT_5_VERTICAL,
            _ => {
                return Err(FilterError::InvalidKernel(format!(
                    "no Prewitt kernel of size {}",
                    size
                )));
            }
        };
        Self::from_slice(size, data)
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Offset from the window corner to its center: `(size - 1) / 2`
    #[inline]
    pub fn cut(&self) -> u32 {
        (self.size - 1) / 2
    }

    /// Kernel data
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Value at window row `m`, window column `n`
    #[inline]
    pub fn get(&self, m: u32, n: u32) -> Option<i32> {
        if m >= self.size || n >= self.size {
            return None;
        }
        Some(self.data[(m * self.size + n) as usize])
    }

    /// Sum of all kernel values
    pub fn sum(&self) -> i32 {
        self.data.iter().sum()
    }
}

/// Horizontal and vertical Prewitt kernels of one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrewittKernels {
    /// Kernel producing `Gx`
    pub horizontal: Kernel,
    /// Kernel producing `Gy`
    pub vertical: Kernel,
}

impl PrewittKernels {
    /// Look up the kernel pair for `size`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for sizes other than 3 and 5.
    pub fn for_size(size: u32) -> FilterResult<Self> {
        Ok(Self {
            horizontal: Kernel::prewitt(size, EdgeOrientation::Horizontal)?,
            vertical: Kernel::prewitt(size, EdgeOrientation::Vertical)?,
        })
    }

    /// Side length shared by both kernels
    #[inline]
    pub fn size(&self) -> u32 {
        self.horizontal.size()
    }
}
