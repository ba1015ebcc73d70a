//! Run-wide edge detection parameters
//!
//! The constants below are the values the `quadedge` binary runs with.
//! [`EdgeParams`] bundles them so library callers and tests can pick
//! other values; [`EdgeParams::validate`] must pass before any filtering.

use crate::error::{CoreError, CoreResult};

/// Side length of the Prewitt kernel window
pub const FILTER_SIZE: u32 = 3;

/// Edge strength cutoff (Prewitt) and binarization threshold (neighbor scan)
pub const THRESHOLD: i32 = 128;

/// Chebyshev radius of the neighbor scan
pub const POINT_RANGE: u32 = 1;

/// Regions with an extent below this are filtered serially
pub const CUTOFF: u32 = 64;

/// Kernel sizes with a defined Prewitt matrix pair
pub const SUPPORTED_FILTER_SIZES: [u32; 2] = [3, 5];

/// Parameters shared by every filter pass of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeParams {
    /// Prewitt window side length (3 or 5)
    pub filter_size: u32,
    /// Gradient magnitude / binarization threshold
    pub threshold: i32,
    /// Neighbor scan radius
    pub point_range: u32,
    /// Minimum region extent that is still split into quadrants
    pub cutoff: u32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            filter_size: FILTER_SIZE,
            threshold: THRESHOLD,
            point_range: POINT_RANGE,
            cutoff: CUTOFF,
        }
    }
}

impl EdgeParams {
    /// Create parameters with the default constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Prewitt window size
    pub fn with_filter_size(mut self, filter_size: u32) -> Self {
        self.filter_size = filter_size;
        self
    }

    /// Set the threshold
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the neighbor scan radius
    pub fn with_point_range(mut self, point_range: u32) -> Self {
        self.point_range = point_range;
        self
    }

    /// Set the recursion cutoff
    pub fn with_cutoff(mut self, cutoff: u32) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Border inset needed for a full kernel window: `(filter_size - 1) / 2`
    #[inline]
    pub fn cut(&self) -> u32 {
        self.filter_size.saturating_sub(1) / 2
    }

    /// Reject unsupported configurations before any processing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidParameter`] if `filter_size` is not 3 or
    /// 5, or if `cutoff < 2`. A cutoff of 1 would let a 1x1 region split
    /// into a copy of itself.
    pub fn validate(&self) -> CoreResult<()> {
        if !SUPPORTED_FILTER_SIZES.contains(&self.filter_size) {
            return Err(CoreError::InvalidParameter(format!(
                "unsupported filter size {} (expected one of {:?})",
                self.filter_size, SUPPORTED_FILTER_SIZES
            )));
        }
        if self.cutoff < 2 {
            return Err(CoreError::InvalidParameter(format!(
                "cutoff must be >= 2, got {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = EdgeParams::default();
        assert_eq!(params.filter_size, FILTER_SIZE);
        assert_eq!(params.cutoff, CUTOFF);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_cut() {
        assert_eq!(EdgeParams::new().with_filter_size(3).cut(), 1);
        assert_eq!(EdgeParams::new().with_filter_size(5).cut(), 2);
    }

    #[test]
    fn test_unsupported_filter_size() {
        for size in [0, 1, 2, 4, 7] {
            let params = EdgeParams::new().with_filter_size(size);
            assert!(
                matches!(params.validate(), Err(CoreError::InvalidParameter(_))),
                "size {} should be rejected",
                size
            );
        }
        assert!(EdgeParams::new().with_filter_size(5).validate().is_ok());
    }

    #[test]
    fn test_cutoff_lower_bound() {
        assert!(EdgeParams::new().with_cutoff(1).validate().is_err());
        assert!(EdgeParams::new().with_cutoff(0).validate().is_err());
        assert!(EdgeParams::new().with_cutoff(2).validate().is_ok());
    }
}
