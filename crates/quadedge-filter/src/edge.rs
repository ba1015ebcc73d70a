//! Edge detection kernels and passes
//!
//! Two per-pixel detectors, both producing `{0, 255}`:
//!
//! - [`PrewittFilter`]: gradient magnitude `|Gx| + |Gy|` over a 3x3 or 5x5
//!   window, thresholded.
//! - [`NeighborMajority`]: on a binarized image, marks pixels whose
//!   neighborhood contains both foreground and background.
//!
//! [`prewitt_edge`] and [`neighbor_edge`] run either detector over the
//! inset region of a whole image, serially or in parallel.

use crate::binarize::BinaryBuffer;
use crate::kernel::PrewittKernels;
use crate::pass::{PixelKernel, filter_parallel, filter_serial};
use crate::FilterResult;
use quadedge_core::{EdgeParams, GrayBuffer, Region};

/// Output value of an edge pixel
pub const EDGE_VALUE: i32 = 255;

/// Output value of a non-edge pixel
pub const BACKGROUND_VALUE: i32 = 0;

/// How a pass is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded, row-major
    Serial,
    /// Recursive quadrant decomposition on the rayon pool
    Parallel,
}

/// Prewitt gradient-magnitude detector.
#[derive(Debug, Clone)]
pub struct PrewittFilter {
    kernels: PrewittKernels,
    threshold: i32,
}

impl PrewittFilter {
    /// Build the detector for `params.filter_size` and `params.threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`](crate::FilterError::InvalidKernel)
    /// for unsupported sizes.
    pub fn new(params: &EdgeParams) -> FilterResult<Self> {
        Ok(Self {
            kernels: PrewittKernels::for_size(params.filter_size)?,
            threshold: params.threshold,
        })
    }

    /// `(Gx, Gy)` at row `x`, column `y`, accumulated in `i64` so any
    /// `i32` intensity is safe.
    ///
    /// The window must lie inside `input`: `x` and `y` at least `cut`
    /// away from every edge.
    pub fn gradient(&self, input: &GrayBuffer, x: u32, y: u32) -> (i64, i64) {
        let size = self.kernels.size() as usize;
        let cut = self.kernels.horizontal.cut() as usize;
        let width = input.width() as usize;
        let data = input.data();
        let hor = self.kernels.horizontal.data();
        let ver = self.kernels.vertical.data();

        let top = x as usize - cut;
        let left = y as usize - cut;
        let mut gx = 0i64;
        let mut gy = 0i64;
        for m in 0..size {
            let row = &data[(top + m) * width + left..][..size];
            let k = m * size;
            for (n, &v) in row.iter().enumerate() {
                gx += i64::from(v) * i64::from(hor[k + n]);
                gy += i64::from(v) * i64::from(ver[k + n]);
            }
        }
        (gx, gy)
    }
}

impl PixelKernel for PrewittFilter {
    fn apply(&self, input: &GrayBuffer, x: u32, y: u32) -> i32 {
        let (gx, gy) = self.gradient(input, x, y);
        if gx.abs() + gy.abs() > i64::from(self.threshold) {
            EDGE_VALUE
        } else {
            BACKGROUND_VALUE
        }
    }
}

/// Boundary detector on a binarized image.
///
/// Scans every neighbor within Chebyshev distance `point_range`, skipping
/// the center and neighbors outside the image. The pixel is an edge when
/// the neighborhood holds at least one `1` and at least one `0`. Skipped
/// neighbors count as neither. With `point_range == 0` no neighbor is
/// scanned and every pixel is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborMajority {
    point_range: u32,
}

impl NeighborMajority {
    /// Create the detector with the given scan radius
    pub fn new(point_range: u32) -> Self {
        Self { point_range }
    }
}

impl PixelKernel for NeighborMajority {
    fn apply(&self, input: &GrayBuffer, x: u32, y: u32) -> i32 {
        let range = self.point_range as i64;
        let height = input.height() as i64;
        let width = input.width() as i64;
        let data = input.data();

        let mut foreground = false;
        let mut all_foreground = true;
        for dx in -range..=range {
            let nx = x as i64 + dx;
            if nx < 0 || nx >= height {
                continue;
            }
            for dy in -range..=range {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let ny = y as i64 + dy;
                if ny < 0 || ny >= width {
                    continue;
                }
                match data[(nx * width + ny) as usize] {
                    1 => foreground = true,
                    0 => all_foreground = false,
                    _ => {}
                }
            }
        }

        if foreground == all_foreground {
            BACKGROUND_VALUE
        } else {
            EDGE_VALUE
        }
    }
}

fn run_pass<K: PixelKernel>(
    input: &GrayBuffer,
    params: &EdgeParams,
    kernel: &K,
    mode: ExecutionMode,
) -> FilterResult<GrayBuffer> {
    params.validate()?;
    let region = Region::init(input.width(), input.height(), params.filter_size)?;
    let mut output = input.zeroed_like();
    match mode {
        ExecutionMode::Serial => filter_serial(input, &mut output, region, kernel)?,
        ExecutionMode::Parallel => {
            filter_parallel(input, &mut output, region, kernel, params.cutoff)?
        }
    }
    Ok(output)
}

/// Prewitt edge detection over the whole image.
///
/// Pixels within `(filter_size - 1) / 2` of the border stay `0`.
///
/// # Errors
///
/// Returns an error for invalid parameters or an image smaller than one
/// kernel window.
pub fn prewitt_edge(
    input: &GrayBuffer,
    params: &EdgeParams,
    mode: ExecutionMode,
) -> FilterResult<GrayBuffer> {
    let filter = PrewittFilter::new(params)?;
    run_pass(input, params, &filter, mode)
}

/// Neighbor-majority edge detection over the whole binarized image.
///
/// Uses the same inset region as [`prewitt_edge`].
///
/// # Errors
///
/// Returns an error for invalid parameters or an image smaller than one
/// kernel window.
pub fn neighbor_edge(
    input: &BinaryBuffer,
    params: &EdgeParams,
    mode: ExecutionMode,
) -> FilterResult<GrayBuffer> {
    let detector = NeighborMajority::new(params.point_range);
    run_pass(input.as_gray(), params, &detector, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binarize::Binarize;

    fn filled(width: u32, height: u32, value: i32) -> GrayBuffer {
        GrayBuffer::from_vec(width, height, vec![value; (width * height) as usize]).unwrap()
    }

    #[test]
    fn test_uniform_window_has_zero_gradient() {
        let input = filled(6, 6, 100);
        for threshold in [0, 1, 128, 10_000] {
            let filter = PrewittFilter::new(&EdgeParams::new().with_threshold(threshold)).unwrap();
            assert_eq!(filter.gradient(&input, 2, 3), (0, 0));
            assert_eq!(filter.apply(&input, 2, 3), BACKGROUND_VALUE);
        }
    }

    #[test]
    fn test_vertical_step_gradient() {
        // Columns 0..3 are 0, columns 3..6 are 100
        let mut input = filled(6, 5, 0);
        for x in 0..5 {
            for y in 3..6 {
                input.set(x, y, 100).unwrap();
            }
        }
        let filter = PrewittFilter::new(&EdgeParams::new().with_threshold(128)).unwrap();
        // Window at column 2 straddles the step: Gx = 3 * 100
        assert_eq!(filter.gradient(&input, 2, 2), (300, 0));
        assert_eq!(filter.apply(&input, 2, 2), EDGE_VALUE);
        // Window at column 1 sees only zeros
        assert_eq!(filter.apply(&input, 2, 1), BACKGROUND_VALUE);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut input = filled(3, 3, 0);
        for x in 0..3 {
            input.set(x, 2, 10).unwrap();
        }
        // |Gx| + |Gy| = 30
        let at = PrewittFilter::new(&EdgeParams::new().with_threshold(30)).unwrap();
        let below = PrewittFilter::new(&EdgeParams::new().with_threshold(29)).unwrap();
        assert_eq!(at.apply(&input, 1, 1), BACKGROUND_VALUE);
        assert_eq!(below.apply(&input, 1, 1), EDGE_VALUE);
    }

    #[test]
    fn test_isolated_foreground_pixel() {
        let mut input = filled(5, 5, 0);
        input.set(2, 2, 1).unwrap();
        let detector = NeighborMajority::new(1);
        // The center itself is excluded, so it sees only zeros
        assert_eq!(detector.apply(&input, 2, 2), BACKGROUND_VALUE);
        // Its neighbors see both the 1 and surrounding 0s
        assert_eq!(detector.apply(&input, 1, 1), EDGE_VALUE);
        assert_eq!(detector.apply(&input, 3, 2), EDGE_VALUE);
    }

    #[test]
    fn test_isolated_background_pixel() {
        let mut input = filled(5, 5, 1);
        input.set(2, 2, 0).unwrap();
        let detector = NeighborMajority::new(1);
        assert_eq!(detector.apply(&input, 2, 2), BACKGROUND_VALUE);
        assert_eq!(detector.apply(&input, 2, 1), EDGE_VALUE);
    }

    #[test]
    fn test_uniform_regions_are_not_edges() {
        let detector = NeighborMajority::new(2);
        assert_eq!(detector.apply(&filled(9, 9, 0), 4, 4), BACKGROUND_VALUE);
        assert_eq!(detector.apply(&filled(9, 9, 1), 4, 4), BACKGROUND_VALUE);
    }

    #[test]
    fn test_out_of_bounds_neighbors_skipped() {
        // Corner pixel: only 3 in-bounds neighbors with range 1
        let mut input = filled(4, 4, 1);
        input.set(1, 1, 0).unwrap();
        let detector = NeighborMajority::new(1);
        assert_eq!(detector.apply(&input, 0, 0), EDGE_VALUE);
        input.set(1, 1, 1).unwrap();
        assert_eq!(detector.apply(&input, 0, 0), BACKGROUND_VALUE);
    }

    #[test]
    fn test_prewitt_edge_border_exclusion() {
        // Strong checkerboard: every interior window responds
        let mut input = filled(12, 10, 0);
        for x in 0..10 {
            for y in 0..12 {
                if (x + y) % 2 == 0 {
                    input.set(x, y, 255).unwrap();
                }
            }
        }
        for (size, margin) in [(3u32, 1u32), (5, 2)] {
            let params = EdgeParams::new().with_filter_size(size).with_threshold(0);
            let out = prewitt_edge(&input, &params, ExecutionMode::Serial).unwrap();
            for x in 0..10 {
                for y in 0..12 {
                    let border = x < margin || y < margin || x >= 10 - margin || y >= 12 - margin;
                    if border {
                        assert_eq!(out.get(x, y), Some(0), "size {} ({}, {})", size, x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_prewitt_edge_rejects_bad_size() {
        let input = filled(8, 8, 0);
        let params = EdgeParams::new().with_filter_size(4);
        assert!(prewitt_edge(&input, &params, ExecutionMode::Serial).is_err());
    }

    #[test]
    fn test_neighbor_edge_serial_parallel_agree() {
        let mut input = filled(40, 36, 0);
        for x in 8..30 {
            for y in 5..25 {
                input.set(x, y, 200).unwrap();
            }
        }
        let params = EdgeParams::new().with_cutoff(4);
        let binary = input.binarize(params.threshold);
        let serial = neighbor_edge(&binary, &params, ExecutionMode::Serial).unwrap();
        let parallel = neighbor_edge(&binary, &params, ExecutionMode::Parallel).unwrap();
        assert_eq!(serial, parallel);
        assert!(serial.count_nonzero() > 0);
    }

    #[test]
    fn test_neighbor_edge_zero_range_marks_region() {
        let binary = filled(8, 8, 0).binarize(0);
        let params = EdgeParams::new().with_point_range(0).with_cutoff(2);
        for mode in [ExecutionMode::Serial, ExecutionMode::Parallel] {
            let out = neighbor_edge(&binary, &params, mode).unwrap();
            // Inset region of an 8x8 image with a 3x3 window is 6x6
            assert_eq!(out.count_nonzero(), 36);
            assert_eq!(out.get(0, 0), Some(BACKGROUND_VALUE));
            assert_eq!(out.get(1, 1), Some(EDGE_VALUE));
        }
    }

    #[test]
    fn test_prewitt_extreme_intensities() {
        // Columns 3..5 of a 5x5 image at i32::MAX / 2
        let big = i32::MAX / 2;
        let mut input = filled(5, 5, 0);
        for x in 0..5 {
            for y in 3..5 {
                input.set(x, y, big).unwrap();
            }
        }
        let params = EdgeParams::new().with_filter_size(5);
        let filter = PrewittFilter::new(&params).unwrap();
        let (gx, gy) = filter.gradient(&input, 2, 2);
        assert_eq!(gx, -2 * i64::from(big));
        assert_eq!(gy, -58 * i64::from(big));

        let out = prewitt_edge(&input, &params, ExecutionMode::Serial).unwrap();
        assert_eq!(out.get(2, 2), Some(EDGE_VALUE));
        assert_eq!(out.count_nonzero(), 1);

        let negative = filled(3, 3, i32::MIN);
        let out = prewitt_edge(&negative, &EdgeParams::new(), ExecutionMode::Parallel).unwrap();
        assert_eq!(out.get(1, 1), Some(BACKGROUND_VALUE));
    }
}
