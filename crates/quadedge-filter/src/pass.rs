//! Serial and parallel filter passes
//!
//! Both passes apply a [`PixelKernel`] to every pixel of a [`Region`] and
//! write the result at the same offset of a separate output buffer.
//!
//! The parallel pass splits the region into quadrants until an extent
//! drops below the cutoff and filters each leaf serially. Every task owns
//! a [`TileMut`]: mutable slices covering exactly its region's output
//! cells, carved out of the parent's slices at the same midpoints the
//! region split uses. The output is never shared, so no locking is
//! needed and the result is identical to the serial pass.

use crate::{FilterError, FilterResult};
use log::{debug, trace};
use quadedge_core::{CoreError, GrayBuffer, Region};

/// Per-pixel edge response.
///
/// Implementations must be pure functions of the input window: the
/// parallel pass calls them from many threads at once.
pub trait PixelKernel: Sync {
    /// Output value for row `x`, column `y` of `input`.
    fn apply(&self, input: &GrayBuffer, x: u32, y: u32) -> i32;
}

/// Exclusive view of the output cells of one region: one slice per row,
/// each covering columns `y_start..y_end`.
struct TileMut<'a> {
    region: Region,
    rows: Vec<&'a mut [i32]>,
}

impl<'a> TileMut<'a> {
    fn new(output: &'a mut [i32], region: Region) -> Self {
        let width = region.picture_width as usize;
        let (y_start, y_end) = (region.y_start as usize, region.y_end as usize);
        let rows = output
            .chunks_exact_mut(width)
            .skip(region.x_start as usize)
            .take(region.rows() as usize)
            .map(|row| &mut row[y_start..y_end])
            .collect();
        Self { region, rows }
    }

    /// Split into upper-left, upper-right, bottom-left and bottom-right
    /// tiles matching [`Region::quadrants`].
    fn split(self) -> [TileMut<'a>; 4] {
        let [ul, ur, bl, br] = self.region.quadrants();
        let row_split = ul.rows() as usize;
        let col_split = ul.cols() as usize;

        let mut upper = self.rows;
        let lower = upper.split_off(row_split);
        let (ul_rows, ur_rows) = split_columns(upper, col_split);
        let (bl_rows, br_rows) = split_columns(lower, col_split);

        [
            TileMut::from_parts(ul, ul_rows),
            TileMut::from_parts(ur, ur_rows),
            TileMut::from_parts(bl, bl_rows),
            TileMut::from_parts(br, br_rows),
        ]
    }

    fn from_parts(region: Region, rows: Vec<&'a mut [i32]>) -> Self {
        debug_assert_eq!(rows.len(), region.rows() as usize);
        debug_assert!(rows.iter().all(|r| r.len() == region.cols() as usize));
        Self { region, rows }
    }
}

fn split_columns<'a>(
    rows: Vec<&'a mut [i32]>,
    at: usize,
) -> (Vec<&'a mut [i32]>, Vec<&'a mut [i32]>) {
    rows.into_iter().map(|row| row.split_at_mut(at)).unzip()
}

/// Filter every cell of `tile` in row-major order.
fn filter_tile<K: PixelKernel + ?Sized>(input: &GrayBuffer, tile: TileMut<'_>, kernel: &K) {
    let region = tile.region;
    for (row, x) in tile.rows.into_iter().zip(region.x_start..region.x_end) {
        for (cell, y) in row.iter_mut().zip(region.y_start..region.y_end) {
            *cell = kernel.apply(input, x, y);
        }
    }
}

fn filter_tile_parallel<K: PixelKernel + ?Sized>(
    input: &GrayBuffer,
    tile: TileMut<'_>,
    kernel: &K,
    cutoff: u32,
) {
    if !tile.region.should_split(cutoff) {
        trace!(
            "leaf rows {}..{} cols {}..{}",
            tile.region.x_start, tile.region.x_end, tile.region.y_start, tile.region.y_end
        );
        filter_tile(input, tile, kernel);
        return;
    }

    rayon::scope(|s| {
        for quadrant in tile.split() {
            s.spawn(move |_| filter_tile_parallel(input, quadrant, kernel, cutoff));
        }
    });
}

/// Leaf regions the parallel pass filters serially for `region` and
/// `cutoff`, depth first in quadrant order.
pub fn leaf_regions(region: Region, cutoff: u32) -> Vec<Region> {
    let mut leaves = Vec::new();
    let mut stack = vec![region];
    while let Some(r) = stack.pop() {
        if r.should_split(cutoff.max(2)) {
            stack.extend(r.quadrants().into_iter().rev());
        } else {
            leaves.push(r);
        }
    }
    leaves
}

fn check_pass_args(input: &GrayBuffer, output: &GrayBuffer, region: &Region) -> FilterResult<()> {
    input.check_same_size(output)?;
    let picture = (region.picture_width, region.picture_height);
    if picture != input.dimensions() {
        return Err(CoreError::DimensionMismatch {
            expected: input.dimensions(),
            actual: picture,
        }
        .into());
    }
    if !region.is_valid() {
        return Err(FilterError::InvalidParameters(format!(
            "region rows {}..{} cols {}..{} outside {}x{} picture",
            region.x_start,
            region.x_end,
            region.y_start,
            region.y_end,
            region.picture_width,
            region.picture_height
        )));
    }
    Ok(())
}

/// Apply `kernel` to every pixel of `region`, one pixel at a time.
///
/// Pixels of `output` outside `region` are left untouched.
///
/// # Errors
///
/// Returns an error if `input` and `output` differ in size, if the
/// region's picture dimensions differ from the buffers, or if the region is
/// empty or reaches past the picture.
pub fn filter_serial<K: PixelKernel + ?Sized>(
    input: &GrayBuffer,
    output: &mut GrayBuffer,
    region: Region,
    kernel: &K,
) -> FilterResult<()> {
    check_pass_args(input, output, &region)?;
    let tile = TileMut::new(output.data_mut(), region);
    filter_tile(input, tile, kernel);
    Ok(())
}

/// Apply `kernel` to every pixel of `region` using recursive quadrant
/// decomposition on the rayon thread pool.
///
/// A region with `rows < cutoff` or `cols < cutoff` is filtered serially;
/// otherwise its four quadrants are processed as concurrent tasks and this
/// call returns once all of them have finished. The output is identical to
/// [`filter_serial`] for every valid cutoff.
///
/// # Errors
///
/// Same as [`filter_serial`], plus [`FilterError::InvalidParameters`] if
/// `cutoff < 2`.
pub fn filter_parallel<K: PixelKernel + ?Sized>(
    input: &GrayBuffer,
    output: &mut GrayBuffer,
    region: Region,
    kernel: &K,
    cutoff: u32,
) -> FilterResult<()> {
    check_pass_args(input, output, &region)?;
    if cutoff < 2 {
        return Err(FilterError::InvalidParameters(format!(
            "cutoff must be >= 2, got {}",
            cutoff
        )));
    }
    debug!(
        "parallel pass over rows {}..{} cols {}..{} (cutoff {}, {} threads)",
        region.x_start,
        region.x_end,
        region.y_start,
        region.y_end,
        cutoff,
        rayon::current_num_threads()
    );
    let tile = TileMut::new(output.data_mut(), region);
    filter_tile_parallel(input, tile, kernel, cutoff);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Writes the linear offset + 1 so every written cell is identifiable.
    struct OffsetKernel;

    impl PixelKernel for OffsetKernel {
        fn apply(&self, input: &GrayBuffer, x: u32, y: u32) -> i32 {
            input.index(x, y) as i32 + 1
        }
    }

    /// Records the order in which pixels are visited.
    struct RecordingKernel {
        visited: Mutex<Vec<(u32, u32)>>,
    }

    impl PixelKernel for RecordingKernel {
        fn apply(&self, _input: &GrayBuffer, x: u32, y: u32) -> i32 {
            self.visited.lock().unwrap().push((x, y));
            1
        }
    }

    #[test]
    fn test_serial_covers_region_only() {
        let input = GrayBuffer::new(7, 5).unwrap();
        let mut output = input.zeroed_like();
        let region = Region::init(7, 5, 3).unwrap();
        filter_serial(&input, &mut output, region, &OffsetKernel).unwrap();

        for x in 0..5 {
            for y in 0..7 {
                let v = output.get(x, y).unwrap();
                if region.contains(x, y) {
                    assert_eq!(v, input.index(x, y) as i32 + 1);
                } else {
                    assert_eq!(v, 0, "border pixel ({}, {}) written", x, y);
                }
            }
        }
    }

    #[test]
    fn test_serial_row_major_order() {
        let input = GrayBuffer::new(4, 4).unwrap();
        let mut output = input.zeroed_like();
        let region = Region::new(1, 3, 0, 3, 4, 4).unwrap();
        let kernel = RecordingKernel {
            visited: Mutex::new(Vec::new()),
        };
        filter_serial(&input, &mut output, region, &kernel).unwrap();
        let visited = kernel.visited.into_inner().unwrap();
        assert_eq!(
            visited,
            vec![(1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_parallel_matches_serial_for_all_cutoffs() {
        let input = GrayBuffer::new(23, 17).unwrap();
        let region = Region::init(23, 17, 5).unwrap();

        let mut serial = input.zeroed_like();
        filter_serial(&input, &mut serial, region, &OffsetKernel).unwrap();

        for cutoff in 2..20 {
            let mut parallel = input.zeroed_like();
            filter_parallel(&input, &mut parallel, region, &OffsetKernel, cutoff).unwrap();
            assert_eq!(serial, parallel, "cutoff {}", cutoff);
        }
    }

    #[test]
    fn test_parallel_visits_each_pixel_once() {
        let input = GrayBuffer::new(31, 29).unwrap();
        let mut output = input.zeroed_like();
        let region = Region::init(31, 29, 3).unwrap();
        let kernel = RecordingKernel {
            visited: Mutex::new(Vec::new()),
        };
        filter_parallel(&input, &mut output, region, &kernel, 2).unwrap();

        let mut visited = kernel.visited.into_inner().unwrap();
        visited.sort_unstable();
        let before = visited.len();
        visited.dedup();
        assert_eq!(before, visited.len());
        assert_eq!(visited.len() as u64, region.area());
    }

    #[test]
    fn test_tile_split_matches_quadrants() {
        let mut data = vec![0; 9 * 7];
        let region = Region::new(1, 6, 2, 9, 9, 7).unwrap();
        let tile = TileMut::new(&mut data, region);
        let quadrants = region.quadrants();
        for (tile, expected) in tile.split().into_iter().zip(quadrants) {
            assert_eq!(tile.region, expected);
            assert_eq!(tile.rows.len(), expected.rows() as usize);
            assert!(tile.rows.iter().all(|r| r.len() == expected.cols() as usize));
        }
    }

    #[test]
    fn test_cutoff_boundary() {
        let region = Region::new(0, 8, 0, 8, 8, 8).unwrap();
        // Extent equal to the cutoff still splits
        assert_eq!(leaf_regions(region, 8), region.quadrants().to_vec());
        // Extent below the cutoff is a single serial leaf
        assert_eq!(leaf_regions(region, 9), vec![region]);
        // Both extents must reach the cutoff
        let thin = Region::new(0, 8, 0, 7, 7, 8).unwrap();
        assert_eq!(leaf_regions(thin, 8), vec![thin]);
    }

    #[test]
    fn test_leaf_regions_tile_region() {
        let region = Region::init(100, 77, 3).unwrap();
        for cutoff in [2, 3, 10, 33, 80] {
            let leaves = leaf_regions(region, cutoff);
            let area: u64 = leaves.iter().map(|l| l.area()).sum();
            assert_eq!(area, region.area());
            for leaf in &leaves {
                assert!(leaf.is_valid());
                assert!(!leaf.should_split(cutoff));
            }
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let input = GrayBuffer::new(8, 8).unwrap();
        let mut output = GrayBuffer::new(8, 9).unwrap();
        let region = Region::init(8, 8, 3).unwrap();
        assert!(matches!(
            filter_serial(&input, &mut output, region, &OffsetKernel),
            Err(FilterError::Core(CoreError::DimensionMismatch { .. }))
        ));

        let mut output = input.zeroed_like();
        let foreign = Region::init(10, 10, 3).unwrap();
        assert!(filter_parallel(&input, &mut output, foreign, &OffsetKernel, 4).is_err());
    }

    #[test]
    fn test_parallel_rejects_small_cutoff() {
        let input = GrayBuffer::new(8, 8).unwrap();
        let mut output = input.zeroed_like();
        let region = Region::init(8, 8, 3).unwrap();
        assert!(matches!(
            filter_parallel(&input, &mut output, region, &OffsetKernel, 1),
            Err(FilterError::InvalidParameters(_))
        ));
    }
}
