//! quadedge-core - Basic data structures for quadedge
//!
//! - [`GrayBuffer`] - flat row-major intensity buffer
//! - [`Region`] - rectangular sub-range with quadrant splitting
//! - [`EdgeParams`] - run-wide filter size, threshold, scan radius and cutoff
//!
//! Coordinates follow one convention everywhere: `x` is the row,
//! `y` is the column.

pub mod buffer;
pub mod error;
pub mod params;
pub mod region;

pub use buffer::GrayBuffer;
pub use error::{CoreError, CoreResult};
pub use params::{CUTOFF, EdgeParams, FILTER_SIZE, POINT_RANGE, SUPPORTED_FILTER_SIZES, THRESHOLD};
pub use region::Region;
