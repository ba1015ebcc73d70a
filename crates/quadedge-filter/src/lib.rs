//! quadedge-filter - Edge detection filters and passes
//!
//! This crate provides:
//!
//! - Prewitt kernel pairs for 3x3 and 5x5 windows
//! - Prewitt gradient-magnitude and neighbor-majority edge detectors
//! - Serial and recursively parallel filter passes over a region
//! - The binarization pre-pass
//! - Exact serial / parallel output verification

pub mod binarize;
pub mod edge;
mod error;
pub mod kernel;
pub mod pass;
pub mod verify;

pub use error::{FilterError, FilterResult};
pub use kernel::{EdgeOrientation, Kernel, PrewittKernels};

// Re-export commonly used functions
pub use binarize::{Binarize, BinaryBuffer, binarize_in_place};
pub use edge::{
    BACKGROUND_VALUE, EDGE_VALUE, ExecutionMode, NeighborMajority, PrewittFilter, neighbor_edge,
    prewitt_edge,
};
pub use pass::{PixelKernel, filter_parallel, filter_serial, leaf_regions};
pub use verify::{Verification, verify};
