//! quadedge - Quadrant-parallel edge detection
//!
//! Prewitt and neighbor-majority edge detection, each in a serial form and
//! a recursively parallel form whose output is verified to be identical.
//!
//! # Example
//!
//! ```
//! use quadedge::filter::{ExecutionMode, prewitt_edge, verify};
//! use quadedge::{EdgeParams, GrayBuffer};
//!
//! let input = GrayBuffer::new(64, 48).unwrap();
//! let params = EdgeParams::default();
//! let serial = prewitt_edge(&input, &params, ExecutionMode::Serial).unwrap();
//! let parallel = prewitt_edge(&input, &params, ExecutionMode::Parallel).unwrap();
//! assert!(verify(&serial, &parallel).is_pass());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadedge_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use quadedge_filter as filter;
pub use quadedge_io as io;

pub mod harness;

pub use harness::{Family, RunReport, Variant, run_all, run_variant, verify_family};
