//! quadedge-test - Regression test framework for quadedge
//!
//! Supports three modes, selected by the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: write golden files
//! - **Compare**: compare with golden files when present (default)
//! - **Display**: run and write outputs without comparison
//!
//! # Usage
//!
//! ```ignore
//! use quadedge_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("prewitt");
//! rp.compare_buffers(&serial, &parallel);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // quadedge-test is at crates/quadedge-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
