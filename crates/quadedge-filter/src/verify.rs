//! Serial / parallel output comparison
//!
//! The serial pass is the reference. Any difference in the parallel output
//! points at a partition bug, so the comparison is exact.

use quadedge_core::GrayBuffer;
use std::fmt;

/// Outcome of comparing two output buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Identical dimensions and contents
    Pass,
    /// Same dimensions, differing contents
    Mismatch {
        /// Number of differing pixels
        count: usize,
        /// Linear offset of the first differing pixel
        first_offset: usize,
    },
    /// Different dimensions
    SizeMismatch {
        /// `(width, height)` of the reference buffer
        expected: (u32, u32),
        /// `(width, height)` of the compared buffer
        actual: (u32, u32),
    },
}

impl Verification {
    /// True if the buffers are identical
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verification::Pass)
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            write!(f, "PASS.")
        } else {
            write!(f, "FAIL!")
        }
    }
}

/// Compare `actual` against the `reference` buffer element by element.
/// Neither buffer is modified.
pub fn verify(reference: &GrayBuffer, actual: &GrayBuffer) -> Verification {
    if reference.dimensions() != actual.dimensions() {
        return Verification::SizeMismatch {
            expected: reference.dimensions(),
            actual: actual.dimensions(),
        };
    }

    let mut diffs = reference
        .data()
        .iter()
        .zip(actual.data())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i);

    match diffs.next() {
        None => Verification::Pass,
        Some(first_offset) => Verification::Mismatch {
            count: 1 + diffs.count(),
            first_offset,
        },
    }
}
