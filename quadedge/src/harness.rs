//! Timed runs of the four algorithm variants
//!
//! The edge variants binarize a copy of the input, so the Prewitt variants
//! always see the original intensities. The copy is made before the clock
//! starts; binarization is part of the timed section.

use log::info;
use quadedge_core::{EdgeParams, GrayBuffer};
use quadedge_filter::{
    Binarize, ExecutionMode, FilterResult, Verification, neighbor_edge, prewitt_edge, verify,
};
use std::time::{Duration, Instant};

/// Algorithm family; serial and parallel runs of one family are verified
/// against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Prewitt gradient magnitude
    Prewitt,
    /// Neighbor-majority scan on the binarized image
    Edge,
}

impl Family {
    /// Label used in the verification report
    pub fn label(&self) -> &'static str {
        match self {
            Family::Prewitt => "Prewitt",
            Family::Edge => "Edge detection",
        }
    }
}

/// One algorithm in one execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    SerialPrewitt,
    ParallelPrewitt,
    SerialEdge,
    ParallelEdge,
}

impl Variant {
    /// All variants in run order
    pub const ALL: [Variant; 4] = [
        Variant::SerialPrewitt,
        Variant::ParallelPrewitt,
        Variant::SerialEdge,
        Variant::ParallelEdge,
    ];

    /// Human readable description printed before the run
    pub fn description(&self) -> &'static str {
        match self {
            Variant::SerialPrewitt => "serial version of edge detection using Prewitt operator",
            Variant::ParallelPrewitt => {
                "parallel version of edge detection using Prewitt operator"
            }
            Variant::SerialEdge => "serial version of edge detection",
            Variant::ParallelEdge => "parallel version of edge detection",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Variant::SerialPrewitt | Variant::ParallelPrewitt => Family::Prewitt,
            Variant::SerialEdge | Variant::ParallelEdge => Family::Edge,
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        match self {
            Variant::SerialPrewitt | Variant::SerialEdge => ExecutionMode::Serial,
            Variant::ParallelPrewitt | Variant::ParallelEdge => ExecutionMode::Parallel,
        }
    }
}

/// Output and wall time of one variant.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub variant: Variant,
    pub output: GrayBuffer,
    pub elapsed: Duration,
}

/// Run `f`, returning its output with the wall time it took.
fn timed<T>(f: impl FnOnce() -> FilterResult<T>) -> FilterResult<(T, Duration)> {
    let start = Instant::now();
    let output = f()?;
    Ok((output, start.elapsed()))
}

/// Run one variant on `input`.
///
/// # Errors
///
/// Returns an error for invalid parameters or an image smaller than one
/// kernel window.
pub fn run_variant(
    variant: Variant,
    input: &GrayBuffer,
    params: &EdgeParams,
) -> FilterResult<RunReport> {
    let (output, elapsed) = match variant.family() {
        Family::Prewitt => timed(|| prewitt_edge(input, params, variant.mode()))?,
        Family::Edge => {
            let copy = input.clone();
            timed(move || {
                let binary = copy.binarize(params.threshold);
                neighbor_edge(&binary, params, variant.mode())
            })?
        }
    };
    info!("{:?} finished in {:?}", variant, elapsed);
    Ok(RunReport {
        variant,
        output,
        elapsed,
    })
}

/// Run all four variants in [`Variant::ALL`] order.
///
/// # Errors
///
/// Stops at the first failing variant.
pub fn run_all(input: &GrayBuffer, params: &EdgeParams) -> FilterResult<Vec<RunReport>> {
    Variant::ALL
        .iter()
        .map(|&variant| run_variant(variant, input, params))
        .collect()
}

/// Compare the serial and parallel outputs of `family` among `reports`.
///
/// Returns `None` if either run is missing.
pub fn verify_family(reports: &[RunReport], family: Family) -> Option<Verification> {
    let find = |mode: ExecutionMode| {
        reports
            .iter()
            .find(|r| r.variant.family() == family && r.variant.mode() == mode)
    };
    let serial = find(ExecutionMode::Serial)?;
    let parallel = find(ExecutionMode::Parallel)?;
    Some(verify(&serial.output, &parallel.output))
}
