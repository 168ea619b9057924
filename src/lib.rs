#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod params;
pub mod pipeline;
pub mod session;

// Stage-level building blocks; public for tools, considered internals.
pub mod filters;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the pipeline functions and their inputs.
pub use crate::params::{normalize, Polarity, SketchParams};
pub use crate::pipeline::{sketch, sketch_with_trace, SketchReport};

// Session for interactive front ends.
pub use crate::session::SketchSession;

// Errors and diagnostics returned alongside results.
pub use crate::diagnostics::SketchTrace;
pub use crate::error::SketchError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use linesketch::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 48usize);
/// let rgb = vec![180u8; w * h * 3];
/// let img = RasterU8 { w, h, channels: 3, stride: w * 3, data: &rgb };
///
/// let out = sketch(&img, &SketchParams::default()).expect("valid source");
/// assert_eq!((out.w, out.h), (w, h));
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, RasterU8};
    pub use crate::{sketch, sketch_with_trace, Polarity, SketchParams, SketchSession};
}
