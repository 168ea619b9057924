//! The sketch pipeline.
//!
//! Stages run in a fixed order: RGB to luma, square median denoise,
//! mean-adaptive threshold, then an optional polarity inversion. The output is
//! always two-level (0 and 255) and has the same dimensions as the source.
use crate::diagnostics::{EffectiveParams, InputDescriptor, SketchTrace, TimingBreakdown};
use crate::error::SketchError;
use crate::filters::{adaptive_threshold, invert_in_place, median_filter, rgb_to_gray, EDGE_LEVEL};
use crate::image::{GrayImageU8, RasterU8};
use crate::params::{Polarity, SketchParams, MIN_BLOCK_SIZE, MIN_DENOISE_KSIZE};
use log::debug;
use std::time::Instant;

/// Result produced by [`sketch_with_trace`].
#[derive(Clone, Debug)]
pub struct SketchReport {
    pub output: GrayImageU8,
    pub trace: SketchTrace,
}

/// Render `source` into a binary sketch.
///
/// Convenience wrapper around [`sketch_with_trace`] for callers that do not
/// need the trace.
pub fn sketch(source: &RasterU8, params: &SketchParams) -> Result<GrayImageU8, SketchError> {
    sketch_with_trace(source, params).map(|report| report.output)
}

/// Render `source` into a binary sketch and report per-stage diagnostics.
///
/// Raw parameters are normalized first, so the same `params` value always
/// yields the same output for the same source. Kernel sizes past the smallest
/// window spanning the source are capped to it; the trace reports the sizes
/// the stages actually ran with.
pub fn sketch_with_trace(
    source: &RasterU8,
    params: &SketchParams,
) -> Result<SketchReport, SketchError> {
    validate_source(source)?;
    let cap = kernel_cap(source.w, source.h);
    let (ksize, block) = params.effective_sizes();
    let ksize = ksize.min(cap).max(MIN_DENOISE_KSIZE);
    let block = block.min(cap).max(MIN_BLOCK_SIZE);
    debug!(
        "sketch start w={} h={} ksize={} block={} offset={} polarity={}",
        source.w, source.h, ksize, block, params.threshold_offset, params.polarity
    );
    let started = Instant::now();

    let stage = Instant::now();
    let gray = rgb_to_gray(source);
    let grayscale_ms = stage.elapsed().as_secs_f64() * 1000.0;

    let stage = Instant::now();
    let denoised = median_filter(&gray, ksize);
    let denoise_ms = stage.elapsed().as_secs_f64() * 1000.0;

    let stage = Instant::now();
    let mut output = adaptive_threshold(&denoised, block, params.threshold_offset);
    let threshold_ms = stage.elapsed().as_secs_f64() * 1000.0;
    let edge_pixels = output.as_slice().iter().filter(|&&v| v == EDGE_LEVEL).count();

    // Dark-on-light rendering flips the raw threshold mask (edges high) into
    // dark strokes on a white page.
    let invert_ms = if params.polarity == Polarity::DarkOnLight {
        let stage = Instant::now();
        invert_in_place(&mut output);
        Some(stage.elapsed().as_secs_f64() * 1000.0)
    } else {
        None
    };

    let mut timings = TimingBreakdown::with_total(started.elapsed().as_secs_f64() * 1000.0);
    timings.push("grayscale", grayscale_ms);
    timings.push("median_denoise", denoise_ms);
    timings.push("adaptive_threshold", threshold_ms);
    if let Some(ms) = invert_ms {
        timings.push("invert", ms);
    }

    debug!(
        "sketch done edge_pixels={} total_ms={:.3}",
        edge_pixels, timings.total_ms
    );

    Ok(SketchReport {
        output,
        trace: SketchTrace {
            input: InputDescriptor {
                width: source.w,
                height: source.h,
                channels: source.channels,
            },
            effective: EffectiveParams {
                denoise_ksize: ksize,
                block_size: block,
                threshold_offset: params.threshold_offset,
                polarity: params.polarity,
            },
            edge_pixels,
            timings,
        },
    })
}

/// Smallest odd window side that spans the whole source from any center
/// pixel; effective kernel sizes are capped at it. A larger window only adds
/// replicated copies of the border rows and columns.
fn kernel_cap(w: usize, h: usize) -> usize {
    2 * w.max(h) - 1
}

/// Reject sources the filters cannot operate on.
fn validate_source(source: &RasterU8) -> Result<(), SketchError> {
    let valid = source.w > 0
        && source.h > 0
        && source.channels == 3
        && source.data.len() >= source.min_data_len();
    if !valid {
        return Err(SketchError::InvalidImage {
            width: source.w,
            height: source.h,
            channels: source.channels,
        });
    }
    Ok(())
}
