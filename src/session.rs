//! Stateful session implementing the recompute contract.
//!
//! [`SketchSession`] owns the current source, the current parameters and at
//! most one output. Every input change drops the old output and recomputes
//! from scratch; nothing carries over between runs, so changing a parameter
//! and reverting it reproduces the previous output byte for byte.
use crate::error::SketchError;
use crate::image::{GrayImageU8, RgbImageU8};
use crate::params::{Polarity, SketchParams};
use crate::pipeline::sketch;
use log::debug;

pub struct SketchSession {
    source: Option<RgbImageU8>,
    params: SketchParams,
    output: Option<GrayImageU8>,
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchSession {
    /// Empty session with default parameters.
    pub fn new() -> Self {
        Self::with_params(SketchParams::default())
    }

    pub fn with_params(params: SketchParams) -> Self {
        Self {
            source: None,
            params,
            output: None,
        }
    }

    pub fn params(&self) -> &SketchParams {
        &self.params
    }

    pub fn source(&self) -> Option<&RgbImageU8> {
        self.source.as_ref()
    }

    /// Latest output; `None` until a source is set and a recompute succeeds.
    pub fn output(&self) -> Option<&GrayImageU8> {
        self.output.as_ref()
    }

    /// Replace the source wholesale and recompute.
    pub fn set_source(&mut self, source: RgbImageU8) -> Result<(), SketchError> {
        self.source = Some(source);
        self.recompute()
    }

    /// Replace the whole parameter set and recompute.
    pub fn set_params(&mut self, params: SketchParams) -> Result<(), SketchError> {
        self.params = params;
        self.recompute()
    }

    pub fn set_denoise_ksize(&mut self, raw: i32) -> Result<(), SketchError> {
        self.params.denoise_ksize = raw;
        self.recompute()
    }

    pub fn set_block_size(&mut self, raw: i32) -> Result<(), SketchError> {
        self.params.block_size = raw;
        self.recompute()
    }

    pub fn set_threshold_offset(&mut self, offset: i32) -> Result<(), SketchError> {
        self.params.threshold_offset = offset;
        self.recompute()
    }

    pub fn set_polarity(&mut self, polarity: Polarity) -> Result<(), SketchError> {
        self.params.polarity = polarity;
        self.recompute()
    }

    /// Re-run the pipeline from the current source and parameters.
    ///
    /// The previous output is dropped before the run, so a failure never
    /// leaves a stale result behind. Without a source this is a no-op.
    pub fn recompute(&mut self) -> Result<(), SketchError> {
        self.output = None;
        let Some(source) = self.source.as_ref() else {
            return Ok(());
        };
        debug!(
            "SketchSession::recompute w={} h={}",
            source.width(),
            source.height()
        );
        self.output = Some(sketch(&source.as_view(), &self.params)?);
        Ok(())
    }
}
