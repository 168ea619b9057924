//! Diagnostics data model exposed by the sketch pipeline.
//!
//! [`SketchTrace`] is the detailed companion to a sketch result: it records
//! what was fed in, which parameter values actually took effect after
//! normalization, and how long each stage ran.
use crate::params::Polarity;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one sketch run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Shape of the source image a sketch was computed from.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

/// Parameter values after normalization, as the filters saw them.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveParams {
    pub denoise_ksize: usize,
    pub block_size: usize,
    pub threshold_offset: i32,
    pub polarity: Polarity,
}

/// End-to-end trace describing the internal execution of the pipeline.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchTrace {
    pub input: InputDescriptor,
    pub effective: EffectiveParams,
    /// Pixels classified as edges by the threshold stage, counted before any
    /// polarity inversion.
    pub edge_pixels: usize,
    pub timings: TimingBreakdown,
}
