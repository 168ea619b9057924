//! Sketch parameters and the normalization rules that make raw UI-range
//! integers legal for the filtering stages.
//!
//! Hosts may surface these values through sliders, flags or config files with
//! arbitrary integer bounds; [`normalize`] is total over all integer pairs
//! and is the only place the "odd, above minimum" invariant is enforced. The
//! filter stages themselves trust their callers and only `debug_assert!` the
//! precondition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest legal median window side.
pub const MIN_DENOISE_KSIZE: usize = 1;
/// Smallest legal adaptive-threshold neighborhood side.
pub const MIN_BLOCK_SIZE: usize = 3;

/// Which output level represents line work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    /// Lines rendered dark on a light background (pencil on paper).
    DarkOnLight,
    /// Lines rendered light on a dark background (glowing lines).
    LightOnDark,
}

impl Default for Polarity {
    fn default() -> Self {
        Polarity::DarkOnLight
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::DarkOnLight => write!(f, "dark-on-light"),
            Polarity::LightOnDark => write!(f, "light-on-dark"),
        }
    }
}

impl FromStr for Polarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark-on-light" => Ok(Polarity::DarkOnLight),
            "light-on-dark" => Ok(Polarity::LightOnDark),
            other => Err(format!(
                "Unknown polarity '{other}' (expected dark-on-light or light-on-dark)"
            )),
        }
    }
}

/// Raw sketch parameters as supplied by the host.
///
/// `denoise_ksize` and `block_size` may be even or below their minimums here;
/// the pipeline legalizes them on entry via [`normalize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchParams {
    /// Side of the square median window (legal domain: odd, >= 1).
    pub denoise_ksize: i32,
    /// Side of the local-mean neighborhood (legal domain: odd, >= 3).
    pub block_size: i32,
    /// Constant subtracted from the local mean before binarizing.
    pub threshold_offset: i32,
    /// Output level assignment for line work versus background.
    pub polarity: Polarity,
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            denoise_ksize: 5,
            block_size: 9,
            threshold_offset: 9,
            polarity: Polarity::DarkOnLight,
        }
    }
}

impl SketchParams {
    /// Copy of `self` with both kernel sizes legalized.
    pub fn normalized(&self) -> Self {
        let (denoise_ksize, block_size) = normalize(self.denoise_ksize, self.block_size);
        Self {
            denoise_ksize: denoise_ksize as i32,
            block_size: block_size as i32,
            ..*self
        }
    }

    /// Legalized `(denoise_ksize, block_size)` pair for the filter stages.
    pub fn effective_sizes(&self) -> (usize, usize) {
        normalize(self.denoise_ksize, self.block_size)
    }
}

/// Coerce raw integer sizes into values legal for the filtering stages.
///
/// Total over all integer pairs, no error conditions:
/// - denoise: clamped up to [`MIN_DENOISE_KSIZE`], then bumped to the next
///   odd value when even;
/// - block: forced to [`MIN_BLOCK_SIZE`] when <= 1, then bumped to the next
///   odd value when even.
pub fn normalize(raw_denoise: i32, raw_block_size: i32) -> (usize, usize) {
    let mut ksize = raw_denoise.max(MIN_DENOISE_KSIZE as i32);
    if ksize % 2 == 0 {
        ksize += 1;
    }

    let mut block = raw_block_size;
    if block <= 1 {
        block = MIN_BLOCK_SIZE as i32;
    }
    if block % 2 == 0 {
        block += 1;
    }

    (ksize as usize, block as usize)
}
