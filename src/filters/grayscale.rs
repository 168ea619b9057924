//! RGB to luma conversion.
use crate::image::{GrayImageU8, RasterU8};

/// BT.601 luma weights.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Collapse an interleaved RGB view to a single luma channel.
///
/// Each pixel becomes `round(0.299 R + 0.587 G + 0.114 B)`; the weights sum to
/// one, so the result always fits in a byte.
pub fn rgb_to_gray(src: &RasterU8) -> GrayImageU8 {
    let mut out = GrayImageU8::new(src.w, src.h);
    for y in 0..src.h {
        let src_row = src.row(y);
        let out_row = out.row_mut(y);
        for (px, dst) in src_row.chunks_exact(3).zip(out_row.iter_mut()) {
            let luma =
                LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
            *dst = luma.round() as u8;
        }
    }
    out
}
