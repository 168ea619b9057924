//! Mean-adaptive thresholding and polarity inversion.
//!
//! The threshold compares each pixel against the mean of its surrounding
//! block. Block means come from a separable prefix-sum pass with replicate
//! borders, so every pixel sees a full-size window and a uniform image
//! produces its own value as the mean everywhere.
use crate::image::GrayImageU8;

/// Stage output value for pixels classified as edges.
pub const EDGE_LEVEL: u8 = 255;
/// Stage output value for pixels classified as background.
pub const BACKGROUND_LEVEL: u8 = 0;

/// Rounded mean of the `block` x `block` neighborhood around each pixel.
///
/// `block` must be odd. Out-of-bounds taps read the nearest edge pixel.
pub fn box_mean(src: &GrayImageU8, block: usize) -> GrayImageU8 {
    debug_assert_eq!(block % 2, 1, "block size must be odd");
    let (w, h) = (src.w, src.h);
    let mut out = GrayImageU8::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let radius = block / 2;

    // Horizontal pass: replicated window sum per row. Row totals are at most
    // 255 * block, so they narrow back into the u64 row buffer.
    let mut hsum = vec![0u64; w * h];
    let mut prefix = vec![0u128; w + 1];
    for y in 0..h {
        let row = src.row(y);
        for (i, &v) in row.iter().enumerate() {
            prefix[i + 1] = prefix[i] + v as u128;
        }
        let first = row[0] as u128;
        let last = row[w - 1] as u128;
        let dst = &mut hsum[y * w..(y + 1) * w];
        for (x, slot) in dst.iter_mut().enumerate() {
            let sum = replicated_window_sum(&prefix, first, last, w, x, radius);
            debug_assert!(sum <= u64::MAX as u128);
            *slot = sum as u64;
        }
    }

    // Vertical pass over the row sums, then divide by the window area.
    let area = block as u128 * block as u128;
    let mut col_prefix = vec![0u128; h + 1];
    for x in 0..w {
        for y in 0..h {
            col_prefix[y + 1] = col_prefix[y] + hsum[y * w + x] as u128;
        }
        let first = hsum[x] as u128;
        let last = hsum[(h - 1) * w + x] as u128;
        for y in 0..h {
            let total = replicated_window_sum(&col_prefix, first, last, h, y, radius);
            out.set(x, y, ((total + area / 2) / area) as u8);
        }
    }
    out
}

/// 1D window sum around `center` with replicate padding past both ends.
///
/// The replicate terms multiply an edge sample by up to `radius`, so the
/// whole sum runs in u128.
fn replicated_window_sum(
    prefix: &[u128],
    first: u128,
    last: u128,
    len: usize,
    center: usize,
    radius: usize,
) -> u128 {
    let lo = center as isize - radius as isize;
    let hi = center as isize + radius as isize;
    let clamped_lo = lo.max(0) as usize;
    let clamped_hi = hi.min(len as isize - 1) as usize;
    let mut sum = prefix[clamped_hi + 1] - prefix[clamped_lo];
    if lo < 0 {
        sum += (-lo) as u128 * first;
    }
    if hi > len as isize - 1 {
        sum += (hi - (len as isize - 1)) as u128 * last;
    }
    sum
}

/// Classify each pixel against its local mean minus `offset`.
///
/// A pixel is an edge iff `value < mean - offset`, compared in i64 so any
/// `i32` offset is safe. Edges become [`EDGE_LEVEL`], the rest
/// [`BACKGROUND_LEVEL`].
pub fn adaptive_threshold(src: &GrayImageU8, block: usize, offset: i32) -> GrayImageU8 {
    let means = box_mean(src, block);
    let mut out = GrayImageU8::new(src.w, src.h);
    for ((&v, &m), dst) in src
        .as_slice()
        .iter()
        .zip(means.as_slice().iter())
        .zip(out.data.iter_mut())
    {
        *dst = if (v as i64) < m as i64 - offset as i64 {
            EDGE_LEVEL
        } else {
            BACKGROUND_LEVEL
        };
    }
    out
}

/// Flip every pixel to its complement (`255 - value`) in place.
pub fn invert_in_place(img: &mut GrayImageU8) {
    for v in img.data.iter_mut() {
        *v = 255 - *v;
    }
}
