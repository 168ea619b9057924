//! Square median filter with replicate borders.
use crate::image::GrayImageU8;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Median-filter `src` with a `ksize` x `ksize` window.
///
/// `ksize` must be odd; a size of 1 returns the input unchanged. Pixels past
/// the border are read from the nearest edge pixel, so output dimensions match
/// the input.
pub fn median_filter(src: &GrayImageU8, ksize: usize) -> GrayImageU8 {
    debug_assert_eq!(ksize % 2, 1, "kernel size must be odd");
    if ksize <= 1 || src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let radius = (ksize / 2) as isize;
    let mut out = GrayImageU8::new(src.w, src.h);

    #[cfg(feature = "parallel")]
    out.data
        .par_chunks_mut(src.w)
        .enumerate()
        .for_each(|(y, out_row)| {
            let mut window = Vec::with_capacity(ksize * ksize);
            median_row(src, y, radius, out_row, &mut window);
        });

    #[cfg(not(feature = "parallel"))]
    {
        let mut window = Vec::with_capacity(ksize * ksize);
        for (y, out_row) in out.data.chunks_mut(src.w).enumerate() {
            median_row(src, y, radius, out_row, &mut window);
        }
    }

    out
}

/// Fill one output row by sorting each window; `window` is scratch space.
fn median_row(src: &GrayImageU8, y: usize, radius: isize, out_row: &mut [u8], window: &mut Vec<u8>) {
    let w = src.w as isize;
    let h = src.h as isize;
    for (x, dst) in out_row.iter_mut().enumerate() {
        window.clear();
        for dy in -radius..=radius {
            let sy = (y as isize + dy).clamp(0, h - 1) as usize;
            let row = src.row(sy);
            for dx in -radius..=radius {
                let sx = (x as isize + dx).clamp(0, w - 1) as usize;
                window.push(row[sx]);
            }
        }
        window.sort_unstable();
        *dst = window[window.len() / 2];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ksize_one_is_identity() {
        let src = GrayImageU8::from_raw(3, 2, vec![5, 90, 17, 200, 0, 255]);
        let out = median_filter(&src, 1);
        assert_eq!(out.as_slice(), src.as_slice());
    }

    #[test]
    fn removes_isolated_speckle() {
        let mut src = GrayImageU8::from_raw(5, 5, vec![100; 25]);
        src.set(2, 2, 255);
        let out = median_filter(&src, 3);
        assert!(
            out.as_slice().iter().all(|&v| v == 100),
            "speckle should vanish"
        );
    }

    #[test]
    fn replicates_borders_on_2x2() {
        let src = GrayImageU8::from_raw(2, 2, vec![10, 20, 30, 40]);
        let out = median_filter(&src, 3);
        // Each corner window replicates its nearest edge pixels.
        assert_eq!(out.as_slice(), &[20, 20, 30, 30]);
    }

    #[test]
    fn step_edge_stays_binary() {
        let mut src = GrayImageU8::new(8, 4);
        for y in 0..4 {
            for x in 4..8 {
                src.set(x, y, 255);
            }
        }
        let out = median_filter(&src, 3);
        assert!(
            out.as_slice().iter().all(|&v| v == 0 || v == 255),
            "median of a two-level image stays two-level"
        );
    }

    #[test]
    fn preserves_dimensions() {
        let src = GrayImageU8::new(7, 11);
        let out = median_filter(&src, 5);
        assert_eq!((out.w, out.h), (7, 11));
    }
}
