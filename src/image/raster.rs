/// Borrowed interleaved 8-bit raster view, row-major.
#[derive(Clone, Debug)]
pub struct RasterU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Samples per pixel (3 for the RGB sources the pipeline accepts).
    pub channels: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> RasterU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[y * self.stride + x * self.channels + c]
    }

    /// Pixel samples of row `y` (`w * channels` bytes, stride padding excluded).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }

    /// Bytes the buffer must hold to cover every pixel of the view.
    #[inline]
    pub fn min_data_len(&self) -> usize {
        if self.w == 0 || self.h == 0 {
            return 0;
        }
        (self.h - 1) * self.stride + self.w * self.channels
    }
}
