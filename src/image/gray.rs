/// Owned single-channel 8-bit image, row-major with `stride == w`.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: Vec<u8>,
}

impl GrayImageU8 {
    /// Zero-filled image of the given size.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Wraps an existing buffer; `data.len()` must be `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), w * h, "buffer does not match dimensions");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.data[start..start + self.w]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
