/// Compact bit matrix holding one module per bit (true = black)
///
/// Layout is row-major: module `(x, y)` lives at bit `index & 7` of byte
/// `index >> 3`, where `index = y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-white bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create a new all-white square matrix
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn locate(&self, x: usize, y: usize) -> (usize, u8) {
        debug_assert!(
            x < self.width && y < self.height,
            "module ({x}, {y}) outside {}x{} matrix",
            self.width,
            self.height
        );
        let index = y * self.width + x;
        (index >> 3, 1 << (index & 7))
    }

    /// Get bit at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        let (byte_index, bit) = self.locate(x, y);
        self.data[byte_index] & bit != 0
    }

    /// Get bit at (x, y), or `None` when the coordinates fall outside the matrix
    pub fn try_get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get(x, y))
    }

    /// Set bit at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let (byte_index, bit) = self.locate(x, y);
        if value {
            self.data[byte_index] |= bit;
        } else {
            self.data[byte_index] &= !bit;
        }
    }

    /// Set bit at signed (x, y), doing nothing when it falls outside the matrix
    pub fn set_bounded(&mut self, x: isize, y: isize, value: bool) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.set(x as usize, y as usize, value);
    }

    /// Toggle bit at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn toggle(&mut self, x: usize, y: usize) {
        let (byte_index, bit) = self.locate(x, y);
        self.data[byte_index] ^= bit;
    }

    /// Clear all bits to 0
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Number of set (black) bits
    pub fn count_ones(&self) -> usize {
        // Padding bits past width * height are never set.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Get raw data as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
