/// Format information: error correction level + mask pattern, BCH(15,5) protected
use super::bch::{format_codeword, nearest};
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// Format info is 15 bits (5 data + 10 ECC), drawn twice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// 5-bit payload: level code in bits 4-3, mask in bits 2-0
    fn data_bits(&self) -> u8 {
        self.ec_level.format_bits() << 3 | self.mask_pattern.index()
    }

    /// Masked 15-bit codeword
    pub fn bits(&self) -> u16 {
        format_codeword(self.data_bits())
    }

    /// Draw both copies, plus the always-black module next to the bottom-left finder
    pub fn draw(&self, matrix: &mut BitMatrix) {
        let size = matrix.width();
        let bits = self.bits();
        let bit = |i: usize| (bits >> i) & 1 != 0;

        // Around the top-left finder, skipping the timing row/column
        for i in 0..=5 {
            matrix.set(8, i, bit(i));
        }
        matrix.set(8, 7, bit(6));
        matrix.set(8, 8, bit(7));
        matrix.set(7, 8, bit(8));
        for i in 9..15 {
            matrix.set(14 - i, 8, bit(i));
        }

        // Split between the top-right and bottom-left finders
        for i in 0..8 {
            matrix.set(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            matrix.set(8, size - 15 + i, bit(i));
        }
        matrix.set(8, size - 8, true);
    }

    /// Raw copy around the top-left finder
    pub fn read_primary(matrix: &BitMatrix) -> u16 {
        let mut positions = Vec::with_capacity(15);
        positions.extend((0..=5).map(|i| (8, i)));
        positions.extend([(8, 7), (8, 8), (7, 8)]);
        positions.extend((9..15).map(|i| (14 - i, 8)));
        Self::gather(matrix, &positions)
    }

    /// Raw copy split across the top-right and bottom-left finders
    pub fn read_secondary(matrix: &BitMatrix) -> u16 {
        let size = matrix.width();
        let mut positions = Vec::with_capacity(15);
        positions.extend((0..8).map(|i| (size - 1 - i, 8)));
        positions.extend((8..15).map(|i| (8, size - 15 + i)));
        Self::gather(matrix, &positions)
    }

    /// Collect bits where `positions[i]` holds bit i
    fn gather(matrix: &BitMatrix, positions: &[(usize, usize)]) -> u16 {
        positions
            .iter()
            .enumerate()
            .fold(0u16, |acc, (i, &(x, y))| acc | (matrix.get(x, y) as u16) << i)
    }

    /// Decode a raw 15-bit field, correcting up to 3 bit errors
    pub fn decode(format_bits: u16) -> Option<Self> {
        let data = nearest(
            format_bits as u32,
            (0..32u8).map(|d| (format_codeword(d) as u32, d)),
        )?;
        let ec_level = ECLevel::from_format_bits(data >> 3)?;
        Some(Self::new(ec_level, MaskPattern::from_bits(data)))
    }

    /// Read the format back from a finished symbol, trying the primary copy first
    pub fn extract(matrix: &BitMatrix) -> Option<Self> {
        if matrix.width() < 21 {
            return None;
        }
        Self::decode(Self::read_primary(matrix))
            .or_else(|| Self::decode(Self::read_secondary(matrix)))
    }
}
