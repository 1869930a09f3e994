/// Version information for QR codes v7+
use super::bch::{nearest, version_codeword};
use crate::models::{BitMatrix, Version};

/// Version info is 18 bits (6 data + 12 ECC), drawn as two mirrored 6x3 blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    version: Version,
}

impl VersionInfo {
    pub fn new(version: Version) -> Self {
        Self { version }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// 18-bit codeword: version in bits 17-12, BCH remainder below
    pub fn bits(&self) -> u32 {
        version_codeword(self.version.number())
    }

    /// Draw both copies: above the bottom-left finder and left of the top-right one.
    ///
    /// Bit `i * 3 + j` goes to row `i`, column `size - 11 + j` and its transpose.
    pub fn draw(&self, matrix: &mut BitMatrix) {
        assert!(
            self.version.has_version_info(),
            "version {} has no version information",
            self.version
        );
        let size = matrix.width();
        let mut data = self.bits();
        for i in 0..6 {
            for j in 0..3 {
                let k = size - 11 + j;
                let black = data & 1 != 0;
                matrix.set(k, i, black);
                matrix.set(i, k, black);
                data >>= 1;
            }
        }
    }

    /// Raw block below-left of the top-right finder
    pub fn read_top_right(matrix: &BitMatrix) -> u32 {
        let size = matrix.width();
        Self::gather(|i, j| matrix.get(size - 11 + j, i))
    }

    /// Raw block above-right of the bottom-left finder
    pub fn read_bottom_left(matrix: &BitMatrix) -> u32 {
        let size = matrix.width();
        Self::gather(|i, j| matrix.get(i, size - 11 + j))
    }

    fn gather(module: impl Fn(usize, usize) -> bool) -> u32 {
        let mut bits = 0u32;
        for i in 0..6 {
            for j in 0..3 {
                bits |= (module(i, j) as u32) << (i * 3 + j);
            }
        }
        bits
    }

    /// Decode a raw 18-bit field, correcting up to 3 bit errors
    pub fn decode(version_bits: u32) -> Option<Version> {
        let number = nearest(
            version_bits,
            (7..=40u8).map(|v| (version_codeword(v), v)),
        )?;
        Version::new(number).ok()
    }

    /// Read the version back from a finished symbol (versions 7+ only)
    pub fn extract(matrix: &BitMatrix) -> Option<Version> {
        if matrix.width() < 45 {
            // Version 6 or below - no version info area
            return None;
        }
        Self::decode(Self::read_top_right(matrix))
            .or_else(|| Self::decode(Self::read_bottom_left(matrix)))
    }
}
