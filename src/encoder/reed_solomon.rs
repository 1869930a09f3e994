/// Reed-Solomon error correction for QR codes
/// RS over GF(256), generator roots alpha^0 .. alpha^(degree-1) with alpha = 0x02
use super::gf256::Gf256;

/// Largest ECC block length used by any version/level
pub const MAX_DEGREE: usize = 30;

/// Generator polynomial prod(x - alpha^i) for i in 0..degree.
///
/// Coefficients are stored from the highest power down; the leading
/// coefficient is always 1 and is not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomonGenerator {
    coefficients: Vec<u8>,
}

impl ReedSolomonGenerator {
    /// Build the generator polynomial of the given degree (1..=30)
    pub fn new(degree: usize) -> Self {
        assert!(
            (1..=MAX_DEGREE).contains(&degree),
            "Reed-Solomon degree {degree} out of range"
        );

        // Start with the monomial x^0
        let mut coefficients = vec![0u8; degree];
        coefficients[degree - 1] = 1;

        let mut root = 1u8;
        for _ in 0..degree {
            // Multiply the current product by (x - root)
            for j in 0..degree {
                coefficients[j] = Gf256::mul(coefficients[j], root);
                if j + 1 < degree {
                    coefficients[j] ^= coefficients[j + 1];
                }
            }
            root = Gf256::double(root);
        }

        Self { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Remainder of `data * x^degree` divided by the generator, i.e. the ECC bytes for `data`
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let degree = self.degree();
        let mut remainder = vec![0u8; degree];
        for &byte in data {
            let factor = byte ^ remainder[0];
            remainder.rotate_left(1);
            remainder[degree - 1] = 0;
            for (r, &g) in remainder.iter_mut().zip(&self.coefficients) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}
