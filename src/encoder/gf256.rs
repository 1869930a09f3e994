/// GF(256) arithmetic for QR codes
/// Reduction polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D)
pub struct Gf256;

/// Reduction polynomial including the x^8 term
pub const REDUCTION_POLY: u16 = 0x11D;

impl Gf256 {
    /// Multiply two field elements (Russian peasant multiplication)
    #[inline]
    pub fn mul(x: u8, y: u8) -> u8 {
        let mut z: u16 = 0;
        for i in (0..8).rev() {
            z = (z << 1) ^ ((z >> 7) * REDUCTION_POLY);
            z ^= ((y as u16 >> i) & 1) * x as u16;
        }
        z as u8
    }

    /// Multiply by the generator element 0x02
    #[inline]
    pub fn double(x: u8) -> u8 {
        let x = x as u16;
        ((x << 1) ^ ((x >> 7) * REDUCTION_POLY)) as u8
    }
}
