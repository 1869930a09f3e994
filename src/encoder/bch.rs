//! BCH codes protecting the format (15,5) and version (18,6) fields

/// Format generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0x537;
/// Version generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0x1F25;
/// XOR pattern applied to the format codeword so it is never all zero
pub const FORMAT_MASK: u16 = 0x5412;

/// Largest number of bit errors either field can correct
pub const MAX_CORRECTABLE: u32 = 3;

/// Remainder of `data * x^degree` modulo `generator` (which includes its x^degree term)
fn remainder(data: u32, degree: u32, generator: u32) -> u32 {
    let mut rem = data;
    for _ in 0..degree {
        rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
    }
    rem
}

/// 15-bit masked format codeword for a 5-bit data value
pub fn format_codeword(data: u8) -> u16 {
    let data = (data & 0x1F) as u32;
    let rem = remainder(data, 10, FORMAT_GENERATOR);
    let codeword = (data << 10 | rem) as u16 ^ FORMAT_MASK;
    assert_eq!(codeword >> 15, 0);
    codeword
}

/// 18-bit version codeword for a 6-bit version number
pub fn version_codeword(version: u8) -> u32 {
    let data = (version & 0x3F) as u32;
    let codeword = data << 12 | remainder(data, 12, VERSION_GENERATOR);
    assert_eq!(codeword >> 18, 0);
    codeword
}

/// Pick the candidate whose codeword is closest to `received`, if it lies
/// within the correction radius.
pub fn nearest<T>(received: u32, candidates: impl IntoIterator<Item = (u32, T)>) -> Option<T> {
    candidates
        .into_iter()
        .map(|(codeword, value)| ((codeword ^ received).count_ones(), value))
        .filter(|(distance, _)| *distance <= MAX_CORRECTABLE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, value)| value)
}
