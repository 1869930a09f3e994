/// Codeword placement into the QR code matrix following the zigzag pattern
use super::function_mask::FunctionMask;
use crate::models::BitMatrix;

/// Visit every module in placement order: column pairs right to left
/// (skipping the vertical timing column), alternating upward and downward.
pub fn zigzag_order(size: usize) -> impl Iterator<Item = (usize, usize)> {
    let mut rights = Vec::with_capacity(size / 2);
    let mut right = size as isize - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        rights.push(right as usize);
        right -= 2;
    }

    rights.into_iter().flat_map(move |right| {
        (0..size).flat_map(move |vert| {
            (0..2).map(move |j| {
                let x = right - j;
                let upward = ((right & 2) == 0) ^ (x < 6);
                let y = if upward { size - 1 - vert } else { vert };
                (x, y)
            })
        })
    })
}

/// Draw raw codewords (data + ECC) onto the data modules, most significant bit first.
///
/// Data modules must still be white; leftover remainder modules (0-7 of them)
/// stay white. Returns the number of bits placed, which is always
/// `8 * codewords.len()`.
pub fn draw_codewords(codewords: &[u8], matrix: &mut BitMatrix, func: &FunctionMask) -> usize {
    let total_bits = codewords.len() * 8;
    let mut i = 0usize;
    let mut remainder = 0usize;
    for (x, y) in zigzag_order(func.size()) {
        if func.is_function(x, y) {
            continue;
        }
        if i >= total_bits {
            remainder += 1;
            continue;
        }
        let black = (codewords[i >> 3] >> (7 - (i & 7))) & 1 != 0;
        matrix.set(x, y, black);
        i += 1;
    }
    assert!(
        i == total_bits && remainder < 8,
        "codeword bits do not fill the data modules: placed {i} of {total_bits}, {remainder} left over"
    );
    i
}
