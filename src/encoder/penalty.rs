//! Mask penalty scoring (ISO/IEC 18004 rules N1-N4)
//!
//! Lower is better. The score only reads the matrix; mask selection lives in
//! [`crate::encoder::qr_encoder`].

use crate::models::BitMatrix;

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// 1:1:3:1:1 finder-like run with four light modules on either side
const FINDER_LIKE_LEFT: u16 = 0b000_0101_1101;
const FINDER_LIKE_RIGHT: u16 = 0b101_1101_0000;

/// Total penalty of a finished (masked, format-drawn) symbol
pub fn penalty_score(matrix: &BitMatrix) -> u32 {
    let size = matrix.width();
    let mut result = 0;

    for y in 0..size {
        result += line_penalty((0..size).map(|x| matrix.get(x, y)));
    }
    for x in 0..size {
        result += line_penalty((0..size).map(|y| matrix.get(x, y)));
    }

    result + block_penalty(matrix) + balance_penalty(matrix)
}

/// N1 (long runs) and N3 (finder-like sequences) for one row or column
fn line_penalty(modules: impl Iterator<Item = bool>) -> u32 {
    let mut result = 0;
    let mut run_color = None;
    let mut run_len = 0u32;
    let mut window = 0u16;

    for (i, black) in modules.enumerate() {
        if run_color == Some(black) {
            run_len += 1;
            if run_len == 5 {
                result += PENALTY_N1;
            } else if run_len > 5 {
                result += 1;
            }
        } else {
            run_color = Some(black);
            run_len = 1;
        }

        window = ((window << 1) | black as u16) & 0x7FF;
        if i >= 10 && (window == FINDER_LIKE_LEFT || window == FINDER_LIKE_RIGHT) {
            result += PENALTY_N3;
        }
    }
    result
}

/// N2: every 2x2 block of one color
fn block_penalty(matrix: &BitMatrix) -> u32 {
    let size = matrix.width();
    let mut result = 0;
    for y in 0..size.saturating_sub(1) {
        for x in 0..size.saturating_sub(1) {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }
    result
}

/// N4: k * N4 for the smallest k with (45 - 5k)% <= dark ratio <= (55 + 5k)%
fn balance_penalty(matrix: &BitMatrix) -> u32 {
    let total = (matrix.width() * matrix.height()) as u64;
    if total == 0 {
        return 0;
    }
    let dark = matrix.count_ones() as u64;
    let deviation = (dark * 20).abs_diff(total * 10);
    let k = deviation.div_ceil(total).saturating_sub(1);
    k as u32 * PENALTY_N4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(bits: &str) -> u32 {
        line_penalty(bits.chars().map(|c| c == '1'))
    }

    #[test]
    fn test_runs() {
        assert_eq!(line("0101"), 0);
        assert_eq!(line("11110"), 0);
        assert_eq!(line("11111"), 3);
        assert_eq!(line("1111111"), 5);
        assert_eq!(line("00000100000"), 6);
    }

    #[test]
    fn test_finder_like() {
        assert_eq!(line("10111010000"), 40);
        assert_eq!(line("00001011101"), 40);
        // both orientations share the core run
        assert_eq!(line("000010111010000"), 80);
        assert_eq!(line("1011101"), 0);
    }

    #[test]
    fn test_blocks() {
        let mut matrix = BitMatrix::square(3);
        // all white: four 2x2 blocks
        assert_eq!(block_penalty(&matrix), 12);
        matrix.set(1, 1, true);
        assert_eq!(block_penalty(&matrix), 0);
    }

    #[test]
    fn test_balance() {
        let mut matrix = BitMatrix::square(10);
        // 0% dark: 50% off -> 9 steps
        assert_eq!(balance_penalty(&matrix), 90);
        for i in 0..50 {
            matrix.set(i % 10, i / 10, true);
        }
        assert_eq!(balance_penalty(&matrix), 0);
        // 54% dark
        for i in 50..54 {
            matrix.set(i % 10, i / 10, true);
        }
        assert_eq!(balance_penalty(&matrix), 0);
        // 55% is still inside 45-55%
        matrix.set(4, 5, true);
        assert_eq!(balance_penalty(&matrix), 0);
        matrix.set(5, 5, true);
        assert_eq!(balance_penalty(&matrix), 10);
    }

    #[test]
    fn test_all_white_symbol() {
        let matrix = BitMatrix::square(21);
        // 21 rows + 21 columns, each one run of 21
        let runs = 42 * (PENALTY_N1 + 16);
        let blocks = 20 * 20 * PENALTY_N2;
        assert_eq!(penalty_score(&matrix), runs + blocks + 90);
    }
}
