//! Symbol geometry derived from the version number alone

use crate::models::Version;

/// Width and height of the symbol in modules
pub fn symbol_size(version: Version) -> usize {
    4 * version.number() as usize + 17
}

/// Alignment pattern centers for a given version, ascending.
///
/// The same list applies to both axes; version 1 has none.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let size = symbol_size(version);
    // ceil((size - 13) / (2 * num_align - 2)) * 2, except the irregular version 32
    let step = if v == 32 {
        26
    } else {
        (v * 4 + num_align * 2 + 1) / (2 * num_align - 2) * 2
    };

    let last = size - 7;
    std::iter::once(6)
        .chain((1..num_align).map(|i| last - (num_align - 1 - i) * step))
        .collect()
}

/// Modules left for codewords once every function module is excluded.
///
/// Includes the 0-7 remainder bits, so it need not be a multiple of 8.
pub fn raw_data_module_count(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            // two 6x3 version information blocks
            result -= 18 * 2;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_symbol_size() {
        let mut previous = 0;
        for version in Version::all() {
            let size = symbol_size(version);
            assert_eq!(size, 4 * version.number() as usize + 17);
            assert_eq!(size % 2, 1);
            assert!(size > previous);
            previous = size;
        }
    }

    #[test]
    fn test_alignment_positions_known() {
        assert!(alignment_pattern_positions(v(1)).is_empty());
        assert_eq!(alignment_pattern_positions(v(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(v(7)), vec![6, 22, 38]);
        assert_eq!(alignment_pattern_positions(v(14)), vec![6, 26, 46, 66]);
        assert_eq!(
            alignment_pattern_positions(v(32)),
            vec![6, 34, 60, 86, 112, 138]
        );
        assert_eq!(
            alignment_pattern_positions(v(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_alignment_positions_shape() {
        for version in Version::all().skip(1) {
            let positions = alignment_pattern_positions(version);
            assert_eq!(positions.len(), version.number() as usize / 7 + 2);
            assert_eq!(positions[0], 6);
            assert_eq!(*positions.last().unwrap(), symbol_size(version) - 7);
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_raw_module_counts() {
        assert_eq!(raw_data_module_count(v(1)), 208);
        assert_eq!(raw_data_module_count(v(2)), 359);
        assert_eq!(raw_data_module_count(v(7)), 1568);
        assert_eq!(raw_data_module_count(v(40)), 29648);
    }
}
