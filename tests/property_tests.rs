//! Property-based tests for the symbol construction building blocks

use proptest::prelude::*;

use rust_qr_gen::encoder::codewords::append_error_correction;
use rust_qr_gen::encoder::format::FormatInfo;
use rust_qr_gen::encoder::function_mask::FunctionMask;
use rust_qr_gen::encoder::gf256::Gf256;
use rust_qr_gen::encoder::mask::apply_mask;
use rust_qr_gen::encoder::placement::zigzag_order;
use rust_qr_gen::encoder::reed_solomon::ReedSolomonGenerator;
use rust_qr_gen::encoder::version::VersionInfo;
use rust_qr_gen::{
    BitMatrix, ECLevel, MaskPattern, QrEncoder, Version, data_codeword_count, raw_codeword_count,
};

fn version_strategy() -> impl Strategy<Value = Version> {
    (1u8..=40).prop_map(|n| Version::new(n).unwrap())
}

fn level_strategy() -> impl Strategy<Value = ECLevel> {
    prop::sample::select(ECLevel::ALL.to_vec())
}

fn mask_strategy() -> impl Strategy<Value = MaskPattern> {
    (0u8..8).prop_map(MaskPattern::from_bits)
}

/// Up to three distinct bit positions below `width`
fn flips_strategy(width: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..width, 0..=3).prop_map(|mut v| {
        v.sort();
        v.dedup();
        v
    })
}

proptest! {
    #[test]
    fn gf_mul_commutes(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(Gf256::mul(a, b), Gf256::mul(b, a));
    }

    #[test]
    fn gf_mul_distributes_over_xor(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        prop_assert_eq!(Gf256::mul(a, b ^ c), Gf256::mul(a, b) ^ Gf256::mul(a, c));
    }

    #[test]
    fn gf_mul_identity_and_zero(a in any::<u8>()) {
        prop_assert_eq!(Gf256::mul(a, 1), a);
        prop_assert_eq!(Gf256::mul(a, 0), 0);
    }

    #[test]
    fn rs_codeword_has_zero_remainder(
        data in prop::collection::vec(any::<u8>(), 1..120),
        degree in 1usize..=30,
    ) {
        let generator = ReedSolomonGenerator::new(degree);
        let ecc = generator.remainder(&data);
        prop_assert_eq!(ecc.len(), degree);

        let mut codeword = data.clone();
        codeword.extend_from_slice(&ecc);
        prop_assert!(generator.remainder(&codeword).iter().all(|&b| b == 0));
    }

    #[test]
    fn format_decode_corrects_three_errors(
        level in level_strategy(),
        mask in mask_strategy(),
        flips in flips_strategy(15),
    ) {
        let info = FormatInfo::new(level, mask);
        let damaged = flips.iter().fold(info.bits(), |bits, &i| bits ^ (1 << i));
        prop_assert_eq!(FormatInfo::decode(damaged), Some(info));
    }

    #[test]
    fn version_decode_corrects_three_errors(
        number in 7u8..=40,
        flips in flips_strategy(18),
    ) {
        let version = Version::new(number).unwrap();
        let bits = VersionInfo::new(version).bits();
        let damaged = flips.iter().fold(bits, |bits, &i| bits ^ (1 << i));
        prop_assert_eq!(VersionInfo::decode(damaged), Some(version));
    }

    #[test]
    fn mask_is_an_involution(
        version in version_strategy(),
        mask in mask_strategy(),
        seed in any::<u64>(),
    ) {
        let size = version.size();
        let func = FunctionMask::new(version);
        let mut matrix = BitMatrix::square(size);
        let mut state = seed | 1;
        for y in 0..size {
            for x in 0..size {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                matrix.set(x, y, state & 1 == 1);
            }
        }
        let original = matrix.clone();

        apply_mask(&mut matrix, mask, &func);
        for y in 0..size {
            for x in 0..size {
                if func.is_function(x, y) {
                    prop_assert_eq!(matrix.get(x, y), original.get(x, y));
                }
            }
        }
        apply_mask(&mut matrix, mask, &func);
        prop_assert_eq!(matrix, original);
    }

    #[test]
    fn zigzag_visits_every_module_once(version in version_strategy()) {
        let size = version.size();
        let mut seen = BitMatrix::square(size);
        let mut count = 0;
        for (x, y) in zigzag_order(size) {
            prop_assert!(x != 6, "column 6 is skipped");
            prop_assert!(!seen.get(x, y));
            seen.set(x, y, true);
            count += 1;
        }
        // every column except the vertical timing column
        prop_assert_eq!(count, size * (size - 1));
    }

    #[test]
    fn data_modules_hold_every_codeword_bit(
        version in version_strategy(),
        level in level_strategy(),
    ) {
        let func = FunctionMask::new(version);
        let raw = raw_codeword_count(version);
        prop_assert_eq!(func.data_modules_count() / 8, raw);
        prop_assert!(data_codeword_count(version, level) < raw);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn encoded_symbol_reads_back(
        version in version_strategy(),
        level in level_strategy(),
        mask in mask_strategy(),
        fill in any::<u8>(),
    ) {
        let data: Vec<u8> = (0..data_codeword_count(version, level))
            .map(|i| fill.wrapping_add(i as u8))
            .collect();
        let qr = QrEncoder::new().mask(mask).encode(&data, version, level).unwrap();
        prop_assert_eq!(qr.size(), version.size());
        prop_assert_eq!(
            FormatInfo::extract(&qr.modules),
            Some(FormatInfo::new(level, mask))
        );
        if version.has_version_info() {
            prop_assert_eq!(VersionInfo::extract(&qr.modules), Some(version));
        }

        let codewords = append_error_correction(&data, version, level).unwrap();
        prop_assert_eq!(codewords.len(), raw_codeword_count(version));
    }
}
