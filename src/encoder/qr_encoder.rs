//! Full symbol construction: codewords, function patterns, placement,
//! mask selection and format information.

use log::{debug, trace};
use rayon::prelude::*;

use super::codewords::append_error_correction;
use super::config;
use super::format::FormatInfo;
use super::function_mask::{
    FunctionMask, draw_light_function_modules, initialize_function_modules,
};
use super::mask::apply_mask;
use super::penalty::penalty_score;
use super::placement::draw_codewords;
use crate::error::EncodeError;
use crate::models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version};

/// Builds QR code symbols from finished data codewords.
///
/// Defaults come from the environment (`QR_FORCE_MASK`,
/// `QR_MASK_SEARCH_PARALLEL`); the builder methods override them.
#[derive(Debug, Clone)]
pub struct QrEncoder {
    mask: Option<MaskPattern>,
    parallel_mask_search: bool,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self {
            mask: config::forced_mask(),
            parallel_mask_search: config::mask_search_parallel(),
        }
    }
}

impl QrEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this mask instead of searching for the lowest penalty
    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Always search all eight masks
    pub fn auto_mask(mut self) -> Self {
        self.mask = None;
        self
    }

    pub fn parallel_mask_search(mut self, enabled: bool) -> Self {
        self.parallel_mask_search = enabled;
        self
    }

    /// Encode `data` (exactly the data capacity of `version`/`ec_level`) into a symbol
    pub fn encode(
        &self,
        data: &[u8],
        version: Version,
        ec_level: ECLevel,
    ) -> Result<QRCode, EncodeError> {
        debug!(
            "Encoding {} data codewords as version {}-{:?}",
            data.len(),
            version,
            ec_level
        );
        let codewords = append_error_correction(data, version, ec_level)?;

        let (mut matrix, func) = initialize_function_modules(version);
        draw_codewords(&codewords, &mut matrix, &func);
        draw_light_function_modules(&mut matrix, version);

        let mask_pattern = match self.mask {
            Some(mask) => {
                debug!("Using fixed mask {}", mask.index());
                mask
            }
            None => {
                let (mask, score) = if self.parallel_mask_search {
                    choose_mask_parallel(&matrix, &func, ec_level)
                } else {
                    choose_mask_in_place(&mut matrix, &func, ec_level)
                };
                debug!("Chose mask {} (penalty {})", mask.index(), score);
                mask
            }
        };

        apply_mask(&mut matrix, mask_pattern, &func);
        FormatInfo::new(ec_level, mask_pattern).draw(&mut matrix);

        Ok(QRCode {
            version,
            error_correction: ec_level,
            mask_pattern,
            modules: matrix,
        })
    }
}

/// Score one mask on `matrix` as it would be finally drawn
fn score_mask(
    matrix: &mut BitMatrix,
    func: &FunctionMask,
    ec_level: ECLevel,
    mask: MaskPattern,
) -> u32 {
    apply_mask(matrix, mask, func);
    FormatInfo::new(ec_level, mask).draw(matrix);
    let score = penalty_score(matrix);
    trace!("Mask {} penalty {}", mask.index(), score);
    score
}

fn lowest(scores: impl IntoIterator<Item = (u32, MaskPattern)>) -> (MaskPattern, u32) {
    // ties go to the lower pattern index
    scores
        .into_iter()
        .min()
        .map(|(score, mask)| (mask, score))
        .unwrap_or((MaskPattern::Pattern0, 0))
}

/// Try every mask on the matrix itself: apply, score, apply again to undo.
///
/// Data modules are back to unmasked on return; the format modules hold
/// whatever the last candidate drew.
pub fn choose_mask_in_place(
    matrix: &mut BitMatrix,
    func: &FunctionMask,
    ec_level: ECLevel,
) -> (MaskPattern, u32) {
    lowest(MaskPattern::ALL.map(|mask| {
        let score = score_mask(matrix, func, ec_level, mask);
        apply_mask(matrix, mask, func);
        (score, mask)
    }))
}

/// Try every mask on its own copy of the matrix, in parallel
pub fn choose_mask_parallel(
    matrix: &BitMatrix,
    func: &FunctionMask,
    ec_level: ECLevel,
) -> (MaskPattern, u32) {
    let scores: Vec<(u32, MaskPattern)> = MaskPattern::ALL
        .par_iter()
        .map(|&mask| {
            let mut candidate = matrix.clone();
            (score_mask(&mut candidate, func, ec_level, mask), mask)
        })
        .collect();
    lowest(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::data_codeword_count;
    use crate::encoder::version::VersionInfo;

    fn sample_data(version: Version, level: ECLevel) -> Vec<u8> {
        (0..data_codeword_count(version, level))
            .map(|i| (i * 37 + 11) as u8)
            .collect()
    }

    #[test]
    fn test_in_place_and_parallel_agree() {
        for n in [1u8, 4, 7, 15] {
            let version = Version::new(n).unwrap();
            let data = sample_data(version, ECLevel::M);
            let sequential = QrEncoder::new()
                .auto_mask()
                .parallel_mask_search(false)
                .encode(&data, version, ECLevel::M)
                .unwrap();
            let parallel = QrEncoder::new()
                .auto_mask()
                .parallel_mask_search(true)
                .encode(&data, version, ECLevel::M)
                .unwrap();
            assert_eq!(sequential.mask_pattern, parallel.mask_pattern);
            assert_eq!(sequential.modules, parallel.modules);
        }
    }

    #[test]
    fn test_in_place_search_restores_data_modules() {
        let version = Version::new(2).unwrap();
        let (mut matrix, func) = initialize_function_modules(version);
        let codewords =
            append_error_correction(&sample_data(version, ECLevel::L), version, ECLevel::L)
                .unwrap();
        draw_codewords(&codewords, &mut matrix, &func);
        draw_light_function_modules(&mut matrix, version);
        let before = matrix.clone();

        choose_mask_in_place(&mut matrix, &func, ECLevel::L);
        let size = version.size();
        for y in 0..size {
            for x in 0..size {
                if !func.is_function(x, y) {
                    assert_eq!(matrix.get(x, y), before.get(x, y));
                }
            }
        }
    }

    #[test]
    fn test_chosen_mask_has_lowest_penalty() {
        let version = Version::new(3).unwrap();
        let data = sample_data(version, ECLevel::Q);
        let best = QrEncoder::new()
            .auto_mask()
            .encode(&data, version, ECLevel::Q)
            .unwrap();
        let best_score = penalty_score(&best.modules);
        for mask in MaskPattern::ALL {
            let qr = QrEncoder::new()
                .mask(mask)
                .encode(&data, version, ECLevel::Q)
                .unwrap();
            assert!(best_score <= penalty_score(&qr.modules));
        }
    }

    #[test]
    fn test_forced_mask_is_recorded() {
        let version = Version::new(9).unwrap();
        let data = sample_data(version, ECLevel::H);
        for mask in MaskPattern::ALL {
            let qr = QrEncoder::new()
                .mask(mask)
                .encode(&data, version, ECLevel::H)
                .unwrap();
            assert_eq!(qr.mask_pattern, mask);
            assert_eq!(
                FormatInfo::extract(&qr.modules),
                Some(FormatInfo::new(ECLevel::H, mask))
            );
            assert_eq!(VersionInfo::extract(&qr.modules), Some(version));
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        let version = Version::new(2).unwrap();
        let err = QrEncoder::new()
            .encode(&[0u8; 5], version, ECLevel::L)
            .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::DataLengthMismatch {
                expected: 34,
                actual: 5,
                ..
            }
        ));
    }
}
