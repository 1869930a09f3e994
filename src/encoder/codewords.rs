//! Block splitting, ECC generation and interleaving of the codeword stream

use log::debug;

use super::reed_solomon::ReedSolomonGenerator;
use super::tables::{data_codeword_count, ec_block_info, raw_codeword_count};
use crate::error::EncodeError;
use crate::models::{ECLevel, Version};

/// Split `data` into the version's ECC blocks, compute each block's ECC and
/// interleave everything into the final raw codeword sequence.
///
/// `data` must hold exactly the version/level data capacity.
pub fn append_error_correction(
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>, EncodeError> {
    let expected = data_codeword_count(version, ec_level);
    if data.len() != expected {
        return Err(EncodeError::DataLengthMismatch {
            version: version.number(),
            level: ec_level,
            expected,
            actual: data.len(),
        });
    }

    let info = ec_block_info(version, ec_level);
    let num_blocks = info.num_blocks;
    let total_ecc = info.total_ecc();
    assert_eq!(total_ecc % num_blocks, 0, "ECC does not split evenly into blocks");
    let block_ecc_len = total_ecc / num_blocks;
    let raw_codewords = raw_codeword_count(version);
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;
    let short_block_data_len = raw_codewords / num_blocks - block_ecc_len;

    debug!(
        "Version {}-{:?}: {} blocks ({} short x {} bytes), {} ECC bytes each",
        version, ec_level, num_blocks, num_short_blocks, short_block_data_len, block_ecc_len
    );

    let generator = ReedSolomonGenerator::new(block_ecc_len);
    let mut blocks: Vec<&[u8]> = Vec::with_capacity(num_blocks);
    let mut eccs: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut rest = data;
    for i in 0..num_blocks {
        let len = short_block_data_len + usize::from(i >= num_short_blocks);
        let (block, tail) = rest.split_at(len);
        let ecc = generator.remainder(block);
        assert_eq!(ecc.len(), block_ecc_len, "ECC remainder length mismatch");
        blocks.push(block);
        eccs.push(ecc);
        rest = tail;
    }
    assert!(rest.is_empty(), "data left over after block split");

    // Interleave (not concatenate) byte i of every block, data first then ECC
    let mut result = Vec::with_capacity(raw_codewords);
    for i in 0..=short_block_data_len {
        result.extend(blocks.iter().filter_map(|block| block.get(i)));
    }
    for i in 0..block_ecc_len {
        result.extend(eccs.iter().map(|ecc| ecc[i]));
    }
    assert_eq!(result.len(), raw_codewords, "interleaved length mismatch");
    Ok(result)
}
