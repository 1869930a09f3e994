//! RustQR Gen - QR Code symbol construction
//!
//! Turns finished data codewords into a standards-compliant QR Code module
//! matrix: Reed-Solomon error correction and block interleaving, function
//! patterns, zigzag placement, masking, and format/version information.
//!
//! Segment encoding (choosing numeric/alphanumeric/byte modes, padding) and
//! version selection happen upstream; rendering happens downstream.
//!
//! ```
//! use rust_qr_gen::{ECLevel, Version, encode};
//!
//! let version = Version::new(1).unwrap();
//! let data = [0u8; 19];
//! let qr = encode(&data, version, ECLevel::L).unwrap();
//! assert_eq!(qr.size(), 21);
//! assert_eq!(qr.module_at(0, 0), Ok(true));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code symbol construction modules (error correction, patterns, masking)
#[allow(missing_docs)]
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QRCode, BitMatrix, Version, etc.)
#[allow(missing_docs)]
pub mod models;

pub use encoder::qr_encoder::QrEncoder;
pub use encoder::tables::{data_codeword_count, ec_block_info, raw_codeword_count};
pub use error::EncodeError;
pub use models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version};

/// Encode data codewords into a symbol, picking the lowest-penalty mask
///
/// # Arguments
/// * `data` - Data codewords, exactly `data_codeword_count(version, ec_level)` bytes
/// * `version` - Symbol version
/// * `ec_level` - Error correction level
///
/// `QR_FORCE_MASK` in the environment overrides the mask search.
pub fn encode(data: &[u8], version: Version, ec_level: ECLevel) -> Result<QRCode, EncodeError> {
    QrEncoder::new().encode(data, version, ec_level)
}

/// Encode data codewords into a symbol with a caller-chosen mask
pub fn encode_with_mask(
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
) -> Result<QRCode, EncodeError> {
    QrEncoder::new().mask(mask).encode(data, version, ec_level)
}
