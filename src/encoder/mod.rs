//! QR code symbol construction modules
//!
//! This module contains everything between finished data codewords and the
//! finished module matrix:
//! - Error correction (GF(256), Reed-Solomon, block interleaving)
//! - Function patterns (finder, timing, alignment, format/version areas)
//! - Zigzag codeword placement and masking
//! - Format and version information (BCH)

/// BCH codes for format and version info
pub mod bch;
/// Block splitting, ECC and interleaving
pub mod codewords;
pub(crate) mod config;
/// Format information encoding (mask pattern, EC level)
pub mod format;
/// Function module mask and pattern drawing
pub mod function_mask;
/// Symbol size, alignment positions and raw capacity
pub mod geometry;
/// GF(256) arithmetic
pub mod gf256;
/// Mask application
pub mod mask;
/// Mask penalty scoring
pub mod penalty;
/// Zigzag codeword placement
pub mod placement;
/// Symbol construction pipeline and mask selection
pub mod qr_encoder;
/// Reed-Solomon generator and remainder
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;
/// Version information encoding (versions 7-40)
pub mod version;
