//! Error types for QR symbol construction

use thiserror::Error;

use crate::models::ECLevel;

/// Input contract violations, reported before any module is drawn.
///
/// Internal consistency failures (a bad table entry, a placement that does
/// not consume every codeword bit) are not represented here; they panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Version outside 1..=40
    #[error("Version {0} is outside the supported range 1..=40")]
    InvalidVersion(u8),

    /// Mask pattern outside 0..=7
    #[error("Mask pattern {0} is outside the range 0..=7")]
    InvalidMask(u8),

    /// Unrecognised error correction level name
    #[error("Unknown error correction level {0:?} (expected L, M, Q or H)")]
    InvalidLevel(String),

    /// Data codeword count does not match the version/level capacity
    #[error(
        "Version {version} level {level:?} takes {expected} data codewords, got {actual}"
    )]
    DataLengthMismatch {
        version: u8,
        level: ECLevel,
        expected: usize,
        actual: usize,
    },

    /// Module query outside the symbol
    #[error("Module ({x}, {y}) is outside the {size}x{size} symbol")]
    OutOfBounds { x: usize, y: usize, size: usize },
}
