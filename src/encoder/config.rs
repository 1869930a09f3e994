use std::sync::OnceLock;

use log::warn;

use crate::models::MaskPattern;

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

fn parse_env_mask(name: &str) -> Option<MaskPattern> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<u8>().map(MaskPattern::try_from) {
        Ok(Ok(mask)) => Some(mask),
        _ => {
            warn!("Ignoring {}={:?}: expected a mask pattern 0-7", name, raw);
            None
        }
    }
}

static MASK_SEARCH_PARALLEL: OnceLock<bool> = OnceLock::new();

/// Score the eight mask candidates on independent copies in parallel
pub(crate) fn mask_search_parallel() -> bool {
    *MASK_SEARCH_PARALLEL.get_or_init(|| parse_env_bool_u8("QR_MASK_SEARCH_PARALLEL", true))
}

static FORCED_MASK: OnceLock<Option<MaskPattern>> = OnceLock::new();

/// Mask pattern to use instead of searching, if any
pub(crate) fn forced_mask() -> Option<MaskPattern> {
    *FORCED_MASK.get_or_init(|| parse_env_mask("QR_FORCE_MASK"))
}
