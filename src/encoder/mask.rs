/// Mask application (XOR of a mask pattern over the data modules)
use super::function_mask::FunctionMask;
use crate::models::{BitMatrix, MaskPattern};

/// XOR the data modules of `matrix` with `mask_pattern`.
///
/// Function modules are never touched. Applying the same pattern twice
/// restores the original matrix, so a caller can apply, score and undo.
pub fn apply_mask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, func: &FunctionMask) {
    let size = func.size();
    debug_assert_eq!(matrix.width(), size);

    for y in 0..size {
        for x in 0..size {
            if !func.is_function(x, y) && mask_pattern.is_masked(x, y) {
                matrix.toggle(x, y);
            }
        }
    }
}
