use super::geometry::{alignment_pattern_positions, symbol_size};
use super::version::VersionInfo;
use crate::models::{BitMatrix, Version};

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
#[derive(Debug, Clone)]
pub struct FunctionMask {
    mask: BitMatrix,
    version: Version,
}

impl FunctionMask {
    /// Mark every finder, separator, timing, alignment, format and
    /// version module of `version`.
    pub fn new(version: Version) -> Self {
        let size = symbol_size(version);
        let mut mask = BitMatrix::square(size);

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            mask.set(6, i, true);
            mask.set(i, 6, true);
        }

        // Finder patterns + separators: 8x8 in three corners
        for i in 0..8 {
            for j in 0..8 {
                mask.set(j, i, true);
                mask.set(size - 1 - j, i, true);
                mask.set(j, size - 1 - i, true);
            }
        }

        // Alignment patterns
        for (cx, cy) in alignment_centers(version) {
            for y in cy - 2..=cy + 2 {
                for x in cx - 2..=cx + 2 {
                    mask.set(x, y, true);
                }
            }
        }

        // Format info areas, including the always-black module at (8, size - 8)
        for i in 0..8 {
            mask.set(i, 8, true);
            mask.set(8, i, true);
            mask.set(size - 1 - i, 8, true);
            mask.set(8, size - 1 - i, true);
        }
        mask.set(8, 8, true);

        // Version info (v7+)
        if version.has_version_info() {
            for i in 0..6 {
                for j in 0..3 {
                    let k = size - 11 + j;
                    mask.set(k, i, true);
                    mask.set(i, k, true);
                }
            }
        }

        Self { mask, version }
    }

    pub fn size(&self) -> usize {
        self.mask.width()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// The mask itself, black wherever a function module sits
    pub fn as_matrix(&self) -> &BitMatrix {
        &self.mask
    }

    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }
}

/// Alignment pattern centers, skipping the three that collide with finders
fn alignment_centers(version: Version) -> Vec<(usize, usize)> {
    let positions = alignment_pattern_positions(version);
    let last = positions.len().saturating_sub(1);
    let mut centers = Vec::new();
    for (i, &cx) in positions.iter().enumerate() {
        for (j, &cy) in positions.iter().enumerate() {
            let finder_corner = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
            if !finder_corner {
                centers.push((cx, cy));
            }
        }
    }
    centers
}

/// Start a symbol: every function module black, every data module white.
///
/// Returns the symbol matrix together with the function mask that guards it.
pub fn initialize_function_modules(version: Version) -> (BitMatrix, FunctionMask) {
    let func = FunctionMask::new(version);
    (func.as_matrix().clone(), func)
}

/// Draw the white detail of the function patterns (and the version blocks)
/// over a matrix whose function modules are all black.
///
/// Leaves data modules and format bits untouched.
pub fn draw_light_function_modules(matrix: &mut BitMatrix, version: Version) {
    let size = symbol_size(version);

    // Timing patterns alternate, starting black at index 6
    for i in (7..size - 7).step_by(2) {
        matrix.set(6, i, false);
        matrix.set(i, 6, false);
    }

    // Finder patterns: rings at Chebyshev distance 2 and 4 are white
    let far = size as isize - 4;
    for dy in -4isize..=4 {
        for dx in -4isize..=4 {
            let dist = dx.abs().max(dy.abs());
            if dist == 2 || dist == 4 {
                matrix.set_bounded(3 + dx, 3 + dy, false);
                matrix.set_bounded(far + dx, 3 + dy, false);
                matrix.set_bounded(3 + dx, far + dy, false);
            }
        }
    }

    // Alignment patterns: white ring around a black center
    for (cx, cy) in alignment_centers(version) {
        for y in cy - 1..=cy + 1 {
            for x in cx - 1..=cx + 1 {
                matrix.set(x, y, x == cx && y == cy);
            }
        }
    }

    if version.has_version_info() {
        VersionInfo::new(version).draw(matrix);
    }
}
