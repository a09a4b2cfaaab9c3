use super::AlignmentCalculator;
use crate::models::{BitMatrix, Position, Version};

/// Function module layout for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionLayout {
    mask: BitMatrix,
    alignment: Vec<Position>,
    version: Version,
}

impl FunctionLayout {
    /// Mark every function pattern of `version`, alignment patterns included
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut mask = BitMatrix::new(size, size);

        // Finder patterns + separators (8x8 areas at three corners)
        mask.fill_rect(0, 0, 8, 8);
        mask.fill_rect(size - 8, 0, size, 8);
        mask.fill_rect(0, size - 8, 8, size);

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            mask.set(6, i, true);
            mask.set(i, 6, true);
        }

        // Version 1 has no alignment pattern even though the formula yields one
        let alignment = if version.has_alignment_patterns() {
            AlignmentCalculator::allowed_positions(version)
        } else {
            Vec::new()
        };
        for pos in &alignment {
            mask.fill_rect(pos.col - 2, pos.row - 2, pos.col + 3, pos.row + 3);
        }

        // Format info areas
        for i in 0..9 {
            if i != 6 {
                mask.set(8, i, true);
                mask.set(i, 8, true);
            }
        }
        for i in 0..8 {
            mask.set(size - 1 - i, 8, true);
            mask.set(8, size - 1 - i, true);
        }

        // Dark module
        mask.set(8, size - 8, true);

        // Version info (v7+): 3x6 left of top-right finder, 6x3 above bottom-left
        if version.has_version_info() {
            mask.fill_rect(size - 11, 0, size - 8, 6);
            mask.fill_rect(0, size - 11, 6, size - 8);
        }

        Self {
            mask,
            alignment,
            version,
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Version this layout was built for
    pub fn version(&self) -> Version {
        self.version
    }

    /// Alignment pattern centers actually placed
    pub fn alignment_centers(&self) -> &[Position] {
        &self.alignment
    }

    /// Whether (x, y) is a function module
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Whether (x, y) lies inside a placed 5x5 alignment pattern
    pub fn is_alignment(&self, x: usize, y: usize) -> bool {
        self.alignment
            .iter()
            .any(|p| x.abs_diff(p.col) <= 2 && y.abs_diff(p.row) <= 2)
    }

    /// Modules left for data and error correction codewords
    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Raw data module count from the standard's capacity tables
    fn standard_raw_modules(version: Version) -> usize {
        let n = version.number() as usize;
        let mut result = (16 * n + 128) * n + 64;
        if n >= 2 {
            let k = n / 7 + 2;
            result -= (25 * k - 10) * k - 55;
            if n >= 7 {
                result -= 36;
            }
        }
        result
    }

    #[test]
    fn test_data_modules_match_standard() {
        for version in Version::all() {
            let layout = FunctionLayout::new(version);
            assert_eq!(
                layout.data_modules_count(),
                standard_raw_modules(version),
                "version {}",
                version
            );
        }
    }

    #[test]
    fn test_version_1_places_no_alignment() {
        let layout = FunctionLayout::new(Version::MIN);
        assert!(layout.alignment_centers().is_empty());
        assert_eq!(layout.data_modules_count(), 208);
    }

    #[test]
    fn test_alignment_clear_of_finders() {
        for version in Version::range(Version::new(2).unwrap(), Version::MAX) {
            let layout = FunctionLayout::new(version);
            let size = layout.size();
            for y in 0..size {
                for x in 0..size {
                    let in_finder =
                        (x < 8 && y < 8) || (x >= size - 8 && y < 8) || (x < 8 && y >= size - 8);
                    assert!(
                        !(in_finder && layout.is_alignment(x, y)),
                        "version {} alignment overlaps finder at ({}, {})",
                        version,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_version_2_alignment_modules() {
        let layout = FunctionLayout::new(Version::new(2).unwrap());
        assert!(layout.is_alignment(18, 18));
        assert!(layout.is_alignment(16, 20));
        assert!(!layout.is_alignment(15, 18));
        assert!(layout.is_function(18, 18));
        assert!(!layout.is_function(12, 12));
    }
}
