use super::AlignmentCalculator;
use crate::models::Version;

// ISO/IEC 18004 Annex E, Table E.1. Index: [version - 2]
const ISO_AXIS_COORDINATES: [&[usize]; 39] = [
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// Published axis coordinates for `version` (empty for version 1)
pub fn reference_axis_coordinates(version: Version) -> &'static [usize] {
    match version.number() {
        1 => &[],
        n => ISO_AXIS_COORDINATES[n as usize - 2],
    }
}

/// A version whose computed axis coordinates differ from the published table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deviation {
    /// Affected version
    pub version: Version,
    /// Coordinates produced by [`AlignmentCalculator::axis_coordinates`]
    pub computed: Vec<usize>,
    /// Coordinates from the published table
    pub expected: &'static [usize],
}

/// Compare computed and published coordinates for one version
pub fn deviation(version: Version) -> Option<Deviation> {
    let computed = AlignmentCalculator::axis_coordinates(version);
    let expected = reference_axis_coordinates(version);
    if computed == expected {
        None
    } else {
        Some(Deviation {
            version,
            computed,
            expected,
        })
    }
}

/// Every version whose computed coordinates differ from the published table
pub fn deviations() -> Vec<Deviation> {
    Version::all().filter_map(deviation).collect()
}
