//! Alignment pattern placement
//!
//! Derives, for a symbol version, the axis coordinates that alignment
//! pattern centers may sit on, then keeps the cross-product positions that
//! stay clear of the three finder patterns.

/// Function-pattern layout built from the computed positions
pub mod layout;
/// Published ISO/IEC 18004 coordinates and comparison against the calculator
pub mod reference;

use crate::config::parallel_enabled;
use crate::debug::debug_enabled;
use crate::models::{Position, Version};
use rayon::prelude::*;

/// Side of the square finder region (7x7 pattern plus separator)
const FINDER_EXTENT: usize = 8;
/// Half-width of an alignment pattern around its center
const ALIGNMENT_RADIUS: usize = 2;
/// Coordinate of the timing patterns, always the first axis coordinate
const TIMING_COORD: usize = 6;

/// Finder pattern whose exclusion zone rejected a candidate position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderCorner {
    /// Finder at the top-left corner
    TopLeft,
    /// Finder at the top-right corner
    TopRight,
    /// Finder at the bottom-left corner
    BottomLeft,
}

/// Alignment pattern centers computed for one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    /// Symbol version
    pub version: Version,
    /// Allowed centers in row-major order
    pub positions: Vec<Position>,
}

/// Stateless alignment pattern calculator
pub struct AlignmentCalculator;

impl AlignmentCalculator {
    /// Number of alignment centers along each axis
    pub fn axis_divisions(version: Version) -> usize {
        2 + version.number() as usize / 7
    }

    /// Spacing between consecutive centers, always even.
    ///
    /// Twice `(total_dist + divisor / 2 + 1) / divisor` in truncating integer
    /// division, with no per-version overrides.
    pub fn step(version: Version) -> usize {
        let size = version.size();
        let divs = Self::axis_divisions(version);
        let total_dist = size - 7 - TIMING_COORD;
        let divisor = 2 * (divs - 1);
        (total_dist + divisor / 2 + 1) / divisor * 2
    }

    /// Axis coordinates of alignment centers, strictly increasing from 6 to `size - 7`
    pub fn axis_coordinates(version: Version) -> Vec<usize> {
        let size = version.size();
        let divs = Self::axis_divisions(version);
        let step = Self::step(version);

        let mut coords = Vec::with_capacity(divs);
        coords.push(TIMING_COORD);
        for i in (0..divs - 1).rev() {
            coords.push(size - 7 - i * step);
        }

        if debug_enabled() {
            eprintln!(
                "ALIGN: v{} size={} divs={} step={} coords={:?}",
                version, size, divs, step, coords
            );
        }
        coords
    }

    /// Row-major cross product of the axis coordinates with themselves
    pub fn candidate_positions(version: Version) -> Vec<Position> {
        let coords = Self::axis_coordinates(version);
        coords
            .iter()
            .flat_map(|&row| coords.iter().map(move |&col| Position::new(row, col)))
            .collect()
    }

    /// Which finder exclusion zone, if any, rejects `pos` in a symbol of `size` modules.
    ///
    /// Zones are checked top-left, top-right, bottom-left.
    pub fn finder_zone(pos: Position, size: usize) -> Option<FinderCorner> {
        let shift = size - 9;
        // row - 2 < 8, written without the subtraction
        let near_top = pos.row < FINDER_EXTENT + ALIGNMENT_RADIUS;
        let near_left = pos.col < FINDER_EXTENT + ALIGNMENT_RADIUS;
        let near_right = pos.col + ALIGNMENT_RADIUS > shift;
        let near_bottom = pos.row + ALIGNMENT_RADIUS > shift;

        if near_top && near_left {
            Some(FinderCorner::TopLeft)
        } else if near_top && near_right {
            Some(FinderCorner::TopRight)
        } else if near_bottom && near_left {
            Some(FinderCorner::BottomLeft)
        } else {
            None
        }
    }

    /// Alignment pattern centers for `version`, in row-major order.
    ///
    /// Version 1 still yields one position here; the standard places no
    /// alignment pattern there (see [`Version::has_alignment_patterns`]).
    pub fn allowed_positions(version: Version) -> Vec<Position> {
        let size = version.size();
        Self::candidate_positions(version)
            .into_iter()
            .filter(|&pos| match Self::finder_zone(pos, size) {
                Some(corner) => {
                    if debug_enabled() {
                        eprintln!("ALIGN: v{} drop {} ({:?})", version, pos, corner);
                    }
                    false
                }
                None => true,
            })
            .collect()
    }

    /// Table for a single version
    pub fn table(version: Version) -> AlignmentTable {
        AlignmentTable {
            version,
            positions: Self::allowed_positions(version),
        }
    }

    /// Tables for every version yielded by `versions`, sorted ascending by version.
    ///
    /// Versions are independent, so they are computed on the rayon pool
    /// unless `QR_ALIGN_PARALLEL=0`.
    pub fn compute_tables<I>(versions: I) -> Vec<AlignmentTable>
    where
        I: IntoIterator<Item = Version>,
    {
        let mut versions: Vec<Version> = versions.into_iter().collect();
        versions.sort_unstable();
        versions.dedup();

        if parallel_enabled() {
            versions.into_par_iter().map(Self::table).collect()
        } else {
            versions.into_iter().map(Self::table).collect()
        }
    }
}
