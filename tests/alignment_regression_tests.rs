//! Regression tests for alignment pattern coordinates
//!
//! These pin the coordinate properties for every version and the literal
//! behavior of the placement rule, including where it departs from the
//! published tables.

use qr_alignment::alignment::reference::{deviations, reference_axis_coordinates};
use qr_alignment::{AlignmentCalculator, FinderCorner, Position, Version};

fn v(n: u8) -> Version {
    Version::new(n).expect("valid version")
}

fn versions_with_tables() -> impl Iterator<Item = Version> {
    Version::range(v(2), Version::MAX)
}

fn positions(pairs: &[(usize, usize)]) -> Vec<Position> {
    pairs.iter().copied().map(Position::from).collect()
}

#[test]
fn test_axis_coordinates_shape() {
    for version in versions_with_tables() {
        let coords = AlignmentCalculator::axis_coordinates(version);
        let n = version.number() as usize;
        assert_eq!(coords.len(), 2 + n / 7, "version {}", version);
        assert_eq!(coords[0], 6, "version {}", version);
        assert_eq!(*coords.last().unwrap(), version.size() - 7, "version {}", version);
        assert!(
            coords.windows(2).all(|w| w[0] < w[1]),
            "version {} not strictly increasing: {:?}",
            version,
            coords
        );
    }
}

#[test]
fn test_step_even_and_uniform() {
    for version in versions_with_tables() {
        let step = AlignmentCalculator::step(version);
        assert_eq!(step % 2, 0, "version {} step {}", version, step);

        let coords = AlignmentCalculator::axis_coordinates(version);
        for w in coords.windows(2).skip(1) {
            assert_eq!(w[1] - w[0], step, "version {}: {:?}", version, coords);
        }
    }
}

#[test]
fn test_allowed_positions_clear_of_finders() {
    for version in versions_with_tables() {
        let size = version.size();
        let shift = size - 9;
        for pos in AlignmentCalculator::allowed_positions(version) {
            let (row, col) = (pos.row as isize, pos.col as isize);
            let shift = shift as isize;
            assert!(!(row - 2 < 8 && col - 2 < 8), "v{} {} top-left", version, pos);
            assert!(!(row - 2 < 8 && col + 2 > shift), "v{} {} top-right", version, pos);
            assert!(!(row + 2 > shift && col - 2 < 8), "v{} {} bottom-left", version, pos);
        }
    }
}

#[test]
fn test_allowed_positions_subset_of_candidates() {
    for version in Version::all() {
        let candidates = AlignmentCalculator::candidate_positions(version);
        let allowed = AlignmentCalculator::allowed_positions(version);
        assert!(allowed.iter().all(|p| candidates.contains(p)), "version {}", version);

        // Exactly the three finder corners are dropped
        let divs = AlignmentCalculator::axis_divisions(version);
        assert_eq!(candidates.len(), divs * divs);
        assert_eq!(allowed.len(), divs * divs - 3, "version {}", version);

        // Row-major discovery order is preserved
        assert!(allowed.windows(2).all(|w| w[0] < w[1]), "version {}", version);
    }
}

#[test]
fn test_version_2_scenario() {
    let version = v(2);
    assert_eq!(version.size(), 25);
    assert_eq!(AlignmentCalculator::axis_coordinates(version), vec![6, 18]);
    assert_eq!(
        AlignmentCalculator::allowed_positions(version),
        vec![Position::new(18, 18)]
    );

    let size = version.size();
    let corners: Vec<Option<FinderCorner>> = AlignmentCalculator::candidate_positions(version)
        .into_iter()
        .map(|p| AlignmentCalculator::finder_zone(p, size))
        .collect();
    assert_eq!(
        corners,
        vec![
            Some(FinderCorner::TopLeft),
            Some(FinderCorner::TopRight),
            Some(FinderCorner::BottomLeft),
            None,
        ]
    );
}

#[test]
fn test_version_7_scenario() {
    let version = v(7);
    assert_eq!(version.size(), 45);
    assert_eq!(AlignmentCalculator::axis_divisions(version), 3);
    assert_eq!(AlignmentCalculator::axis_coordinates(version), vec![6, 22, 38]);
}

#[test]
fn test_version_14_positions() {
    assert_eq!(
        AlignmentCalculator::allowed_positions(v(14)),
        positions(&[
            (6, 26),
            (6, 46),
            (26, 6),
            (26, 26),
            (26, 46),
            (26, 66),
            (46, 6),
            (46, 26),
            (46, 46),
            (46, 66),
            (66, 26),
            (66, 46),
            (66, 66),
        ])
    );
}

#[test]
fn test_version_40_positions() {
    let allowed = AlignmentCalculator::allowed_positions(Version::MAX);
    assert_eq!(allowed.len(), 46);
    assert_eq!(allowed[0], Position::new(6, 30));
    assert_eq!(allowed[4], Position::new(6, 142));
    assert_eq!(allowed[5], Position::new(30, 6));
    assert_eq!(allowed[45], Position::new(170, 170));
    assert!(!allowed.contains(&Position::new(170, 6)));
    assert!(!allowed.contains(&Position::new(6, 170)));
}

#[test]
fn test_version_1_known_deviation() {
    // The standard defines no alignment pattern for version 1; the rule
    // still yields two coordinates and one position. Kept as-is.
    let version = Version::MIN;
    assert_eq!(AlignmentCalculator::axis_coordinates(version), vec![6, 14]);
    assert_eq!(
        AlignmentCalculator::allowed_positions(version),
        vec![Position::new(14, 14)]
    );
    assert!(reference_axis_coordinates(version).is_empty());
    assert!(!version.has_alignment_patterns());
}

#[test]
fn test_matches_published_table_except_known_versions() {
    for version in versions_with_tables() {
        let n = version.number();
        let computed = AlignmentCalculator::axis_coordinates(version);
        if n == 36 || n == 39 {
            assert_ne!(computed, reference_axis_coordinates(version), "version {}", n);
        } else {
            assert_eq!(computed, reference_axis_coordinates(version), "version {}", n);
        }
    }

    let known: Vec<u8> = deviations().iter().map(|d| d.version.number()).collect();
    assert_eq!(known, vec![1, 36, 39]);
}

#[test]
fn test_version_39_literal_coordinates() {
    assert_eq!(AlignmentCalculator::step(v(39)), 26);
    assert_eq!(
        AlignmentCalculator::axis_coordinates(v(39)),
        vec![6, 36, 62, 88, 114, 140, 166]
    );
}

#[test]
fn test_total_position_count() {
    let total: usize = versions_with_tables()
        .map(|version| AlignmentCalculator::allowed_positions(version).len())
        .sum();
    assert_eq!(total, 799);
}

#[test]
fn test_out_of_range_versions_rejected() {
    assert!(Version::new(0).is_err());
    assert!(Version::new(41).is_err());
    assert!("41".parse::<Version>().is_err());
    assert!(Version::try_from(u32::MAX).is_err());
}
