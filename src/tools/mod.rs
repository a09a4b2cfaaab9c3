use crate::alignment::layout::FunctionLayout;
use crate::alignment::reference::{Deviation, deviation};
use crate::alignment::{AlignmentCalculator, AlignmentTable};
use crate::emit::{TableStyle, render_tables};
use crate::models::{Position, Version};
use image::{GrayImage, Luma};
use std::fs;
use std::path::Path;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);
const FUNCTION: Luma<u8> = Luma([192]);

/// Compute tables for `from..=to` (ascending).
pub fn tables_for_range(from: Version, to: Version) -> Vec<AlignmentTable> {
    AlignmentCalculator::compute_tables(Version::range(from, to))
}

/// Render tables for `from..=to` and write them to `path`.
pub fn write_table_file<P: AsRef<Path>>(
    path: P,
    from: Version,
    to: Version,
    style: TableStyle,
) -> std::io::Result<()> {
    let text = render_tables(&tables_for_range(from, to), style);
    fs::write(path, text)
}

/// Draw the function layout of `version`, `scale` pixels per module.
///
/// Data modules are white, function modules light gray, and alignment
/// patterns are drawn with their real dark/light rings.
pub fn render_layout(version: Version, scale: u32) -> GrayImage {
    let layout = FunctionLayout::new(version);
    let size = layout.size();
    let scale = scale.max(1);
    let side = size as u32 * scale;

    GrayImage::from_fn(side, side, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        if let Some(center) = layout
            .alignment_centers()
            .iter()
            .find(|p| x.abs_diff(p.col) <= 2 && y.abs_diff(p.row) <= 2)
        {
            // Ring distance 2 and center are dark, distance 1 is light
            let ring = x.abs_diff(center.col).max(y.abs_diff(center.row));
            if ring == 1 { LIGHT } else { DARK }
        } else if layout.is_function(x, y) {
            FUNCTION
        } else {
            LIGHT
        }
    })
}

/// Render the layout of `version` and save it as an image (format from the extension).
pub fn save_layout_png<P: AsRef<Path>>(version: Version, scale: u32, path: P) -> image::ImageResult<()> {
    render_layout(version, scale).save(path)
}

/// Property check results for one version
#[derive(Debug, Clone)]
pub struct VersionAudit {
    /// Audited version
    pub version: Version,
    /// Computed axis coordinates
    pub coords: Vec<usize>,
    /// Spacing between centers
    pub step: usize,
    /// Allowed centers
    pub positions: Vec<Position>,
    /// Violated properties, empty when the version passes
    pub failures: Vec<String>,
    /// Difference from the published coordinates, reported but not a failure
    pub deviation: Option<Deviation>,
}

impl VersionAudit {
    /// True when no property failed
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check every coordinate property for one version.
pub fn audit_version(version: Version) -> VersionAudit {
    let size = version.size();
    let coords = AlignmentCalculator::axis_coordinates(version);
    let step = AlignmentCalculator::step(version);
    let positions = AlignmentCalculator::allowed_positions(version);
    let candidates = AlignmentCalculator::candidate_positions(version);
    let mut failures = Vec::new();

    let divs = AlignmentCalculator::axis_divisions(version);
    if coords.len() != divs {
        failures.push(format!("expected {} coordinates, got {}", divs, coords.len()));
    }
    if coords.first() != Some(&6) {
        failures.push(format!("first coordinate {:?} is not 6", coords.first()));
    }
    if coords.last() != Some(&(size - 7)) {
        failures.push(format!("last coordinate {:?} is not {}", coords.last(), size - 7));
    }
    if !coords.windows(2).all(|w| w[0] < w[1]) {
        failures.push(format!("coordinates not strictly increasing: {:?}", coords));
    }
    if step % 2 != 0 {
        failures.push(format!("step {} is odd", step));
    }
    if coords.len() > 2 && !coords.windows(2).skip(1).all(|w| w[1] - w[0] == step) {
        failures.push(format!("gaps after the first are not all {}: {:?}", step, coords));
    }
    for pos in &positions {
        if let Some(corner) = AlignmentCalculator::finder_zone(*pos, size) {
            failures.push(format!("{} lies in the {:?} finder zone", pos, corner));
        }
        if !candidates.contains(pos) {
            failures.push(format!("{} is not a candidate position", pos));
        }
    }
    if !positions.windows(2).all(|w| w[0] < w[1]) {
        failures.push("positions not in row-major order".to_string());
    }

    VersionAudit {
        version,
        coords,
        step,
        positions,
        failures,
        deviation: deviation(version),
    }
}

/// Audit every version in `from..=to`.
pub fn audit(from: Version, to: Version) -> Vec<VersionAudit> {
    Version::range(from, to).map(audit_version).collect()
}
