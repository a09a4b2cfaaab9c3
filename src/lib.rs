//! QR Code alignment pattern tables
//!
//! Computes, for each symbol version (1-40, ISO/IEC 18004), the module
//! coordinates of the alignment pattern centers, and renders them as literal
//! tables for embedding in an encoder.
//!
//! ```
//! use qr_alignment::{AlignmentCalculator, Position, Version};
//!
//! let v7 = Version::new(7).unwrap();
//! assert_eq!(AlignmentCalculator::axis_coordinates(v7), vec![6, 22, 38]);
//! assert_eq!(AlignmentCalculator::allowed_positions(Version::new(2).unwrap()), vec![Position::new(18, 18)]);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Alignment pattern coordinate calculation, layout and published reference
pub mod alignment;
/// Environment-driven settings
pub mod config;
mod debug;
/// Source-text rendering of computed tables
pub mod emit;
/// Core data structures (Version, Position, BitMatrix)
pub mod models;
/// Helpers behind the `qralign` command line tool
pub mod tools;

pub use alignment::{AlignmentCalculator, AlignmentTable, FinderCorner};
pub use emit::TableStyle;
pub use models::{Position, Version, VersionError};

/// Tables for the default emission range (`QR_ALIGN_FIRST_VERSION..=QR_ALIGN_LAST_VERSION`, 2..=40 unless set)
pub fn default_tables() -> Vec<AlignmentTable> {
    tools::tables_for_range(config::default_first_version(), config::default_last_version())
}

/// Render the default emission range in `style`
pub fn generate(style: TableStyle) -> String {
    emit::render_tables(&default_tables(), style)
}
