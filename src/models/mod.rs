/// Bit grid used for function module layouts
pub mod matrix;
/// Alignment pattern center coordinate
pub mod position;
/// Symbol version and its validation
pub mod version;

pub use matrix::BitMatrix;
pub use position::Position;
pub use version::{Version, VersionError};
