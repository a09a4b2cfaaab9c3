use std::fmt;

/// Module coordinate of an alignment pattern center.
///
/// Ordering is row-major, matching the order positions are discovered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Row (y) in modules
    pub row: usize,
    /// Column (x) in modules
    pub col: usize,
}

impl Position {
    /// Create a new position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

/// Renders as `(row, col)`, the literal pair syntax of the emitted tables
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
