//! Error type shared by every grid operation.

/// Errors returned by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column is outside `[0, ROWS) x [0, COLUMNS)`.
    OutOfBounds { row: usize, col: usize },
    /// The cell already holds a ship.
    AlreadyOccupied { row: usize, col: usize },
    /// No empty cell is left for a random placement.
    GridFull,
    /// A snapshot was taken from a grid of another size.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is out of bounds", row, col)
            }
            GridError::AlreadyOccupied { row, col } => {
                write!(f, "cell ({}, {}) already holds a ship", row, col)
            }
            GridError::GridFull => write!(f, "no empty cell left on the grid"),
            GridError::DimensionMismatch { expected, found } => write!(
                f,
                "expected a {}x{} grid, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
