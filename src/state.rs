//! Serializable snapshot of a grid.

use crate::common::GridError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Dimensions and occupied cells of a grid, ships in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub rows: usize,
    pub columns: usize,
    pub ships: Vec<(usize, usize)>,
}

impl<const R: usize, const C: usize> From<&Grid<R, C>> for GridState {
    fn from(grid: &Grid<R, C>) -> Self {
        GridState {
            rows: R,
            columns: C,
            ships: grid.ships().collect(),
        }
    }
}

impl<const R: usize, const C: usize> TryFrom<GridState> for Grid<R, C> {
    type Error = GridError;

    fn try_from(state: GridState) -> Result<Self, Self::Error> {
        if (state.rows, state.columns) != (R, C) {
            return Err(GridError::DimensionMismatch {
                expected: (R, C),
                found: (state.rows, state.columns),
            });
        }
        Grid::from_ships(state.ships)
    }
}
