//! A fixed-size grid recording which cells hold a ship.
//!
//! Dimensions are const generics, so a grid never allocates and its size can
//! not change after construction. How a cell stores its state is private; the
//! public API only answers whether a cell is occupied.

use crate::common::GridError;
use crate::config::{COLUMNS, ROWS};
use core::fmt;
use rand::Rng;

/// Grid with the default 7x7 dimensions.
pub type StandardGrid = Grid<ROWS, COLUMNS>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Occupancy {
    #[default]
    Empty,
    Ship,
}

/// A `R×C` playing surface where each cell is either empty or holds a ship.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const R: usize, const C: usize> {
    cells: [[Occupancy; C]; R],
}

impl<const R: usize, const C: usize> Grid<R, C> {
    /// Create a grid with every cell empty.
    pub fn new() -> Self {
        Grid {
            cells: [[Occupancy::Empty; C]; R],
        }
    }

    /// Build a grid by placing a ship on each `(row, col)` in order.
    /// Stops at the first placement that fails.
    pub fn from_ships<I>(iter: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new();
        for (row, col) in iter {
            grid.place_ship(row, col)?;
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn columns(&self) -> usize {
        C
    }

    /// Place a ship at (row, col).
    ///
    /// Fails with [`GridError::OutOfBounds`] or [`GridError::AlreadyOccupied`];
    /// the grid is left untouched in both cases.
    pub fn place_ship(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        if *cell == Occupancy::Ship {
            return Err(GridError::AlreadyOccupied { row, col });
        }
        *cell = Occupancy::Ship;
        Ok(())
    }

    /// Returns whether (row, col) holds a ship.
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col] == Occupancy::Ship)
    }

    /// Number of cells holding a ship.
    pub fn ship_count(&self) -> usize {
        self.ships().count()
    }

    /// Returns `true` when no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|cell| *cell == Occupancy::Ship)
    }

    /// Iterator over the occupied cells in row-major order.
    #[inline]
    pub fn ships(&self) -> Ships<'_, R, C> {
        Ships { grid: self, idx: 0 }
    }

    /// Picks an empty cell uniformly at random, or `None` if the grid is full.
    pub fn random_empty_cell<G: Rng + ?Sized>(&self, rng: &mut G) -> Option<(usize, usize)> {
        let empty = R * C - self.ship_count();
        if empty == 0 {
            return None;
        }
        let nth = rng.random_range(0..empty);
        self.cells
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, cell)| **cell == Occupancy::Empty)
            .nth(nth)
            .map(|(idx, _)| (idx / C, idx % C))
    }

    /// Places a ship on a random empty cell and returns where it went.
    pub fn place_random<G: Rng + ?Sized>(
        &mut self,
        rng: &mut G,
    ) -> Result<(usize, usize), GridError> {
        let (row, col) = self.random_empty_cell(rng).ok_or(GridError::GridFull)?;
        self.place_ship(row, col)?;
        Ok((row, col))
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= R || col >= C {
            Err(GridError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    fn write_rows(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let glyph = match cell {
                    Occupancy::Ship => '■',
                    Occupancy::Empty => '□',
                };
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", glyph)?;
            }
            if r + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize> Default for Grid<R, C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize> fmt::Debug for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}, {}>:", R, C)?;
        self.write_rows(f)
    }
}

impl<const R: usize, const C: usize> fmt::Display for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rows(f)
    }
}

/// Iterator over the occupied cells of a grid.
#[derive(Clone, Copy)]
pub struct Ships<'a, const R: usize, const C: usize> {
    grid: &'a Grid<R, C>,
    idx: usize,
}

impl<'a, const R: usize, const C: usize> Iterator for Ships<'a, R, C> {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < R * C {
            let (row, col) = (self.idx / C, self.idx % C);
            self.idx += 1;
            if self.grid.cells[row][col] == Occupancy::Ship {
                return Some((row, col));
            }
        }
        None
    }
}
