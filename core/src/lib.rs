#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use direction::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use mapping::*;
pub use types::*;

mod direction;
mod engine;
mod error;
mod generator;
mod mapping;
mod types;

/// Side length of the puzzle shipped with the app.
pub const GRID_SIZE: Coord = 3;

/// Square grid of arrow cells.
///
/// Storage is an `(n, n)` array indexed `[col, row]` in standard layout, so the flat offset of
/// `(col, row)` is `row + col * n`. Layouts passed as flat slices use the same order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Direction>", into = "Array2<Direction>")]
pub struct Grid {
    cells: Array2<Direction>,
}

impl Grid {
    /// Builds an `n`x`n` grid asking `direction_at` for the initial direction of every cell.
    pub fn new(size: Coord, mut direction_at: impl FnMut(Coord2) -> Direction) -> Result<Self> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }

        let side = usize::from(size);
        let cells = Array2::from_shape_fn((side, side), |(col, row)| {
            direction_at((col as Coord, row as Coord))
        });
        Ok(Self { cells })
    }

    pub fn uniform(size: Coord, direction: Direction) -> Result<Self> {
        Self::new(size, |_| direction)
    }

    /// Builds a grid from a flat layout in `row + col * n` order.
    pub fn from_directions(size: Coord, directions: &[Direction]) -> Result<Self> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }

        let side = usize::from(size);
        let cells = Array2::from_shape_vec((side, side), Vec::from(directions))
            .map_err(|_| GridError::LayoutMismatch)?;
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0 as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    /// Flat storage offset of `coords`.
    pub fn flat_index(&self, (col, row): Coord2) -> usize {
        usize::from(row) + usize::from(col) * usize::from(self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GridError::InvalidCoords)
        }
    }

    /// Maps a signed offset onto the grid, `None` when it lies outside.
    pub fn locate(&self, offset: Offset2) -> Option<Coord2> {
        offset_to_coords(offset, self.size())
    }

    pub fn get(&self, coords: Coord2) -> Option<Direction> {
        let coords = self.validate_coords(coords).ok()?;
        Some(self[coords])
    }

    /// Cell at `offset`, or `None` outside the grid, which callers treat as "skip".
    pub fn cell_at(&self, offset: Offset2) -> Option<Cell> {
        let coords = self.locate(offset)?;
        Some(Cell {
            coords,
            direction: self[coords],
        })
    }

    pub fn set(&mut self, coords: Coord2, direction: Direction) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()] = direction;
        Ok(())
    }

    /// All cells in storage order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .indexed_iter()
            .map(|((col, row), &direction)| Cell {
                coords: (col as Coord, row as Coord),
                direction,
            })
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.cells.iter().copied()
    }

    /// Advances the cell at `coords` one step clockwise.
    pub fn rotate_one(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        *cell = cell.next();
        log::trace!("rotated {:?} to {:?}", coords, cell);
        Ok(())
    }

    /// Rotates the cell at `coords` and every in-bounds neighbor of its 3x3 block.
    ///
    /// Returns how many cells were rotated.
    pub fn rotate_block(&mut self, coords: Coord2) -> Result<CellCount> {
        let coords = self.validate_coords(coords)?;
        let mut rotated = 0;
        for pos in self.cells.iter_block(coords) {
            let cell = &mut self.cells[pos.to_nd_index()];
            *cell = cell.next();
            rotated += 1;
        }
        log::trace!("rotated {} cells around {:?}", rotated, coords);
        Ok(rotated)
    }

    /// Whether every cell points the same way.
    pub fn is_solved(&self) -> bool {
        Direction::ALL
            .into_iter()
            .any(|target| self.cells.iter().all(|&direction| direction == target))
    }
}

/// Only square arrays with a side between 1 and `Coord::MAX` make a grid.
impl TryFrom<Array2<Direction>> for Grid {
    type Error = GridError;

    fn try_from(cells: Array2<Direction>) -> Result<Self> {
        let (cols, rows) = cells.dim();
        if cols != rows {
            return Err(GridError::LayoutMismatch);
        }

        let size = Coord::try_from(cols).map_err(|_| GridError::LayoutMismatch)?;
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Self { cells })
    }
}

impl From<Grid> for Array2<Direction> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl Index<Coord2> for Grid {
    type Output = Direction;

    fn index(&self, (col, row): Coord2) -> &Self::Output {
        &self.cells[(col as usize, row as usize)]
    }
}
