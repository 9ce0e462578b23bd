use crate::*;
pub use random::*;

mod random;

/// Strategy for the initial direction of every cell.
pub trait LayoutGenerator {
    fn generate(self, size: Coord) -> Result<Grid>;
}

/// Every cell starts pointing the same way; mostly useful for deterministic setups.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UniformLayoutGenerator {
    direction: Direction,
}

impl UniformLayoutGenerator {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl LayoutGenerator for UniformLayoutGenerator {
    fn generate(self, size: Coord) -> Result<Grid> {
        Grid::uniform(size, self.direction)
    }
}
