use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that picks each cell's direction uniformly at random from a seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, size: Coord) -> Result<Grid> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let grid = Grid::new(size, |_| Direction::from_index(rng.random_range(0..4)))?;

        if grid.is_solved() {
            log::debug!("Generated grid is already solved, seed: {}", self.seed);
        }
        log::debug!("Generated {0}x{0} grid from seed {1}", size, self.seed);
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let a = RandomLayoutGenerator::new(42).generate(5).unwrap();
        let b = RandomLayoutGenerator::new(42).generate(5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generates_requested_size() {
        let grid = RandomLayoutGenerator::new(7).generate(GRID_SIZE).unwrap();
        assert_eq!(grid.size(), GRID_SIZE);
        assert_eq!(grid.cells().count(), 9);
    }

    #[test]
    fn uses_all_four_directions() {
        let grid = RandomLayoutGenerator::new(1).generate(16).unwrap();
        for dir in Direction::ALL {
            assert!(grid.directions().any(|d| d == dir), "missing {:?}", dir);
        }
    }

    #[test]
    fn zero_size_fails() {
        assert_eq!(
            RandomLayoutGenerator::new(0).generate(0),
            Err(GridError::InvalidSize(0))
        );
    }

    #[test]
    fn uniform_generator_fills_one_direction() {
        let grid = UniformLayoutGenerator::new(Direction::Down)
            .generate(4)
            .unwrap();
        assert!(grid.directions().all(|d| d == Direction::Down));
        assert!(grid.is_solved());
    }
}
