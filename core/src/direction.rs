use serde::{Deserialize, Serialize};

use crate::{Coord2, Offset2};

/// Orientation of a cell's arrow, cycling clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in rotation order, starting at `Up`.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// One clockwise step: up, right, down, left and back to up.
    pub const fn next(self) -> Self {
        use Direction::*;
        match self {
            Up => Right,
            Right => Down,
            Down => Left,
            Left => Up,
        }
    }

    /// Maps any index onto the cycle, `0` being `Up`.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    pub const fn index(self) -> u8 {
        use Direction::*;
        match self {
            Up => 0,
            Right => 1,
            Down => 2,
            Left => 3,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Up
    }
}

/// Read-only view of one grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coords: Coord2,
    pub direction: Direction,
}

impl Cell {
    /// Midpoint of the cell in grid units.
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.coords.0) + 0.5, f64::from(self.coords.1) + 0.5)
    }

    pub fn offset(&self) -> Offset2 {
        (self.coords.0.into(), self.coords.1.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_follows_clockwise_cycle() {
        assert_eq!(Direction::Up.next(), Direction::Right);
        assert_eq!(Direction::Right.next(), Direction::Down);
        assert_eq!(Direction::Down.next(), Direction::Left);
        assert_eq!(Direction::Left.next(), Direction::Up);
    }

    #[test]
    fn four_steps_return_to_start() {
        for dir in Direction::ALL {
            assert_eq!(dir.next().next().next().next(), dir);
            assert_ne!(dir.next(), dir);
        }
    }

    #[test]
    fn index_agrees_with_cycle_order() {
        for (i, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(dir.index()), i);
            assert_eq!(Direction::from_index(dir.index()), dir);
        }
        assert_eq!(Direction::from_index(5), Direction::Right);
    }

    #[test]
    fn cell_center_is_midpoint() {
        let cell = Cell {
            coords: (2, 0),
            direction: Direction::Left,
        };
        assert_eq!(cell.center(), (2.5, 0.5));
    }
}
