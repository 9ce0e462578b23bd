use ndarray::Array2;

/// Single coordinate axis used for the grid side length and positions.
pub type Coord = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(col, row)`.
pub type Coord2 = (Coord, Coord);

/// Signed `(col, row)` that may fall outside the grid, as produced by pointer mapping.
pub type Offset2 = (i32, i32);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts a signed offset into in-bounds coordinates for a square grid of side `size`.
pub fn offset_to_coords((col, row): Offset2, size: Coord) -> Option<Coord2> {
    let col = Coord::try_from(col).ok()?;
    let row = Coord::try_from(row).ok()?;
    (col < size && row < size).then_some((col, row))
}

pub trait BlockIterExt {
    fn iter_block(&self, center: Coord2) -> BlockIter;
}

impl<T> BlockIterExt for Array2<T> {
    fn iter_block(&self, center: Coord2) -> BlockIter {
        let dim = self.dim();
        let size = (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        );
        BlockIter::new(center, size)
    }
}

/// The 3x3 block around a cell, the cell itself included.
const DISPLACEMENTS: [(i8, i8); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// In-bounds members of a 3x3 block, clipped at the edges without wraparound.
#[derive(Debug)]
pub struct BlockIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl BlockIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for BlockIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[usize::from(self.index)], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn block_is_clipped_at_corners_and_edges() {
        let corner: Vec<_> = BlockIter::new((0, 0), (3, 3)).collect();
        assert_eq!(corner, [(0, 0), (1, 0), (0, 1), (1, 1)]);

        assert_eq!(BlockIter::new((1, 0), (3, 3)).count(), 6);
        assert_eq!(BlockIter::new((2, 2), (3, 3)).count(), 4);
        assert_eq!(BlockIter::new((1, 1), (3, 3)).count(), 9);
    }

    #[test]
    fn block_never_wraps_around() {
        let far_corner: Vec<_> = BlockIter::new((2, 2), (3, 3)).collect();
        assert!(!far_corner.contains(&(0, 0)));
        assert_eq!(far_corner, [(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn single_cell_block_contains_only_itself() {
        let only: Vec<_> = BlockIter::new((0, 0), (1, 1)).collect();
        assert_eq!(only, [(0, 0)]);
    }

    #[test]
    fn offsets_outside_the_grid_are_rejected() {
        assert_eq!(offset_to_coords((0, 0), 3), Some((0, 0)));
        assert_eq!(offset_to_coords((2, 1), 3), Some((2, 1)));
        assert_eq!(offset_to_coords((3, 0), 3), None);
        assert_eq!(offset_to_coords((0, -1), 3), None);
        assert_eq!(offset_to_coords((i32::MAX, 0), 3), None);
    }
}
