use serde::{Deserialize, Serialize};

use crate::{Coord, Offset2};

/// Pixel dimensions of the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Maps a pointer position in pixels to the `(col, row)` of an `n`x`n` grid drawn over the
    /// whole surface.
    ///
    /// The result is not clamped: positions left of or above the surface give negative values
    /// and positions at or past the far edges give `n` or more, so a grid lookup reports them as
    /// outside.
    pub fn pointer_to_offset(&self, (x, y): (f64, f64), size: Coord) -> Offset2 {
        let cells = f64::from(size);
        (
            floor_div(x, self.width / cells),
            floor_div(y, self.height / cells),
        )
    }
}

/// `floor(value / step)` saturated into `i32`, with non-finite results pushed out of range.
fn floor_div(value: f64, step: f64) -> i32 {
    let quotient = value / step;
    if quotient.is_nan() {
        return i32::MIN;
    }

    // `as` saturates and truncates toward zero
    let truncated = quotient as i32;
    if f64::from(truncated) > quotient {
        truncated - 1
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;
    use crate::Direction;

    const SURFACE: SurfaceSize = SurfaceSize::new(800.0, 800.0);

    #[test]
    fn origin_maps_to_first_cell() {
        assert_eq!(SURFACE.pointer_to_offset((0.0, 0.0), 3), (0, 0));
    }

    #[test]
    fn cells_split_surface_evenly() {
        assert_eq!(SURFACE.pointer_to_offset((266.0, 266.0), 3), (0, 0));
        assert_eq!(SURFACE.pointer_to_offset((267.0, 10.0), 3), (1, 0));
        assert_eq!(SURFACE.pointer_to_offset((400.0, 533.0), 3), (1, 1));
        assert_eq!(SURFACE.pointer_to_offset((799.9, 799.9), 3), (2, 2));
    }

    #[test]
    fn non_square_surface_uses_each_axis() {
        let surface = SurfaceSize::new(300.0, 90.0);
        assert_eq!(surface.pointer_to_offset((250.0, 40.0), 3), (2, 1));
    }

    #[test]
    fn positions_off_the_surface_are_not_found() {
        let grid = Grid::uniform(3, Direction::Up).unwrap();

        for pos in [
            (800.0, 0.0),
            (0.0, 800.0),
            (1200.0, 1200.0),
            (-0.5, 10.0),
            (10.0, -300.0),
        ] {
            let offset = SURFACE.pointer_to_offset(pos, 3);
            assert_eq!(grid.cell_at(offset), None, "{:?} mapped to {:?}", pos, offset);
        }
        assert_eq!(SURFACE.pointer_to_offset((-0.5, 0.0), 3), (-1, 0));
        assert_eq!(SURFACE.pointer_to_offset((800.0, 800.0), 3), (3, 3));
    }

    #[test]
    fn degenerate_surface_maps_outside() {
        let grid = Grid::uniform(3, Direction::Up).unwrap();
        let empty = SurfaceSize::new(0.0, 0.0);

        assert_eq!(grid.cell_at(empty.pointer_to_offset((0.0, 0.0), 3)), None);
        assert_eq!(grid.cell_at(empty.pointer_to_offset((5.0, 5.0), 3)), None);
    }
}
