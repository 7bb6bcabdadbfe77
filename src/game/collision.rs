use crate::game::board::Grid;
use crate::game::piece::Position;
use crate::game::shape::Shape;

/// Whether `shape` placed at `position` is illegal: any block left of column
/// 0, right of the last column, below the floor, or on a settled cell.
/// Blocks above row 0 only answer to the side walls.
pub fn collides(shape: &Shape, position: Position, grid: &Grid) -> bool {
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;

    shape.cells().any(|(x, y, _)| {
        let abs_x = position.x + x as i32;
        let abs_y = position.y + y as i32;
        abs_x < 0
            || abs_x >= cols
            || abs_y >= rows
            || (abs_y >= 0 && grid.is_occupied(abs_x as usize, abs_y as usize))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;
    use crate::game::piece::PieceKind;
    use proptest::prelude::*;

    #[test]
    fn empty_grid_accepts_spawn_position() {
        let grid = Grid::new(20, 10);
        for kind in PieceKind::ALL {
            assert!(!collides(&kind.shape(), Position::new(4, 1), &grid));
        }
    }

    #[test]
    fn walls_and_floor_block() {
        let grid = Grid::new(20, 10);
        let i = PieceKind::I.shape();
        assert!(collides(&i, Position::new(-1, 5), &grid));
        assert!(!collides(&i, Position::new(6, 5), &grid));
        assert!(collides(&i, Position::new(7, 5), &grid));
        assert!(!collides(&i, Position::new(0, 19), &grid));
        assert!(collides(&i, Position::new(0, 20), &grid));
    }

    #[test]
    fn above_the_grid_is_open() {
        let mut grid = Grid::new(20, 10);
        grid.set(4, 0, Cell::Filled(1));
        let o = PieceKind::O.shape();
        assert!(!collides(&o, Position::new(4, -2), &grid));
        assert!(collides(&o, Position::new(4, -1), &grid));
        assert!(collides(&o, Position::new(-1, -5), &grid));
    }

    #[test]
    fn settled_cells_block_only_under_occupied_shape_cells() {
        let mut grid = Grid::new(20, 10);
        grid.set(4, 10, Cell::Filled(1));
        let t = PieceKind::T.shape();
        // T's top row is [0, 1, 0]; its empty corners may overlap settled cells.
        assert!(!collides(&t, Position::new(4, 10), &grid));
        assert!(collides(&t, Position::new(3, 10), &grid));
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        prop::collection::vec(prop::bool::weighted(0.3), 8 * 6).prop_map(|bits| {
            let mut grid = Grid::new(8, 6);
            for (i, filled) in bits.into_iter().enumerate() {
                if filled {
                    grid.set(i % 6, i / 6, Cell::Filled(1));
                }
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn matches_per_block_definition(
            grid in arb_grid(),
            kind in prop::sample::select(PieceKind::ALL.to_vec()),
            x in -4i32..10,
            y in -4i32..12,
        ) {
            let shape = kind.shape();
            let expected = shape.cells().any(|(cx, cy, _)| {
                let (ax, ay) = (x + cx as i32, y + cy as i32);
                if ax < 0 || ax >= 6 || ay >= 8 {
                    return true;
                }
                ay >= 0 && grid.cell(ax as usize, ay as usize) != Some(Cell::Empty)
            });
            prop_assert_eq!(collides(&shape, Position::new(x, y), &grid), expected);
        }
    }
}
