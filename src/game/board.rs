use std::iter;

use crate::game::piece::Piece;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(u8),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self != Cell::Empty
    }
}

/// Fixed-size matrix of settled blocks, indexed `[y][x]` with row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Only meaningful for in-range coordinates; bounds are the caller's concern.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_filled)
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }

    /// Writes the piece's footprint into the grid. The placement must already
    /// be collision-free; cells above row 0 have nowhere to go and are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y, value) in piece.blocks() {
            if x >= 0 && y >= 0 {
                self.set(x as usize, y as usize, Cell::Filled(value));
            }
        }
    }

    /// Removes every full row and pads the top with empty rows so the height
    /// is unchanged. Returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let rows = self.rows();
        self.cells.retain(|row| !row.iter().all(|cell| cell.is_filled()));

        let cleared = rows - self.cells.len();
        if cleared > 0 {
            let cols = self.cols;
            self.cells
                .splice(0..0, iter::repeat_with(|| vec![Cell::Empty; cols]).take(cleared));
        }
        cleared
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}
