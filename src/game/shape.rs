use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ShapeError {
    #[error("shape has no rows")]
    NoRows,
    #[error("shape row {row} has no cells")]
    EmptyRow { row: usize },
    #[error("shape row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("shape has no occupied cells")]
    NoBlocks,
}

/// Rectangular cell matrix of a piece. Zero is empty, any other value is a
/// block; the value itself only matters for colouring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<u8>>,
}

impl Shape {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, ShapeError> {
        let width = match rows.first() {
            Some(first) => first.len(),
            None => return Err(ShapeError::NoRows),
        };

        for (i, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(ShapeError::EmptyRow { row: i });
            }
            if row.len() != width {
                return Err(ShapeError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        if rows.iter().flatten().all(|&cell| cell == 0) {
            return Err(ShapeError::NoBlocks);
        }

        Ok(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Occupied cells as `(x, y, value)` in shape-local coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(move |(x, &value)| (x, y, value))
        })
    }

    /// Quarter turn clockwise around the bounding box: the old columns,
    /// read bottom to top, become the new rows.
    pub fn rotate(&self) -> Self {
        let height = self.height();
        let rows: Vec<Vec<u8>> = (0..self.width())
            .map(|i| {
                (0..height)
                    .map(|j| self.cell(i, height - 1 - j).unwrap_or(0))
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { rows }
    }
}
