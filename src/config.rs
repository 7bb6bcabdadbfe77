use thiserror::Error;

use crate::constants::{
    BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, MAX_COLS, MAX_ROWS, SCORE_PER_LINE,
};
use crate::game::piece::standard_shapes;
use crate::game::shape::Shape;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("grid {rows}x{cols} is too large (at most {max_rows} rows and {max_cols} columns)")]
    GridTooLarge {
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
    },
    #[error("drop interval must be positive")]
    ZeroDropInterval,
    #[error("shape set is empty")]
    NoShapes,
    #[error("shape {index} is {width}x{height}, larger than the {cols}x{rows} grid")]
    ShapeTooLarge {
        index: usize,
        width: usize,
        height: usize,
        cols: usize,
        rows: usize,
    },
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub drop_interval_ms: u64,
    pub score_per_line: u32,
    pub shapes: Vec<Shape>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
            drop_interval_ms: DROP_INTERVAL_MS,
            score_per_line: SCORE_PER_LINE,
            shapes: standard_shapes(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > MAX_ROWS || self.cols > MAX_COLS {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
                max_rows: MAX_ROWS,
                max_cols: MAX_COLS,
            });
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.shapes.is_empty() {
            return Err(ConfigError::NoShapes);
        }
        for (index, shape) in self.shapes.iter().enumerate() {
            // Either orientation has to fit, or rotation could never be legal.
            let longest = shape.width().max(shape.height());
            if longest > self.cols || longest > self.rows {
                return Err(ConfigError::ShapeTooLarge {
                    index,
                    width: shape.width(),
                    height: shape.height(),
                    cols: self.cols,
                    rows: self.rows,
                });
            }
        }
        Ok(())
    }
}
