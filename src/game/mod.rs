pub mod board;
pub mod collision;
pub mod piece;
pub mod shape;
pub mod source;
pub mod state;

pub use board::Cell;
pub use source::{RandomSource, SequenceSource, ShapeSource};
pub use state::{Action, Game, GameState};
