pub const BOARD_HEIGHT: usize = 20;
pub const BOARD_WIDTH: usize = 10;

// Gravity step in milliseconds
pub const DROP_INTERVAL_MS: u64 = 1000;
pub const SCORE_PER_LINE: u32 = 10;

// Terminal columns drawn per grid cell
pub const CELL_WIDTH: usize = 2;

// Largest grid whose bordered board still fits a terminal area (u16 cells)
pub const MAX_ROWS: usize = u16::MAX as usize - 2;
pub const MAX_COLS: usize = (u16::MAX as usize - 2) / CELL_WIDTH;

// Poll timeout for input, roughly one frame at 60 Hz
pub const FRAME_MS: u64 = 16;
