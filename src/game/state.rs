use log::{debug, info, trace};

use crate::config::{ConfigError, GameConfig};
use crate::game::board::Grid;
use crate::game::piece::{Piece, Position};
use crate::game::source::ShapeSource;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Running,
    GameOver,
}

/// Discrete player intents delivered by the input source.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Moved,
    Rejected,
    Locked { cleared: usize },
    /// The game is over; nothing changed.
    Ignored,
}

pub struct Game {
    config: GameConfig,
    grid: Grid,
    current: Piece,
    score: u32,
    lines_cleared: u32,
    state: GameState,
    last_drop_ms: Option<u64>,
    source: Box<dyn ShapeSource>,
}

impl Game {
    pub fn new(config: GameConfig, source: Box<dyn ShapeSource>) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.rows, config.cols);
        let current = Piece::new(config.shapes[0].clone(), Position::new(0, 0));
        let mut game = Self {
            config,
            grid,
            current,
            score: 0,
            lines_cleared: 0,
            state: GameState::Running,
            last_drop_ms: None,
            source,
        };
        game.reset();
        Ok(game)
    }

    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.rows, self.config.cols);
        self.score = 0;
        self.lines_cleared = 0;
        self.state = GameState::Running;
        self.last_drop_ms = None;
        info!("new game on a {}x{} grid", self.config.cols, self.config.rows);
        self.spawn();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Spawn position for the next piece: just left of centre, one row down.
    pub fn spawn_position(&self) -> Position {
        Position::new(self.config.cols as i32 / 2 - 1, 1)
    }

    fn spawn(&mut self) {
        let count = self.config.shapes.len();
        let index = self.source.next_shape_index(count) % count;
        self.current = Piece::new(self.config.shapes[index].clone(), self.spawn_position());
        debug!("spawned shape {} at {:?}", index, self.current.position);

        if self.current.collides(&self.grid) {
            self.state = GameState::GameOver;
            info!("game over: no room to spawn, final score {}", self.score);
        }
    }

    /// Commits `candidate` as the current piece if it is a legal placement.
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if candidate.collides(&self.grid) {
            trace!("rejected placement at {:?}", candidate.position);
            return false;
        }
        self.current = candidate;
        true
    }

    pub fn apply(&mut self, action: Action) -> MoveOutcome {
        if !self.is_running() {
            return MoveOutcome::Ignored;
        }

        match action {
            Action::MoveLeft => self.shift(-1),
            Action::MoveRight => self.shift(1),
            Action::SoftDrop => self.step_down(),
            Action::Rotate => {
                let candidate = self.current.rotated();
                self.accept_or_reject(candidate)
            }
            Action::HardDrop => self.hard_drop(),
        }
    }

    /// Advances gravity. The first call after a reset only arms the timer;
    /// afterwards the piece steps down once more than `drop_interval_ms` has
    /// elapsed since the previous step. Returns `None` when nothing was due.
    pub fn on_tick(&mut self, now_ms: u64) -> Option<MoveOutcome> {
        if !self.is_running() {
            return None;
        }

        let last = match self.last_drop_ms {
            Some(last) => last,
            None => {
                self.last_drop_ms = Some(now_ms);
                return None;
            }
        };

        if now_ms.saturating_sub(last) <= self.config.drop_interval_ms {
            return None;
        }

        let outcome = self.step_down();
        self.last_drop_ms = Some(now_ms);
        Some(outcome)
    }

    fn shift(&mut self, dx: i32) -> MoveOutcome {
        let candidate = self.current.moved(dx, 0);
        self.accept_or_reject(candidate)
    }

    fn accept_or_reject(&mut self, candidate: Piece) -> MoveOutcome {
        if self.try_commit(candidate) {
            MoveOutcome::Moved
        } else {
            MoveOutcome::Rejected
        }
    }

    fn step_down(&mut self) -> MoveOutcome {
        let candidate = self.current.moved(0, 1);
        if self.try_commit(candidate) {
            MoveOutcome::Moved
        } else {
            self.lock()
        }
    }

    fn hard_drop(&mut self) -> MoveOutcome {
        let mut landing = self.current.clone();
        loop {
            let below = landing.moved(0, 1);
            if below.collides(&self.grid) {
                break;
            }
            landing = below;
        }
        self.current = landing;
        self.lock()
    }

    fn lock(&mut self) -> MoveOutcome {
        self.grid.merge(&self.current);

        let cleared = self.grid.clear_full_rows();
        let cleared_u32 = u32::try_from(cleared).unwrap_or(u32::MAX);
        self.lines_cleared = self.lines_cleared.saturating_add(cleared_u32);
        self.score = self
            .score
            .saturating_add(self.config.score_per_line.saturating_mul(cleared_u32));
        debug!(
            "locked at {:?}, cleared {} row(s), score {}",
            self.current.position, cleared, self.score
        );

        self.spawn();
        MoveOutcome::Locked { cleared }
    }
}
