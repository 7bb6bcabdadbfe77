use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::File,
    io::stdout,
    path::{Path, PathBuf},
    time::Duration,
};

mod clock;
mod config;
mod constants;
mod game;
mod input;
mod ui;

use clock::{Clock, MonotonicClock};
use config::GameConfig;
use constants::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, FRAME_MS, SCORE_PER_LINE};
use game::piece::PieceKind;
use game::{Game, RandomSource, SequenceSource, ShapeSource};
use input::handle_input;
use ui::ui;

/// Falling-block puzzle game for the terminal.
#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    cols: usize,

    /// Milliseconds between automatic drops
    #[arg(long, default_value_t = DROP_INTERVAL_MS)]
    drop_interval_ms: u64,

    /// Points per cleared row
    #[arg(long, default_value_t = SCORE_PER_LINE)]
    score_per_line: u32,

    /// Seed for piece selection (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed piece order to cycle through instead of random picks, e.g. "IOTSZLJ"
    #[arg(long, conflicts_with = "seed")]
    sequence: Option<String>,

    /// Write logs to this file; filter with RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            drop_interval_ms: self.drop_interval_ms,
            score_per_line: self.score_per_line,
            ..GameConfig::default()
        }
    }

    fn shape_source(&self) -> Result<Box<dyn ShapeSource>> {
        if let Some(letters) = &self.sequence {
            let mut indices = Vec::with_capacity(letters.len());
            for letter in letters.chars() {
                match PieceKind::from_letter(letter) {
                    Some(kind) => indices.push(kind.index()),
                    None => bail!("unknown piece {letter:?} in --sequence, expected one of IOTSZLJ"),
                }
            }
            if indices.is_empty() {
                bail!("--sequence needs at least one piece");
            }
            return Ok(Box::new(SequenceSource::new(indices)));
        }

        let random = match self.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::new(),
        };
        Ok(Box::new(random))
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut game = Game::new(args.game_config(), args.shape_source()?)
        .context("invalid game configuration")?;

    // Setup terminal
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run until quit
    let result = run(&mut terminal, &mut game);

    // Cleanup runs even when the loop failed
    terminal::disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, game: &mut Game) -> Result<()> {
    let clock = MonotonicClock::new();

    // Game loop
    loop {
        // Render
        terminal.draw(|f| ui(f, game)).context("failed to draw frame")?;

        // Handle input
        if event::poll(Duration::from_millis(FRAME_MS))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if handle_input(game, code, kind) {
                    return Ok(());
                }
            }
        }

        // Update game state; gravity stops while the game is over
        if game.is_running() {
            game.on_tick(clock.now_ms());
        }
    }
}
