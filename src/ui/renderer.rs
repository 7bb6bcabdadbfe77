use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::CELL_WIDTH;
use crate::game::piece::PieceKind;
use crate::game::{Cell, Game, GameState};

const PANEL_WIDTH: u16 = 16;

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();
    let grid = game.grid();

    // Grid plus borders; config validation keeps both within u16
    let board_height = u16::try_from(grid.rows()).unwrap_or(u16::MAX).saturating_add(2);
    let board_width = u16::try_from(grid.cols() * CELL_WIDTH)
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    // Center the board vertically
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Flexible top space
            Constraint::Length(board_height),  // Game board height
            Constraint::Min(0),                // Flexible bottom space
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                // Left margin
            Constraint::Length(PANEL_WIDTH),   // Score panel
            Constraint::Length(board_width),   // Game board
            Constraint::Length(PANEL_WIDTH),   // Key help
            Constraint::Min(0),                // Right margin
        ])
        .split(vertical_chunks[1]);

    let stats_area = horizontal_chunks[1];
    let board_area = horizontal_chunks[2];
    let help_area = horizontal_chunks[3];

    // Render components
    render_board(f, game, board_area);
    render_stats(f, game, stats_area);
    render_help(f, help_area);

    // Overlay stays up until the game is reset
    if game.state() == GameState::GameOver {
        render_game_over_overlay(f, game, board_area);
    }
}

fn cell_color(value: u8) -> Color {
    PieceKind::from_value(value).map_or(Color::White, PieceKind::color)
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut render_board: Vec<Vec<Cell>> = game.grid().iter_rows().map(<[Cell]>::to_vec).collect();

    // Falling piece on top; anything above row 0 is off-screen.
    for (x, y, value) in game.current().blocks() {
        if x < 0 || y < 0 {
            continue;
        }
        if let Some(slot) = render_board
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *slot = Cell::Filled(value);
        }
    }

    let filled = "█".repeat(CELL_WIDTH);
    let shaded = "░".repeat(CELL_WIDTH);
    let blank = " ".repeat(CELL_WIDTH);

    let board_lines: Vec<Line> = render_board
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| match *cell {
                    Cell::Empty if (x + y) % 2 == 0 => {
                        Span::styled(shaded.clone(), Style::default().fg(Color::DarkGray))
                    }
                    Cell::Empty => Span::raw(blank.clone()),
                    Cell::Filled(value) => {
                        Span::styled(filled.clone(), Style::default().fg(cell_color(value)))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_stats(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Score and lines
            Constraint::Min(0),    // Empty space
        ])
        .split(area);

    let stats_text = vec![
        Line::from(vec![Span::styled("Score", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.score().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Lines", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.lines_cleared().to_string())]),
    ];

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(stats_widget, chunks[0]);
}

fn render_help(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Controls
            Constraint::Min(0),     // Empty space
        ])
        .split(area);

    let help_text = vec![
        Line::from(vec![Span::raw("←/→  move")]),
        Line::from(vec![Span::raw("↑    rotate")]),
        Line::from(vec![Span::raw("↓    soft drop")]),
        Line::from(vec![Span::raw("SPC  hard drop")]),
        Line::from(vec![Span::raw("R    restart")]),
        Line::from(vec![Span::raw("Q    quit")]),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(help_widget, chunks[0]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(90, 40, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Score: {}", game.score()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R to restart")]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::source::SequenceSource;
    use crate::game::Action;
    use ratatui::{backend::TestBackend, Terminal};

    fn game() -> Game {
        Game::new(GameConfig::default(), Box::new(SequenceSource::new(vec![1]))).unwrap()
    }

    fn draw(game: &Game) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, game)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_board_piece_and_score() {
        let screen = draw(&game());
        assert!(screen.contains("blockfall"));
        assert!(screen.contains("Score"));
        assert!(screen.contains('█'));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn overlay_follows_game_over_and_reset() {
        let mut game = game();
        while game.state() == GameState::Running {
            game.apply(Action::HardDrop);
        }
        assert!(draw(&game).contains("GAME OVER"));

        game.reset();
        assert!(!draw(&game).contains("GAME OVER"));
    }
}
