use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::{Action, Game};

/// What the frame loop should do with a key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Play(Action),
    Reset,
    Quit,
}

pub fn map_key(key_code: KeyCode, kind: KeyEventKind) -> Option<Command> {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => match key_code {
            KeyCode::Left => Some(Command::Play(Action::MoveLeft)),
            KeyCode::Right => Some(Command::Play(Action::MoveRight)),
            KeyCode::Down => Some(Command::Play(Action::SoftDrop)),
            KeyCode::Up => Some(Command::Play(Action::Rotate)),
            KeyCode::Char(' ') => Some(Command::Play(Action::HardDrop)),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        },
        KeyEventKind::Release => None,
    }
}

/// Feeds one key event to the game. Returns `true` when the player asked to quit.
pub fn handle_input(game: &mut Game, key_code: KeyCode, kind: KeyEventKind) -> bool {
    match map_key(key_code, kind) {
        Some(Command::Play(action)) => {
            game.apply(action);
            false
        }
        Some(Command::Reset) => {
            game.reset();
            false
        }
        Some(Command::Quit) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::source::SequenceSource;

    fn game() -> Game {
        Game::new(GameConfig::default(), Box::new(SequenceSource::new(vec![1]))).unwrap()
    }

    #[test]
    fn arrows_and_space_map_to_actions() {
        let press = KeyEventKind::Press;
        assert_eq!(map_key(KeyCode::Left, press), Some(Command::Play(Action::MoveLeft)));
        assert_eq!(map_key(KeyCode::Right, press), Some(Command::Play(Action::MoveRight)));
        assert_eq!(map_key(KeyCode::Down, press), Some(Command::Play(Action::SoftDrop)));
        assert_eq!(map_key(KeyCode::Up, press), Some(Command::Play(Action::Rotate)));
        assert_eq!(map_key(KeyCode::Char(' '), press), Some(Command::Play(Action::HardDrop)));
        assert_eq!(map_key(KeyCode::Char('R'), press), Some(Command::Reset));
        assert_eq!(map_key(KeyCode::Esc, press), Some(Command::Quit));
        assert_eq!(map_key(KeyCode::Char('x'), press), None);
    }

    #[test]
    fn repeats_count_and_releases_do_not() {
        assert_eq!(
            map_key(KeyCode::Left, KeyEventKind::Repeat),
            Some(Command::Play(Action::MoveLeft))
        );
        assert_eq!(map_key(KeyCode::Left, KeyEventKind::Release), None);
    }

    #[test]
    fn keys_drive_the_game() {
        let mut game = game();
        assert!(!handle_input(&mut game, KeyCode::Left, KeyEventKind::Press));
        assert_eq!(game.current().position.x, 3);

        handle_input(&mut game, KeyCode::Char(' '), KeyEventKind::Press);
        assert!(game.grid().is_occupied(3, 19));

        handle_input(&mut game, KeyCode::Char('r'), KeyEventKind::Press);
        assert!(!game.grid().is_occupied(3, 19));

        assert!(handle_input(&mut game, KeyCode::Char('q'), KeyEventKind::Press));
    }
}
