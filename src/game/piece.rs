use ratatui::style::Color;

use crate::game::board::Grid;
use crate::game::collision::collides;
use crate::game::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    I, O, T, S, Z, L, J
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I, PieceKind::O, PieceKind::T,
        PieceKind::S, PieceKind::Z, PieceKind::L, PieceKind::J,
    ];

    /// Value written into every occupied cell of this kind's shape.
    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Position in `ALL`, which is also the index into `standard_shapes()`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
            PieceKind::L => Color::LightYellow,
            PieceKind::J => Color::Blue,
        }
    }

    pub fn shape(self) -> Shape {
        let pattern: &[&[u8]] = match self {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            PieceKind::S => &[&[1, 1, 0], &[0, 1, 1]],
            PieceKind::Z => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::L => &[&[1, 1, 1], &[1, 0, 0]],
            PieceKind::J => &[&[1, 1, 1], &[0, 0, 1]],
        };
        let value = self.value();
        let rows: Vec<Vec<u8>> = pattern
            .iter()
            .map(|row| row.iter().map(|&cell| cell * value).collect::<Vec<_>>())
            .collect();
        Shape::new(rows).unwrap_or_else(|err| unreachable!("built-in {self:?} shape: {err}"))
    }
}

/// The fixed set of seven tetrominoes, in `PieceKind::ALL` order.
pub fn standard_shapes() -> Vec<Shape> {
    PieceKind::ALL.iter().map(|kind| kind.shape()).collect()
}

/// Grid coordinate of a piece's top-left shape cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub position: Position,
}

impl Piece {
    pub fn new(shape: Shape, position: Position) -> Self {
        Self { shape, position }
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape.clone(),
            position: Position::new(self.position.x + dx, self.position.y + dy),
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate(),
            position: self.position,
        }
    }

    pub fn collides(&self, grid: &Grid) -> bool {
        collides(&self.shape, self.position, grid)
    }

    /// Absolute grid coordinates and value of every occupied cell.
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.shape.cells().map(move |(x, y, value)| {
            (self.position.x + x as i32, self.position.y + y as i32, value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_has_seven_four_cell_shapes() {
        let shapes = standard_shapes();
        assert_eq!(shapes.len(), 7);
        for shape in &shapes {
            assert_eq!(shape.cells().count(), 4);
        }
        assert_eq!(shapes[0], Shape::new(vec![vec![1, 1, 1, 1]]).unwrap());
        assert_eq!(shapes[2], Shape::new(vec![vec![0, 3, 0], vec![3, 3, 3]]).unwrap());
    }

    #[test]
    fn kind_values_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_value(kind.value()), Some(kind));
        }
        assert_eq!(PieceKind::from_value(0), None);
        assert_eq!(PieceKind::from_value(8), None);
    }

    #[test]
    fn letters_name_kinds() {
        let kinds: Vec<_> = "iOtSzLj".chars().filter_map(PieceKind::from_letter).collect();
        assert_eq!(kinds, PieceKind::ALL.to_vec());
        assert_eq!(PieceKind::from_letter('x'), None);
        assert_eq!(PieceKind::J.index(), 6);
    }

    #[test]
    fn two_wide_shapes_return_after_two_turns() {
        for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
            let shape = kind.shape();
            assert_ne!(shape.rotate(), shape);
            assert_eq!(shape.rotate().rotate(), shape);
        }
        let o = PieceKind::O.shape();
        assert_eq!(o.rotate(), o);
    }

    #[test]
    fn asymmetric_shapes_need_four_turns() {
        for kind in [PieceKind::T, PieceKind::L, PieceKind::J] {
            let shape = kind.shape();
            assert_ne!(shape.rotate().rotate(), shape);
            assert_eq!(shape.rotate().rotate().rotate().rotate(), shape);
        }
    }

    #[test]
    fn moved_and_rotated_leave_original_untouched() {
        let piece = Piece::new(PieceKind::T.shape(), Position::new(4, 1));
        let shifted = piece.moved(-1, 2);
        assert_eq!(shifted.position, Position::new(3, 3));
        assert_eq!(piece.position, Position::new(4, 1));

        let turned = piece.rotated();
        assert_eq!(turned.position, piece.position);
        assert_eq!(turned.shape, piece.shape.rotate());
    }

    #[test]
    fn blocks_are_offset_by_position() {
        let piece = Piece::new(PieceKind::O.shape(), Position::new(4, -1));
        let blocks: Vec<_> = piece.blocks().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(blocks, vec![(4, -1), (5, -1), (4, 0), (5, 0)]);
    }
}
