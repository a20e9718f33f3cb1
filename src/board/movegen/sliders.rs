use super::super::{Board, Color, Move, MoveList, Position};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    #[must_use]
    pub const fn directions(self) -> &'static [(i8, i8)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

#[must_use]
pub fn slider_moves(board: &Board, from: Position, color: Color, slider: SliderType) -> MoveList {
    let mut moves = MoveList::new();
    for &(dr, dc) in slider.directions() {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            match board.color_on(to) {
                None => moves.push(Move::quiet(from, to)),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(Move::quiet(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
    moves
}
