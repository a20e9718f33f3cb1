use super::super::{Board, Color, Move, MoveList, Position};
use super::is_enterable;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

#[must_use]
pub fn knight_moves(board: &Board, from: Position, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(dr, dc) {
            if is_enterable(board, to, color) {
                moves.push(Move::quiet(from, to));
            }
        }
    }
    moves
}
