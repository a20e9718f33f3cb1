use super::super::{Board, Color, Move, MoveList, Position};
use super::{is_enterable, QUEEN_DIRECTIONS};

/// One step in each of the queen's directions. No castling.
#[must_use]
pub fn king_moves(board: &Board, from: Position, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (dr, dc) in QUEEN_DIRECTIONS {
        if let Some(to) = from.offset(dr, dc) {
            if is_enterable(board, to, color) {
                moves.push(Move::quiet(from, to));
            }
        }
    }
    moves
}
