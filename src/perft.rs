//! Move-path enumeration used to cross-check move generation.

use crate::board::{Board, Color};
use crate::rules::legal_moves_for;

/// Number of legal move sequences of length `depth` from `board` with `to_move`
/// on move.
#[must_use]
pub fn perft(board: &Board, to_move: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves_for(board, to_move);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&board.apply_unchecked(mv), to_move.opponent(), depth - 1))
        .sum()
}
