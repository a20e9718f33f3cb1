//! Pseudo-legal move generation.
//!
//! Each generator is a pure function of the board, the piece's square and its
//! color. None of them look at whether the mover's king ends up in check; that
//! filter lives in [`crate::rules`].

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use kings::king_moves;
pub use knights::knight_moves;
pub use pawns::pawn_moves;
pub use sliders::{
    slider_moves, SliderType, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

use super::{Board, Color, MoveList, Piece, PieceType, Position};

/// Every pseudo-legal move for `piece` standing on `from`.
///
/// `piece` is taken as given; it does not have to match what the board holds
/// at `from`.
#[must_use]
pub fn moves_for(board: &Board, piece: Piece, from: Position) -> MoveList {
    let color = piece.color();
    match piece.piece_type() {
        PieceType::Pawn => pawn_moves(board, from, color),
        PieceType::Knight => knight_moves(board, from, color),
        PieceType::Bishop => slider_moves(board, from, color, SliderType::Bishop),
        PieceType::Rook => slider_moves(board, from, color, SliderType::Rook),
        PieceType::Queen => slider_moves(board, from, color, SliderType::Queen),
        PieceType::King => king_moves(board, from, color),
    }
}

/// True if `pos` is empty or held by the opponent of `color`.
#[inline]
pub(crate) fn is_enterable(board: &Board, pos: Position, color: Color) -> bool {
    board.color_on(pos) != Some(color)
}
