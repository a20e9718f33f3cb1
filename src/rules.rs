//! Legality queries over a board.
//!
//! Everything here takes `&Board`: a candidate move is tried on a copy of the
//! board, so no query can leave the caller's board changed.

use crate::board::movegen::moves_for;
use crate::board::{Board, Color, Move, MoveList, Position};

/// True if any pseudo-legal move of a `by` piece ends on `target`.
#[must_use]
pub fn is_square_attacked(board: &Board, target: Position, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, piece)| moves_for(board, piece, from).iter().any(|m| m.end() == target))
}

/// True if `color`'s king is attacked.
///
/// With several kings of one color only the first in row-major order is
/// considered. A board without that king is never in check.
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_position(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}

/// True if playing `mv` leaves `color` out of check.
#[inline]
fn is_safe_for(board: &Board, mv: Move, color: Color) -> bool {
    !is_in_check(&board.apply_unchecked(mv), color)
}

/// Legal moves of the piece on `pos`.
///
/// Empty both for an empty square and for a piece with no safe moves.
#[must_use]
pub fn legal_moves(board: &Board, pos: Position) -> MoveList {
    let Some(piece) = board.get_piece(pos) else {
        return MoveList::new();
    };
    let mut moves = moves_for(board, piece, pos);
    #[cfg(feature = "logging")]
    let candidates = moves.len();
    moves.retain(|mv| is_safe_for(board, *mv, piece.color()));
    #[cfg(feature = "logging")]
    log::trace!(
        "{piece} on {pos}: {} of {candidates} candidates legal",
        moves.len()
    );
    moves
}

/// Every legal move available to `color`, grouped by square in row-major order.
#[must_use]
pub fn legal_moves_for(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(pos, _)| legal_moves(board, pos))
        .collect()
}

/// True if `color` has at least one move that does not leave it in check.
#[must_use]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).any(|(from, piece)| {
        moves_for(board, piece, from)
            .iter()
            .any(|mv| is_safe_for(board, *mv, color))
    })
}

/// In check with no escaping move.
#[must_use]
pub fn is_in_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

/// Not in check, yet every move would leave the king in check.
#[must_use]
pub fn is_in_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_legal_move(board, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceType};

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_start_position_not_in_check() {
        let board = Board::new();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
        assert_eq!(legal_moves_for(&board, Color::White).len(), 20);
        assert_eq!(legal_moves_for(&board, Color::Black).len(), 20);
    }

    #[test]
    fn test_queen_on_open_file_gives_check() {
        let board = BoardBuilder::new()
            .piece(pos(1, 5), Color::White, PieceType::King)
            .piece(pos(8, 5), Color::Black, PieceType::Queen)
            .build();
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_checkmate(&board, Color::White));
    }

    #[test]
    fn test_blocked_line_is_not_check() {
        let board = BoardBuilder::new()
            .piece(pos(1, 5), Color::White, PieceType::King)
            .piece(pos(2, 5), Color::White, PieceType::Pawn)
            .piece(pos(8, 5), Color::Black, PieceType::Rook)
            .build();
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        let king_ahead = BoardBuilder::new()
            .piece(pos(4, 4), Color::White, PieceType::King)
            .piece(pos(5, 4), Color::Black, PieceType::Pawn)
            .build();
        assert!(!is_in_check(&king_ahead, Color::White));

        let king_diagonal = BoardBuilder::new()
            .piece(pos(4, 4), Color::White, PieceType::King)
            .piece(pos(5, 5), Color::Black, PieceType::Pawn)
            .build();
        assert!(is_in_check(&king_diagonal, Color::White));
    }

    #[test]
    fn test_missing_king_is_never_in_check() {
        let board = BoardBuilder::new()
            .piece(pos(8, 8), Color::Black, PieceType::Queen)
            .build();
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        // White rook on (2,5) shields the king on (1,5) from a rook on (8,5).
        let board = BoardBuilder::new()
            .piece(pos(1, 5), Color::White, PieceType::King)
            .piece(pos(2, 5), Color::White, PieceType::Rook)
            .piece(pos(8, 5), Color::Black, PieceType::Rook)
            .piece(pos(8, 1), Color::Black, PieceType::King)
            .build();
        let moves = legal_moves(&board, pos(2, 5));
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.end().col() == 5));
        assert!(moves.contains(&Move::quiet(pos(2, 5), pos(8, 5))));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let board = BoardBuilder::new()
            .piece(pos(1, 1), Color::White, PieceType::King)
            .piece(pos(8, 2), Color::Black, PieceType::Rook)
            .build();
        let moves = legal_moves(&board, pos(1, 1));
        assert!(moves.iter().all(|m| m.end().col() != 2));
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::quiet(pos(1, 1), pos(2, 1))));
    }

    #[test]
    fn test_back_rank_mate() {
        let board = BoardBuilder::new()
            .piece(pos(1, 7), Color::White, PieceType::King)
            .piece(pos(2, 6), Color::White, PieceType::Pawn)
            .piece(pos(2, 7), Color::White, PieceType::Pawn)
            .piece(pos(2, 8), Color::White, PieceType::Pawn)
            .piece(pos(1, 1), Color::Black, PieceType::Rook)
            .piece(pos(8, 8), Color::Black, PieceType::King)
            .build();
        assert!(is_in_check(&board, Color::White));
        assert!(is_in_checkmate(&board, Color::White));
        assert!(!is_in_stalemate(&board, Color::White));
        assert!(legal_moves_for(&board, Color::White).is_empty());
    }

    #[test]
    fn test_capture_escapes_mate() {
        // Same back-rank pattern, but a white rook can take the checker.
        let board = BoardBuilder::new()
            .piece(pos(1, 7), Color::White, PieceType::King)
            .piece(pos(2, 6), Color::White, PieceType::Pawn)
            .piece(pos(2, 7), Color::White, PieceType::Pawn)
            .piece(pos(2, 8), Color::White, PieceType::Pawn)
            .piece(pos(5, 1), Color::White, PieceType::Rook)
            .piece(pos(1, 1), Color::Black, PieceType::Rook)
            .piece(pos(8, 8), Color::Black, PieceType::King)
            .build();
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_checkmate(&board, Color::White));
        assert_eq!(
            legal_moves_for(&board, Color::White),
            vec![Move::quiet(pos(5, 1), pos(1, 1))]
        );
    }

    #[test]
    fn test_stalemate_position() {
        // Black king in the corner, white queen covering every flight square.
        let board = BoardBuilder::new()
            .piece(pos(8, 8), Color::Black, PieceType::King)
            .piece(pos(7, 6), Color::White, PieceType::Queen)
            .piece(pos(6, 7), Color::White, PieceType::King)
            .build();
        assert!(!is_in_check(&board, Color::Black));
        assert!(is_in_stalemate(&board, Color::Black));
        assert!(!is_in_checkmate(&board, Color::Black));
        assert!(!has_legal_move(&board, Color::Black));
    }

    #[test]
    fn test_side_without_pieces_is_stalemated() {
        let board = BoardBuilder::new()
            .piece(pos(1, 1), Color::White, PieceType::King)
            .build();
        assert!(is_in_stalemate(&board, Color::Black));
        assert!(!is_in_checkmate(&board, Color::Black));
    }

    #[test]
    fn test_queries_leave_board_untouched() {
        let board = BoardBuilder::starting_position()
            .clear(pos(2, 5))
            .piece(pos(5, 8), Color::Black, PieceType::Queen)
            .build();
        let before = board;
        let _ = legal_moves_for(&board, Color::White);
        let _ = is_in_checkmate(&board, Color::White);
        let _ = is_in_stalemate(&board, Color::White);
        assert_eq!(board, before);
    }
}
