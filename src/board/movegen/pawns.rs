use super::super::{Board, Color, Move, MoveList, PieceType, Position};

/// Push `from -> to`, expanded into one move per promotion choice when `to`
/// is on the mover's promotion row.
fn push_pawn_move(moves: &mut MoveList, from: Position, to: Position, color: Color) {
    if to.row() == color.promotion_row() {
        for promo in PieceType::PROMOTIONS {
            moves.push(Move::promotion_to(from, to, promo));
        }
    } else {
        moves.push(Move::quiet(from, to));
    }
}

/// Single and double pushes plus diagonal captures. No en passant.
#[must_use]
pub fn pawn_moves(board: &Board, from: Position, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    let dir = color.pawn_direction();

    if let Some(forward) = from.offset(dir, 0) {
        if board.is_empty(forward) {
            push_pawn_move(&mut moves, from, forward, color);

            if from.row() == color.pawn_start_row() {
                if let Some(double) = forward.offset(dir, 0) {
                    if board.is_empty(double) {
                        moves.push(Move::quiet(from, double));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if matches!(board.color_on(target), Some(occupant) if occupant != color) {
                push_pawn_move(&mut moves, from, target, color);
            }
        }
    }

    moves
}
