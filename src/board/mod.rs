//! Chess board representation and move generation.
//!
//! The board is an 8x8 grid addressed by 1-based (row, column) positions.
//! Move generation here is pseudo-legal; see [`crate::rules`] for the
//! check-aware queries.
//!
//! # Example
//! ```
//! use chess_rules::board::{movegen, Board, Position};
//!
//! let board = Board::new();
//! let knight = board.get_piece(Position::new(1, 2)).unwrap();
//! let moves = movegen::moves_for(&board, knight, Position::new(1, 2));
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod display;
mod error;
pub mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{InvalidMove, InvalidMoveReason, PositionError};
pub use state::Board;
pub use types::{
    Color, Move, MoveList, MoveListIntoIter, Piece, PieceType, Position, MAX_COORD, MIN_COORD,
};
