//! Core chess types.
//!
//! - `Piece`, `PieceType` and `Color` - colored pieces
//! - `Position` - (row, column) board coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod position;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceType};
pub use position::{Position, MAX_COORD, MIN_COORD};
