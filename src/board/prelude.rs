//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.team_turn(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, Color, InvalidMove, Move, MoveList, Piece, PieceType, Position,
};
pub use crate::game::{Game, GameStatus};
