//! Fluent builder for constructing chess positions.
//!
//! Allows creating boards piece by piece, e.g. to load a puzzle.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceType, Position};
//!
//! let board = BoardBuilder::new()
//!     .piece(Position::new(1, 5), Color::White, PieceType::King)
//!     .piece(Position::new(8, 5), Color::Black, PieceType::King)
//!     .piece(Position::new(2, 1), Color::White, PieceType::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, Piece, PieceType, Position};

/// A fluent builder for constructing `Board` values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub const fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial layout.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece, replacing anything already on that square.
    #[must_use]
    pub fn piece(mut self, pos: Position, color: Color, piece_type: PieceType) -> Self {
        self.board.set_piece(pos, Some(Piece::new(color, piece_type)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.board.set_piece(pos, None);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
