//! Error types for board and game operations.

use std::fmt;

use super::{Color, Move};

/// Why a move was refused by `Game::make_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// No piece on the start square
    EmptyOrigin,
    /// The piece on the start square belongs to the side not on move
    WrongTurn { to_move: Color },
    /// The move is not among the legal moves of the piece
    NotLegal,
    /// The destination holds a piece of the mover's own color
    OwnPieceAtDestination,
    /// Applying the move left the mover in check
    LeavesKingInCheck,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::EmptyOrigin => write!(f, "no piece on the start square"),
            InvalidMoveReason::WrongTurn { to_move } => {
                write!(f, "it is {to_move}'s turn")
            }
            InvalidMoveReason::NotLegal => write!(f, "not a legal move for that piece"),
            InvalidMoveReason::OwnPieceAtDestination => {
                write!(f, "destination holds a piece of the same color")
            }
            InvalidMoveReason::LeavesKingInCheck => write!(f, "king would be left in check"),
        }
    }
}

/// Error returned when a submitted move cannot be played.
///
/// Always recoverable: the game is unchanged and the caller may resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMove {
    mv: Move,
    reason: InvalidMoveReason,
}

impl InvalidMove {
    #[must_use]
    pub(crate) const fn new(mv: Move, reason: InvalidMoveReason) -> Self {
        InvalidMove { mv, reason }
    }

    /// The rejected move
    #[must_use]
    pub const fn rejected_move(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub const fn reason(&self) -> InvalidMoveReason {
        self.reason
    }
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid move {}: {}", self.mv, self.reason)
    }
}

impl std::error::Error for InvalidMove {}

/// Error type for checked position construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Row out of bounds (must be 1-8)
    RowOutOfBounds { row: i8 },
    /// Column out of bounds (must be 1-8)
    ColumnOutOfBounds { col: i8 },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 1-8)")
            }
            PositionError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 1-8)")
            }
        }
    }
}

impl std::error::Error for PositionError {}
