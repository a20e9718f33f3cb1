//! Turn-based game state.
//!
//! A [`Game`] is a board plus the side to move. Moves are committed only
//! through [`Game::make_move`], which re-derives the legal move list and
//! refuses anything outside it.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Game, Move, Position};
//!
//! let mut game = Game::new();
//! game.make_move(Move::quiet(Position::new(2, 5), Position::new(4, 5)))
//!     .expect("e-pawn double push is legal");
//! assert_eq!(game.team_turn(), Color::Black);
//! ```

mod shared;
mod snapshot;


pub use shared::SharedGame;
pub use snapshot::GameSnapshot;

use crate::board::{Board, Color, InvalidMove, InvalidMoveReason, Move, MoveList, Position};
use crate::rules;

/// Outcome of inspecting the side to move. Nothing here is stored on the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// A board plus the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Standard starting layout, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
        }
    }

    /// A game on an arbitrary board. The position is not validated.
    #[must_use]
    pub const fn with_board(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board wholesale; the side to move is kept.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[must_use]
    pub const fn team_turn(&self) -> Color {
        self.turn
    }

    pub fn set_team_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Legal moves of whatever piece stands on `pos`, regardless of turn.
    ///
    /// An empty square and a piece with no legal moves both give an empty list.
    #[must_use]
    pub fn legal_moves(&self, pos: Position) -> MoveList {
        rules::legal_moves(&self.board, pos)
    }

    /// Every legal move of the side to move.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        rules::legal_moves_for(&self.board, self.turn)
    }

    /// Play `mv` for the side to move.
    ///
    /// On error the board and the side to move are left exactly as they were.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let next = self.validated_board(mv).map_err(|reason| {
            #[cfg(feature = "logging")]
            log::debug!("rejected {mv} for {}: {reason}", self.turn);
            InvalidMove::new(mv, reason)
        })?;

        #[cfg(feature = "logging")]
        log::debug!("{} plays {mv}", self.turn);
        self.board = next;
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// The board after `mv`, or the reason it may not be played.
    fn validated_board(&self, mv: Move) -> Result<Board, InvalidMoveReason> {
        let piece = self
            .board
            .get_piece(mv.start())
            .ok_or(InvalidMoveReason::EmptyOrigin)?;
        if piece.color() != self.turn {
            return Err(InvalidMoveReason::WrongTurn { to_move: self.turn });
        }
        if self.board.color_on(mv.end()) == Some(self.turn) {
            return Err(InvalidMoveReason::OwnPieceAtDestination);
        }
        if !self.legal_moves(mv.start()).contains(&mv) {
            return Err(InvalidMoveReason::NotLegal);
        }

        let next = self.board.apply_unchecked(mv);
        // unreachable while rules::legal_moves filters correctly
        if rules::is_in_check(&next, self.turn) {
            return Err(InvalidMoveReason::LeavesKingInCheck);
        }
        Ok(next)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        rules::is_in_check(&self.board, color)
    }

    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        rules::is_in_checkmate(&self.board, color)
    }

    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        rules::is_in_stalemate(&self.board, color)
    }

    /// Check/checkmate/stalemate state of the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        let can_move = rules::has_legal_move(&self.board, self.turn);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
