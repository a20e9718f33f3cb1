#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Game;
use crate::board::{Board, Color};

/// Everything needed to rebuild a [`Game`]: the board and the side to move.
///
/// This is what a persistence layer stores per match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Color,
}

impl Game {
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.board(),
            turn: self.team_turn(),
        }
    }

    #[must_use]
    pub const fn from_snapshot(snapshot: GameSnapshot) -> Self {
        Game::with_board(snapshot.board, snapshot.turn)
    }
}

impl From<GameSnapshot> for Game {
    fn from(snapshot: GameSnapshot) -> Self {
        Game::from_snapshot(snapshot)
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        game.snapshot()
    }
}
