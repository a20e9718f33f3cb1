//! Lock-protected game handle.
//!
//! [`Game`] does no locking of its own. A service hosting many matches keeps
//! one `SharedGame` per match so that every read and move on that match is
//! serialized.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Game, GameSnapshot, GameStatus};
use crate::board::{InvalidMove, Move};

/// A cloneable, thread-safe handle to one game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Run `f` with shared access to the game while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&*self.0.lock())
    }

    /// Run `f` with exclusive access to the game while holding the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut *self.0.lock())
    }

    pub fn make_move(&self, mv: Move) -> Result<(), InvalidMove> {
        self.with_mut(|game| game.make_move(mv))
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.with(Game::snapshot)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.with(Game::status)
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
