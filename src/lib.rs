pub mod board;
pub mod game;
pub mod perft;
pub mod rules;

pub use board::{Board, Color, InvalidMove, Move, MoveList, Piece, PieceType, Position};
pub use game::{Game, GameSnapshot, GameStatus, SharedGame};
