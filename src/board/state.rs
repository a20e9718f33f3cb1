//! Board storage and the raw move primitive.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Piece, PieceType, Position};

const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of squares, each empty or holding one piece.
///
/// The board is a plain value: copying it is cheap, and legality checks work on
/// copies rather than mutating the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    // squares[row - 1][col - 1]
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board in the standard starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset_to_standard();
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Clear the board and place the standard starting layout.
    pub fn reset_to_standard(&mut self) {
        *self = Board::empty();
        for color in Color::BOTH {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (i, piece_type) in BACK_ROW.iter().enumerate() {
                let col = i as i8 + 1;
                self.set_piece(Position::new(back, col), Some(Piece::new(color, *piece_type)));
                self.set_piece(
                    Position::new(pawns, col),
                    Some(Piece::new(color, PieceType::Pawn)),
                );
            }
        }
    }

    /// The piece at `pos`, or `None`. Off-board positions read as empty.
    #[inline]
    #[must_use]
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        let (r, c) = pos.indices()?;
        self.squares[r][c]
    }

    /// Overwrite the square at `pos`. Off-board positions are ignored.
    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        if let Some((r, c)) = pos.indices() {
            self.squares[r][c] = piece;
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get_piece(pos).is_none()
    }

    /// Color of the piece at `pos`, if any.
    #[inline]
    #[must_use]
    pub fn color_on(&self, pos: Position) -> Option<Color> {
        self.get_piece(pos).map(Piece::color)
    }

    /// Every occupied square with its piece, row-major from (1,1).
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get_piece(pos).map(|piece| (pos, piece)))
    }

    /// Every square occupied by `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// First square (row-major) holding `color`'s king.
    #[must_use]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceType::King);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(pos, _)| pos)
    }

    /// A copy of this board with `mv` played, without any rule checks.
    ///
    /// The start square is cleared and the moving piece overwrites whatever
    /// stood on the end square. A pawn landing on its promotion row becomes the
    /// move's promotion type when that type is a valid promotion choice. An
    /// empty start square yields an unchanged copy.
    #[must_use]
    pub fn apply_unchecked(&self, mv: Move) -> Board {
        let mut next = *self;
        let Some(piece) = self.get_piece(mv.start()) else {
            return next;
        };
        let landing = match mv.promotion() {
            Some(promo)
                if piece.piece_type() == PieceType::Pawn
                    && mv.end().row() == piece.color().promotion_row()
                    && promo.is_promotion_choice() =>
            {
                piece.with_type(promo)
            }
            _ => piece,
        };
        next.set_piece(mv.start(), None);
        next.set_piece(mv.end(), Some(landing));
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
