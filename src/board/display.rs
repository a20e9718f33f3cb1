use std::fmt;

use super::{Board, Position, MAX_COORD, MIN_COORD};

/// Renders row 8 at the top; `.` marks an empty square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (MIN_COORD..=MAX_COORD).rev() {
            write!(f, "{row} |")?;
            for col in MIN_COORD..=MAX_COORD {
                let ch = self
                    .get_piece(Position::new(row, col))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  +----------------")?;
        write!(f, "    1 2 3 4 5 6 7 8")
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    #[test]
    fn test_standard_layout_rendering() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 | r n b q k b n r");
        assert_eq!(lines[1], "7 | p p p p p p p p");
        assert_eq!(lines[4], "4 | . . . . . . . .");
        assert_eq!(lines[6], "2 | P P P P P P P P");
        assert_eq!(lines[7], "1 | R N B Q K B N R");
        assert_eq!(lines.len(), 10);
    }
}
