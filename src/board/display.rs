use std::fmt;

use super::{Board, Square, BOARD_FILES, BOARD_RANKS};

/// Text diagram: black's back rank on top, Red pieces in uppercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_RANKS).rev() {
            write!(f, "{rank} ")?;
            for file in 0..BOARD_FILES {
                let ch = self
                    .piece_at(Square::from_coords(file, rank))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 0..BOARD_FILES {
            write!(f, " {}", (b'a' + file) as char)?;
        }
        writeln!(f)?;
        writeln!(f, "{} to move", self.turn)
    }
}
