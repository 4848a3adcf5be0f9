use super::error::FenError;
use super::{Board, Color, Piece, Square, BOARD_FILES, BOARD_RANKS};

impl Board {
    /// FEN of the standard starting position.
    pub const START_FEN: &'static str =
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

    /// Parse a board position from FEN notation.
    ///
    /// Uppercase letters are Red. The side to move may be `w` or `r` for Red
    /// and `b` for Black, and defaults to Red when missing. Any further fields
    /// are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let placement = parts.first().ok_or(FenError::Empty)?;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_RANKS as usize {
            return Err(FenError::WrongRankCount { found: rows.len() });
        }

        let mut counts = [[0u32; 7]; 2];
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = BOARD_RANKS - 1 - row_idx as u8;
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::Red
                } else {
                    Color::Black
                };
                if file >= BOARD_FILES as usize {
                    return Err(FenError::WrongFileCount {
                        rank: rank as usize,
                        files: file + 1,
                    });
                }
                let count = &mut counts[color.index()][piece.index()];
                *count += 1;
                if *count > piece.max_count() {
                    return Err(FenError::TooManyPieces {
                        piece: piece.to_fen_char(color),
                        count: *count,
                    });
                }
                board.set_piece(Square::from_coords(file as u8, rank), color, piece);
                file += 1;
            }
            if file != BOARD_FILES as usize {
                return Err(FenError::WrongFileCount {
                    rank: rank as usize,
                    files: file,
                });
            }
        }

        board.turn = match parts.get(1).copied() {
            None | Some("w") | Some("r") => Color::Red,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..BOARD_RANKS).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..BOARD_FILES {
                if let Some((color, piece)) = self.piece_at(Square::from_coords(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.turn {
            Color::Red => "w",
            Color::Black => "b",
        };
        format!("{} {} - - 0 1", rows.join("/"), active)
    }
}
