//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Xiangqi piece kinds, one per movement class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    /// Forward stepper; may also step sideways once across the river.
    Pawn,
    /// Slides along ranks and files; captures by jumping exactly one screen.
    Cannon,
    /// Slides along ranks and files.
    Rook,
    /// L-shaped jumper, blocked by a piece on its leg.
    Knight,
    /// Two-step diagonal mover (elephant), blocked by a piece on its eye,
    /// never crosses the river.
    Bishop,
    /// Diagonal stepper confined to the palace.
    Advisor,
    /// Orthogonal stepper confined to the palace.
    King,
}

impl Piece {
    /// All piece kinds in index order
    pub const ALL: [Piece; 7] = [
        Piece::Pawn,
        Piece::Cannon,
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Advisor,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Cannon => 1,
            Piece::Rook => 2,
            Piece::Knight => 3,
            Piece::Bishop => 4,
            Piece::Advisor => 5,
            Piece::King => 6,
        }
    }

    /// Parse a piece kind from a FEN letter (either case).
    ///
    /// Accepts the alternative letters `e` (elephant) and `h` (horse).
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'c' => Some(Piece::Cannon),
            'r' => Some(Piece::Rook),
            'n' | 'h' => Some(Piece::Knight),
            'b' | 'e' => Some(Piece::Bishop),
            'a' => Some(Piece::Advisor),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Cannon => 'c',
            Piece::Rook => 'r',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Advisor => 'a',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for Red)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::Red {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Number of pieces of this kind each side starts with.
    #[inline]
    #[must_use]
    pub const fn max_count(self) -> u32 {
        match self {
            Piece::Pawn => 5,
            Piece::King => 1,
            _ => 2,
        }
    }

    /// Returns true if this piece's attacks depend on other pieces' placement
    #[inline]
    #[must_use]
    pub const fn is_blockable(self) -> bool {
        matches!(
            self,
            Piece::Cannon | Piece::Rook | Piece::Knight | Piece::Bishop
        )
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Cannon => "Cannon",
            Piece::Rook => "Rook",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Advisor => "Advisor",
            Piece::King => "King",
        };
        write!(f, "{name}")
    }
}

/// Sides. Red moves first and starts on ranks 0-4.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, piece) in Piece::ALL.iter().enumerate() {
            assert_eq!(piece.index(), i);
        }
    }

    #[test]
    fn fen_letters_roundtrip() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            assert_eq!(
                Piece::from_char(piece.to_fen_char(Color::Red)),
                Some(piece)
            );
        }
        assert_eq!(Piece::from_char('e'), Some(Piece::Bishop));
        assert_eq!(Piece::from_char('H'), Some(Piece::Knight));
        assert_eq!(Piece::from_char('q'), None);
    }

    #[test]
    fn full_set_is_sixteen_pieces() {
        let total: u32 = Piece::ALL.iter().map(|p| p.max_count()).sum();
        assert_eq!(total, 16);
    }
}
