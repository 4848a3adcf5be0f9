//! Square types and utilities.
//!
//! Squares index a padded 16x16 grid (`rank * 16 + file`). Only files 3..=11
//! and ranks 3..=12 are on the board, so a fixed delta such as `+16` (one rank
//! up) can be applied anywhere and the result checked afterwards.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;
use crate::board::masks::IN_BOARD;

/// Padded file of board file `a`.
pub(crate) const FILE_OFFSET: u8 = 3;
/// Padded rank of board rank `0`.
pub(crate) const RANK_OFFSET: u8 = 3;
/// Number of files on the board.
pub const BOARD_FILES: u8 = 9;
/// Number of ranks on the board.
pub const BOARD_RANKS: u8 = 10;

/// A square on the padded 256-slot grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    /// Create a square from board coordinates (file 0-8, rank 0-9).
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_FILES && rank < BOARD_RANKS {
            Some(Self::from_coords(file, rank))
        } else {
            None
        }
    }

    /// Create a square from board coordinates (file 0-8, rank 0-9).
    ///
    /// Coordinates off the board map to `Square(0)`, a padding square that
    /// is never `in_board`.
    #[inline]
    #[must_use]
    pub const fn from_coords(file: u8, rank: u8) -> Self {
        if file >= BOARD_FILES || rank >= BOARD_RANKS {
            return Square(0);
        }
        Square(((rank + RANK_OFFSET) << 4) | (file + FILE_OFFSET))
    }

    /// Padded file (0-15)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 0xf
    }

    /// Padded rank (0-15)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// Board file (0 = file a). Only meaningful for squares on the board.
    #[inline]
    #[must_use]
    pub const fn board_file(self) -> u8 {
        self.file().wrapping_sub(FILE_OFFSET)
    }

    /// Board rank (0 = red's back rank). Only meaningful for squares on the board.
    #[inline]
    #[must_use]
    pub const fn board_rank(self) -> u8 {
        self.rank().wrapping_sub(RANK_OFFSET)
    }

    /// Flip the rank, keeping the file (e.g. a0 <-> a9).
    #[inline]
    #[must_use]
    pub const fn mirror(self) -> Self {
        Square(self.0 ^ 0xf0)
    }

    /// Rotate the square 180 degrees around the board center (e.g. a0 <-> i9).
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        let file = (2 * FILE_OFFSET + BOARD_FILES - 1).wrapping_sub(self.file()) & 0xf;
        Square((self.0 ^ 0xf0) & 0xf0 | file)
    }

    /// Returns true if the square is on the playable 9x10 region
    #[inline]
    #[must_use]
    pub const fn in_board(self) -> bool {
        IN_BOARD.contains(self)
    }

    /// Chebyshev distance between two squares in padded coordinates.
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Square) -> u8 {
        let df = self.file().abs_diff(other.file());
        let dr = self.rank().abs_diff(other.rank());
        if df > dr {
            df
        } else {
            dr
        }
    }

    /// Apply a padded-grid delta. Returns `None` if the result leaves the
    /// 256-slot space or wraps around to a far file.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, delta: i16) -> Option<Square> {
        let target = i16::from(self.0) + delta;
        if !(0..256).contains(&target) {
            return None;
        }
        let target = Square(target as u8);
        if target.distance(self) > 2 {
            return None;
        }
        Some(target)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_board() {
            write!(
                f,
                "{}{}",
                (self.board_file() + b'a') as char,
                self.board_rank()
            )
        } else {
            write!(f, "#{:02x}", self.0)
        }
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        if file >= BOARD_FILES {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= BOARD_RANKS {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square::from_coords(file, rank))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'i' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'0'..=b'9' => bytes[1] - b'0',
            _ => return Err(invalid()),
        };
        Ok(Square::from_coords(file, rank))
    }
}
