//! Bitboard type and operations.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{Square, BOARD_FILES, BOARD_RANKS};

/// A 256-bit bitboard, one bit per padded square index.
///
/// Word 0 holds indices 0-63, word 3 holds indices 192-255. All operations
/// return new values; the `*Assign` operators are the in-place variants for
/// accumulators the caller owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub [u64; 4]);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard([0; 4]);
    pub const ALL: Bitboard = Bitboard([!0; 4]);

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        let mut words = [0u64; 4];
        words[(sq.0 >> 6) as usize] = 1u64 << (sq.0 & 63);
        Bitboard(words)
    }

    /// Returns a copy with `sq` added
    #[inline]
    #[must_use]
    pub const fn with(self, sq: Square) -> Self {
        self.or(Self::from_square(sq))
    }

    /// Returns a copy with `sq` removed
    #[inline]
    #[must_use]
    pub const fn without(self, sq: Square) -> Self {
        self.and(Self::from_square(sq).not())
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0[0].count_ones()
            + self.0[1].count_ones()
            + self.0[2].count_ones()
            + self.0[3].count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0[(sq.0 >> 6) as usize] >> (sq.0 & 63)) & 1 != 0
    }

    /// Returns true if the two bitboards share at least one square
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        !self.and(other).is_empty()
    }

    /// Lowest set square, if any
    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Option<Square> {
        let mut i = 0;
        while i < 4 {
            if self.0[i] != 0 {
                return Some(Square((i as u32 * 64 + self.0[i].trailing_zeros()) as u8));
            }
            i += 1;
        }
        None
    }

    /// Highest set square, if any
    #[inline]
    #[must_use]
    pub const fn msb(self) -> Option<Square> {
        let mut i = 4;
        while i > 0 {
            i -= 1;
            if self.0[i] != 0 {
                return Some(Square((i as u32 * 64 + 63 - self.0[i].leading_zeros()) as u8));
            }
        }
        None
    }

    /// 256-bit subtraction modulo 2^256
    #[inline]
    #[must_use]
    pub const fn wrapping_sub(self, other: Self) -> Self {
        let mut words = [0u64; 4];
        let mut borrow = false;
        let mut i = 0;
        while i < 4 {
            let (diff, b1) = self.0[i].overflowing_sub(other.0[i]);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            words[i] = diff;
            borrow = b1 || b2;
            i += 1;
        }
        Bitboard(words)
    }

    /// Bitwise AND
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard([
            self.0[0] & other.0[0],
            self.0[1] & other.0[1],
            self.0[2] & other.0[2],
            self.0[3] & other.0[3],
        ])
    }

    /// Bitwise OR
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }

    /// Bitwise XOR
    #[inline]
    #[must_use]
    pub const fn xor(self, other: Self) -> Self {
        Bitboard([
            self.0[0] ^ other.0[0],
            self.0[1] ^ other.0[1],
            self.0[2] ^ other.0[2],
            self.0[3] ^ other.0[3],
        ])
    }

    /// Bitwise NOT
    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        Bitboard([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }

    /// Iterate set squares from lowest to highest index
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Iterate set squares from highest to lowest index.
    ///
    /// The iterator owns its copy of the bitboard and clears bits as it goes,
    /// so it cannot be restarted.
    #[inline]
    #[must_use]
    pub fn scan_reversed(self) -> ScanReversed {
        ScanReversed(self)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self::Output {
        Bitboard::not(self)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.and(rhs);
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.or(rhs);
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.xor(rhs);
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb.with(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

/// Renders the playable region, black's back rank first.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_RANKS).rev() {
            for file in 0..BOARD_FILES {
                let ch = if self.contains(Square::from_coords(file, rank)) {
                    '1'
                } else {
                    '.'
                };
                if file > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over set bits in a Bitboard, lowest first
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.0.lsb()?;
        self.0 = self.0.without(sq);
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

/// Iterator over set bits in a Bitboard, highest first
pub struct ScanReversed(Bitboard);

impl Iterator for ScanReversed {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.0.msb()?;
        self.0 = self.0.without(sq);
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ScanReversed {}
