//! Attack tables for move generation.
//!
//! Built once per process. Rooks and cannons use one table per direction pair
//! (rank, file); knights and bishops are keyed by their four leg/eye squares;
//! kings, advisors and pawns have fixed per-square sets. Lookups return
//! `Bitboard` copies, so callers can never modify a stored entry.

mod generate;
mod tables;

use std::fmt;

use once_cell::sync::Lazy;

use self::generate::{
    build_advisor_attacks, build_bishop_table, build_king_attacks, build_knight_table,
    build_line_table, build_pawn_attacks, FILE_DIRECTIONS, RANK_DIRECTIONS,
};
use self::tables::BlockerTable;
use super::error::TableError;
use super::types::{Bitboard, Color, Square};

#[cfg(test)]
pub(crate) use self::generate::{cannon_attacks, sliding_attacks, ORTHOGONAL};

static ATTACK_TABLES: Lazy<AttackTables> = Lazy::new(|| {
    AttackTables::try_build()
        .unwrap_or_else(|err| panic!("attack table generation failed: {err}"))
});

/// Precomputed attack sets for every piece kind and square.
pub struct AttackTables {
    rook_rank: BlockerTable,
    rook_file: BlockerTable,
    cannon_rank: BlockerTable,
    cannon_file: BlockerTable,
    knight: BlockerTable,
    bishop: BlockerTable,
    king: Vec<Bitboard>,
    advisor: Vec<Bitboard>,
    pawn: [Vec<Bitboard>; 2],
}

impl AttackTables {
    /// The process-wide tables, built on first access.
    ///
    /// # Panics
    /// Panics if table generation fails; the movement definitions are fixed,
    /// so this only happens if they are broken.
    #[must_use]
    pub fn global() -> &'static AttackTables {
        &ATTACK_TABLES
    }

    /// Build a fresh set of tables.
    pub fn try_build() -> Result<Self, TableError> {
        let tables = AttackTables {
            rook_rank: build_line_table(&RANK_DIRECTIONS, false)?,
            rook_file: build_line_table(&FILE_DIRECTIONS, false)?,
            cannon_rank: build_line_table(&RANK_DIRECTIONS, true)?,
            cannon_file: build_line_table(&FILE_DIRECTIONS, true)?,
            knight: build_knight_table()?,
            bishop: build_bishop_table()?,
            king: build_king_attacks()?,
            advisor: build_advisor_attacks()?,
            pawn: build_pawn_attacks()?,
        };

        #[cfg(feature = "logging")]
        log::debug!(
            "attack tables built: rook {}+{}, cannon {}+{}, knight {}, bishop {} entries",
            tables.rook_rank.len(),
            tables.rook_file.len(),
            tables.cannon_rank.len(),
            tables.cannon_file.len(),
            tables.knight.len(),
            tables.bishop.len()
        );

        Ok(tables)
    }

    /// Rook attacks along its rank and file.
    #[inline]
    #[must_use]
    pub fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.rook_rank.attack(sq, occupied) | self.rook_file.attack(sq, occupied)
    }

    /// Cannon attacks: quiet moves to empty squares plus captures over one screen.
    #[inline]
    #[must_use]
    pub fn cannon_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.cannon_rank.attack(sq, occupied) | self.cannon_file.attack(sq, occupied)
    }

    #[inline]
    #[must_use]
    pub fn knight_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.knight.attack(sq, occupied)
    }

    #[inline]
    #[must_use]
    pub fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.bishop.attack(sq, occupied)
    }

    #[inline]
    #[must_use]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn advisor_attacks(&self, sq: Square) -> Bitboard {
        self.advisor[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn[color.index()][sq.index()]
    }

    /// Squares whose occupancy can change a rook's attacks from `sq`.
    #[must_use]
    pub fn rook_mask(&self, sq: Square) -> Bitboard {
        self.rook_rank.mask(sq) | self.rook_file.mask(sq)
    }

    /// Squares whose occupancy can change a cannon's attacks from `sq`.
    #[must_use]
    pub fn cannon_mask(&self, sq: Square) -> Bitboard {
        self.cannon_rank.mask(sq) | self.cannon_file.mask(sq)
    }

    /// The knight's leg squares around `sq`.
    #[must_use]
    pub fn knight_mask(&self, sq: Square) -> Bitboard {
        self.knight.mask(sq)
    }

    /// The bishop's eye squares around `sq`.
    #[must_use]
    pub fn bishop_mask(&self, sq: Square) -> Bitboard {
        self.bishop.mask(sq)
    }
}

impl fmt::Debug for AttackTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttackTables")
            .field("rook_entries", &(self.rook_rank.len() + self.rook_file.len()))
            .field(
                "cannon_entries",
                &(self.cannon_rank.len() + self.cannon_file.len()),
            )
            .field("knight_entries", &self.knight.len())
            .field("bishop_entries", &self.bishop.len())
            .finish_non_exhaustive()
    }
}
