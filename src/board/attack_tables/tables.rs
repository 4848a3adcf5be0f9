//! Dense blocker-indexed attack storage.

use crate::board::types::{Bitboard, Square};

/// Compact index of `occ` within `mask`: bit `i` of the result is set when the
/// `i`-th lowest square of `mask` is occupied.
pub(crate) fn index_from_occupancy(occ: Bitboard, mask: Bitboard) -> usize {
    let mut index = 0usize;
    for (bit, sq) in mask.iter().enumerate() {
        if occ.contains(sq) {
            index |= 1usize << bit;
        }
    }
    index
}

/// Per-square relevant masks plus one flat attack array.
///
/// Square `sq` owns `2^popcount(masks[sq])` consecutive slots starting at
/// `offsets[sq]`. Off-board squares have no slots.
#[derive(Clone)]
pub(crate) struct BlockerTable {
    masks: Vec<Bitboard>,
    offsets: Vec<Option<usize>>,
    attacks: Vec<Bitboard>,
}

impl BlockerTable {
    pub(crate) fn new() -> Self {
        BlockerTable {
            masks: vec![Bitboard::EMPTY; 256],
            offsets: vec![None; 256],
            attacks: Vec::new(),
        }
    }

    /// Reserve the slots for `sq` and return its offset.
    pub(crate) fn allocate(&mut self, sq: Square, mask: Bitboard) -> usize {
        let offset = self.attacks.len();
        let size = 1usize << mask.popcount();
        self.attacks.resize(offset + size, Bitboard::EMPTY);
        self.masks[sq.index()] = mask;
        self.offsets[sq.index()] = Some(offset);
        offset
    }

    pub(crate) fn set(&mut self, offset: usize, index: usize, attacks: Bitboard) {
        self.attacks[offset + index] = attacks;
    }

    #[inline]
    pub(crate) fn mask(&self, sq: Square) -> Bitboard {
        self.masks[sq.index()]
    }

    /// Look up the attacks from `sq` given the full board occupancy.
    #[inline]
    pub(crate) fn attack(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        match self.offsets[sq.index()] {
            Some(offset) => {
                let mask = self.masks[sq.index()];
                self.attacks[offset + index_from_occupancy(occupied & mask, mask)]
            }
            None => Bitboard::EMPTY,
        }
    }

    /// Number of stored attack sets
    pub(crate) fn len(&self) -> usize {
        self.attacks.len()
    }
}
