//! One-time attack table construction.
//!
//! Rays walk the padded grid by fixed deltas and stop as soon as a step
//! leaves the playable region.

use super::tables::{index_from_occupancy, BlockerTable};
use crate::board::error::TableError;
use crate::board::masks::{edges, ADVISOR_SQUARES, BLACK_SIDE, IN_BOARD, PALACE, RED_SIDE};
use crate::board::types::{Bitboard, Color, Square};

pub(crate) const RANK_DIRECTIONS: [i16; 2] = [-1, 1];
pub(crate) const FILE_DIRECTIONS: [i16; 2] = [-16, 16];
pub(crate) const ORTHOGONAL: [i16; 4] = [16, 1, -16, -1];
pub(crate) const DIAGONAL: [i16; 4] = [15, 17, -15, -17];

/// Knight destinations grouped by the orthogonal leg they pass over,
/// in `ORTHOGONAL` order.
pub(crate) const KNIGHT_JUMPS: [[i16; 2]; 4] = [[33, 31], [-14, 18], [-33, -31], [-18, 14]];

/// Largest relevant mask we index densely.
const MAX_MASK_BITS: u32 = 12;

/// Reject deltas that do not describe a step of at most two files and ranks.
pub(crate) fn validate_deltas(deltas: &[i16]) -> Result<(), TableError> {
    for &delta in deltas {
        let dr = (delta + 8).div_euclid(16);
        let df = delta - dr * 16;
        if delta == 0 || dr.abs() > 2 || df.abs() > 2 {
            return Err(TableError::MalformedDelta { delta });
        }
    }
    Ok(())
}

/// All playable squares, in index order.
pub(crate) fn board_squares() -> impl Iterator<Item = Square> {
    IN_BOARD.iter()
}

/// Project from `sq` along each delta, stopping at (and including) the first
/// occupied square, or at the board edge.
pub(crate) fn sliding_attacks(sq: Square, occupied: Bitboard, deltas: &[i16]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &delta in deltas {
        let mut current = sq;
        while let Some(next) = current.offset(delta).filter(|s| s.in_board()) {
            attacks |= Bitboard::from_square(next);
            if occupied.contains(next) {
                break;
            }
            current = next;
        }
    }
    attacks
}

/// One step along each delta.
pub(crate) fn step_attacks(sq: Square, deltas: &[i16]) -> Bitboard {
    sliding_attacks(sq, Bitboard::ALL, deltas)
}

/// The first occupied square beyond exactly one screen, along each delta.
pub(crate) fn jump_attacks(sq: Square, occupied: Bitboard, deltas: &[i16]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &delta in deltas {
        let mut screens = 0;
        let mut current = sq;
        while let Some(next) = current.offset(delta).filter(|s| s.in_board()) {
            if occupied.contains(next) {
                if screens == 1 {
                    attacks |= Bitboard::from_square(next);
                    break;
                }
                screens += 1;
            }
            current = next;
        }
    }
    attacks
}

/// Cannon attacks: empty squares before the first piece, plus the capture
/// beyond a single screen.
pub(crate) fn cannon_attacks(sq: Square, occupied: Bitboard, deltas: &[i16]) -> Bitboard {
    jump_attacks(sq, occupied, deltas) | (sliding_attacks(sq, occupied, deltas) & !occupied)
}

/// Visit every subset of `mask` exactly once using the carry-rippler
/// `(subset - mask) & mask`, starting from the empty set.
///
/// Returns the number of subsets visited.
pub(crate) fn for_each_subset(mask: Bitboard, mut f: impl FnMut(Bitboard)) -> usize {
    let mut subset = Bitboard::EMPTY;
    let mut visited = 0;
    loop {
        f(subset);
        visited += 1;
        subset = subset.wrapping_sub(mask) & mask;
        if subset.is_empty() {
            break;
        }
    }
    visited
}

/// Fill the slots for `sq` from `attacks(subset)` over every subset of `mask`.
fn fill_square(
    table: &mut BlockerTable,
    sq: Square,
    mask: Bitboard,
    attacks: impl Fn(Bitboard) -> Bitboard,
) -> Result<(), TableError> {
    let bits = mask.popcount();
    if bits > MAX_MASK_BITS {
        return Err(TableError::MaskTooWide { square: sq.0, bits });
    }
    let offset = table.allocate(sq, mask);
    let visited = for_each_subset(mask, |subset| {
        table.set(offset, index_from_occupancy(subset, mask), attacks(subset));
    });
    let expected = 1usize << bits;
    if visited != expected {
        return Err(TableError::SubsetCount {
            square: sq.0,
            expected,
            visited,
        });
    }
    Ok(())
}

/// Table for a rook (`jump == false`) or cannon (`jump == true`) along one
/// pair of opposite directions.
///
/// Rook masks drop the far edge squares, whose occupancy never changes the
/// result. Cannon masks keep them: a piece there can be captured over a screen.
pub(crate) fn build_line_table(deltas: &[i16], jump: bool) -> Result<BlockerTable, TableError> {
    validate_deltas(deltas)?;
    let mut table = BlockerTable::new();
    for sq in board_squares() {
        let rays = sliding_attacks(sq, Bitboard::EMPTY, deltas);
        if jump {
            fill_square(&mut table, sq, rays, |subset| {
                cannon_attacks(sq, subset, deltas)
            })?;
        } else {
            fill_square(&mut table, sq, rays & !edges(sq), |subset| {
                sliding_attacks(sq, subset, deltas)
            })?;
        }
    }
    Ok(table)
}

/// Knight table keyed by which of the four leg squares are occupied.
pub(crate) fn build_knight_table() -> Result<BlockerTable, TableError> {
    validate_deltas(&ORTHOGONAL)?;
    for jumps in &KNIGHT_JUMPS {
        validate_deltas(jumps)?;
    }
    let mut table = BlockerTable::new();
    for sq in board_squares() {
        let legs: Vec<(Square, &[i16; 2])> = ORTHOGONAL
            .iter()
            .zip(KNIGHT_JUMPS.iter())
            .filter_map(|(&d, jumps)| sq.offset(d).filter(|s| s.in_board()).map(|leg| (leg, jumps)))
            .collect();
        let mask: Bitboard = legs.iter().map(|&(leg, _)| leg).collect();
        fill_square(&mut table, sq, mask, |subset| {
            legs.iter()
                .filter(|(leg, _)| !subset.contains(*leg))
                .fold(Bitboard::EMPTY, |acc, (_, jumps)| acc | step_attacks(sq, &jumps[..]))
        })?;
    }
    Ok(table)
}

/// Bishop (elephant) table keyed by which of the four eye squares are
/// occupied. Destinations never cross the river.
pub(crate) fn build_bishop_table() -> Result<BlockerTable, TableError> {
    validate_deltas(&DIAGONAL)?;
    let mut table = BlockerTable::new();
    for sq in board_squares() {
        let side = if RED_SIDE.contains(sq) {
            RED_SIDE
        } else {
            BLACK_SIDE
        };
        let eyes: Vec<(Square, i16)> = DIAGONAL
            .iter()
            .filter_map(|&d| sq.offset(d).filter(|s| s.in_board()).map(|eye| (eye, 2 * d)))
            .collect();
        let mask: Bitboard = eyes.iter().map(|&(eye, _)| eye).collect();
        fill_square(&mut table, sq, mask, |subset| {
            let deltas: Vec<i16> = eyes
                .iter()
                .filter(|(eye, _)| !subset.contains(*eye))
                .map(|&(_, delta)| delta)
                .collect();
            step_attacks(sq, &deltas) & side
        })?;
    }
    Ok(table)
}

/// King steps, confined to the palace.
pub(crate) fn build_king_attacks() -> Result<Vec<Bitboard>, TableError> {
    validate_deltas(&ORTHOGONAL)?;
    let mut attacks = vec![Bitboard::EMPTY; 256];
    for sq in PALACE.iter() {
        attacks[sq.index()] = step_attacks(sq, &ORTHOGONAL) & PALACE;
    }
    Ok(attacks)
}

/// Advisor steps, confined to the palace.
pub(crate) fn build_advisor_attacks() -> Result<Vec<Bitboard>, TableError> {
    validate_deltas(&DIAGONAL)?;
    let mut attacks = vec![Bitboard::EMPTY; 256];
    for sq in ADVISOR_SQUARES.iter() {
        attacks[sq.index()] = step_attacks(sq, &DIAGONAL) & PALACE;
    }
    Ok(attacks)
}

/// Pawn steps per color: forward only until the pawn stands on the enemy
/// half, then forward and sideways.
pub(crate) fn build_pawn_attacks() -> Result<[Vec<Bitboard>; 2], TableError> {
    let red_home: [i16; 1] = [16];
    let red_across: [i16; 3] = [-1, 16, 1];
    let black_home: [i16; 1] = [-16];
    let black_across: [i16; 3] = [-1, -16, 1];
    for deltas in [&red_home[..], &red_across[..], &black_home[..], &black_across[..]] {
        validate_deltas(deltas)?;
    }

    let mut attacks = [vec![Bitboard::EMPTY; 256], vec![Bitboard::EMPTY; 256]];
    for sq in board_squares() {
        let red: &[i16] = if RED_SIDE.contains(sq) {
            &red_home
        } else {
            &red_across
        };
        let black: &[i16] = if BLACK_SIDE.contains(sq) {
            &black_home
        } else {
            &black_across
        };
        attacks[Color::Red.index()][sq.index()] = step_attacks(sq, red);
        attacks[Color::Black.index()][sq.index()] = step_attacks(sq, black);
    }
    Ok(attacks)
}
