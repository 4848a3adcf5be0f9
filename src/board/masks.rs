//! Pre-computed bitboard masks for board geometry.
//!
//! Contains the playable region, the two halves of the board split by the
//! river, the palaces, and per-file/per-rank masks.

use super::types::{Bitboard, Square, BOARD_FILES, BOARD_RANKS};

/// All 90 playable squares.
pub const IN_BOARD: Bitboard = {
    let mut bb = Bitboard::EMPTY;
    let mut rank = 0;
    while rank < BOARD_RANKS {
        let mut file = 0;
        while file < BOARD_FILES {
            bb = bb.with(Square::from_coords(file, rank));
            file += 1;
        }
        rank += 1;
    }
    bb
};

/// Board files a-i, each restricted to the playable region
pub const FILES: [Bitboard; BOARD_FILES as usize] = {
    let mut masks = [Bitboard::EMPTY; BOARD_FILES as usize];
    let mut file = 0;
    while file < BOARD_FILES {
        let mut rank = 0;
        while rank < BOARD_RANKS {
            masks[file as usize] = masks[file as usize].with(Square::from_coords(file, rank));
            rank += 1;
        }
        file += 1;
    }
    masks
};

/// Board ranks 0-9, each restricted to the playable region
pub const RANKS: [Bitboard; BOARD_RANKS as usize] = {
    let mut masks = [Bitboard::EMPTY; BOARD_RANKS as usize];
    let mut rank = 0;
    while rank < BOARD_RANKS {
        let mut file = 0;
        while file < BOARD_FILES {
            masks[rank as usize] = masks[rank as usize].with(Square::from_coords(file, rank));
            file += 1;
        }
        rank += 1;
    }
    masks
};

/// Red's half: padded ranks 0-7 (board ranks 0-4 plus padding).
pub const RED_SIDE: Bitboard = Bitboard([!0, !0, 0, 0]);
/// Black's half: padded ranks 8-15 (board ranks 5-9 plus padding).
pub const BLACK_SIDE: Bitboard = Bitboard([0, 0, !0, !0]);

/// Both palaces: files d-f on ranks 0-2 and 7-9.
pub const PALACE: Bitboard = {
    let mut bb = Bitboard::EMPTY;
    let ranks = [0, 1, 2, 7, 8, 9];
    let mut i = 0;
    while i < ranks.len() {
        let mut file = 3;
        while file <= 5 {
            bb = bb.with(Square::from_coords(file, ranks[i]));
            file += 1;
        }
        i += 1;
    }
    bb
};

/// The five palace points per side an advisor can stand on.
pub const ADVISOR_SQUARES: Bitboard = {
    let points = [(3, 0), (5, 0), (4, 1), (3, 2), (5, 2)];
    let mut bb = Bitboard::EMPTY;
    let mut i = 0;
    while i < points.len() {
        let sq = Square::from_coords(points[i].0, points[i].1);
        bb = bb.with(sq).with(sq.mirror());
        i += 1;
    }
    bb
};

/// Outer ranks and files that do not contain `sq`.
///
/// A slider's blocker on one of these can never change its attacks.
#[must_use]
pub const fn edges(sq: Square) -> Bitboard {
    let rank_edges = RANKS[0].or(RANKS[BOARD_RANKS as usize - 1]);
    let file_edges = FILES[0].or(FILES[BOARD_FILES as usize - 1]);
    let own_rank = if sq.in_board() {
        RANKS[sq.board_rank() as usize]
    } else {
        Bitboard::EMPTY
    };
    let own_file = if sq.in_board() {
        FILES[sq.board_file() as usize]
    } else {
        Bitboard::EMPTY
    };
    rank_edges
        .and(own_rank.not())
        .or(file_edges.and(own_file.not()))
}
