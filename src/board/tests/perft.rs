//! Perft (move path counting) for move generation regressions.
//!
//! Counts are over pseudo-legal moves, so kings may be captured and play
//! continues afterwards.

use crate::board::Board;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1",
        depths: &[(1, 44)],
    },
    TestPosition {
        name: "Cannon Screen",
        fen: "4k4/9/r8/9/9/9/P8/9/9/C3K4 w - - 0 1",
        depths: &[(1, 10), (2, 155)],
    },
    TestPosition {
        name: "Blocked Knight Leg",
        fen: "4k4/9/9/9/4p4/4N4/9/9/9/4K4 w - - 0 1",
        depths: &[(1, 9), (2, 36)],
    },
    TestPosition {
        name: "Palace Pieces",
        fen: "4k4/9/9/9/9/9/9/9/4A4/2B1K4 w - - 0 1",
        depths: &[(1, 8), (2, 24)],
    },
];

#[test]
fn test_perft_positions() {
    for pos in TEST_POSITIONS {
        let board = Board::from_fen(pos.fen);
        for &(depth, expected) in pos.depths {
            assert_eq!(
                board.perft(depth),
                expected,
                "{} at depth {depth}",
                pos.name
            );
        }
    }
}

#[test]
fn test_perft_depth_zero_is_one() {
    assert_eq!(Board::new().perft(0), 1);
}

#[test]
fn test_perft_sums_children() {
    let board = Board::new();
    let mut total = 0;
    for mv in board.all_pseudo_legal_moves() {
        let mut child = board.clone();
        child.push(mv);
        total += child.perft(1);
    }
    assert_eq!(board.perft(2), total);
}
