//! Property-based tests using proptest.

use crate::board::attack_tables::{cannon_attacks, sliding_attacks, ORTHOGONAL};
use crate::board::{Bitboard, Board, Move, Piece};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random pseudo-legal moves, calling `check` after each.
fn random_playout(seed: u64, num_moves: usize, mut check: impl FnMut(&Board, Move)) -> Board {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = board.all_pseudo_legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        board.push(mv);
        check(&board, mv);
    }
    board
}

proptest! {
    /// Property: kind, color and total occupancy agree after every move
    #[test]
    fn prop_board_stays_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut consistent = true;
        random_playout(seed, num_moves, |board, _| consistent &= board.is_consistent());
        prop_assert!(consistent);
    }

    /// Property: the mover's piece lands on the destination and leaves the origin
    #[test]
    fn prop_push_moves_the_piece(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = board.all_pseudo_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            prop_assert!(board.is_pseudo_legal(mv));
            let mover = board.piece_at(mv.from());
            prop_assert_eq!(mover.map(|(color, _)| color), Some(board.turn()));
            board.push(mv);
            prop_assert_eq!(board.piece_at(mv.to()), mover);
            prop_assert_eq!(board.piece_at(mv.from()), None);
        }
    }

    /// Property: generated moves agree with `is_pseudo_legal` both ways
    #[test]
    fn prop_generation_matches_checker(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_playout(seed, num_moves, |_, _| {});
        let moves = board.all_pseudo_legal_moves();
        for from in board.occupied_by(board.turn()) {
            for to in Bitboard::IN_BOARD {
                let mv = Move::new(from, to);
                prop_assert_eq!(board.is_pseudo_legal(mv), moves.contains(mv), "{}", mv);
            }
        }
    }

    /// Property: FEN output parses back to the same position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_playout(seed, num_moves, |_, _| {});
        let parsed = Board::try_from_fen(&board.to_fen());
        prop_assert_eq!(parsed, Ok(board));
    }

    /// Property: table lookups equal attacks computed square by square
    #[test]
    fn prop_sliders_match_direct_computation(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_playout(seed, num_moves, |_, _| {});
        let occupied = board.occupied();
        for from in board.pieces(Piece::Rook) {
            prop_assert_eq!(
                board.attacks_mask(from),
                sliding_attacks(from, occupied, &ORTHOGONAL)
            );
        }
        for from in board.pieces(Piece::Cannon) {
            prop_assert_eq!(
                board.attacks_mask(from),
                cannon_attacks(from, occupied, &ORTHOGONAL)
            );
        }
    }
}
