//! Move counts for fixed positions, loaded from `tests/data/positions.json`.

use serde::Deserialize;

use xiangqi_engine::board::{Bitboard, Board, Color, Move, Piece, Square};

#[derive(Debug, Deserialize)]
struct Position {
    name: String,
    fen: String,
    moves: usize,
    perft: Vec<(usize, u64)>,
}

fn load_positions() -> Vec<Position> {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("positions.json should parse")
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn fixture_move_counts() {
    for pos in load_positions() {
        let board = Board::try_from_fen(&pos.fen).unwrap_or_else(|e| panic!("{}: {e}", pos.name));
        assert_eq!(
            board.pseudo_legal_moves(Bitboard::ALL, Bitboard::IN_BOARD).len(),
            pos.moves,
            "{}",
            pos.name
        );
        for &(depth, nodes) in &pos.perft {
            assert_eq!(board.perft(depth), nodes, "{} at depth {depth}", pos.name);
        }
    }
}

#[test]
fn fixture_fens_roundtrip() {
    for pos in load_positions() {
        assert_eq!(Board::from_fen(&pos.fen).to_fen(), pos.fen, "{}", pos.name);
    }
}

#[test]
fn start_position_layout() {
    let board = Board::new();
    assert_eq!(board.turn(), Color::Red);
    assert_eq!(board.occupied().popcount(), 32);
    assert_eq!(board.piece_at(sq("e0")), Some((Color::Red, Piece::King)));
    assert_eq!(board.piece_at(sq("h7")), Some((Color::Black, Piece::Cannon)));
    assert_eq!(board.piece_type_at(sq("c6")), Some(Piece::Pawn));
    assert_eq!(board.piece_type_at(sq("c5")), None);
}

#[test]
fn opening_sequence() {
    let mut board = Board::new();
    for (from, to) in [("h2", "e2"), ("h9", "g7"), ("h0", "g2"), ("i9", "h9")] {
        let mv = Move::new(sq(from), sq(to));
        assert!(board.is_pseudo_legal(mv), "{mv}");
        board.push(mv);
    }
    assert_eq!(
        board.to_fen(),
        "rnbakabr1/9/1c4nc1/p1p1p1p1p/9/9/P1P1P1P1P/1C2C1N2/9/RNBAKAB1R w - - 0 1"
    );
}

#[test]
fn square_helpers() {
    let a0 = sq("a0");
    assert_eq!(a0, Square(0x33));
    assert_eq!((a0.file(), a0.rank()), (3, 3));
    assert_eq!(a0.mirror(), sq("a9"));
    assert!(a0.in_board());
    assert!(!Square(0x30).in_board());
    assert_eq!(a0.distance(sq("c1")), 2);
    assert_eq!(Bitboard::IN_BOARD.popcount(), 90);
}
