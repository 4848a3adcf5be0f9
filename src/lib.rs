pub mod board;

pub use board::{AttackTables, Bitboard, Board, Color, Move, Piece, Square};
