//! Xiangqi board representation and move generation.
//!
//! Uses 256-bit bitboards over a padded 16x16 grid and precomputed attack
//! tables. Moves are pseudo-legal: they follow each piece's movement rules
//! but do not check whether the mover's king is left capturable.
//!
//! # Example
//! ```
//! use xiangqi_engine::board::{Bitboard, Board};
//!
//! let board = Board::new();
//! let moves = board.pseudo_legal_moves(Bitboard::ALL, Bitboard::IN_BOARD);
//! println!("Starting position has {} pseudo-legal moves", moves.len());
//! ```

mod attack_tables;
mod display;
mod error;
mod fen;
mod make_move;
pub mod masks;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use attack_tables::AttackTables;
pub use error::{FenError, SquareError, TableError};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, Color, Move, MoveList, MoveListIntoIter, Piece, ScanReversed, Square,
    BOARD_FILES, BOARD_RANKS,
};

impl Bitboard {
    /// All 90 playable squares.
    pub const IN_BOARD: Bitboard = masks::IN_BOARD;
}
