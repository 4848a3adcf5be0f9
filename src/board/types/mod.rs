//! Core xiangqi types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - padded 16x16 square index (u8)
//! - `Bitboard` - 256-bit board representation
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter, ScanReversed};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::{Square, BOARD_FILES, BOARD_RANKS};
