//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Board-level attack sets per piece kind
//! - `movegen.rs` - Pseudo-legal move generation and checking
//! - `push.rs` - Applying moves
//! - `fen.rs` - FEN parsing and printing
//! - `perft.rs` - Move path counts for fixed positions
//! - `proptest.rs` - Property-based tests

mod fen;
mod perft;
mod proptest;

use crate::board::{Bitboard, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn squares(list: &[&str]) -> Bitboard {
    list.iter().map(|s| sq(s)).collect()
}
