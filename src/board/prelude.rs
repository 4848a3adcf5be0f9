//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use xiangqi_engine::board::prelude::*;
//! ```

pub use super::{Bitboard, Board, Color, FenError, Move, MoveList, Piece, Square, SquareError};
