//! Error types for board operations.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has no piece placement field
    Empty,
    /// Placement must list exactly ten ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank does not describe exactly nine files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w', 'r' or 'b')
    InvalidSideToMove { found: String },
    /// More pieces of one kind than a side owns
    TooManyPieces { piece: char, count: u32 },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN string is empty"),
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 10 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 9")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w', 'r' or 'b'")
            }
            FenError::TooManyPieces { piece, count } => {
                write!(f, "Too many pieces '{piece}' ({count}) in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-9)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-8)
    FileOutOfBounds { file: u8 },
    /// Invalid notation (expected a file letter a-i and a rank digit 0-9)
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-9)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for attack table generation failures.
///
/// These indicate a broken movement definition; there is no usable
/// fallback table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A step delta is zero or moves more than two files/ranks at once
    MalformedDelta { delta: i16 },
    /// Subset enumeration did not visit every blocker combination exactly once
    SubsetCount {
        square: u8,
        expected: usize,
        visited: usize,
    },
    /// A relevant mask holds more blockers than the table can index
    MaskTooWide { square: u8, bits: u32 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::MalformedDelta { delta } => {
                write!(f, "Malformed movement delta {delta}")
            }
            TableError::SubsetCount {
                square,
                expected,
                visited,
            } => {
                write!(
                    f,
                    "Square {square:#04x}: visited {visited} blocker subsets, expected {expected}"
                )
            }
            TableError::MaskTooWide { square, bits } => {
                write!(f, "Square {square:#04x}: relevant mask has {bits} bits")
            }
        }
    }
}

impl std::error::Error for TableError {}
