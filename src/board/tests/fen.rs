//! FEN parsing and printing.

use super::sq;
use crate::board::{Board, Color, FenError, Piece};

#[test]
fn test_start_fen_matches_new() {
    let board = Board::from_fen(Board::START_FEN);
    assert_eq!(board, Board::new());
    assert_eq!(board.to_fen(), Board::START_FEN);
}

#[test]
fn test_side_to_move_letters() {
    let placement = "4k4/9/9/9/9/9/9/9/9/4K4";
    assert_eq!(Board::from_fen(placement).turn(), Color::Red);
    assert_eq!(Board::from_fen(&format!("{placement} w")).turn(), Color::Red);
    assert_eq!(Board::from_fen(&format!("{placement} r")).turn(), Color::Red);
    assert_eq!(Board::from_fen(&format!("{placement} b")).turn(), Color::Black);
}

#[test]
fn test_alternate_piece_letters() {
    let board = Board::from_fen("4k4/9/9/9/9/9/9/9/9/2EHK4 w");
    assert_eq!(board.piece_at(sq("c0")), Some((Color::Red, Piece::Bishop)));
    assert_eq!(board.piece_at(sq("d0")), Some((Color::Red, Piece::Knight)));
    assert_eq!(board.to_fen(), "4k4/9/9/9/9/9/9/9/9/2BNK4 w - - 0 1");
}

#[test]
fn test_fen_errors() {
    assert_eq!(Board::try_from_fen(""), Err(FenError::Empty));
    assert_eq!(
        Board::try_from_fen("9/9 w"),
        Err(FenError::WrongRankCount { found: 2 })
    );
    assert_eq!(
        Board::try_from_fen("rnbakabnx/9/9/9/9/9/9/9/9/9"),
        Err(FenError::InvalidPiece { char: 'x' })
    );
    assert_eq!(
        Board::try_from_fen("rnbakabnrr/9/9/9/9/9/9/9/9/9"),
        Err(FenError::WrongFileCount { rank: 9, files: 10 })
    );
    assert_eq!(
        Board::try_from_fen("rnbakabn/9/9/9/9/9/9/9/9/9"),
        Err(FenError::WrongFileCount { rank: 9, files: 8 })
    );
    assert_eq!(
        Board::try_from_fen("9/9/9/9/9/9/9/9/9/9 x"),
        Err(FenError::InvalidSideToMove {
            found: "x".to_string()
        })
    );
    assert_eq!(
        Board::try_from_fen("4k4/9/9/9/9/PPPPPP3/9/9/9/4K4"),
        Err(FenError::TooManyPieces {
            piece: 'P',
            count: 6
        })
    );
    assert_eq!(
        Board::try_from_fen("3kk4/9/9/9/9/9/9/9/9/4K4"),
        Err(FenError::TooManyPieces {
            piece: 'k',
            count: 2
        })
    );
}

#[test]
#[should_panic(expected = "Invalid FEN string")]
fn test_from_fen_panics_on_garbage() {
    let _ = Board::from_fen("not a fen");
}

#[test]
fn test_display_draws_board() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "9  r n b a k a b n r");
    assert_eq!(lines[7], "2  . C . . . . . C .");
    assert_eq!(lines[10], "   a b c d e f g h i");
    assert_eq!(lines[11], "Red to move");
}
