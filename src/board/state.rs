use super::attack_tables::AttackTables;
use super::{Bitboard, Color, Piece, Square};

/// Kind lookup order used by `piece_type_at`.
const LOOKUP_ORDER: [Piece; 7] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Cannon,
    Piece::Advisor,
    Piece::King,
];

/// Red's back rank, file a to file i.
const BACK_RANK: [Piece; 9] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Advisor,
    Piece::King,
    Piece::Advisor,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: [Bitboard; 7],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) turn: Color,
    pub(crate) tables: &'static AttackTables,
}

impl Board {
    /// The standard starting position, Red to move.
    #[must_use]
    pub fn new() -> Self {
        Board::with_tables(AttackTables::global())
    }

    /// The standard starting position, using the given attack tables.
    #[must_use]
    pub fn with_tables(tables: &'static AttackTables) -> Self {
        let mut board = Board::empty_with(tables);
        for (file, &piece) in (0u8..).zip(BACK_RANK.iter()) {
            board.set_piece(Square::from_coords(file, 0), Color::Red, piece);
            board.set_piece(Square::from_coords(file, 9), Color::Black, piece);
        }
        for file in [1, 7] {
            board.set_piece(Square::from_coords(file, 2), Color::Red, Piece::Cannon);
            board.set_piece(Square::from_coords(file, 7), Color::Black, Piece::Cannon);
        }
        for file in (0..9).step_by(2) {
            board.set_piece(Square::from_coords(file, 3), Color::Red, Piece::Pawn);
            board.set_piece(Square::from_coords(file, 6), Color::Black, Piece::Pawn);
        }
        board.turn = Color::Red;
        board
    }

    pub(crate) fn empty() -> Self {
        Board::empty_with(AttackTables::global())
    }

    pub(crate) fn empty_with(tables: &'static AttackTables) -> Self {
        Board {
            pieces: [Bitboard::EMPTY; 7],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            turn: Color::Red,
            tables,
        }
    }

    /// Side to move
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// All occupied squares
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    /// Squares occupied by `color`
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Squares holding `piece`, either color
    #[must_use]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Squares holding `piece` of `color`
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[piece.index()] & self.occupied[color.index()]
    }

    /// The attack tables this board looks moves up in
    #[must_use]
    pub fn tables(&self) -> &'static AttackTables {
        self.tables
    }

    /// Kind of the piece on `sq`, or `None` for empty and off-board squares.
    #[must_use]
    pub fn piece_type_at(&self, sq: Square) -> Option<Piece> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        LOOKUP_ORDER
            .iter()
            .copied()
            .find(|piece| self.pieces[piece.index()].contains(sq))
    }

    /// Color and kind of the piece on `sq`.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let piece = self.piece_type_at(sq)?;
        let color = if self.occupied[Color::Red.index()].contains(sq) {
            Color::Red
        } else {
            Color::Black
        };
        Some((color, piece))
    }

    /// Checks that the kind, color and total occupancy boards agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut union = Bitboard::EMPTY;
        for bb in &self.pieces {
            if union.intersects(*bb) {
                return false;
            }
            union |= *bb;
        }
        let [red, black] = self.occupied;
        !red.intersects(black)
            && union == self.all_occupied
            && (red | black) == self.all_occupied
            && (self.all_occupied & !super::masks::IN_BOARD).is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Boards compare by position; the attack tables they reference are ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
            && self.occupied == other.occupied
            && self.all_occupied == other.all_occupied
            && self.turn == other.turn
    }
}

impl Eq for Board {}
