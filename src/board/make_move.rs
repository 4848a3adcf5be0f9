use super::{Bitboard, Board, Color, Move, Piece, Square};

impl Board {
    /// Place `piece` of `color` on `sq`, replacing whatever stood there.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.remove_piece_at(sq);
        let bit = Bitboard::from_square(sq);
        self.pieces[piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.all_occupied |= bit;
    }

    /// Clear `sq` from every board and return the kind that stood there.
    pub(crate) fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_type_at(sq)?;
        let clear = !Bitboard::from_square(sq);
        self.pieces[piece.index()] &= clear;
        self.occupied[Color::Red.index()] &= clear;
        self.occupied[Color::Black.index()] &= clear;
        self.all_occupied &= clear;
        Some(piece)
    }

    /// Apply `mv` for the side to move and pass the turn.
    ///
    /// Any piece on the destination is captured. The move is not validated;
    /// check it with [`Board::is_pseudo_legal`] first. Pushing from an empty
    /// square only passes the turn.
    pub fn push(&mut self, mv: Move) {
        if let Some(piece) = self.remove_piece_at(mv.from()) {
            self.set_piece(mv.to(), self.turn, piece);
        }

        #[cfg(feature = "logging")]
        log::trace!("{} plays {mv}", self.turn);

        self.turn = self.turn.opponent();
    }
}
