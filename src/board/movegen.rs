use super::{Bitboard, Board, Move, MoveList, Piece, Square};

impl Board {
    /// Squares attacked by the piece on `sq` (empty if `sq` is empty).
    ///
    /// Includes squares held by the piece's own side; pseudo-legal move
    /// generation removes those.
    #[must_use]
    pub fn attacks_mask(&self, sq: Square) -> Bitboard {
        let Some((color, piece)) = self.piece_at(sq) else {
            return Bitboard::EMPTY;
        };
        let occupied = self.all_occupied;
        match piece {
            Piece::Knight => self.tables.knight_attacks(sq, occupied),
            Piece::Bishop => self.tables.bishop_attacks(sq, occupied),
            Piece::Pawn => self.tables.pawn_attacks(color, sq),
            Piece::King => self.tables.king_attacks(sq),
            Piece::Advisor => self.tables.advisor_attacks(sq),
            Piece::Rook => self.tables.rook_attacks(sq, occupied),
            Piece::Cannon => self.tables.cannon_attacks(sq, occupied),
        }
    }

    /// Pseudo-legal moves for the side to move from squares in `from_mask`
    /// to squares in `to_mask`.
    ///
    /// Origins and destinations are both listed from the highest square
    /// index down. Moves that leave the mover's king capturable are included.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from_mask: Bitboard, to_mask: Bitboard) -> MoveList {
        let mut moves = MoveList::new();
        let ours = self.occupied[self.turn.index()];
        for from in (ours & from_mask).scan_reversed() {
            let targets = self.attacks_mask(from) & !ours & to_mask;
            for to in targets.scan_reversed() {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    /// All pseudo-legal moves for the side to move.
    #[must_use]
    pub fn all_pseudo_legal_moves(&self) -> MoveList {
        self.pseudo_legal_moves(Bitboard::ALL, Bitboard::ALL)
    }

    /// Returns true if `mv` moves one of the mover's pieces along its
    /// movement pattern onto an empty or enemy square.
    ///
    /// Does not consider whether the mover's king is left in check.
    #[must_use]
    pub fn is_pseudo_legal(&self, mv: Move) -> bool {
        let (from, to) = (mv.from(), mv.to());
        if !from.in_board() || !to.in_board() {
            return false;
        }
        let ours = self.occupied[self.turn.index()];
        if !ours.contains(from) || ours.contains(to) {
            return false;
        }
        self.attacks_mask(from).contains(to)
    }

    /// Count pseudo-legal move paths of length `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_pseudo_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut child = self.clone();
            child.push(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }
}
