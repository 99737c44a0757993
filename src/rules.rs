//! Move legality, attack detection, and the check / checkmate queries.
//!
//! Everything here is a pure query over a board snapshot. Hypothetical moves
//! are tried on independent clones, never on the caller's board.

use crate::board::{Board, Color, Piece, PieceKind, Pos};

impl Board {
    // Path & attack geometry -------------------------------------

    /// Walks unit steps from `from` (exclusive) toward `to` (exclusive) and
    /// reports whether every intermediate square is empty. The direction
    /// comes from the sign of the deltas; diagonal paths step both axes
    /// together, straight paths step one. The caller guarantees the two
    /// squares are aligned.
    fn is_path_clear(&self, from: Pos, to: Pos, diagonal: bool) -> bool {
        let file_step = (to.file - from.file).signum();
        let rank_step = (to.rank - from.rank).signum();

        let mut file = from.file + file_step;
        let mut rank = from.rank + rank_step;
        loop {
            let reached_end = if diagonal {
                file == to.file || rank == to.rank
            } else {
                file == to.file && rank == to.rank
            };
            if reached_end {
                return true;
            }
            if self.piece_at(Pos::new(file, rank)).is_some() {
                return false;
            }
            file += file_step;
            rank += rank_step;
        }
    }

    /// Position of `color`'s king, scanning the 64 squares in row-major
    /// order. A king-less board is a valid, if degenerate, input.
    pub fn find_king(&self, color: Color) -> Option<Pos> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.pos)
    }

    /// Whether any piece of `by` could reach `target` under its own basic
    /// movement rules, ignoring king safety on the attacking side.
    ///
    /// The probe runs on a copy with `target` vacated, so an occupant there
    /// cannot mask an attacker's raw reach (a slider must still see the
    /// square even though the move would be a capture).
    pub fn is_square_attacked(&self, target: Pos, by: Color) -> bool {
        let mut probe = self.clone();
        probe.clear(target);
        for attacker in probe.pieces(by) {
            if probe.basic_move_ok(attacker, target) {
                return true;
            }
        }
        false
    }

    // Move legality ----------------------------------------------

    /// Shape, path, and capture rules for one piece, without the self-check
    /// filter. Total over any integer target: off-board and own-occupied
    /// squares are simply illegal, never an error.
    fn basic_move_ok(&self, piece: &Piece, to: Pos) -> bool {
        if !to.in_bounds() {
            return false;
        }
        if self.piece_at(to).is_some_and(|p| p.color == piece.color) {
            return false;
        }

        let from = piece.pos;
        let dx = (to.file - from.file).abs();
        let dy = (to.rank - from.rank).abs();

        match piece.kind {
            PieceKind::Pawn => self.pawn_move_ok(piece, to),
            // Knights jump, so no path check.
            PieceKind::Knight => (dx == 2 && dy == 1) || (dx == 1 && dy == 2),
            PieceKind::Bishop => dx == dy && self.is_path_clear(from, to, true),
            PieceKind::Rook => (dx == 0 || dy == 0) && self.is_path_clear(from, to, false),
            PieceKind::Queen => {
                if dx == dy {
                    self.is_path_clear(from, to, true)
                } else if dx == 0 || dy == 0 {
                    self.is_path_clear(from, to, false)
                } else {
                    false
                }
            }
            // Single step in any direction. No castling.
            PieceKind::King => dx <= 1 && dy <= 1,
        }
    }

    fn pawn_move_ok(&self, piece: &Piece, to: Pos) -> bool {
        let from = piece.pos;
        let (direction, start_rank): (i8, i8) = match piece.color {
            Color::White => (-1, 6),
            Color::Black => (1, 1),
        };
        let dy = to.rank - from.rank;

        // Forward moves need an empty destination; the double step also
        // needs the square it passes over clear.
        if to.file == from.file && self.piece_at(to).is_none() {
            if dy == direction {
                return true;
            }
            if from.rank == start_rank
                && dy == 2 * direction
                && self
                    .piece_at(Pos::new(from.file, from.rank + direction))
                    .is_none()
            {
                return true;
            }
        }

        // Diagonal step only as a capture; same-color occupants were already
        // rejected upstream. No en passant, no promotion.
        (to.file - from.file).abs() == 1 && dy == direction && self.piece_at(to).is_some()
    }

    /// True if carrying out the candidate move would leave the mover's own
    /// king attacked. Simulated on an independent copy of the board.
    fn would_expose_king(&self, piece: &Piece, to: Pos) -> bool {
        let mut hypothetical = self.clone();
        hypothetical.apply_move(piece.pos, to);
        hypothetical.in_check(piece.color)
    }

    /// The central legality predicate: the piece's shape and path rules,
    /// then the self-check filter, applied to every basic-legal candidate.
    /// `piece` must actually stand on its recorded square of this board.
    pub fn is_valid_move(&self, piece: &Piece, to: Pos) -> bool {
        self.basic_move_ok(piece, to) && !self.would_expose_king(piece, to)
    }

    // Game-state queries -----------------------------------------

    /// Whether `color`'s king is under attack. A board without that king is
    /// never in check, by convention.
    pub fn in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Check with no legal reply: every piece of `color` is tried against
    /// all 64 squares. `is_valid_move` already folds in the self-check
    /// filter, so a single pass suffices. O(pieces x squares x path cost),
    /// fine for interactive play, unsuitable for search.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.in_check(color) {
            return false;
        }
        for piece in self.pieces(color) {
            for rank in 0..8 {
                for file in 0..8 {
                    if self.is_valid_move(piece, Pos::new(file, rank)) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Every legal destination for `piece`, in row-major (rank-then-file)
    /// scan order.
    pub fn valid_moves(&self, piece: &Piece) -> Vec<Pos> {
        let mut moves = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let to = Pos::new(file, rank);
                if self.is_valid_move(piece, to) {
                    moves.push(to);
                }
            }
        }
        moves
    }
}
