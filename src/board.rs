// Grid mapping: the board is indexed [rank][file]. Rank 0 is Black's back
// rank, rank 7 is White's, so White pawns advance toward rank 0 (delta -1)
// and Black pawns toward rank 7 (delta +1). File 0 is the queenside rook
// column. We keep this mapping coherent across every query.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A board coordinate. Signed so that off-board targets are representable:
/// legality queries answer `false` for them instead of refusing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pos {
    pub file: i8,
    pub rank: i8,
}

impl Pos {
    pub fn new(file: i8, rank: i8) -> Pos {
        Pos { file, rank }
    }

    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.file) && (0..8).contains(&self.rank)
    }
}

/// One piece on the board. `pos` always mirrors the grid slot holding the
/// piece; every mutation goes through `Board` so the two stay in sync.
/// `has_moved` is flipped by `apply_move` but read by no current rule: it is
/// reserved state for castling / en passant, which this engine does not
/// implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub pos: Pos,
    pub has_moved: bool,
}

// Back rank layout, queenside rook first.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid where each cell owns at most one piece.
///
/// The board is a plain value: `Clone` produces a fully independent copy,
/// which is what legality queries simulate hypothetical moves on. The engine
/// holds no state between calls; the one live board belongs to the caller
/// and is only ever mutated through an explicit `apply_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board, for composing positions square by square with `put`.
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position: pawns on ranks 1 and 6, back ranks
    /// R N B Q K B N R on ranks 0 (Black) and 7 (White).
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for file in 0..8 {
            board.put(PieceKind::Pawn, Color::Black, Pos::new(file, 1));
            board.put(PieceKind::Pawn, Color::White, Pos::new(file, 6));
        }
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.put(kind, Color::Black, Pos::new(file as i8, 0));
            board.put(kind, Color::White, Pos::new(file as i8, 7));
        }
        board
    }

    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        if !pos.in_bounds() {
            return None;
        }
        self.squares[pos.rank as usize][pos.file as usize].as_ref()
    }

    /// Place a new, unmoved piece on `pos`, replacing any occupant.
    /// Off-board positions are ignored.
    pub fn put(&mut self, kind: PieceKind, color: Color, pos: Pos) {
        if !pos.in_bounds() {
            return;
        }
        self.squares[pos.rank as usize][pos.file as usize] = Some(Piece {
            kind,
            color,
            pos,
            has_moved: false,
        });
    }

    /// Vacate a square, returning whatever stood on it.
    pub fn clear(&mut self, pos: Pos) -> Option<Piece> {
        if !pos.in_bounds() {
            return None;
        }
        self.squares[pos.rank as usize][pos.file as usize].take()
    }

    /// All pieces of one color in row-major (rank-then-file) scan order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.squares
            .iter()
            .flatten()
            .filter_map(Option::as_ref)
            .filter(move |p| p.color == color)
    }

    /// Apply an already-validated move: vacate `from`, write the piece to
    /// `to` with its recorded position updated and `has_moved` set. Returns
    /// the captured piece, if any. This is the only routine that relocates a
    /// piece, so position/grid consistency is maintained in one place.
    ///
    /// Legality is the caller's concern; applying an unvalidated move simply
    /// rearranges the grid.
    pub fn apply_move(&mut self, from: Pos, to: Pos) -> Option<Piece> {
        if !to.in_bounds() {
            return None;
        }
        let Some(mut piece) = self.clear(from) else {
            return None;
        };
        piece.pos = to;
        piece.has_moved = true;
        self.squares[to.rank as usize][to.file as usize].replace(piece)
    }
}

// Simple display (ranks top to bottom, uppercase = White)
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(p) = self.piece_at(Pos::new(file, rank)) {
                    let ch = match (p.color, p.kind) {
                        (Color::White, PieceKind::Pawn) => 'P',
                        (Color::White, PieceKind::Knight) => 'N',
                        (Color::White, PieceKind::Bishop) => 'B',
                        (Color::White, PieceKind::Rook) => 'R',
                        (Color::White, PieceKind::Queen) => 'Q',
                        (Color::White, PieceKind::King) => 'K',
                        (Color::Black, PieceKind::Pawn) => 'p',
                        (Color::Black, PieceKind::Knight) => 'n',
                        (Color::Black, PieceKind::Bishop) => 'b',
                        (Color::Black, PieceKind::Rook) => 'r',
                        (Color::Black, PieceKind::Queen) => 'q',
                        (Color::Black, PieceKind::King) => 'k',
                    };
                    write!(f, "{} ", ch)?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
