//! Arbitro: a chess rules engine.
//!
//! Given an 8x8 board and a piece, answers which destinations are legal,
//! whether a side is in check, and whether it is checkmated. Presentation
//! concerns (rendering, input, turn alternation) belong to the caller, which
//! also owns the one live board; every query here works on snapshots and
//! simulates hypothetical moves on private copies only.
//!
//! Out of scope by design: castling, en passant, promotion, stalemate and
//! draw detection, move history, notation, and search.

pub mod board;
pub mod rules;

pub use board::{Board, Color, Piece, PieceKind, Pos};
