//! Chess position model and FEN piece placement.
//!
//! This crate provides:
//! - [`PieceKind`], built from a [`Piece`] and a [`Color`]
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Board`], an 8x8 grid of optional pieces
//! - decoding and encoding of the FEN piece-placement field

mod board;
mod color;
pub mod fen;
mod piece;
mod square;

pub use board::{Board, BoardError, BOARD_SIZE, EMPTY_SQUARE};
pub use color::Color;
pub use fen::{decode_placement, encode_placement, FenError, STARTPOS};
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
