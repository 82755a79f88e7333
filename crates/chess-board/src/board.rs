//! The 8x8 position grid.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::fen::{self, FenError};
use crate::{PieceKind, Square};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// Placeholder printed for an empty square by [`Board::render`].
pub const EMPTY_SQUARE: char = '_';

/// Errors raised by board accessors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("square out of bounds: rank {rank}, file {file} (both must be in 0..8)")]
    OutOfBounds { rank: usize, file: usize },
}

/// A chess position: 64 squares, each empty or holding one piece.
///
/// Squares are addressed by zero-based `(rank, file)`. Rank 0 is rank 1
/// of the chessboard and file 0 is the a-file.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<PieceKind>; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// Creates a board with every square empty.
    pub const fn empty() -> Self {
        Board {
            squares: [None; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(fen::STARTPOS).expect("STARTPOS is valid")
    }

    /// Decodes the placement field of a FEN string.
    ///
    /// Fields after the first space are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        fen::decode_placement(fen)
    }

    /// Encodes this board as a FEN placement field.
    pub fn to_fen_placement(&self) -> String {
        fen::encode_placement(self)
    }

    /// Returns the piece at `(rank, file)`, or `None` if the square is empty.
    pub fn get(&self, rank: usize, file: usize) -> Result<Option<PieceKind>, BoardError> {
        Square::from_coords(rank, file).map(|sq| self.piece_at(sq))
    }

    /// Places `piece` at `(rank, file)`, or clears the square with `None`.
    ///
    /// Nothing is written when the coordinates are out of bounds.
    pub fn set(
        &mut self,
        rank: usize,
        file: usize,
        piece: Option<PieceKind>,
    ) -> Result<(), BoardError> {
        let sq = Square::from_coords(rank, file)?;
        self.set_piece_at(sq, piece);
        Ok(())
    }

    /// Returns the piece on a square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<PieceKind> {
        self.squares[sq.index()]
    }

    /// Replaces the content of a square.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Option<PieceKind>) {
        self.squares[sq.index()] = piece;
    }

    /// Iterates over occupied squares from a1 to h8.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Renders the board as eight lines of eight characters.
    ///
    /// Rank 8 comes first. Pieces print as their symbol and empty squares
    /// as [`EMPTY_SQUARE`]. There is no trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for rank in (0..BOARD_SIZE).rev() {
            for file in 0..BOARD_SIZE {
                let piece = self.squares[rank * BOARD_SIZE + file];
                out.push(piece.map_or(EMPTY_SQUARE, PieceKind::symbol));
            }
            if rank > 0 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen_placement())
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}
