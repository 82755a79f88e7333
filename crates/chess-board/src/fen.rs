//! FEN (Forsyth-Edwards Notation) piece placement.
//!
//! Only the first field of a FEN string is interpreted here. Side to move,
//! castling rights, en passant target, and the move counters are returned
//! untouched by [`split_fields`] for callers that need them.

use thiserror::Error;

use crate::{Board, File, PieceKind, Rank, Square, BOARD_SIZE};

/// The standard starting position FEN.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Malformed piece placement.
///
/// `rank` is the chess rank number (8 down to 1) being read when the error
/// occurred and `index` is the zero-based character position in the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: piece placement is empty")]
    Empty,

    #[error("invalid FEN: rank {rank} has more than 8 files at index {index}")]
    TooManyFiles { rank: usize, index: usize },

    #[error("invalid FEN: rank {rank} has {files} files, expected 8 (index {index})")]
    TooFewFiles {
        rank: usize,
        files: usize,
        index: usize,
    },

    #[error("invalid FEN: unrecognized character '{ch}' at index {index}")]
    UnrecognizedChar { ch: char, index: usize },

    #[error("invalid FEN: more than 8 ranks at index {index}")]
    TooManyRanks { index: usize },

    #[error("invalid FEN: expected 8 ranks, got {ranks}")]
    TooFewRanks { ranks: usize },
}

/// Splits a FEN string at its first space into the placement field and
/// the remaining fields.
///
/// A string without a space is all placement and has an empty remainder.
pub fn split_fields(fen: &str) -> (&str, &str) {
    fen.split_once(' ').unwrap_or((fen, ""))
}

/// Decodes the placement field of `fen` into a board.
///
/// Ranks are read from 8 down to 1 and files from a to h. Every rank must
/// cover exactly 8 files and there must be exactly 8 ranks; anything else,
/// including content after the eighth rank, is rejected.
pub fn decode_placement(fen: &str) -> Result<Board, FenError> {
    let (placement, _) = split_fields(fen);
    if placement.is_empty() {
        return Err(FenError::Empty);
    }

    let mut board = Board::empty();
    // Cursor: `rank` counts down from 7, `file` counts squares consumed.
    let mut rank = BOARD_SIZE - 1;
    let mut file = 0;
    let mut end = 0;

    for (index, c) in placement.chars().enumerate() {
        end = index + 1;
        if c == '/' {
            if file < BOARD_SIZE {
                return Err(FenError::TooFewFiles {
                    rank: rank + 1,
                    files: file,
                    index,
                });
            }
            if rank == 0 {
                return Err(FenError::TooManyRanks { index });
            }
            rank -= 1;
            file = 0;
            continue;
        }

        let (width, piece) = match c {
            '1'..='8' => (c as usize - '0' as usize, None),
            _ => match PieceKind::from_symbol(c) {
                Some(piece) => (1, Some(piece)),
                None => return Err(FenError::UnrecognizedChar { ch: c, index }),
            },
        };
        if file + width > BOARD_SIZE {
            return Err(FenError::TooManyFiles {
                rank: rank + 1,
                index,
            });
        }
        if piece.is_some() {
            board.set_piece_at(square(rank, file), piece);
        }
        file += width;
    }

    if file < BOARD_SIZE {
        return Err(FenError::TooFewFiles {
            rank: rank + 1,
            files: file,
            index: end,
        });
    }
    if rank > 0 {
        return Err(FenError::TooFewRanks {
            ranks: BOARD_SIZE - rank,
        });
    }

    Ok(board)
}

/// Encodes a board as a FEN placement field.
///
/// Runs of empty squares are always written as a single digit, so the
/// output is the canonical form that [`decode_placement`] reads back.
pub fn encode_placement(board: &Board) -> String {
    let mut fen = String::new();

    for rank in (0..BOARD_SIZE).rev() {
        let mut empty_count = 0;
        for file in 0..BOARD_SIZE {
            match board.piece_at(square(rank, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.symbol());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen
}

/// Square at in-range `(rank, file)` indices.
fn square(rank: usize, file: usize) -> Square {
    Square::new(File::ALL[file], Rank::ALL[rank])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn split_startpos() {
        assert_eq!(split_fields(STARTPOS), (START_PLACEMENT, "w KQkq - 0 1"));
        assert_eq!(split_fields("8/8/8/8/8/8/8/8"), ("8/8/8/8/8/8/8/8", ""));
    }

    #[test]
    fn decode_startpos() {
        let board = decode_placement(STARTPOS).unwrap();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.get(7, 0), Ok(Some(PieceKind::BlackRook)));
        assert_eq!(board.get(7, 4), Ok(Some(PieceKind::BlackKing)));
        assert_eq!(board.get(1, 3), Ok(Some(PieceKind::WhitePawn)));
        assert_eq!(board.get(0, 3), Ok(Some(PieceKind::WhiteQueen)));
        assert_eq!(board.get(4, 4), Ok(None));
    }

    #[test]
    fn decode_ignores_other_fields() {
        let a = decode_placement("8/8/8/8/4P3/8/8/8 b - e3 0 1").unwrap();
        let b = decode_placement("8/8/8/8/4P3/8/8/8 garbage that is never read").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(3, 4), Ok(Some(PieceKind::WhitePawn)));
    }

    #[test]
    fn decode_custom_position() {
        let board =
            decode_placement("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
                .unwrap();
        assert_eq!(board.get(5, 2), Ok(Some(PieceKind::BlackKnight)));
        assert_eq!(board.get(2, 5), Ok(Some(PieceKind::WhiteKnight)));
        assert_eq!(board.get(0, 6), Ok(None));
        assert_eq!(board.piece_count(), 32);
    }

    #[test]
    fn decode_split_digits() {
        // Non-canonical runs are accepted.
        let board = decode_placement("44/8/8/8/8/8/8/1111111K").unwrap();
        assert_eq!(board.get(0, 7), Ok(Some(PieceKind::WhiteKing)));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode_placement(""), Err(FenError::Empty));
        assert_eq!(decode_placement(" w - - 0 1"), Err(FenError::Empty));
    }

    #[test]
    fn nine_is_not_a_run() {
        assert_eq!(
            decode_placement("9/8/8/8/8/8/8/8"),
            Err(FenError::UnrecognizedChar { ch: '9', index: 0 })
        );
        assert_eq!(
            decode_placement("08/8/8/8/8/8/8/8"),
            Err(FenError::UnrecognizedChar { ch: '0', index: 0 })
        );
    }

    #[test]
    fn unrecognized_letter() {
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8/7X"),
            Err(FenError::UnrecognizedChar { ch: 'X', index: 15 })
        );
    }

    #[test]
    fn too_many_files() {
        assert_eq!(
            decode_placement("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(FenError::TooManyFiles { rank: 8, index: 8 })
        );
        assert_eq!(
            decode_placement("8/8/54/8/8/8/8/8"),
            Err(FenError::TooManyFiles { rank: 6, index: 5 })
        );
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8/81"),
            Err(FenError::TooManyFiles { rank: 1, index: 15 })
        );
    }

    #[test]
    fn too_few_files() {
        assert_eq!(
            decode_placement("7/8/8/8/8/8/8/8"),
            Err(FenError::TooFewFiles {
                rank: 8,
                files: 7,
                index: 1
            })
        );
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8/7"),
            Err(FenError::TooFewFiles {
                rank: 1,
                files: 7,
                index: 15
            })
        );
    }

    #[test]
    fn too_many_ranks() {
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8/8/8"),
            Err(FenError::TooManyRanks { index: 15 })
        );
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8/8/"),
            Err(FenError::TooManyRanks { index: 15 })
        );
    }

    #[test]
    fn too_few_ranks() {
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8 w KQkq - 0 1"),
            Err(FenError::TooFewRanks { ranks: 7 })
        );
        assert_eq!(
            decode_placement("8"),
            Err(FenError::TooFewRanks { ranks: 1 })
        );
    }

    #[test]
    fn encode_startpos() {
        assert_eq!(encode_placement(&Board::startpos()), START_PLACEMENT);
        assert_eq!(encode_placement(&Board::empty()), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn encode_uses_maximal_runs() {
        let board = decode_placement("44/8/8/8/8/8/8/1111111K").unwrap();
        assert_eq!(encode_placement(&board), "8/8/8/8/8/8/8/7K");
    }

    #[test]
    fn roundtrip() {
        let original = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let board = decode_placement(original).unwrap();
        assert_eq!(encode_placement(&board), original);
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::UnrecognizedChar { ch: 'X', index: 22 };
        assert!(err.to_string().contains("'X'"));
        assert!(err.to_string().contains("22"));

        let err = FenError::TooManyFiles { rank: 3, index: 40 };
        assert!(err.to_string().contains("rank 3"));

        let err = FenError::TooFewRanks { ranks: 7 };
        assert!(err.to_string().contains('7'));

        assert!(FenError::Empty.to_string().contains("empty"));
    }

    fn any_board() -> impl Strategy<Value = Board> {
        let square = proptest::option::weighted(
            0.4,
            (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i]),
        );
        proptest::collection::vec(square, BOARD_SIZE * BOARD_SIZE).prop_map(|squares| {
            let mut board = Board::empty();
            for (sq, piece) in Square::all().zip(squares) {
                board.set_piece_at(sq, piece);
            }
            board
        })
    }

    /// Expands run digits into `_` and ranks into lines, as `render` prints them.
    fn expand(placement: &str) -> String {
        placement
            .chars()
            .map(|c| match c {
                '/' => "\n".to_string(),
                '1'..='8' => "_".repeat(c as usize - '0' as usize),
                other => other.to_string(),
            })
            .collect()
    }

    proptest! {
        #[test]
        fn encode_then_decode_is_identity(board in any_board()) {
            let placement = encode_placement(&board);
            prop_assert_eq!(decode_placement(&placement), Ok(board));
        }

        #[test]
        fn canonical_placement_roundtrips(board in any_board()) {
            let placement = encode_placement(&board);
            let decoded = decode_placement(&placement).unwrap();
            prop_assert_eq!(encode_placement(&decoded), placement);
        }

        #[test]
        fn render_matches_expanded_placement(board in any_board()) {
            let placement = encode_placement(&board);
            let decoded = decode_placement(&placement).unwrap();
            prop_assert_eq!(decoded.render(), expand(&placement));
        }

        #[test]
        fn decode_never_panics(input in "[1-9pnbrqkPNBRQKx/ ]{0,80}") {
            let _ = decode_placement(&input);
        }
    }
}
