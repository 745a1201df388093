//! FEN placement field parsing.
//!
//! Only the placement field (everything before the first space) is
//! interpreted; turn, castling rights, en passant and clock fields are
//! ignored. No legality checks are performed beyond the grid shape: a
//! position with three kings parses fine, a rank wider than 8 columns
//! does not.

use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// Squares per side of the board.
pub const BOARD_SIZE: usize = 8;

/// A parsed piece placement: an 8x8 grid of optional pieces.
///
/// Built fresh from a FEN string on every render call; row 0 is rank 8
/// (the top of the rendered image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Parse the placement field of a FEN string.
    ///
    /// Within a rank, digits `1`-`8` advance past that many empty
    /// squares and piece letters occupy one square each. Exactly 8
    /// slash-separated ranks are required; a rank describing fewer than
    /// 8 columns leaves the remainder empty.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = match fen.split_once(' ') {
            Some((placement, _)) => placement,
            None => fen,
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(FenError::InvalidRankCount(ranks.len()));
        }

        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                match c {
                    '1'..='8' => {
                        col += (c as u8 - b'0') as usize;
                    }
                    _ => {
                        let piece = Piece::from_fen_char(c)
                            .map_err(|_| FenError::InvalidPlacementCharacter(c))?;
                        if col >= BOARD_SIZE {
                            return Err(FenError::RankOverflow { rank: row });
                        }
                        cells[row][col] = Some(piece);
                        col += 1;
                    }
                }
                if col > BOARD_SIZE {
                    return Err(FenError::RankOverflow { rank: row });
                }
            }
        }

        Ok(Self { cells })
    }

    /// The piece on a square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row][square.col]
    }

    /// Iterate over all occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|p| (Square::new(row, col), p)))
        })
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }
}
