//! Board squares in render coordinates.

use std::fmt;

/// A square on the board.
///
/// Zero-indexed from the top-left as rendered: (row 0, col 0) is a8 and
/// (row 7, col 7) is h1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    /// Row index, 0-7 from top to bottom (rank 8 down to rank 1).
    pub row: usize,
    /// Column index, 0-7 from left to right (file a to file h).
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8, "square ({row}, {col}) out of range");
        Self { row, col }
    }

    /// Whether this is a light square in the alternating pattern.
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// File letter `a`-`h` for this column.
    pub fn file_letter(self) -> char {
        (b'a' + self.col as u8) as char
    }

    /// Rank digit `8`-`1` for this row (row 0 is rank 8).
    pub fn rank_digit(self) -> char {
        (b'8' - self.row as u8) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank_digit())
    }
}
