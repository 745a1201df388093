//! The piece catalog: the 12 chess piece identities and their FEN mapping.

use std::fmt;

use crate::error::FenError;

/// The two sides in a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

/// The six chess piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Pawn,
}

/// One of the 12 distinct piece appearances: a (kind, side) pair.
///
/// Used as the glyph cache key; equality and hashing are by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    /// Every (kind, side) combination, each exactly once.
    pub const ALL: [Piece; 12] = [
        Piece::new(PieceKind::Rook, Side::White),
        Piece::new(PieceKind::Rook, Side::Black),
        Piece::new(PieceKind::Knight, Side::White),
        Piece::new(PieceKind::Knight, Side::Black),
        Piece::new(PieceKind::Bishop, Side::White),
        Piece::new(PieceKind::Bishop, Side::Black),
        Piece::new(PieceKind::Queen, Side::White),
        Piece::new(PieceKind::Queen, Side::Black),
        Piece::new(PieceKind::King, Side::White),
        Piece::new(PieceKind::King, Side::Black),
        Piece::new(PieceKind::Pawn, Side::White),
        Piece::new(PieceKind::Pawn, Side::Black),
    ];

    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Resolve a FEN placement character to a piece.
    ///
    /// Uppercase letters are white pieces, lowercase are black. Exactly
    /// the 12 characters `RNBQKPrnbqkp` are accepted.
    pub fn from_fen_char(c: char) -> Result<Self, FenError> {
        let kind = match c.to_ascii_lowercase() {
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            'p' => PieceKind::Pawn,
            _ => return Err(FenError::InvalidPieceCharacter(c)),
        };
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Ok(Self { kind, side })
    }

    /// The FEN placement character for this piece; inverse of
    /// [`from_fen_char`](Self::from_fen_char).
    pub fn fen_char(self) -> char {
        let c = self.kind.letter();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Canonical bundled asset name: `<kind letter><side letter>`,
    /// side letter `l` for white (light) and `d` for black (dark).
    /// E.g. white rook -> `"rl"`, black queen -> `"qd"`.
    pub fn asset_name(self) -> &'static str {
        match (self.kind, self.side) {
            (PieceKind::Rook, Side::White) => "rl",
            (PieceKind::Rook, Side::Black) => "rd",
            (PieceKind::Knight, Side::White) => "nl",
            (PieceKind::Knight, Side::Black) => "nd",
            (PieceKind::Bishop, Side::White) => "bl",
            (PieceKind::Bishop, Side::Black) => "bd",
            (PieceKind::Queen, Side::White) => "ql",
            (PieceKind::Queen, Side::Black) => "qd",
            (PieceKind::King, Side::White) => "kl",
            (PieceKind::King, Side::Black) => "kd",
            (PieceKind::Pawn, Side::White) => "pl",
            (PieceKind::Pawn, Side::Black) => "pd",
        }
    }
}

impl PieceKind {
    /// Lowercase FEN letter for this kind.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Pawn => 'p',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::White => "white",
            Side::Black => "black",
        };
        let kind = match self.kind {
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Pawn => "pawn",
        };
        write!(f, "{side} {kind}")
    }
}
