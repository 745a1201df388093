//! Chess position rendering from FEN notation to PNG images.
//!
//! The whole crate is one straight-line pipeline:
//! FEN parsing → square painting → coordinate labels → piece
//! compositing → PNG encoding. A [`Renderer`] is built once per theme
//! and square size (decoding all 12 piece glyphs up front) and then
//! reused across render calls.
//!
//! ```
//! use chess_image::{Renderer, Theme};
//!
//! let renderer = Renderer::with_options(Theme::brown(), 40).unwrap();
//! let png = renderer.render("8/8/8/4p3/3P4/8/8/8 w - - 0 1").unwrap();
//! assert_eq!(&png[..4], &[137, 80, 78, 71]);
//! ```
//!
//! Only the placement field of the FEN string is interpreted; move
//! legality and the remaining FEN fields are out of scope.

pub mod assets;
pub mod error;
pub mod fen;
pub mod piece;
pub mod png;
pub mod render;
pub mod square;
pub mod theme;

pub use error::{FenError, RenderError, RenderResult};
pub use fen::Board;
pub use piece::{Piece, PieceKind, Side};
pub use render::{Renderer, DEFAULT_SQUARE_SIZE};
pub use square::Square;
pub use theme::{hex_to_rgba, AssetResolver, Theme};
