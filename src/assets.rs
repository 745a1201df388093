//! Bundled rendering assets: the 12 piece glyph PNGs and the label font.
//!
//! Glyphs are addressed by the `<kind letter><side letter>` scheme from
//! [`Piece::asset_name`]: kind in `r n b q k p`, side `l` (white) or
//! `d` (black).

use crate::error::{RenderError, RenderResult};
use crate::piece::Piece;

/// Embedded font for coordinate labels (DejaVu Sans Bold).
pub(crate) const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

const ROOK_LIGHT: &[u8] = include_bytes!("../assets/rl.png");
const ROOK_DARK: &[u8] = include_bytes!("../assets/rd.png");
const KNIGHT_LIGHT: &[u8] = include_bytes!("../assets/nl.png");
const KNIGHT_DARK: &[u8] = include_bytes!("../assets/nd.png");
const BISHOP_LIGHT: &[u8] = include_bytes!("../assets/bl.png");
const BISHOP_DARK: &[u8] = include_bytes!("../assets/bd.png");
const QUEEN_LIGHT: &[u8] = include_bytes!("../assets/ql.png");
const QUEEN_DARK: &[u8] = include_bytes!("../assets/qd.png");
const KING_LIGHT: &[u8] = include_bytes!("../assets/kl.png");
const KING_DARK: &[u8] = include_bytes!("../assets/kd.png");
const PAWN_LIGHT: &[u8] = include_bytes!("../assets/pl.png");
const PAWN_DARK: &[u8] = include_bytes!("../assets/pd.png");

/// The default asset resolver: look the piece's canonical asset name up
/// in the bundled glyph set.
pub fn resolve(piece: Piece) -> RenderResult<Vec<u8>> {
    bundled(piece.asset_name())
        .map(<[u8]>::to_vec)
        .ok_or_else(|| RenderError::AssetNotFound(piece.asset_name().to_string()))
}

fn bundled(name: &str) -> Option<&'static [u8]> {
    Some(match name {
        "rl" => ROOK_LIGHT,
        "rd" => ROOK_DARK,
        "nl" => KNIGHT_LIGHT,
        "nd" => KNIGHT_DARK,
        "bl" => BISHOP_LIGHT,
        "bd" => BISHOP_DARK,
        "ql" => QUEEN_LIGHT,
        "qd" => QUEEN_DARK,
        "kl" => KING_LIGHT,
        "kd" => KING_DARK,
        "pl" => PAWN_LIGHT,
        "pd" => PAWN_DARK,
        _ => return None,
    })
}
