//! Board themes: square colors plus the glyph asset resolution strategy.

use std::fmt;
use std::sync::Arc;

use image::Rgba;

use crate::assets;
use crate::error::RenderResult;
use crate::piece::Piece;

/// Strategy for resolving a piece identity to encoded glyph image bytes.
///
/// The contract is a total function from piece to a byte source, or
/// failure. The default resolver reads the bundled PNG set; custom
/// resolvers may fetch bytes from anywhere.
pub type AssetResolver = Arc<dyn Fn(Piece) -> RenderResult<Vec<u8>> + Send + Sync>;

/// A visual theme for the board.
///
/// Defines the light and dark square colors and how piece glyphs are
/// resolved. Immutable once built; cloning shares the resolver.
#[derive(Clone)]
pub struct Theme {
    /// Color of light squares.
    pub light: Rgba<u8>,
    /// Color of dark squares.
    pub dark: Rgba<u8>,
    resolver: AssetResolver,
}

impl Theme {
    /// A custom-colored theme using the bundled glyph set.
    pub fn new(light: Rgba<u8>, dark: Rgba<u8>) -> Self {
        Self::with_resolver(light, dark, Arc::new(assets::resolve))
    }

    /// A fully custom theme with its own asset resolution strategy.
    pub fn with_resolver(light: Rgba<u8>, dark: Rgba<u8>, resolver: AssetResolver) -> Self {
        Self {
            light,
            dark,
            resolver,
        }
    }

    /// The green tournament theme: light `#ebecd0`, dark `#739552`.
    pub fn green() -> Self {
        Self::new(Rgba([0xeb, 0xec, 0xd0, 0xff]), Rgba([0x73, 0x95, 0x52, 0xff]))
    }

    /// The classic brown theme: light `#efdab7`, dark `#b48766`.
    pub fn brown() -> Self {
        Self::new(Rgba([0xef, 0xda, 0xb7, 0xff]), Rgba([0xb4, 0x87, 0x66, 0xff]))
    }

    pub(crate) fn resolve_asset(&self, piece: Piece) -> RenderResult<Vec<u8>> {
        (self.resolver)(piece)
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("light", &self.light)
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}

/// Parse a `#rrggbb` hex color string to an opaque RGBA color.
pub fn hex_to_rgba(hex: &str) -> Option<Rgba<u8>> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Rgba([r, g, b, 0xff]))
}
