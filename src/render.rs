//! The rendering pipeline: board painting, coordinate labels and piece
//! compositing, orchestrated by [`Renderer`].

use std::collections::HashMap;
use std::fmt;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use rusttype::{point, Font, Scale};
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::fen::Board;
use crate::piece::Piece;
use crate::square::Square;
use crate::theme::Theme;

/// Square size used by [`Renderer::new`] and [`Renderer::with_theme`].
pub const DEFAULT_SQUARE_SIZE: u32 = 80;

/// Glyphs are drawn at this fraction of the square size, centered.
const PIECE_SCALE: f32 = 0.7;

/// Renders chess positions from FEN notation to images.
///
/// A renderer is built once for a theme and square size, resolving and
/// decoding all 12 piece glyphs up front. After construction it holds
/// no mutable state: one instance can serve any number of render calls,
/// concurrently if each call writes to its own output surface.
///
/// # Example
/// ```
/// use chess_image::Renderer;
///
/// let renderer = Renderer::new().unwrap();
/// let png = renderer
///     .render("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
///     .unwrap();
/// assert!(!png.is_empty());
/// ```
pub struct Renderer {
    square_size: u32,
    theme: Theme,
    font: Font<'static>,
    /// Glyphs pre-scaled to their on-board size, one per piece identity.
    glyphs: HashMap<Piece, RgbaImage>,
}

impl Renderer {
    /// A renderer with the green theme and the default square size.
    pub fn new() -> RenderResult<Self> {
        Self::with_options(Theme::green(), DEFAULT_SQUARE_SIZE)
    }

    /// A renderer with the given theme and the default square size.
    pub fn with_theme(theme: Theme) -> RenderResult<Self> {
        Self::with_options(theme, DEFAULT_SQUARE_SIZE)
    }

    /// A renderer with the given theme and square size (in pixels).
    ///
    /// Resolves and decodes all 12 piece glyphs through the theme's
    /// asset resolver. Any failure here is fatal to construction: no
    /// partially-initialized renderer is returned.
    pub fn with_options(theme: Theme, square_size: u32) -> RenderResult<Self> {
        if square_size < 1 {
            return Err(RenderError::InvalidConfiguration(format!(
                "square size must be greater than 0, got {square_size}"
            )));
        }

        let font =
            Font::try_from_bytes(crate::assets::FONT_DATA).ok_or_else(|| RenderError::AssetDecode {
                name: "label font".to_string(),
                message: "embedded data is not a valid TrueType font".to_string(),
            })?;

        let glyph_size = ((square_size as f32 * PIECE_SCALE) as u32).max(1);
        let mut glyphs = HashMap::with_capacity(Piece::ALL.len());
        for piece in Piece::ALL {
            let bytes = theme.resolve_asset(piece)?;
            let decoded = image::load_from_memory(&bytes)
                .map_err(|e| RenderError::AssetDecode {
                    name: piece.asset_name().to_string(),
                    message: e.to_string(),
                })?
                .to_rgba8();
            glyphs.insert(
                piece,
                imageops::resize(&decoded, glyph_size, glyph_size, FilterType::Lanczos3),
            );
        }
        debug!(square_size, glyphs = glyphs.len(), "renderer initialized");

        Ok(Self {
            square_size,
            theme,
            font,
            glyphs,
        })
    }

    /// Size of one square in pixels.
    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Side length of the output image in pixels (8 squares).
    pub fn image_size(&self) -> u32 {
        self.square_size * 8
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render a position to PNG bytes with no highlighted squares.
    pub fn render(&self, fen: &str) -> RenderResult<Vec<u8>> {
        self.render_with_highlights(fen, |_| None)
    }

    /// Render a position to PNG bytes.
    ///
    /// `highlight` may override the fill color of individual squares;
    /// returning `None` keeps the theme's alternating pattern.
    pub fn render_with_highlights<F>(&self, fen: &str, highlight: F) -> RenderResult<Vec<u8>>
    where
        F: Fn(Square) -> Option<Rgba<u8>>,
    {
        let img = self.render_to_image_with_highlights(fen, highlight)?;
        let (width, height) = img.dimensions();
        crate::png::encode_rgba(img.as_raw(), width as usize, height as usize)
    }

    /// Render a position to an in-memory RGBA image.
    pub fn render_to_image(&self, fen: &str) -> RenderResult<RgbaImage> {
        self.render_to_image_with_highlights(fen, |_| None)
    }

    /// Render a position to an in-memory RGBA image with highlights.
    pub fn render_to_image_with_highlights<F>(
        &self,
        fen: &str,
        highlight: F,
    ) -> RenderResult<RgbaImage>
    where
        F: Fn(Square) -> Option<Rgba<u8>>,
    {
        let size = self.image_size();
        let mut img = RgbaImage::new(size, size);
        self.render_into(fen, &mut img, highlight)?;
        Ok(img)
    }

    /// Render a position into a caller-supplied surface.
    ///
    /// The surface must be exactly `image_size()` pixels on both axes.
    /// On error the surface contents are unspecified; on success it
    /// holds the complete board image.
    pub fn render_into<F>(&self, fen: &str, img: &mut RgbaImage, highlight: F) -> RenderResult<()>
    where
        F: Fn(Square) -> Option<Rgba<u8>>,
    {
        let size = self.image_size();
        if img.dimensions() != (size, size) {
            return Err(RenderError::InvalidConfiguration(format!(
                "output surface must be {size}x{size} pixels, got {}x{}",
                img.width(),
                img.height()
            )));
        }

        let board = Board::from_fen(fen)?;

        self.draw_board(img, &highlight);
        self.draw_coordinates(img);
        self.draw_pieces(img, &board);

        debug!(fen, pieces = board.piece_count(), "position rendered");
        Ok(())
    }

    /// Fill the 64 squares with the alternating theme colors, letting the
    /// highlight function override individual squares.
    fn draw_board<F>(&self, img: &mut RgbaImage, highlight: &F)
    where
        F: Fn(Square) -> Option<Rgba<u8>>,
    {
        let s = self.square_size;
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::new(row, col);
                let base = if square.is_light() {
                    self.theme.light
                } else {
                    self.theme.dark
                };
                let color = highlight(square).unwrap_or(base);
                let rect = Rect::at((col as u32 * s) as i32, (row as u32 * s) as i32).of_size(s, s);
                draw_filled_rect_mut(img, rect, color);
            }
        }
    }

    /// Draw rank digits down the left column and file letters along the
    /// bottom row, in the theme color contrasting each square's base color.
    fn draw_coordinates(&self, img: &mut RgbaImage) {
        let s = self.square_size as i32;
        let scale = Scale::uniform((self.square_size / 6).max(1) as f32);
        let ascent = self.font.v_metrics(scale).ascent;
        let inset = s / 12;

        for row in 0..8 {
            let square = Square::new(row, 0);
            let label = square.rank_digit().to_string();
            draw_text_mut(
                img,
                self.label_color(square),
                inset,
                row as i32 * s + inset,
                scale,
                &self.font,
                &label,
            );
        }

        for col in 0..8 {
            let square = Square::new(7, col);
            let label = square.file_letter().to_string();
            let width = self.text_width(scale, &label);
            draw_text_mut(
                img,
                self.label_color(square),
                col as i32 * s + s - width.ceil() as i32 - inset,
                8 * s - inset - ascent.ceil() as i32,
                scale,
                &self.font,
                &label,
            );
        }
    }

    /// Labels contrast the square's base color, never a highlight override.
    fn label_color(&self, square: Square) -> Rgba<u8> {
        if square.is_light() {
            self.theme.dark
        } else {
            self.theme.light
        }
    }

    fn text_width(&self, scale: Scale, text: &str) -> f32 {
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .map(|g| g.unpositioned().h_metrics().advance_width)
            .sum()
    }

    /// Composite the cached glyphs onto their squares, centered.
    fn draw_pieces(&self, img: &mut RgbaImage, board: &Board) {
        let s = self.square_size as i64;
        for (square, piece) in board.occupied() {
            // The cache holds all 12 identities; construction guarantees it.
            if let Some(glyph) = self.glyphs.get(&piece) {
                let offset = (s - glyph.width() as i64) / 2;
                imageops::overlay(
                    img,
                    glyph,
                    square.col as i64 * s + offset,
                    square.row as i64 * s + offset,
                );
            }
        }
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("square_size", &self.square_size)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
