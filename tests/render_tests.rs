//! End-to-end rendering tests: full pipeline from FEN string to pixels
//! and PNG bytes.

use std::sync::Arc;

use chess_image::{Piece, RenderError, Renderer, Square, Theme};
use image::Rgba;

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const EMPTY: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

/// Base theme color for a square.
fn base_color(theme: &Theme, square: Square) -> Rgba<u8> {
    if square.is_light() {
        theme.light
    } else {
        theme.dark
    }
}

/// The pixel at the center of a square.
fn center_pixel(img: &image::RgbaImage, square: Square, square_size: u32) -> Rgba<u8> {
    let x = square.col as u32 * square_size + square_size / 2;
    let y = square.row as u32 * square_size + square_size / 2;
    *img.get_pixel(x, y)
}

// ============================================================================
// Output geometry
// ============================================================================

#[test]
fn test_output_dimensions() {
    let renderer = Renderer::new().unwrap();
    let img = renderer.render_to_image(START).unwrap();
    assert_eq!(img.dimensions(), (640, 640));
}

#[test]
fn test_square_size_40_yields_320_pixels() {
    for theme in [Theme::green(), Theme::brown()] {
        let renderer = Renderer::with_options(theme, 40).unwrap();
        let png = renderer.render(START).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 320);
        assert_eq!(decoded.height(), 320);
    }
}

// ============================================================================
// Board painting
// ============================================================================

#[test]
fn test_empty_board_paints_alternating_squares() {
    let theme = Theme::green();
    let renderer = Renderer::with_theme(theme.clone()).unwrap();
    let img = renderer.render_to_image(EMPTY).unwrap();

    // No glyphs anywhere, so every square's center is exactly its base color
    for row in 0..8 {
        for col in 0..8 {
            let square = Square::new(row, col);
            assert_eq!(
                center_pixel(&img, square, 80),
                base_color(&theme, square),
                "square {square}"
            );
        }
    }
}

#[test]
fn test_start_position_composites_glyphs() {
    let theme = Theme::brown();
    let renderer = Renderer::with_theme(theme.clone()).unwrap();
    let img = renderer.render_to_image(START).unwrap();

    // Occupied squares have glyph pixels at their centers
    for row in [0, 1, 6, 7] {
        for col in 0..8 {
            let square = Square::new(row, col);
            assert_ne!(
                center_pixel(&img, square, 80),
                base_color(&theme, square),
                "expected a glyph over {square}"
            );
        }
    }
    // Empty middle ranks stay base-colored
    for row in 2..6 {
        for col in 0..8 {
            let square = Square::new(row, col);
            assert_eq!(
                center_pixel(&img, square, 80),
                base_color(&theme, square),
                "square {square}"
            );
        }
    }
}

// ============================================================================
// Highlights
// ============================================================================

#[test]
fn test_highlight_overrides_base_color() {
    let yellow = Rgba([255, 255, 0, 255]);
    for theme in [Theme::green(), Theme::brown()] {
        let renderer = Renderer::with_theme(theme.clone()).unwrap();
        let img = renderer
            .render_to_image_with_highlights(EMPTY, |sq| {
                (sq == Square::new(7, 7)).then_some(yellow)
            })
            .unwrap();

        assert_eq!(center_pixel(&img, Square::new(7, 7), 80), yellow);
        // Every other square keeps the alternating pattern
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::new(row, col);
                if square != Square::new(7, 7) {
                    assert_eq!(
                        center_pixel(&img, square, 80),
                        base_color(&theme, square),
                        "square {square}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_highlight_paints_under_pieces() {
    let red = Rgba([255, 0, 0, 255]);
    let renderer = Renderer::new().unwrap();
    let img = renderer
        .render_to_image_with_highlights(START, |sq| (sq == Square::new(7, 7)).then_some(red))
        .unwrap();

    // The glyph is inset by 0.15 * square size, so just inside the
    // square's top edge the highlight shows through.
    assert_eq!(*img.get_pixel(7 * 80 + 40, 7 * 80 + 2), red);
}

// ============================================================================
// Determinism and reusability
// ============================================================================

#[test]
fn test_identical_renders_are_byte_identical() {
    let a = Renderer::with_options(Theme::green(), 40).unwrap();
    let b = Renderer::with_options(Theme::green(), 40).unwrap();
    assert_eq!(a.render(START).unwrap(), b.render(START).unwrap());
    assert_eq!(a.render(START).unwrap(), a.render(START).unwrap());
}

#[test]
fn test_renderer_survives_invalid_fen() {
    let renderer = Renderer::new().unwrap();
    let err = renderer.render("this is not a fen").unwrap_err();
    assert!(matches!(err, RenderError::InvalidFen(_)));

    // The failed call leaves the renderer fully usable
    assert!(renderer.render(START).is_ok());
}

// ============================================================================
// Surfaces and configuration
// ============================================================================

#[test]
fn test_render_into_rejects_wrong_surface_size() {
    let renderer = Renderer::new().unwrap();
    let mut surface = image::RgbaImage::new(100, 100);
    let err = renderer.render_into(START, &mut surface, |_| None).unwrap_err();
    assert!(matches!(err, RenderError::InvalidConfiguration(_)));
}

#[test]
fn test_render_into_caller_surface() {
    let renderer = Renderer::with_options(Theme::green(), 16).unwrap();
    let mut surface = image::RgbaImage::new(128, 128);
    renderer.render_into(EMPTY, &mut surface, |_| None).unwrap();
    assert_eq!(center_pixel(&surface, Square::new(0, 0), 16), Theme::green().light);
}

#[test]
fn test_failing_resolver_fails_construction() {
    let theme = Theme::with_resolver(
        Rgba([0, 0, 0, 255]),
        Rgba([255, 255, 255, 255]),
        Arc::new(|piece: Piece| Err(RenderError::AssetNotFound(piece.asset_name().to_string()))),
    );
    let err = Renderer::with_theme(theme).unwrap_err();
    assert!(matches!(err, RenderError::AssetNotFound(_)));
}

#[test]
fn test_custom_resolver_supplies_glyphs() {
    // A resolver that serves the same bundled glyph for every piece
    let theme = Theme::with_resolver(
        Rgba([220, 240, 255, 255]),
        Rgba([70, 130, 180, 255]),
        Arc::new(|_| chess_image::assets::resolve(Piece::ALL[0])),
    );
    let renderer = Renderer::with_options(theme, 24).unwrap();
    let img = renderer.render_to_image(START).unwrap();
    assert_eq!(img.dimensions(), (192, 192));
}
