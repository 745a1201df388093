//! Error types for chess position rendering.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Primary error type for rendering operations.
///
/// Construction errors (`InvalidConfiguration`, `AssetNotFound`,
/// `AssetDecode`) are fatal to that construction attempt: no
/// partially-initialized [`Renderer`](crate::Renderer) is ever returned.
/// Render errors (`InvalidFen`, `PngEncode`) fail the single call that
/// triggered them and leave the renderer reusable.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid renderer configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Piece asset not found: {0}")]
    AssetNotFound(String),

    #[error("Failed to decode asset '{name}': {message}")]
    AssetDecode { name: String, message: String },

    #[error("Invalid FEN: {0}")]
    InvalidFen(#[from] FenError),

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

/// Errors produced while parsing the FEN placement field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FenError {
    /// Raised by the piece catalog for characters outside `RNBQKPrnbqkp`.
    #[error("Unknown piece character: '{0}'")]
    InvalidPieceCharacter(char),

    #[error("Invalid character '{0}' in placement field")]
    InvalidPlacementCharacter(char),

    #[error("Placement field has {0} ranks, expected 8")]
    InvalidRankCount(usize),

    #[error("Rank {rank} describes more than 8 columns")]
    RankOverflow { rank: usize },
}
