//! Error types for palette extraction and hex parsing.

use thiserror::Error;

/// Failure of a palette extraction.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The input could not be read or decoded as an image.
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The requested cluster count is outside `1..=samples`.
    #[error("invalid cluster count {k}: must be between 1 and {samples}")]
    InvalidArgument { k: usize, samples: usize },
}

/// Failure to parse a `#rrggbb` / `#rgb` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
