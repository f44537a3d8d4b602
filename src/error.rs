//! Error types for the logo renderer

use thiserror::Error;

/// Result type alias for rendering and output operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the logo
#[derive(Error, Debug)]
pub enum Error {
    /// The named scalable font could not be found or parsed.
    ///
    /// `resolve_fonts` swallows this and substitutes the bitmap font; it only
    /// surfaces from the lower-level `load_scalable`.
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    /// The canvas could not be built
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Directory creation or file write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
