use thiserror::Error;

/// Errors from dominant color extraction.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The encoded frame could not be decoded back into pixels.
    #[error("failed to decode frame for palette extraction: {0}")]
    Decode(#[from] image::ImageError),

    /// There were no pixels to quantize.
    #[error("no pixels available for palette extraction")]
    EmptyRegion,
}
