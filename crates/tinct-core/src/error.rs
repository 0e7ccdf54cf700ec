use thiserror::Error;

/// Errors produced while decoding, validating, or encoding frames.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The byte payload was not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The frame has no pixels to work with.
    #[error("frame has zero pixels")]
    EmptyFrame,

    /// A raw buffer did not match the dimensions it was paired with.
    #[error("buffer of {actual} bytes does not fit {width}x{height} ({channels} channel)")]
    BufferSize {
        width: u32,
        height: u32,
        channels: u8,
        actual: usize,
    },

    /// PNG serialization of a frame failed.
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}
