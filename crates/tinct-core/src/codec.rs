//! Byte-level decode and encode for [`Frame`].
//!
//! Decoding accepts any container the `image` crate is built with (PNG,
//! JPEG, WebP) and normalizes to interleaved RGB8. Encoding always
//! produces PNG, entirely in memory.

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use tracing::debug;

use crate::error::FrameError;
use crate::frame::Frame;

/// Decodes an encoded image into an RGB frame.
///
/// The container format is sniffed from the bytes. Alpha channels and
/// non-8-bit depths are converted to plain RGB8.
pub fn decode(bytes: &[u8]) -> Result<Frame, FrameError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded.into_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(FrameError::EmptyFrame);
    }
    debug!(width, height, "decoded image");
    Frame::from_data(width, height, rgb.into_raw())
}

/// Encodes a frame as PNG into a fresh buffer.
pub fn encode_png(frame: &Frame) -> Result<Vec<u8>, FrameError> {
    if frame.is_empty() {
        return Err(FrameError::EmptyFrame);
    }
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new(&mut bytes);
    encoder
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(FrameError::Encode)?;
    Ok(bytes)
}
