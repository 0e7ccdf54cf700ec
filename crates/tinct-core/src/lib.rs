//! Frame types, codecs, and the object isolation pipeline.

pub mod codec;
pub mod error;
pub mod frame;
pub mod pipeline;

pub use error::FrameError;
pub use frame::{Frame, GrayFrame};
pub use pipeline::Isolator;
