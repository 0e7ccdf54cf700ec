//! Foreground isolation pipeline.
//!
//! ```text
//! rgb -> luma -> gaussian 5x5 -> canny -> outer contours
//!     -> largest contour -> fill mask -> bitwise and
//! ```
//!
//! The pipeline keeps the dominant object of a photo and blacks out the
//! rest. It never fails: a frame with no detectable contour passes
//! through untouched.

pub mod blur;
pub mod contours;
pub mod edges;
pub mod grayscale;
pub mod mask;

use tracing::debug;

use crate::frame::Frame;

/// Isolates the dominant object in a frame.
///
/// The two thresholds feed the Canny hysteresis stage; everything else
/// about the pipeline is fixed.
#[derive(Clone, Debug)]
pub struct Isolator {
    pub canny_low: f32,
    pub canny_high: f32,
}

impl Default for Isolator {
    fn default() -> Self {
        Self {
            canny_low: 50.0,
            canny_high: 150.0,
        }
    }
}

impl Isolator {
    /// Runs the full pipeline on one frame.
    ///
    /// Output dimensions always equal input dimensions. When no contour
    /// is found the input is returned unchanged, so callers can treat
    /// the result as "best effort foreground".
    pub fn isolate(&self, frame: &Frame) -> Frame {
        let gray = grayscale::luma(frame);
        let blurred = blur::gaussian_5x5(&gray);
        let edge_map = edges::canny(&blurred, self.canny_low, self.canny_high);
        let found = contours::outer_contours(&edge_map);
        debug!(
            width = frame.width,
            height = frame.height,
            contours = found.len(),
            "isolating frame"
        );

        let Some(largest) = found
            .iter()
            .max_by(|a, b| a.area().total_cmp(&b.area()))
        else {
            debug!("no contours found, passing frame through");
            return frame.clone();
        };

        let region = mask::fill_contour(largest, frame.width, frame.height);
        mask::apply(frame, &region)
    }
}
