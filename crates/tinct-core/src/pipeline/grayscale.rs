use crate::frame::{Frame, GrayFrame};

// ITU-R BT.601 luma weights in 14-bit fixed point. The three constants
// sum to exactly 1 << 14, so white maps to white without overflow.
const WEIGHT_R: u32 = 4899;
const WEIGHT_G: u32 = 9617;
const WEIGHT_B: u32 = 1868;
const SHIFT: u32 = 14;

/// Collapses an RGB frame to its luma plane.
///
/// Uses the BT.601 weighting (0.299 R + 0.587 G + 0.114 B) with
/// round-to-nearest fixed-point arithmetic, so the output is identical
/// across platforms.
pub fn luma(frame: &Frame) -> GrayFrame {
    let mut data = Vec::with_capacity(frame.pixel_count());
    for px in frame.data.chunks_exact(3) {
        let weighted = WEIGHT_R * u32::from(px[0])
            + WEIGHT_G * u32::from(px[1])
            + WEIGHT_B * u32::from(px[2]);
        data.push(((weighted + (1 << (SHIFT - 1))) >> SHIFT) as u8);
    }
    GrayFrame {
        width: frame.width,
        height: frame.height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Frame {
        let mut frame = Frame::new(width, height);
        for px in frame.data.chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
        frame
    }

    #[test]
    fn black_and_white_are_preserved() {
        assert_eq!(luma(&solid(2, 2, [0, 0, 0])).data, vec![0; 4]);
        assert_eq!(luma(&solid(2, 2, [255, 255, 255])).data, vec![255; 4]);
    }

    #[test]
    fn gray_input_maps_to_itself() {
        // Equal channels weigh out to the channel value for any level.
        for level in [1u8, 17, 100, 200, 254] {
            let out = luma(&solid(1, 1, [level, level, level]));
            assert_eq!(out.data[0], level, "level {level}");
        }
    }

    #[test]
    fn channel_weights_follow_bt601() {
        // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
        assert_eq!(luma(&solid(1, 1, [255, 0, 0])).data[0], 76);
        assert_eq!(luma(&solid(1, 1, [0, 255, 0])).data[0], 150);
        assert_eq!(luma(&solid(1, 1, [0, 0, 255])).data[0], 29);
    }

    #[test]
    fn dimensions_carry_over() {
        let out = luma(&Frame::new(7, 3));
        assert_eq!((out.width, out.height), (7, 3));
        assert_eq!(out.data.len(), 21);
    }
}
