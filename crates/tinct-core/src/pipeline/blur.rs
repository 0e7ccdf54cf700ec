use crate::frame::GrayFrame;

// 5-tap binomial kernel, the discrete Gaussian a 5x5 blur with an
// unspecified sigma resolves to. Applied separably; both passes together
// divide by 256.
const KERNEL: [u32; 5] = [1, 4, 6, 4, 1];

/// Smooths a luma plane with a 5x5 Gaussian.
///
/// Borders reflect without repeating the edge sample (`gfe|abcdefg|fed`),
/// so corner pixels still see a full kernel. The horizontal pass keeps
/// 16-bit precision and rounding happens once, after the vertical pass.
pub fn gaussian_5x5(src: &GrayFrame) -> GrayFrame {
    let width = src.width as usize;
    let height = src.height as usize;
    if width == 0 || height == 0 {
        return src.clone();
    }

    let mut rows = vec![0u16; width * height];
    for y in 0..height {
        let row = &src.data[y * width..(y + 1) * width];
        let out = &mut rows[y * width..(y + 1) * width];
        for x in 0..width {
            let mut acc = 0u32;
            for (k, &weight) in KERNEL.iter().enumerate() {
                let sx = reflect101(x as i64 + k as i64 - 2, width);
                acc += weight * u32::from(row[sx]);
            }
            out[x] = acc as u16;
        }
    }

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0u32;
            for (k, &weight) in KERNEL.iter().enumerate() {
                let sy = reflect101(y as i64 + k as i64 - 2, height);
                acc += weight * u32::from(rows[sy * width + x]);
            }
            data[y * width + x] = ((acc + 128) >> 8) as u8;
        }
    }

    GrayFrame {
        width: src.width,
        height: src.height,
        data,
    }
}

/// Maps an out-of-range index back into `0..len` by mirroring around the
/// first and last valid samples.
#[inline]
pub(crate) fn reflect101(mut i: i64, len: usize) -> usize {
    let len = len as i64;
    if len == 1 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i >= len {
            i = 2 * len - i - 2;
        } else {
            return i as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, value: u8) -> GrayFrame {
        GrayFrame {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    #[test]
    fn uniform_input_is_unchanged() {
        // Kernel weights sum to 256, so a flat plane stays flat even at
        // the reflected borders.
        for value in [0u8, 1, 127, 255] {
            let out = gaussian_5x5(&uniform(9, 7, value));
            assert!(
                out.data.iter().all(|&v| v == value),
                "value {value} drifted"
            );
        }
    }

    #[test]
    fn impulse_spreads_symmetrically() {
        let mut src = uniform(9, 9, 0);
        src.set(4, 4, 255);
        let out = gaussian_5x5(&src);

        // Center keeps the 6*6/256 share of the impulse.
        assert_eq!(out.get(4, 4), ((255u32 * 36 + 128) >> 8) as u8);
        assert_eq!(out.get(3, 4), out.get(5, 4));
        assert_eq!(out.get(4, 3), out.get(4, 5));
        assert_eq!(out.get(3, 3), out.get(5, 5));
        // Outside the 5x5 support nothing changes.
        assert_eq!(out.get(1, 4), 0);
        assert_eq!(out.get(4, 7), 0);
    }

    #[test]
    fn blur_preserves_dimensions() {
        let out = gaussian_5x5(&uniform(13, 2, 50));
        assert_eq!((out.width, out.height), (13, 2));
        assert_eq!(out.data.len(), 26);
    }

    #[test]
    fn reflect101_mirrors_without_repeating_edge() {
        assert_eq!(reflect101(-2, 8), 2);
        assert_eq!(reflect101(-1, 8), 1);
        assert_eq!(reflect101(0, 8), 0);
        assert_eq!(reflect101(7, 8), 7);
        assert_eq!(reflect101(8, 8), 6);
        assert_eq!(reflect101(9, 8), 5);
    }

    #[test]
    fn reflect101_handles_tiny_extents() {
        assert_eq!(reflect101(-2, 1), 0);
        assert_eq!(reflect101(3, 1), 0);
        assert_eq!(reflect101(-1, 2), 1);
        assert_eq!(reflect101(2, 2), 0);
        assert_eq!(reflect101(3, 2), 1);
    }
}
