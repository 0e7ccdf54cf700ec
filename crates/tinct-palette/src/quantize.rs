//! Median-cut quantization over a pixel population.
//!
//! The color space is split into a small fixed number of boxes, each
//! split halving the most populated box along its widest channel. The
//! dominant color is the channel-wise average of the box that ends up
//! with the most pixels. Every pixel counts, black included: a region
//! that is mostly black reports black.

use tracing::debug;

use crate::error::PaletteError;

/// Number of boxes the population is split into before the dominant one
/// is picked.
const PALETTE_SIZE: usize = 5;

/// Decodes an encoded image and returns its dominant color.
pub fn dominant_color(bytes: &[u8]) -> Result<[u8; 3], PaletteError> {
    let img = image::load_from_memory(bytes)?.into_rgb8();
    let mut pixels: Vec<[u8; 3]> = img.pixels().map(|p| p.0).collect();
    dominant(&mut pixels)
}

/// Median-cut over raw pixels. Reorders the slice while partitioning.
pub fn dominant(pixels: &mut [[u8; 3]]) -> Result<[u8; 3], PaletteError> {
    if pixels.is_empty() {
        return Err(PaletteError::EmptyRegion);
    }

    // Boxes are index ranges into the (repeatedly re-sorted) slice.
    let mut boxes: Vec<(usize, usize)> = vec![(0, pixels.len())];
    while boxes.len() < PALETTE_SIZE {
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|&(_, &(s, e))| widest_channel(&pixels[s..e]).1 > 0)
            .max_by_key(|&(_, &(s, e))| e - s)
            .map(|(i, _)| i);
        let Some(i) = candidate else {
            break; // every box is a single color already
        };
        let (s, e) = boxes[i];
        let (channel, _) = widest_channel(&pixels[s..e]);
        pixels[s..e].sort_unstable_by_key(|p| p[channel]);
        let mid = s + (e - s) / 2;
        boxes[i] = (s, mid);
        boxes.push((mid, e));
    }

    let mut best = (0usize, 0usize);
    for &(s, e) in &boxes {
        if e - s > best.1 - best.0 {
            best = (s, e);
        }
    }
    let bucket = &pixels[best.0..best.1];
    debug!(
        boxes = boxes.len(),
        population = bucket.len(),
        "dominant box selected"
    );

    let mut sums = [0u64; 3];
    for p in bucket {
        for c in 0..3 {
            sums[c] += u64::from(p[c]);
        }
    }
    let n = bucket.len() as u64;
    Ok([
        ((sums[0] + n / 2) / n) as u8,
        ((sums[1] + n / 2) / n) as u8,
        ((sums[2] + n / 2) / n) as u8,
    ])
}

/// The channel with the largest value spread in `pixels`, with that
/// spread. Ties prefer red, then green.
fn widest_channel(pixels: &[[u8; 3]]) -> (usize, u8) {
    let mut lo = [255u8; 3];
    let mut hi = [0u8; 3];
    for p in pixels {
        for c in 0..3 {
            lo[c] = lo[c].min(p[c]);
            hi[c] = hi[c].max(p[c]);
        }
    }
    let mut best = (0, hi[0] - lo[0]);
    for c in 1..3 {
        let range = hi[c] - lo[c];
        if range > best.1 {
            best = (c, range);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(groups: &[([u8; 3], usize)]) -> Vec<[u8; 3]> {
        let mut pixels = Vec::new();
        for &(color, count) in groups {
            pixels.extend(std::iter::repeat_n(color, count));
        }
        pixels
    }

    #[test]
    fn empty_population_is_an_error() {
        let err = dominant(&mut []).unwrap_err();
        assert!(matches!(err, PaletteError::EmptyRegion));
    }

    #[test]
    fn uniform_population_returns_the_exact_color() {
        let mut pixels = population(&[([120, 40, 200], 500)]);
        assert_eq!(dominant(&mut pixels).unwrap(), [120, 40, 200]);
    }

    #[test]
    fn single_pixel_is_its_own_dominant() {
        let mut pixels = population(&[([7, 8, 9], 1)]);
        assert_eq!(dominant(&mut pixels).unwrap(), [7, 8, 9]);
    }

    #[test]
    fn majority_color_wins() {
        let mut pixels = population(&[([200, 30, 30], 900), ([20, 40, 200], 100)]);
        assert_eq!(dominant(&mut pixels).unwrap(), [200, 30, 30]);
    }

    #[test]
    fn black_dominance_is_reported_as_black() {
        // Black is a color like any other here, never excluded.
        let mut pixels = population(&[([0, 0, 0], 800), ([255, 255, 255], 200)]);
        assert_eq!(dominant(&mut pixels).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn unsplittable_boxes_are_passed_over() {
        // The biggest box goes uniform after the first split; later
        // rounds must skip it and split the smaller mixed box instead.
        let mut pixels = population(&[
            ([0, 0, 0], 900),
            ([200, 30, 30], 50),
            ([20, 40, 200], 50),
        ]);
        assert_eq!(dominant(&mut pixels).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn one_noise_pixel_cannot_move_the_result() {
        let mut base = population(&[([200, 30, 30], 1000), ([20, 40, 200], 50)]);
        let mut noisy = population(&[
            ([200, 30, 30], 1000),
            ([20, 40, 200], 49),
            ([30, 220, 40], 1),
        ]);
        assert_eq!(
            dominant(&mut base).unwrap(),
            dominant(&mut noisy).unwrap()
        );
    }

    #[test]
    fn crowded_palette_averages_the_winning_box() {
        // Six spread-out grays outnumber the five boxes, so the winning
        // box still holds two shades and reports their average.
        let mut pixels = population(&[
            ([0, 0, 0], 5),
            ([50, 50, 50], 5),
            ([100, 100, 100], 5),
            ([150, 150, 150], 5),
            ([200, 200, 200], 5),
            ([250, 250, 250], 5),
        ]);
        let [r, g, b] = dominant(&mut pixels).unwrap();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((1..=249).contains(&r), "average expected, got {r}");
        assert!(r % 50 != 0, "average of two shades, not a pure input");
    }

    #[test]
    fn dominant_is_deterministic() {
        let groups: &[([u8; 3], usize)] = &[
            ([13, 37, 200], 400),
            ([200, 13, 37], 300),
            ([37, 200, 13], 200),
            ([250, 250, 250], 100),
        ];
        let first = dominant(&mut population(groups)).unwrap();
        for _ in 0..3 {
            assert_eq!(dominant(&mut population(groups)).unwrap(), first);
        }
    }

    #[test]
    fn dominant_color_reads_encoded_images() {
        use image::ImageEncoder;

        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([90, 160, 220]));
        let mut png = Vec::new();
        image::codecs::png::PngEncoder::new(&mut png)
            .write_image(img.as_raw(), 8, 8, image::ExtendedColorType::Rgb8)
            .unwrap();

        assert_eq!(dominant_color(&png).unwrap(), [90, 160, 220]);
    }

    #[test]
    fn dominant_color_rejects_garbage_bytes() {
        let err = dominant_color(b"not a png").unwrap_err();
        assert!(matches!(err, PaletteError::Decode(_)));
    }
}
