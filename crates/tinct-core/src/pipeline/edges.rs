use crate::frame::GrayFrame;

use super::blur::reflect101;

// Sector boundaries for gradient directions, tan(22.5) and tan(67.5).
const TAN_22_5: f32 = 0.414_213_56;
const TAN_67_5: f32 = 2.414_213_6;

const WEAK: u8 = 1;
const STRONG: u8 = 2;

/// Canny edge detection over a smoothed luma plane.
///
/// Gradients come from 3x3 Sobel kernels with reflected borders and are
/// scored by their L1 magnitude `|gx| + |gy|`. A pixel is an edge when it
/// survives non-maximum suppression along its gradient direction and its
/// magnitude exceeds `high`, or exceeds `low` while 8-connected to such a
/// pixel. Output pixels are 255 on edges, 0 elsewhere.
pub fn canny(src: &GrayFrame, low: f32, high: f32) -> GrayFrame {
    let width = src.width as usize;
    let height = src.height as usize;
    let mut out = GrayFrame::new(src.width, src.height);
    if width == 0 || height == 0 {
        return out;
    }

    let (low, high) = if low > high { (high, low) } else { (low, high) };
    let low = low.floor() as i32;
    let high = high.floor() as i32;

    let mut gx = vec![0i32; width * height];
    let mut gy = vec![0i32; width * height];
    let mut mag = vec![0i32; width * height];
    for y in 0..height {
        let ym = reflect101(y as i64 - 1, height);
        let yp = reflect101(y as i64 + 1, height);
        for x in 0..width {
            let xm = reflect101(x as i64 - 1, width);
            let xp = reflect101(x as i64 + 1, width);
            let s = |xx: usize, yy: usize| i32::from(src.data[yy * width + xx]);
            let dx =
                (s(xp, ym) + 2 * s(xp, y) + s(xp, yp)) - (s(xm, ym) + 2 * s(xm, y) + s(xm, yp));
            let dy =
                (s(xm, yp) + 2 * s(x, yp) + s(xp, yp)) - (s(xm, ym) + 2 * s(x, ym) + s(xp, ym));
            let i = y * width + x;
            gx[i] = dx;
            gy[i] = dy;
            mag[i] = dx.abs() + dy.abs();
        }
    }

    // Non-maximum suppression. Ties break toward the earlier pixel in
    // scan order so a plateau thins to a one pixel line.
    let mut state = vec![0u8; width * height];
    let mut queue: Vec<(usize, usize)> = Vec::new();
    let mag_at = |x: i64, y: i64| -> i32 {
        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
            0
        } else {
            mag[y as usize * width + x as usize]
        }
    };
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let m = mag[i];
            if m <= low {
                continue;
            }
            let (xi, yi) = (x as i64, y as i64);
            let ax = gx[i].abs() as f32;
            let ay = gy[i].abs() as f32;
            let (prev, next) = if ay < TAN_22_5 * ax {
                ((xi - 1, yi), (xi + 1, yi))
            } else if ay > TAN_67_5 * ax {
                ((xi, yi - 1), (xi, yi + 1))
            } else if (gx[i] > 0) == (gy[i] > 0) {
                ((xi - 1, yi - 1), (xi + 1, yi + 1))
            } else {
                ((xi + 1, yi - 1), (xi - 1, yi + 1))
            };
            if m > mag_at(prev.0, prev.1) && m >= mag_at(next.0, next.1) {
                if m > high {
                    state[i] = STRONG;
                    queue.push((x, y));
                } else {
                    state[i] = WEAK;
                }
            }
        }
    }

    // Hysteresis: weak pixels survive only when 8-connected to a strong
    // one, directly or through other promoted pixels.
    while let Some((x, y)) = queue.pop() {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let ni = ny as usize * width + nx as usize;
                if state[ni] == WEAK {
                    state[ni] = STRONG;
                    queue.push((nx as usize, ny as usize));
                }
            }
        }
    }

    for (dst, st) in out.data.iter_mut().zip(&state) {
        if *st == STRONG {
            *dst = 255;
        }
    }
    out
}
