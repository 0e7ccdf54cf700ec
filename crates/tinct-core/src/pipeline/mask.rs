//! Solid-fill masks from contours, and masked copies of frames.

use crate::frame::{Frame, GrayFrame};

use super::contours::{Contour, Point};

/// Rasterizes `contour` as a solid white region on black.
///
/// Interior coverage uses even-odd scanline filling sampled at pixel
/// centers, then the border itself is painted, matching a filled polygon
/// draw that includes its own outline. Holes inside the border are
/// covered, since only the outer polygon is known here.
pub fn fill_contour(contour: &Contour, width: u32, height: u32) -> GrayFrame {
    let mut mask = GrayFrame::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }
    let pts = contour.points();
    if pts.is_empty() {
        return mask;
    }

    // Sampling rows at y + 0.5 with integer vertices means no scanline
    // ever passes through a vertex, so crossing counts stay exact.
    let mut crossings: Vec<f64> = Vec::new();
    for y in 0..height {
        let yc = f64::from(y) + 0.5;
        crossings.clear();
        for (i, a) in pts.iter().enumerate() {
            let b = &pts[(i + 1) % pts.len()];
            let (ya, yb) = (f64::from(a.y), f64::from(b.y));
            if (ya < yc) == (yb < yc) {
                continue;
            }
            let t = (yc - ya) / (yb - ya);
            crossings.push(f64::from(a.x) + t * (f64::from(b.x) - f64::from(a.x)));
        }
        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil().max(0.0) as u32;
            let end = (pair[1] - 0.5).floor().min(f64::from(width) - 1.0);
            if end < 0.0 {
                continue;
            }
            for x in start..=end as u32 {
                mask.set(x, y, 255);
            }
        }
    }

    for (i, a) in pts.iter().enumerate() {
        let b = pts[(i + 1) % pts.len()];
        draw_segment(&mut mask, *a, b);
    }
    mask
}

/// Keeps `frame` pixels under the white part of `mask` and zeroes the
/// rest, channel by channel. With a 0/255 mask the AND is exact.
pub fn apply(frame: &Frame, mask: &GrayFrame) -> Frame {
    let mut out = frame.clone();
    for (px, &m) in out.data.chunks_exact_mut(3).zip(&mask.data) {
        px[0] &= m;
        px[1] &= m;
        px[2] &= m;
    }
    out
}

/// Bresenham segment, endpoints included.
fn draw_segment(mask: &mut GrayFrame, a: Point, b: Point) {
    let (mut x, mut y) = (i64::from(a.x), i64::from(a.y));
    let (x1, y1) = (i64::from(b.x), i64::from(b.y));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        mask.set(x as u32, y as u32, 255);
        if x == x1 && y == y1 {
            return;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
