//! Outer contour extraction from a binary edge map.
//!
//! Each 8-connected component of nonzero pixels contributes exactly one
//! contour: its outer border, traced clockwise. Inner borders around
//! holes are never reported, so a hollow shape yields the same contour
//! as a filled one.

use crate::frame::GrayFrame;

/// A pixel coordinate inside a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A closed border traced around one connected component.
///
/// Points follow the border in trace order with straight runs compressed
/// to their endpoints, so an axis-aligned rectangle stores four corners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Area enclosed by the border polygon, by the shoelace formula.
    ///
    /// This measures the polygon through pixel centers, not the pixel
    /// count: a 2x2 block has area 1.0 and any open curve has area 0.
    pub fn area(&self) -> f64 {
        let pts = &self.points;
        if pts.len() < 3 {
            return 0.0;
        }
        let mut sum = 0i64;
        for (i, p) in pts.iter().enumerate() {
            let q = &pts[(i + 1) % pts.len()];
            sum += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
        }
        (sum as f64 / 2.0).abs()
    }
}

// Clockwise Moore neighborhood, starting west.
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

fn ring_index(dx: i64, dy: i64) -> usize {
    match (dx, dy) {
        (-1, 0) => 0,
        (-1, -1) => 1,
        (0, -1) => 2,
        (1, -1) => 3,
        (1, 0) => 4,
        (1, 1) => 5,
        (0, 1) => 6,
        _ => 7,
    }
}

/// Traces the outer border of every connected component in `edges`.
pub fn outer_contours(edges: &GrayFrame) -> Vec<Contour> {
    let width = edges.width as usize;
    let mut seen = vec![false; edges.pixel_count()];
    let mut contours = Vec::new();
    for y in 0..edges.height {
        for x in 0..edges.width {
            let i = y as usize * width + x as usize;
            if edges.data[i] == 0 || seen[i] {
                continue;
            }
            // Scan order makes (x, y) the topmost, then leftmost pixel
            // of a fresh component, so its west neighbor is background
            // and border tracing can start here.
            let border = trace_border(edges, Point { x, y });
            contours.push(Contour {
                points: compress(border),
            });
            mark_component(edges, x, y, &mut seen);
        }
    }
    contours
}

/// Moore border following with a radial sweep. The sweep leaves `start`
/// across its west background cell and ends when the first move repeats,
/// which closes the border loop exactly once.
fn trace_border(edges: &GrayFrame, start: Point) -> Vec<Point> {
    let w = edges.width as i64;
    let h = edges.height as i64;
    let is_fg = |x: i64, y: i64| -> bool {
        x >= 0 && y >= 0 && x < w && y < h && edges.data[(y * w + x) as usize] != 0
    };

    let mut points = vec![start];
    let mut current = (i64::from(start.x), i64::from(start.y));
    let mut backtrack = (current.0 - 1, current.1);
    let mut first_move: Option<((i64, i64), (i64, i64))> = None;

    for _ in 0..8 * edges.pixel_count() + 8 {
        let d0 = ring_index(backtrack.0 - current.0, backtrack.1 - current.1);
        let mut found = None;
        for step in 1..=8 {
            let d = (d0 + step) % 8;
            let n = (current.0 + NEIGHBORS[d].0, current.1 + NEIGHBORS[d].1);
            if is_fg(n.0, n.1) {
                // The cell scanned just before n is background and
                // seeds the next sweep.
                let b = (d0 + step - 1) % 8;
                found = Some((n, (current.0 + NEIGHBORS[b].0, current.1 + NEIGHBORS[b].1)));
                break;
            }
        }
        let Some((next, bg)) = found else {
            break; // isolated pixel
        };
        if first_move == Some((next, bg)) {
            break;
        }
        if first_move.is_none() {
            first_move = Some((next, bg));
        }
        points.push(Point {
            x: next.0 as u32,
            y: next.1 as u32,
        });
        current = next;
        backtrack = bg;
    }

    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

/// Flood-marks the whole 8-connected component so the scan in
/// [`outer_contours`] never starts a second trace inside it.
fn mark_component(edges: &GrayFrame, x: u32, y: u32, seen: &mut [bool]) {
    let w = edges.width as i64;
    let h = edges.height as i64;
    let mut stack = vec![(i64::from(x), i64::from(y))];
    seen[(i64::from(y) * w + i64::from(x)) as usize] = true;
    while let Some((cx, cy)) = stack.pop() {
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (cx + dx, cy + dy);
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }
            let ni = (ny * w + nx) as usize;
            if edges.data[ni] != 0 && !seen[ni] {
                seen[ni] = true;
                stack.push((nx, ny));
            }
        }
    }
}

/// Drops points whose incoming and outgoing directions match, keeping
/// only the endpoints of straight runs. Treats the sequence as cyclic.
fn compress(points: Vec<Point>) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let delta = |a: &Point, b: &Point| {
        (
            i64::from(b.x) - i64::from(a.x),
            i64::from(b.y) - i64::from(a.y),
        )
    };
    let mut out = Vec::new();
    for i in 0..n {
        let prev = &points[(i + n - 1) % n];
        let next = &points[(i + 1) % n];
        if delta(prev, &points[i]) != delta(&points[i], next) {
            out.push(points[i]);
        }
    }
    out
}
