use super::Vertex;

/// Computes the signed area of a closed vertex loop (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Vertex]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let (xi, yi) = (f64::from(points[i].x), f64::from(points[i].y));
        let (xj, yj) = (f64::from(points[j].x), f64::from(points[j].y));
        sum += xi * yj - xj * yi;
    }
    sum * 0.5
}

/// Lengths of the edges of a closed vertex loop, including the closing edge
/// from the last vertex back to the first.
#[must_use]
pub fn edge_lengths(points: &[Vertex]) -> Vec<f64> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            let dx = f64::from(b.x) - f64::from(a.x);
            let dy = f64::from(b.y) - f64::from(a.y);
            dx.hypot(dy)
        })
        .collect()
}

/// Triangle area from its three side lengths (Heron's formula).
///
/// Sides must already satisfy the triangle inequality; rounding that pushes
/// the radicand below zero yields `0.0`. If the radicand overflows, the sides
/// are rescaled by the longest one, so the result is only infinite when the
/// area itself exceeds `f64::MAX`.
#[must_use]
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let area = heron_radicand_sqrt(a, b, c);
    if area.is_finite() {
        return area;
    }
    let longest = a.max(b).max(c);
    heron_radicand_sqrt(a / longest, b / longest, c / longest) * longest * longest
}

fn heron_radicand_sqrt(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

/// Point-in-polygon test for an integer point against a vertex loop.
///
/// Uses the winding number rule: non-zero means inside.
#[must_use]
pub fn point_in_polygon_2d(x: i32, y: i32, polygon: &[Vertex]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let verts: Vec<(f64, f64)> = polygon
        .iter()
        .map(|p| (f64::from(p.x), f64::from(p.y)))
        .collect();
    winding_number_2d(f64::from(x), f64::from(y), &verts) != 0
}

/// Winding number of point `(px, py)` with respect to polygon `verts`.
fn winding_number_2d(px: f64, py: f64, verts: &[(f64, f64)]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];

        if y0 <= py {
            if y1 > py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) > 0.0 {
                winding += 1;
            }
        } else if y1 <= py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}
