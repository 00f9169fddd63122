//! Orientation predicate and line/segment intersection primitives.
//!
//! Intersections that legitimately do not exist return `None`; only a failed
//! precondition (vertical segment, parallel neighbours) is an error.

use nalgebra::matrix;

use super::types::{Line, Point};
use crate::error::DualityError;

/// True iff `p1 → p2 → p3` turns strictly counter-clockwise.
///
/// Sign of the determinant of the homogeneous 3×3 matrix of the three points;
/// collinear counts as not a left turn.
#[inline]
pub fn left_turn(p1: Point, p2: Point, p3: Point) -> bool {
    let m = matrix![
        p1.x, p1.y, 1.0;
        p2.x, p2.y, 1.0;
        p3.x, p3.y, 1.0
    ];
    m.determinant() > 0.0
}

/// Line through two points. Fails on a vertical segment.
pub fn line_through(p1: Point, p2: Point) -> Result<Line, DualityError> {
    let dx = p2.x - p1.x;
    if dx == 0.0 {
        return Err(DualityError::degenerate(format!(
            "vertical segment at x = {}",
            p1.x
        )));
    }
    let slope = (p2.y - p1.y) / dx;
    Ok(Line::new(slope, p1.y - slope * p1.x))
}

/// Intersection of two lines; `None` when parallel (identical lines included).
#[inline]
pub fn intersect(l1: Line, l2: Line) -> Option<Point> {
    if l1.slope == l2.slope {
        return None;
    }
    let x = (l2.intercept - l1.intercept) / (l1.slope - l2.slope);
    Some(Point::new(x, l1.eval(x)))
}

#[inline]
fn strictly_inside(x: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo < x && x < hi
}

/// Intersection of segments `a0a1` and `b0b1`, accepted only if its x lies in
/// the open x-interval of both segments. Touching endpoints do not count.
pub fn segment_intersect(
    a0: Point,
    a1: Point,
    b0: Point,
    b1: Point,
) -> Result<Option<Point>, DualityError> {
    let la = line_through(a0, a1)?;
    let lb = line_through(b0, b1)?;
    Ok(intersect(la, lb)
        .filter(|p| strictly_inside(p.x, a0.x, a1.x) && strictly_inside(p.x, b0.x, b1.x)))
}

/// Every pairwise intersection of `lines` (unordered pairs, parallels skipped).
pub fn pairwise_intersections(lines: &[Line]) -> Vec<Point> {
    let mut out = Vec::with_capacity(lines.len() * lines.len().saturating_sub(1) / 2);
    for (i, li) in lines.iter().enumerate() {
        for lj in &lines[i + 1..] {
            if let Some(p) = intersect(*li, *lj) {
                out.push(p);
            }
        }
    }
    out
}

/// Intersections of consecutive lines in `lines`.
///
/// Neighbours must meet in exactly one point, so parallel neighbours fail.
pub fn neighboring_intersections(lines: &[Line]) -> Result<Vec<Point>, DualityError> {
    lines
        .windows(2)
        .map(|w| {
            intersect(w[0], w[1]).ok_or_else(|| {
                DualityError::degenerate(format!(
                    "parallel neighbouring lines (slope {})",
                    w[0].slope
                ))
            })
        })
        .collect()
}
