//! Duality maps between disks, lines, points and arcs.
//!
//! Two dualities are chained:
//! - Inversion duality: a disk through the origin with center `c = (x, y)`
//!   corresponds to the half-plane `2 c·q >= 1` in the inverted plane, i.e. the
//!   line `y = (-x/y) X + 1/(2y)` with the half-plane above it when `y > 0` and
//!   below it when `y < 0`.
//! - Point-line duality: `y = m x + b  <->  (-m, b)`. Upper envelopes of lines
//!   become upper hulls of points, lower envelopes become lower hulls.
//!
//! `segment_to_arc` undoes both: a segment of the dual polygon lies on one dual
//! line, hence on one primal circle; its endpoints invert to the bounding points
//! of the arc.

use crate::error::DualityError;
use crate::geom::{line_through, Arc, Line, Orientation, OrientedLine, Point};

/// Inversion dual of the disk through the origin centered at `center`.
pub fn circle_to_line(center: Point) -> Result<OrientedLine, DualityError> {
    let (x, y) = (center.x, center.y);
    if y == 0.0 {
        return Err(DualityError::degenerate(format!(
            "disk center ({x}, {y}) lies on the x-axis; its dual line is undefined"
        )));
    }
    let orientation = if y > 0.0 {
        Orientation::Upper
    } else {
        Orientation::Lower
    };
    Ok(OrientedLine {
        line: Line::new(-x / y, 1.0 / (2.0 * y)),
        orientation,
    })
}

/// Center of the primal circle whose dual is `line` (inverse of `circle_to_line`).
pub fn line_to_circle(line: Line) -> Result<Point, DualityError> {
    if line.intercept == 0.0 {
        return Err(DualityError::degenerate(
            "line through the origin has no primal circle",
        ));
    }
    let cy = 1.0 / (2.0 * line.intercept);
    Ok(Point::new(-line.slope * cy, cy))
}

/// Point dual of a line. The orientation is dropped.
#[inline]
pub fn line_to_point(line: &OrientedLine) -> Point {
    Point::new(-line.slope(), line.intercept())
}

/// Line dual of a point (exact inverse of `line_to_point`).
#[inline]
pub fn point_to_line(p: Point) -> Line {
    Line::new(-p.x, p.y)
}

/// Inversion `q ↦ q / |q|²`.
fn invert(q: Point) -> Result<Point, DualityError> {
    let n2 = q.norm_squared();
    if n2 == 0.0 {
        return Err(DualityError::degenerate("cannot invert the origin"));
    }
    Ok(q / n2)
}

/// Angle in degrees from `center` to `p`, in `(-90, 270)`.
fn bearing_deg(center: Point, p: Point) -> f64 {
    let d = p - center;
    let theta = (d.y / d.x).atan().to_degrees();
    // atan cannot tell the left half-plane from the right one
    if d.x < 0.0 {
        theta + 180.0
    } else {
        theta
    }
}

/// Arc of the primal circle dual to segment `p0p1`, bounded by the inverses
/// of `p0` and `p1`.
pub fn segment_to_arc(p0: Point, p1: Point) -> Result<Arc, DualityError> {
    let line = line_through(p0, p1)?;
    let center = line_to_circle(line)?;
    let q0 = invert(p0)?;
    let q1 = invert(p1)?;
    Ok(Arc {
        center,
        radius: center.norm(),
        theta0: bearing_deg(center, q0),
        theta1: bearing_deg(center, q1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn circle_to_line_values_and_orientation() {
        let l = circle_to_line(vector![1.0, 2.0]).unwrap();
        assert!((l.slope() + 0.5).abs() < 1e-12);
        assert!((l.intercept() - 0.25).abs() < 1e-12);
        assert_eq!(l.orientation, Orientation::Upper);
        let l = circle_to_line(vector![1.0, -1.0]).unwrap();
        assert_eq!(l.orientation, Orientation::Lower);
        assert_eq!(l.orientation.sign(), -1.0);
        assert!(circle_to_line(vector![3.0, 0.0]).unwrap_err().is_degenerate());
    }

    #[test]
    fn dual_half_plane_matches_disk_membership() {
        // q inside the half-plane  <=>  q/|q|² inside the disk
        let c = vector![0.8, -0.3];
        let l = circle_to_line(c).unwrap();
        for q in [
            vector![0.5, -1.0],
            vector![2.0, 0.1],
            vector![-1.0, -3.0],
            vector![0.3, 0.3],
        ] {
            let p: Point = q / q.norm_squared();
            let in_disk = (p - c).norm() <= c.norm();
            assert_eq!(l.contains(q), in_disk, "q = {q:?}");
        }
    }

    #[test]
    fn point_line_duality_is_involutive() {
        let l = circle_to_line(vector![-2.0, 0.5]).unwrap();
        let p = line_to_point(&l);
        assert_eq!(point_to_line(p), l.line);
    }

    #[test]
    fn segment_to_arc_recovers_circle_and_bounds() {
        // Disk (1,1): dual line y = -x + 1/2. Take two points on it.
        let arc = segment_to_arc(vector![0.5, 0.0], vector![1000.0, -999.5]).unwrap();
        assert!((arc.center - vector![1.0, 1.0]).norm() < 1e-9);
        assert!((arc.radius - 2f64.sqrt()).abs() < 1e-12);
        // (0.5, 0) inverts to (2, 0): bearing -45°
        assert!((arc.theta0 + 45.0).abs() < 1e-9);
        assert!((arc.start() - vector![2.0, 0.0]).norm() < 1e-9);
        // far point inverts next to the origin, which sits at 225° from (1,1)
        assert!((arc.theta1 - 225.0).abs() < 0.1);
    }

    #[test]
    fn segment_to_arc_degenerate_inputs() {
        // same x
        assert!(segment_to_arc(vector![1.0, 0.0], vector![1.0, 2.0])
            .unwrap_err()
            .is_degenerate());
        // zero intercept: line through the origin
        assert!(segment_to_arc(vector![1.0, 1.0], vector![2.0, 2.0])
            .unwrap_err()
            .is_degenerate());
    }

    proptest! {
        #[test]
        fn round_trip_reconstructs_center(
            x in -100.0f64..100.0,
            y in prop_oneof![-100.0f64..-0.1, 0.1f64..100.0],
        ) {
            let c = vector![x, y];
            let l = circle_to_line(c).unwrap();
            let back = line_to_circle(point_to_line(line_to_point(&l))).unwrap();
            prop_assert!((back - c).amax() < 1e-9);
            prop_assert_eq!(l.orientation.sign(), y.signum());
        }
    }
}
