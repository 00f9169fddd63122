//! Half-plane envelopes from finished hull chains.
//!
//! A hull chain in dual space is a list of points; read back as lines through
//! `point_to_line`, consecutive lines meet in the interior vertices of the
//! half-plane intersection boundary. Both unbounded ends are closed off by a
//! synthetic point on the first/last line at `x = ±extent`.
//!
//! Order (clockwise around the region in both cases)
//! - Upper: x-descending, from `(+extent, ·)` to `(-extent, ·)`.
//! - Lower: x-ascending, from `(-extent, ·)` to `(+extent, ·)`.
//!
//! Input chains come straight from `HullStepper` (ascending dual x).

use crate::error::DualityError;
use crate::geom::{neighboring_intersections, Line, Point};
use crate::hull::HullKind;
use crate::transform::point_to_line;

/// Boundary of one half-plane intersection, including its two synthetic ray
/// endpoints. Always holds at least two points.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    kind: HullKind,
    points: Vec<Point>,
}

impl Envelope {
    /// Wrap an already ordered point list (e.g. from a previous run).
    pub fn from_points(kind: HullKind, points: Vec<Point>) -> Result<Self, DualityError> {
        if points.len() < 2 {
            return Err(DualityError::degenerate(format!(
                "an envelope needs at least 2 points, got {}",
                points.len()
            )));
        }
        Ok(Self { kind, points })
    }

    /// Envelope of a group holding exactly one line: just its two ray endpoints.
    pub fn from_single_line(line: Line, kind: HullKind, extent: f64) -> Self {
        let (first_x, last_x) = ends(kind, extent);
        Self {
            kind,
            points: vec![
                Point::new(first_x, line.eval(first_x)),
                Point::new(last_x, line.eval(last_x)),
            ],
        }
    }

    #[inline]
    pub fn kind(&self) -> HullKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// x of the first and last synthetic point for `kind`.
#[inline]
fn ends(kind: HullKind, extent: f64) -> (f64, f64) {
    match kind {
        HullKind::Upper => (extent, -extent),
        HullKind::Lower => (-extent, extent),
    }
}

/// Dual lines of a hull chain and their consecutive intersections.
///
/// Lines meeting in a vertex already emitted (same x as the previous one)
/// contribute no edge, so the repeat is dropped.
pub fn interior_vertices(chain: &[Point]) -> Result<Vec<Point>, DualityError> {
    let lines: Vec<Line> = chain.iter().map(|p| point_to_line(*p)).collect();
    let mut verts = neighboring_intersections(&lines)?;
    verts.dedup_by(|next, prev| next.x == prev.x);
    Ok(verts)
}

/// Envelope of the half-planes dual to `chain`.
///
/// Fails when the chain has fewer than two points (handle one-line groups with
/// `Envelope::from_single_line`), when neighbouring dual lines are parallel,
/// or when an interior vertex reaches past `extent`.
pub fn halfplane_envelope(
    chain: &[Point],
    kind: HullKind,
    extent: f64,
) -> Result<Envelope, DualityError> {
    let (Some(&head), Some(&tail)) = (chain.first(), chain.last()) else {
        return Err(DualityError::degenerate("empty hull chain"));
    };
    if chain.len() < 2 {
        return Err(DualityError::degenerate(
            "hull chain needs at least 2 points to form an envelope",
        ));
    }
    let interior = interior_vertices(chain)?;
    if let Some(p) = interior.iter().find(|p| !(p.x.abs() < extent)) {
        return Err(DualityError::degenerate(format!(
            "envelope vertex at x = {} is not inside the ray extent {extent}",
            p.x
        )));
    }
    let (first_x, last_x) = ends(kind, extent);
    let (first_line, last_line) = (point_to_line(head), point_to_line(tail));
    let mut points = Vec::with_capacity(interior.len() + 2);
    points.push(Point::new(first_x, first_line.eval(first_x)));
    points.extend(interior);
    points.push(Point::new(last_x, last_line.eval(last_x)));
    Ok(Envelope { kind, points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::HullStepper;
    use nalgebra::vector;

    #[test]
    fn upper_envelope_is_x_descending_on_max_of_lines() {
        // dual points of y = -x + 1/2 and y = -4x + 1
        let chain = [vector![1.0, 0.5], vector![4.0, 1.0]];
        let env = halfplane_envelope(&chain, HullKind::Upper, 1000.0).unwrap();
        let pts = env.points();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], vector![1000.0, -999.5]);
        assert!((pts[1] - vector![1.0 / 6.0, 1.0 / 3.0]).norm() < 1e-12);
        assert_eq!(pts[2], vector![-1000.0, 4001.0]);
        assert!(pts.windows(2).all(|w| w[0].x > w[1].x));
    }

    #[test]
    fn lower_envelope_is_x_ascending_on_min_of_lines() {
        // lines y = x - 1 and y = -x + 1 as dual points (-1,-1), (1,1)
        let chain = [vector![-1.0, -1.0], vector![1.0, 1.0]];
        let env = halfplane_envelope(&chain, HullKind::Lower, 1010.0).unwrap();
        let pts = env.points();
        assert_eq!(pts[0], vector![-1010.0, -1011.0]);
        assert!((pts[1] - vector![1.0, 0.0]).norm() < 1e-12);
        assert_eq!(pts[2], vector![1010.0, -1009.0]);
        assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn envelope_from_drained_hull_matches_pointwise_extremum() {
        let pts = [
            vector![-2.0, 1.0],
            vector![-0.5, 2.0],
            vector![0.3, 0.4],
            vector![1.0, 2.5],
            vector![2.5, 1.0],
        ];
        let chain = HullStepper::new(&pts, HullKind::Upper).drain().unwrap().chain;
        let env = halfplane_envelope(&chain, HullKind::Upper, 1000.0).unwrap();
        let lines: Vec<Line> = pts.iter().map(|p| point_to_line(*p)).collect();
        for v in env.points() {
            let max = lines
                .iter()
                .map(|l| l.eval(v.x))
                .fold(f64::NEG_INFINITY, f64::max);
            assert!((v.y - max).abs() < 1e-6, "vertex {v:?} off the upper envelope");
        }
    }

    #[test]
    fn short_chains_and_extent_overflow_are_degenerate() {
        assert!(halfplane_envelope(&[], HullKind::Upper, 1000.0).is_err());
        assert!(halfplane_envelope(&[vector![1.0, 1.0]], HullKind::Lower, 1000.0).is_err());
        // neighbours meet at x = 50, outside an extent of 10
        let chain = [vector![0.0, 0.0], vector![1.0, 50.0]];
        let err = halfplane_envelope(&chain, HullKind::Upper, 10.0).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn concurrent_dual_lines_share_one_vertex() {
        // dual lines y = x + 1/2, y = 1/2, y = -x + 1/2 all pass through (0, 1/2)
        let chain = [vector![-1.0, 0.5], vector![0.0, 0.5], vector![1.0, 0.5]];
        let verts = interior_vertices(&chain).unwrap();
        assert_eq!(verts, vec![vector![0.0, 0.5]]);
        let env = halfplane_envelope(&chain, HullKind::Upper, 1000.0).unwrap();
        assert_eq!(env.len(), 3);
        assert!(env.points().windows(2).all(|w| w[0].x > w[1].x));
    }

    #[test]
    fn single_line_envelope_orders_by_kind() {
        let l = Line::new(0.0, 0.25);
        let up = Envelope::from_single_line(l, HullKind::Upper, 1000.0);
        assert_eq!(up.points(), &[vector![1000.0, 0.25], vector![-1000.0, 0.25]]);
        let low = Envelope::from_single_line(l, HullKind::Lower, 1010.0);
        assert_eq!(low.points(), &[vector![-1010.0, 0.25], vector![1010.0, 0.25]]);
        assert!(Envelope::from_points(HullKind::Upper, vec![vector![0.0, 0.0]]).is_err());
    }
}
