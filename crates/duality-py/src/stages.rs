//! One binding per pipeline stage, so a renderer can show each in turn.

use crate::common::{
    arc_tuple, hull_kind, line, line_tuple, map_err, point, points, xy, ArcTuple, LineTuple, Xy,
};
use duality::api::{
    circle_to_line, disk_intersection, halfplane_envelope, intersect, left_turn,
    line_to_circle, merge_envelopes, pairwise_intersections, segment_to_arc, Envelope, HullKind,
    HullState, HullStepper,
};
use pyo3::prelude::*;

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(dual_line, m)?)?;
    m.add_function(wrap_pyfunction!(dual_circle, m)?)?;
    m.add_function(wrap_pyfunction!(is_left_turn, m)?)?;
    m.add_function(wrap_pyfunction!(line_intersection, m)?)?;
    m.add_function(wrap_pyfunction!(all_intersections, m)?)?;
    m.add_function(wrap_pyfunction!(hull_steps, m)?)?;
    m.add_function(wrap_pyfunction!(hull_step, m)?)?;
    m.add_function(wrap_pyfunction!(envelope, m)?)?;
    m.add_function(wrap_pyfunction!(merge, m)?)?;
    m.add_function(wrap_pyfunction!(arc_of_segment, m)?)?;
    m.add_function(wrap_pyfunction!(arcs_of_polygon, m)?)?;
    Ok(())
}

/// Dual line of a disk through the origin centered at `center`.
#[pyfunction]
fn dual_line(center: Xy) -> PyResult<LineTuple> {
    let l = circle_to_line(point(center)).map_err(map_err)?;
    Ok(line_tuple(&l))
}

/// Center of the disk whose dual line is `y = slope x + intercept`.
#[pyfunction]
fn dual_circle(slope: f64, intercept: f64) -> PyResult<Xy> {
    let c = line_to_circle(line(slope, intercept)).map_err(map_err)?;
    Ok((c.x, c.y))
}

#[pyfunction]
fn is_left_turn(p1: Xy, p2: Xy, p3: Xy) -> bool {
    left_turn(point(p1), point(p2), point(p3))
}

#[pyfunction]
fn line_intersection(l1: (f64, f64), l2: (f64, f64)) -> Option<Xy> {
    intersect(line(l1.0, l1.1), line(l2.0, l2.1)).map(|p| (p.x, p.y))
}

/// Every pairwise intersection of `(slope, intercept)` lines, for drawing.
#[pyfunction]
fn all_intersections(lines: Vec<(f64, f64)>) -> Vec<Xy> {
    let lines: Vec<_> = lines.into_iter().map(|(m, b)| line(m, b)).collect();
    xy(&pairwise_intersections(&lines))
}

/// Every chain of a hull sweep over x-sorted `pts`, first to last.
#[pyfunction]
fn hull_steps(pts: Vec<Xy>, kind: &str) -> PyResult<Vec<Vec<Xy>>> {
    let pts = points(&pts);
    let stepper = HullStepper::new(&pts, hull_kind(kind)?);
    stepper
        .steps()
        .map(|s| s.map(|s| xy(&s.chain)).map_err(map_err))
        .collect()
}

/// One sweep step from an explicit `(chain, next, done)` state.
#[pyfunction]
fn hull_step(
    pts: Vec<Xy>,
    kind: &str,
    chain: Vec<Xy>,
    next: usize,
    done: bool,
) -> PyResult<(Vec<Xy>, usize, bool)> {
    let pts = points(&pts);
    let stepper = HullStepper::new(&pts, hull_kind(kind)?);
    let state = HullState {
        chain: points(&chain),
        next,
        done,
    };
    let s = stepper.step(&state).map_err(map_err)?;
    Ok((xy(&s.chain), s.next, s.done))
}

/// Half-plane envelope of a finished hull chain.
#[pyfunction]
#[pyo3(signature = (chain, kind, extent = None))]
fn envelope(chain: Vec<Xy>, kind: &str, extent: Option<f64>) -> PyResult<Vec<Xy>> {
    let kind = hull_kind(kind)?;
    let extent = extent.unwrap_or(match kind {
        HullKind::Upper => duality::cfg::UPPER_EXTENT,
        HullKind::Lower => duality::cfg::LOWER_EXTENT,
    });
    let env = halfplane_envelope(&points(&chain), kind, extent).map_err(map_err)?;
    Ok(xy(env.points()))
}

/// Merge an upper (x-descending) and a lower (x-ascending) envelope; either may be empty.
#[pyfunction]
fn merge(upper: Vec<Xy>, lower: Vec<Xy>) -> PyResult<Vec<Xy>> {
    let wrap = |kind, pts: Vec<Xy>| -> PyResult<Option<Envelope>> {
        if pts.is_empty() {
            return Ok(None);
        }
        Envelope::from_points(kind, points(&pts)).map(Some).map_err(map_err)
    };
    let up = wrap(HullKind::Upper, upper)?;
    let low = wrap(HullKind::Lower, lower)?;
    let poly = merge_envelopes(up.as_ref(), low.as_ref()).map_err(map_err)?;
    Ok(xy(&poly.points))
}

#[pyfunction]
fn arc_of_segment(p0: Xy, p1: Xy) -> PyResult<ArcTuple> {
    let arc = segment_to_arc(point(p0), point(p1)).map_err(map_err)?;
    Ok(arc_tuple(&arc))
}

#[pyfunction]
fn arcs_of_polygon(polygon: Vec<Xy>) -> PyResult<Vec<ArcTuple>> {
    let arcs = disk_intersection(&points(&polygon)).map_err(map_err)?;
    Ok(arcs.iter().map(arc_tuple).collect())
}
