use duality::geom::{Arc, Line, Orientation, OrientedLine};
use duality::hull::HullKind;
use duality::{DualityError, PipelineError, Point};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

pub type Xy = (f64, f64);
/// `(cx, cy, radius, theta0, theta1)`
pub type ArcTuple = (f64, f64, f64, f64, f64);
/// `(slope, intercept, "upper" | "lower")`
pub type LineTuple = (f64, f64, &'static str);

#[inline]
pub fn point(p: Xy) -> Point {
    Point::new(p.0, p.1)
}

pub fn points(ps: &[Xy]) -> Vec<Point> {
    ps.iter().map(|&p| point(p)).collect()
}

pub fn xy(ps: &[Point]) -> Vec<Xy> {
    ps.iter().map(|p| (p.x, p.y)).collect()
}

pub fn arc_tuple(a: &Arc) -> ArcTuple {
    (a.center.x, a.center.y, a.radius, a.theta0, a.theta1)
}

pub fn line_tuple(l: &OrientedLine) -> LineTuple {
    let side = match l.orientation {
        Orientation::Upper => "upper",
        Orientation::Lower => "lower",
    };
    (l.slope(), l.intercept(), side)
}

#[inline]
pub fn line(slope: f64, intercept: f64) -> Line {
    Line::new(slope, intercept)
}

pub fn hull_kind(kind: &str) -> PyResult<HullKind> {
    match kind {
        "upper" => Ok(HullKind::Upper),
        "lower" => Ok(HullKind::Lower),
        other => Err(PyValueError::new_err(format!(
            "kind must be 'upper' or 'lower', got '{other}'"
        ))),
    }
}

/// Degenerate input maps to `ValueError`, misuse of stepper state to `RuntimeError`.
pub fn map_err(err: DualityError) -> PyErr {
    if err.is_invalid_state() {
        PyRuntimeError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

pub fn map_pipeline_err(err: PipelineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
