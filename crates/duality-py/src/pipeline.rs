//! End-to-end solve returning every stage as plain Python values.

use crate::common::{arc_tuple, line_tuple, map_pipeline_err, points, xy, Xy};
use duality::api::{solve, AxisPolicy, DualityCfg, RayExtent, ViewBox};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve_disks, m)?)?;
    m.add_function(wrap_pyfunction!(view_box, m)?)?;
    Ok(())
}

/// Solve for `centers`. `extent` is "fixed" or "adaptive".
#[pyfunction]
#[pyo3(signature = (centers, extent = "fixed", skip_axis = false))]
fn solve_disks(
    py: Python<'_>,
    centers: Vec<Xy>,
    extent: &str,
    skip_axis: bool,
) -> PyResult<PyObject> {
    let extent = match extent {
        "fixed" => RayExtent::default(),
        "adaptive" => RayExtent::Adaptive {
            min_upper: duality::cfg::UPPER_EXTENT,
            ratio: duality::cfg::LOWER_EXTENT / duality::cfg::UPPER_EXTENT,
        },
        other => {
            return Err(PyValueError::new_err(format!(
                "extent must be 'fixed' or 'adaptive', got '{other}'"
            )))
        }
    };
    let cfg = DualityCfg {
        extent,
        axis_policy: if skip_axis {
            AxisPolicy::Skip
        } else {
            AxisPolicy::Reject
        },
        ..DualityCfg::default()
    };
    let out = solve(&points(&centers), cfg).map_err(map_pipeline_err)?;

    let dict = PyDict::new(py);
    dict.set_item("centers", xy(&out.centers))?;
    dict.set_item(
        "lines",
        out.lines.iter().map(line_tuple).collect::<Vec<_>>(),
    )?;
    dict.set_item("upper_points", xy(&out.upper_points))?;
    dict.set_item("lower_points", xy(&out.lower_points))?;
    dict.set_item("upper_hull", xy(&out.upper_hull.chain))?;
    dict.set_item("lower_hull", xy(&out.lower_hull.chain))?;
    dict.set_item("extent", out.extent)?;
    dict.set_item(
        "upper_envelope",
        out.upper_envelope.as_ref().map(|e| xy(e.points())).unwrap_or_default(),
    )?;
    dict.set_item(
        "lower_envelope",
        out.lower_envelope.as_ref().map(|e| xy(e.points())).unwrap_or_default(),
    )?;
    dict.set_item("polygon", xy(&out.polygon.points))?;
    dict.set_item("arcs", out.arcs.iter().map(arc_tuple).collect::<Vec<_>>())?;
    Ok(dict.into())
}

/// Padded `(min, max)` window around `pts`.
#[pyfunction]
fn view_box(pts: Vec<Xy>) -> (Xy, Xy) {
    let vb = ViewBox::around(&points(&pts));
    ((vb.min.x, vb.min.y), (vb.max.x, vb.max.y))
}
