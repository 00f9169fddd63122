//! PyO3 bindings for the `duality` crate.
//!
//! Notes
//! - Values cross the boundary as tuples and lists of `(x, y)` pairs; arcs as
//!   `(cx, cy, radius, theta0, theta1)` in degrees.
//! - `stages` exposes each step separately for step-by-step drawing,
//!   `pipeline` the whole run at once.

mod common;
mod pipeline;
mod stages;

use pyo3::prelude::*;

#[pymodule]
fn duality_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", duality::VERSION)?;
    stages::register(m)?;
    pipeline::register(m)?;
    Ok(())
}
