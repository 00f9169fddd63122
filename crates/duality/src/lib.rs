//! Intersection of disks that all pass through the origin, computed in dual
//! space.
//!
//! Pipeline
//! - `transform`: each disk becomes an oriented line by inversion, each line a
//!   point by point-line duality.
//! - `hull`: resumable upper/lower monotone chains over the dual points.
//! - `envelope`: hull chains read back as half-plane boundaries.
//! - `merge`: upper and lower envelopes merged into the bounded region.
//! - `arcs`: region edges translated back into circular arcs.
//! - `pipeline`: all of the above in one call, keeping every intermediate.
//!
//! `rand` draws reproducible disk centers for benches and the CLI.

pub mod api;
pub mod arcs;
pub mod cfg;
pub mod envelope;
pub mod error;
pub mod geom;
pub mod hull;
pub mod merge;
pub mod pipeline;
pub mod rand;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::DualityCfg;
pub use error::{DualityError, PipelineError, Stage};
pub use geom::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{AxisPolicy, DualityCfg, RayExtent};
    pub use crate::error::{DualityError, PipelineError, Stage};
    pub use crate::geom::{Arc, Line, Orientation, OrientedLine, Point, ViewBox};
    pub use crate::hull::{HullKind, HullState, HullStepper};
    pub use crate::pipeline::{solve, solve_with_defaults, DiskIntersection};
    pub use crate::rand::{draw_centers, CenterCfg, ReplayToken};
}
