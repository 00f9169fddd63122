//! Curated surface for the CLI and the Python bindings.
//!
//! Not a stable API; re-exports move with the modules they point at.

// Primitives
pub use crate::geom::{
    intersect, left_turn, line_through, pairwise_intersections, segment_intersect, Arc, Line,
    Orientation, OrientedLine, Point, ViewBox,
};
// Dual maps
pub use crate::transform::{
    circle_to_line, line_to_circle, line_to_point, point_to_line, segment_to_arc,
};
// Stages
pub use crate::arcs::disk_intersection;
pub use crate::envelope::{halfplane_envelope, Envelope};
pub use crate::hull::{HullKind, HullState, HullStepper};
pub use crate::merge::{merge_envelopes, Polygon};
// End to end
pub use crate::cfg::{AxisPolicy, DualityCfg, RayExtent};
pub use crate::pipeline::{dual_points, prepare_centers, solve, solve_with_defaults, DiskIntersection};
pub use crate::rand::{draw_centers, CenterCfg, ReplayToken};
