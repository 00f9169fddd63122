//! End-to-end disk intersection: centers → dual lines → hulls → envelopes →
//! merged polygon → arcs.
//!
//! Purpose
//! - One call that runs every stage and keeps each stage's output, so a
//!   renderer can draw half-planes, hull chains, envelopes, the merged region
//!   and the final arcs from a single result.
//!
//! Input policy
//! - Exact duplicate centers are merged.
//! - Centers on the x-axis follow `DualityCfg::axis_policy`.
//! - Dual points of one group sharing an x (within `eps_dual_x`) are parallel
//!   dual lines: their disks are nested along a ray from the origin and only
//!   the smaller one (the more restrictive half-plane) is kept.
//!
//! Ray extent
//! - Both the interior envelope vertices and the abscissa where the two
//!   envelopes cross must lie strictly inside the extent; `Adaptive` sizes it
//!   from them, `Fixed` fails the Envelope stage instead of merging truncated
//!   envelopes into a wrongly empty region.
//!
//! Errors carry the failing `Stage`.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::arcs::disk_intersection;
use crate::cfg::{AxisPolicy, DualityCfg};
use crate::envelope::{halfplane_envelope, interior_vertices, Envelope};
use crate::error::{DualityError, PipelineError, Stage};
use crate::geom::{Arc, Orientation, OrientedLine, Point};
use crate::hull::{HullKind, HullState, HullStepper};
use crate::merge::{crossing_abscissa, merge_envelopes, Polygon};
use crate::transform::{circle_to_line, line_to_point, point_to_line};


/// Every intermediate product of one pipeline run.
#[derive(Clone, Debug)]
pub struct DiskIntersection {
    /// Centers that were dualized (deduplicated, axis policy applied).
    pub centers: Vec<Point>,
    /// Dual line of each entry in `centers`, same order.
    pub lines: Vec<OrientedLine>,
    /// x-sorted dual points fed to the upper / lower hull.
    pub upper_points: Vec<Point>,
    pub lower_points: Vec<Point>,
    pub upper_hull: HullState,
    pub lower_hull: HullState,
    /// Resolved `(upper, lower)` ray extents.
    pub extent: (f64, f64),
    pub upper_envelope: Option<Envelope>,
    pub lower_envelope: Option<Envelope>,
    pub polygon: Polygon,
    pub arcs: Vec<Arc>,
}

impl DiskIntersection {
    /// True when the disks share no region beyond the origin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Merge exact duplicates (keeping first occurrence) and apply the axis policy.
pub fn prepare_centers(centers: &[Point], policy: AxisPolicy) -> Result<Vec<Point>, DualityError> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(centers.len());
    let mut out = Vec::with_capacity(centers.len());
    for c in centers {
        if !(c.x.is_finite() && c.y.is_finite()) {
            return Err(DualityError::degenerate(format!(
                "non-finite disk center ({}, {})",
                c.x, c.y
            )));
        }
        // + 0.0 folds -0.0 into 0.0
        if !seen.insert(((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits())) {
            continue;
        }
        if c.y == 0.0 {
            match policy {
                AxisPolicy::Reject => {
                    return Err(DualityError::degenerate(format!(
                        "disk center ({}, {}) lies on the x-axis",
                        c.x, c.y
                    )))
                }
                AxisPolicy::Skip => {
                    warn!(x = c.x, "skipping disk centered on the x-axis");
                    continue;
                }
            }
        }
        out.push(*c);
    }
    Ok(out)
}

/// Dual points of the lines in one orientation group, sorted by x, with
/// parallel dual lines collapsed onto the most restrictive one.
pub fn dual_points(lines: &[OrientedLine], orientation: Orientation, eps_x: f64) -> Vec<Point> {
    let mut pts: Vec<Point> = lines
        .iter()
        .filter(|l| l.orientation == orientation)
        .map(line_to_point)
        .collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    let mut out: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts {
        if let Some(last) = out.last_mut() {
            if (p.x - last.x).abs() <= eps_x {
                let keep_new = match orientation {
                    Orientation::Upper => p.y > last.y,
                    Orientation::Lower => p.y < last.y,
                };
                if keep_new {
                    *last = p;
                }
                continue;
            }
        }
        out.push(p);
    }
    out
}

fn build_envelope(
    chain: &[Point],
    kind: HullKind,
    extent: f64,
) -> Result<Option<Envelope>, DualityError> {
    match chain {
        [] => Ok(None),
        [only] => Ok(Some(Envelope::from_single_line(
            point_to_line(*only),
            kind,
            extent,
        ))),
        _ => halfplane_envelope(chain, kind, extent).map(Some),
    }
}

/// Run the full pipeline on unordered disk centers.
pub fn solve(centers: &[Point], cfg: DualityCfg) -> Result<DiskIntersection, PipelineError> {
    cfg.validate().map_err(PipelineError::at(Stage::Dualize))?;

    let centers =
        prepare_centers(centers, cfg.axis_policy).map_err(PipelineError::at(Stage::Dualize))?;
    let lines = centers
        .iter()
        .map(|c| circle_to_line(*c))
        .collect::<Result<Vec<_>, _>>()
        .map_err(PipelineError::at(Stage::Dualize))?;

    let upper_points = dual_points(&lines, Orientation::Upper, cfg.eps_dual_x);
    let lower_points = dual_points(&lines, Orientation::Lower, cfg.eps_dual_x);
    debug!(
        disks = centers.len(),
        upper = upper_points.len(),
        lower = lower_points.len(),
        "dualized"
    );

    let upper_hull = HullStepper::new(&upper_points, HullKind::Upper)
        .drain()
        .map_err(PipelineError::at(Stage::Hull))?;
    let lower_hull = HullStepper::new(&lower_points, HullKind::Lower)
        .drain()
        .map_err(PipelineError::at(Stage::Hull))?;
    debug!(
        upper = upper_hull.chain.len(),
        lower = lower_hull.chain.len(),
        "hulls drained"
    );

    let mut interior_xs = Vec::new();
    for chain in [&upper_hull.chain, &lower_hull.chain] {
        if chain.len() >= 2 {
            let verts = interior_vertices(chain).map_err(PipelineError::at(Stage::Envelope))?;
            interior_xs.extend(verts.iter().map(|p| p.x));
        }
    }
    let crossing_x = crossing_abscissa(&upper_hull.chain, &lower_hull.chain);
    interior_xs.extend(crossing_x);
    let extent = cfg.extent.resolve(interior_xs);
    if let Some(x) = crossing_x.filter(|x| !(x.abs() < extent.0.min(extent.1))) {
        return Err(PipelineError::at(Stage::Envelope)(DualityError::degenerate(
            format!(
                "envelopes cross at x = {x}, outside the ray extent {}",
                extent.0.min(extent.1)
            ),
        )));
    }
    let upper_envelope = build_envelope(&upper_hull.chain, HullKind::Upper, extent.0)
        .map_err(PipelineError::at(Stage::Envelope))?;
    let lower_envelope = build_envelope(&lower_hull.chain, HullKind::Lower, extent.1)
        .map_err(PipelineError::at(Stage::Envelope))?;
    debug!(
        upper_extent = extent.0,
        lower_extent = extent.1,
        upper = upper_envelope.as_ref().map_or(0, Envelope::len),
        lower = lower_envelope.as_ref().map_or(0, Envelope::len),
        "envelopes built"
    );

    let polygon = merge_envelopes(upper_envelope.as_ref(), lower_envelope.as_ref())
        .map_err(PipelineError::at(Stage::Merge))?;
    let arcs = if polygon.len() >= 2 {
        disk_intersection(&polygon.points).map_err(PipelineError::at(Stage::Arcs))?
    } else {
        Vec::new()
    };
    debug!(polygon = polygon.len(), arcs = arcs.len(), "merged");

    Ok(DiskIntersection {
        centers,
        lines,
        upper_points,
        lower_points,
        upper_hull,
        lower_hull,
        extent,
        upper_envelope,
        lower_envelope,
        polygon,
        arcs,
    })
}

/// `solve` with `DualityCfg::default()`.
#[inline]
pub fn solve_with_defaults(centers: &[Point]) -> Result<DiskIntersection, PipelineError> {
    solve(centers, DualityCfg::default())
}
